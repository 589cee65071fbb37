use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RandomUsersQuery {
    /// How many profiles to fetch (default from config)
    #[serde(default)]
    pub results: Option<u32>,
}
