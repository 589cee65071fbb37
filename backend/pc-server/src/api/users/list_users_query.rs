use serde::Deserialize;

/// Query string for GET /api/users
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// Case-insensitive substring to look for; empty lists everything
    #[serde(default)]
    pub search: Option<String>,

    /// Comma-separated column names to search (default: firstName,lastName,email,city)
    #[serde(default)]
    pub fields: Option<String>,

    /// 1-based page number; omit for the full list
    #[serde(default)]
    pub page: Option<usize>,

    #[serde(default)]
    pub per_page: Option<usize>,
}
