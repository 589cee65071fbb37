use crate::UserPayload;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUsersRequest {
    /// Records to append, in order (required, non-empty)
    #[serde(default)]
    pub users: Vec<UserPayload>,
}
