use pc_core::UserRecord;

use serde::Serialize;

/// Freshly fetched profiles, not yet saved
#[derive(Debug, Serialize)]
pub struct RandomUsersResponse {
    pub users: Vec<UserRecord>,
}
