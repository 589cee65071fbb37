use pc_core::UserRecord;

use serde::Serialize;

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserRecord,
}
