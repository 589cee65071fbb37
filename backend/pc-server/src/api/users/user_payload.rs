use pc_core::UserRecord;

use serde::Deserialize;

/// User record as sent by clients.
///
/// Only the name is required; a blank or missing id is filled in by the
/// handler.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: u32,
}

impl UserPayload {
    /// Build the stored record, calling `default_id` when no usable id was sent
    pub fn into_record(self, default_id: impl FnOnce() -> String) -> UserRecord {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(default_id);

        UserRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            country: self.country,
            picture: self.picture,
            gender: self.gender,
            age: self.age,
        }
    }
}
