//! User record entity - one curated profile.

use crate::SearchField;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user profile.
///
/// `id` is the lookup key for update/delete/find. Nothing enforces that it is
/// unique; callers that insert records are expected to supply distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    /// URL of the profile picture, stored as-is
    pub picture: String,
    pub gender: String,
    pub age: u32,
}

impl UserRecord {
    /// Case-insensitive substring match of `term` against any of `fields`.
    ///
    /// An empty term matches every record.
    pub fn matches(&self, term: &str, fields: &[SearchField]) -> bool {
        let needle = term.to_lowercase();
        fields
            .iter()
            .any(|field| field.value_of(self).to_lowercase().contains(&needle))
    }
}

/// Fresh id for a record created without one (random v4 UUID)
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
