#![allow(dead_code)]

use pc_core::UserRecord;
use pc_store::FlatFileStore;

use tempfile::TempDir;

/// Store pointed at a not-yet-existing file inside a fresh temp directory.
///
/// Keep the `TempDir` alive for as long as the store is used.
pub fn create_test_store() -> (TempDir, FlatFileStore) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = FlatFileStore::new(temp.path().join("data").join("users.csv"));
    (temp, store)
}

pub fn create_test_record(id: &str, first_name: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Costa".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "(21) 5555-0199".to_string(),
        city: "Recife".to_string(),
        country: "Brazil".to_string(),
        picture: "https://randomuser.me/api/portraits/men/2.jpg".to_string(),
        gender: "male".to_string(),
        age: 41,
    }
}

pub fn ids(records: &[UserRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
