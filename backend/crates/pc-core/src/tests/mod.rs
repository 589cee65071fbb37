mod models;

use crate::UserRecord;

pub(crate) fn sample_record(id: &str, first_name: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Silva".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "(11) 5555-0100".to_string(),
        city: "Curitiba".to_string(),
        country: "Brazil".to_string(),
        picture: "https://randomuser.me/api/portraits/women/1.jpg".to_string(),
        gender: "female".to_string(),
        age: 34,
    }
}
