use crate::RandomUserResponse;

use pc_core::UserRecord;

use serde_json::json;

#[test]
fn test_profile_maps_nested_fields_onto_record() {
    let body = json!({
        "results": [{
            "gender": "female",
            "name": { "title": "Ms", "first": "Ana", "last": "Silva" },
            "location": {
                "street": { "number": 12, "name": "Rua A" },
                "city": "Curitiba",
                "state": "Paraná",
                "country": "Brazil"
            },
            "email": "ana.silva@example.com",
            "login": { "uuid": "2f0c1a2b-0000-4000-8000-000000000001", "username": "ana" },
            "dob": { "date": "1990-01-01T00:00:00.000Z", "age": 35 },
            "phone": "(41) 5555-0100",
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/1.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/1.jpg"
            }
        }],
        "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
    });

    let response: RandomUserResponse = serde_json::from_value(body).unwrap();
    let record = UserRecord::from(response.results.into_iter().next().unwrap());

    assert_eq!(record.id, "2f0c1a2b-0000-4000-8000-000000000001");
    assert_eq!(record.first_name, "Ana");
    assert_eq!(record.last_name, "Silva");
    assert_eq!(record.city, "Curitiba");
    assert_eq!(record.country, "Brazil");
    assert_eq!(
        record.picture,
        "https://randomuser.me/api/portraits/women/1.jpg"
    );
    assert_eq!(record.gender, "female");
    assert_eq!(record.age, 35);
}

#[test]
fn test_profile_missing_required_field_fails_to_parse() {
    let body = json!({ "results": [{ "gender": "male" }] });

    assert!(serde_json::from_value::<RandomUserResponse>(body).is_err());
}
