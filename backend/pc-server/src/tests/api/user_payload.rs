use crate::UserPayload;

use googletest::prelude::*;

fn payload(json: serde_json::Value) -> UserPayload {
    serde_json::from_value(json).unwrap()
}

#[test]
fn given_minimal_payload_when_converted_then_defaults_fill_the_rest() {
    // Given
    let user = payload(serde_json::json!({ "firstName": "Ana", "lastName": "Silva" }));

    // When
    let record = user.into_record(|| "generated".to_string());

    // Then
    assert_eq!(record.id, "generated");
    assert_eq!(record.first_name, "Ana");
    assert_that!(record.email.as_str(), eq(""));
    assert_eq!(record.age, 0);
}

#[test]
fn given_blank_id_when_converted_then_default_id_used() {
    let user = payload(serde_json::json!({
        "id": "   ",
        "firstName": "Ana",
        "lastName": "Silva"
    }));

    let record = user.into_record(|| "generated".to_string());

    assert_eq!(record.id, "generated");
}

#[test]
fn given_explicit_id_when_converted_then_kept_and_default_not_called() {
    let user = payload(serde_json::json!({
        "id": "abc",
        "firstName": "Ana",
        "lastName": "Silva",
        "city": "Curitiba",
        "age": 34
    }));

    let record = user.into_record(|| panic!("default id should not be needed"));

    assert_eq!(record.id, "abc");
    assert_eq!(record.city, "Curitiba");
    assert_eq!(record.age, 34);
}

#[test]
fn given_payload_without_last_name_when_parsed_then_rejected() {
    let result: serde_json::Result<UserPayload> =
        serde_json::from_value(serde_json::json!({ "firstName": "Ana" }));

    assert_that!(result, err(anything()));
}
