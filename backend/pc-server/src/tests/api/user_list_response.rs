use crate::UserListResponse;

use pc_core::{UserRecord, paginate};

fn records(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            UserRecord {
                id: i.to_string(),
                first_name: "First".to_string(),
                last_name: "Last".to_string(),
                email: "e@example.com".to_string(),
                phone: String::new(),
                city: String::new(),
                country: String::new(),
                picture: String::new(),
                gender: String::new(),
                age: 0,
            }
        })
        .collect()
}

#[test]
fn given_full_list_when_serialized_then_no_pagination_block() {
    let response = UserListResponse::all(records(3));

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["total"], 3);
    assert_eq!(json["users"].as_array().unwrap().len(), 3);
    assert!(json.get("pagination").is_none());
}

#[test]
fn given_middle_page_when_serialized_then_window_has_gaps_as_null() {
    // Given: 120 records, 12 per page, page 5 of 10
    let page = paginate(records(120), 5, 12);

    // When
    let json = serde_json::to_value(UserListResponse::from(page)).unwrap();

    // Then
    assert_eq!(json["total"], 120);
    assert_eq!(json["users"].as_array().unwrap().len(), 12);
    assert_eq!(json["users"][0]["id"], "48");
    assert_eq!(json["pagination"]["total_pages"], 10);
    assert_eq!(json["pagination"]["has_previous"], true);
    assert_eq!(json["pagination"]["has_next"], true);
    assert_eq!(
        json["pagination"]["pages"],
        serde_json::json!([1, null, 4, 5, 6, null, 10])
    );
}
