use crate::SearchField;
use crate::tests::sample_record;

use std::str::FromStr;

#[test]
fn test_search_field_round_trips_through_str() {
    for field in SearchField::ALL {
        assert_eq!(SearchField::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn test_search_field_from_str_rejects_unknown_and_wrong_case() {
    assert!(SearchField::from_str("nickname").is_err());
    assert!(SearchField::from_str("FirstName").is_err());
}

#[test]
fn test_search_field_defaults() {
    assert_eq!(
        SearchField::DEFAULTS,
        [
            SearchField::FirstName,
            SearchField::LastName,
            SearchField::Email,
            SearchField::City
        ]
    );
}

#[test]
fn test_search_field_value_of() {
    let record = sample_record("7", "Ana");

    assert_eq!(SearchField::Id.value_of(&record), "7");
    assert_eq!(SearchField::Email.value_of(&record), "ana@example.com");
    assert_eq!(SearchField::Age.value_of(&record), "34");
}

#[test]
fn test_search_field_parse_list() {
    assert_eq!(
        SearchField::parse_list("city, country").unwrap(),
        vec![SearchField::City, SearchField::Country]
    );
    assert_eq!(
        SearchField::parse_list(" , ").unwrap(),
        SearchField::DEFAULTS.to_vec()
    );
    assert!(SearchField::parse_list("city,shoeSize").is_err());
}
