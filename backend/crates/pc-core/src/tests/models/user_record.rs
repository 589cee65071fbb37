use crate::tests::sample_record;
use crate::{SearchField, new_record_id};

use googletest::prelude::*;

#[test]
fn test_new_record_id_is_fresh_hyphenated_uuid() {
    let a = new_record_id();
    let b = new_record_id();

    assert_that!(a.as_str(), not(eq(b.as_str())));
    assert_eq!(a.len(), 36);
    assert_eq!(a.matches('-').count(), 4);
}

#[test]
fn test_matches_is_case_insensitive_substring() {
    let record = sample_record("1", "Ana");

    assert!(record.matches("ana", &SearchField::DEFAULTS));
    assert!(record.matches("AN", &SearchField::DEFAULTS));
    assert!(record.matches("curi", &SearchField::DEFAULTS));
    assert!(!record.matches("brazil", &SearchField::DEFAULTS));
}

#[test]
fn test_matches_empty_term_matches_everything() {
    let record = sample_record("1", "Ana");

    assert!(record.matches("", &SearchField::DEFAULTS));
    assert!(record.matches("", &[SearchField::Gender]));
}

#[test]
fn test_matches_only_looks_at_selected_fields() {
    let record = sample_record("1", "Ana");

    assert!(record.matches("brazil", &[SearchField::Country]));
    assert!(record.matches("34", &[SearchField::Age]));
    assert!(!record.matches("ana", &[SearchField::City]));
    assert!(!record.matches("ana", &[]));
}

#[test]
fn test_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(sample_record("1", "Ana")).unwrap();

    assert_eq!(json["firstName"], "Ana");
    assert_eq!(json["lastName"], "Silva");
    assert_eq!(json["age"], 34);
}
