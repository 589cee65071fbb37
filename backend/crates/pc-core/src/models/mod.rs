pub mod search_field;
pub mod user_record;
