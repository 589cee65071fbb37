mod search_field;
mod user_record;
