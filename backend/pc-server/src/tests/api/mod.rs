mod error;
mod user_list_response;
mod user_payload;
