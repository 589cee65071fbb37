pub mod create_users_request;
pub mod list_users_query;
pub mod user_list_response;
pub mod user_payload;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;

/// Largest page size a listing request may ask for
pub const MAX_PER_PAGE: usize = 100;
