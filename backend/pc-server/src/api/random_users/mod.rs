#[allow(clippy::module_inception)]
pub mod random_users;
pub mod random_users_query;
pub mod random_users_response;
