pub mod blocking;
pub mod error;
pub mod message_response;
pub mod random_users;
pub mod users;
