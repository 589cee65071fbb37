pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    message_response::MessageResponse,
    random_users::{
        random_users::fetch_random_users, random_users_query::RandomUsersQuery,
        random_users_response::RandomUsersResponse,
    },
    users::{
        create_users_request::CreateUsersRequest,
        list_users_query::ListUsersQuery,
        user_list_response::{PaginationDto, UserListResponse},
        user_payload::UserPayload,
        user_response::UserResponse,
        users::{create_users, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
