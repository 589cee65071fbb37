//! User REST API handlers
//!
//! Each handler hands its store call to the blocking pool; the store itself
//! is synchronous and rereads the backing file every time.

use crate::api::blocking::run_store;
use crate::api::users::MAX_PER_PAGE;
use crate::{
    ApiError, ApiResult, AppState, CreateUsersRequest, ListUsersQuery, MessageResponse,
    UserListResponse, UserPayload, UserResponse,
};

use pc_core::{DEFAULT_PER_PAGE, SearchField, new_record_id, paginate};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use log::info;

/// GET /api/users
///
/// Full list, or the records matching `search` in the chosen `fields`.
/// Paginated only when `page` or `per_page` is present.
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> ApiResult<Json<UserListResponse>> {
    let Query(query) = query?;

    let fields = SearchField::parse_list(query.fields.as_deref().unwrap_or_default())?;

    if let Some(per_page) = query.per_page
        && per_page > MAX_PER_PAGE
    {
        return Err(ApiError::validation(
            format!("per_page must be at most {}", MAX_PER_PAGE),
            "per_page",
        ));
    }

    // Whitespace is a real term; only an empty one lists everything
    let term = query.search.filter(|s| !s.is_empty());

    let store = state.store.clone();
    let users = run_store(move || match term {
        Some(term) => store.search(&term, &fields),
        None => store.read_all(),
    })
    .await?;

    if query.page.is_none() && query.per_page.is_none() {
        return Ok(Json(UserListResponse::all(users)));
    }

    let page = paginate(
        users,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    );
    Ok(Json(UserListResponse::from(page)))
}

/// POST /api/users
///
/// Append a batch of users. Records without an id get a fresh UUID.
pub async fn create_users(
    State(state): State<AppState>,
    payload: Result<Json<CreateUsersRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(request) = payload?;

    if request.users.is_empty() {
        return Err(ApiError::validation("At least one user is required", "users"));
    }

    let records: Vec<_> = request
        .users
        .into_iter()
        .map(|user| user.into_record(new_record_id))
        .collect();
    let count = records.len();

    let store = state.store.clone();
    run_store(move || store.add_many(records)).await?;

    info!("Saved {} user(s)", count);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Saved {} user(s)", count),
            count: Some(count),
        }),
    ))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let store = state.store.clone();
    let lookup = id.clone();
    let user = run_store(move || store.find_by_id(&lookup))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse { user }))
}

/// PUT /api/users/{id}
///
/// Replace the stored user in place. A body without an id keeps the path id.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(user) = payload?;
    let record = user.into_record(|| id.clone());

    let store = state.store.clone();
    let target = id.clone();
    let updated = run_store(move || store.update_by_id(&target, record)).await?;

    if !updated {
        return Err(ApiError::not_found(format!("User {} not found", id)));
    }

    info!("Updated user {}", id);
    Ok(Json(MessageResponse::new(format!("User {} updated", id))))
}

/// DELETE /api/users/{id}
///
/// Removes every record carrying the id.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let store = state.store.clone();
    let target = id.clone();
    let deleted = run_store(move || store.delete_by_id(&target)).await?;

    if !deleted {
        return Err(ApiError::not_found(format!("User {} not found", id)));
    }

    info!("Deleted user {}", id);
    Ok(Json(MessageResponse::new(format!("User {} deleted", id))))
}
