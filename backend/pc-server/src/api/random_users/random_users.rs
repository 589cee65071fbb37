use crate::{ApiError, ApiResult, AppState, RandomUsersQuery, RandomUsersResponse};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use log::info;

/// GET /api/random-users?results=N
///
/// Fetch fresh profiles from the random-profile service without saving them.
pub async fn fetch_random_users(
    State(state): State<AppState>,
    query: Result<Query<RandomUsersQuery>, QueryRejection>,
) -> ApiResult<Json<RandomUsersResponse>> {
    let Query(query) = query?;
    let max = state.random_user_config.max_results;
    let results = query
        .results
        .unwrap_or(state.random_user_config.default_results);

    if results == 0 || results > max {
        return Err(ApiError::validation(
            format!("results must be between 1 and {}", max),
            "results",
        ));
    }

    let users = state.random_users.fetch(results).await?;
    info!("Fetched {} random user(s)", users.len());

    Ok(Json(RandomUsersResponse { users }))
}
