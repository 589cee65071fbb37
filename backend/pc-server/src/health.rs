use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;

/// GET /health - Store status, record count and version
pub async fn health(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let report = tokio::task::spawn_blocking(move || store.read_all_with_report()).await;

    match report {
        Ok(Ok(report)) => {
            let health = json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "storage": {
                    "path": state.store.path().display().to_string(),
                    "records": report.records.len(),
                    "dropped_lines": report.dropped_lines,
                },
                "timestamp": chrono::Utc::now().to_rfc3339(),
            });
            (StatusCode::OK, Json(health)).into_response()
        }
        Ok(Err(e)) => unhealthy(e.to_string()),
        Err(e) => unhealthy(e.to_string()),
    }
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (is the backing file usable?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    match tokio::task::spawn_blocking(move || store.ensure_initialized()).await {
        Ok(Ok(())) => (StatusCode::OK, "Ready").into_response(),
        Ok(Err(e)) => {
            error!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
        Err(e) => {
            error!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}

fn unhealthy(reason: String) -> Response {
    error!("Health check failed: {}", reason);
    let health = json!({
        "status": "unhealthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    (StatusCode::SERVICE_UNAVAILABLE, Json(health)).into_response()
}
