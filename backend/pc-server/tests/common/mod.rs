#![allow(dead_code)]

//! Test infrastructure for pc-server API tests

use pc_config::RandomUserConfig;
use pc_core::UserRecord;
use pc_random_user::RandomUserClient;
use pc_server::AppState;
use pc_store::FlatFileStore;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// Nothing listens here; handlers that never reach upstream don't care
const UNUSED_UPSTREAM: &str = "http://127.0.0.1:9";

/// AppState over a fresh store in a temp directory.
///
/// Keep the `TempDir` alive for the duration of the test.
pub fn create_test_app_state() -> (TempDir, AppState) {
    create_test_app_state_with_upstream(UNUSED_UPSTREAM)
}

pub fn create_test_app_state_with_upstream(base_url: &str) -> (TempDir, AppState) {
    let temp_dir = TempDir::new().unwrap();
    let store = FlatFileStore::new(temp_dir.path().join("data").join("users.csv"));
    let config = RandomUserConfig {
        base_url: base_url.to_string(),
        ..RandomUserConfig::default()
    };

    let state = AppState::new(store, RandomUserClient::new(base_url), config);
    (temp_dir, state)
}

pub fn create_test_record(id: &str, first_name: &str, city: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "555-0100".to_string(),
        city: city.to_string(),
        country: "Brazil".to_string(),
        picture: String::new(),
        gender: "female".to_string(),
        age: 30,
    }
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
