use crate::ApiError;

use pc_core::SearchField;
use pc_random_user::RandomUserError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("User 7 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("too many", "per_page")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "per_page");
}

#[tokio::test]
async fn test_upstream_error_returns_502() {
    let error = ApiError::from(RandomUserError::status(503));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
    assert_that!(
        json["error"]["message"].as_str().unwrap(),
        contains_substring("503")
    );
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "Storage operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Storage operation failed");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "expected a JSON body".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn given_unknown_search_field_when_converted_then_validation_on_fields() {
    // Given
    let core_error = SearchField::parse_list("firstName,shoeSize").unwrap_err();

    // When
    let error = ApiError::from(core_error);

    // Then
    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    match error {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message, contains_substring("shoeSize"));
            assert_eq!(field.as_deref(), Some("fields"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
