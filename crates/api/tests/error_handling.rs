//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use registry_api::error::AppError;
use registry_core::error::CoreError;
use serde_json::json;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_error_key() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Camper",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Camper not found"}));
}

#[tokio::test]
async fn validation_error_returns_400_with_errors_list() {
    let err = AppError::Core(CoreError::Validation(
        "Age must be between 8 and 18".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"errors": ["Age must be between 8 and 18"]}));
}

#[tokio::test]
async fn invalid_reference_names_both_keys() {
    let err = AppError::Core(CoreError::InvalidReference {
        first: "camper_id",
        second: "activity_id",
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"errors": ["Invalid camper_id or activity_id"]}));
}

#[tokio::test]
async fn bad_request_returns_400_with_errors_list() {
    let err = AppError::BadRequest("missing field `age`".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"errors": ["missing field `age`"]}));
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("connection string leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "An internal error occurred"}));
}

#[tokio::test]
async fn core_internal_error_returns_500() {
    let err = AppError::Core(CoreError::Internal("row vanished".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Resource not found"}));
}

#[tokio::test]
async fn unexpected_database_error_returns_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "An internal error occurred"}));
}

#[tokio::test]
async fn join_insert_keeps_non_constraint_errors() {
    let err = AppError::from_join_insert(sqlx::Error::PoolTimedOut, "episode_id", "guest_id");

    let (status, _) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
