use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use registry_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure has one of two JSON shapes:
///
/// - `400` responses: `{"errors": [message]}`
/// - all other statuses: `{"error": message}`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `registry_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (bad JSON, missing field, bad path segment).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Translate the result of inserting a join row.
    ///
    /// A foreign key violation becomes [`CoreError::InvalidReference`] naming
    /// both keys, whichever of them was actually wrong.
    pub fn from_join_insert(err: sqlx::Error, first: &'static str, second: &'static str) -> Self {
        if registry_db::is_foreign_key_violation(&err) {
            AppError::Core(CoreError::InvalidReference { first, second })
        } else {
            AppError::Database(err)
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// The body an error is rendered with.
enum ErrorBody {
    /// Client errors the caller can fix: `{"errors": [..]}`.
    Errors(String),
    /// Lookup failures and server errors: `{"error": ..}`.
    Error(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, ErrorBody::Error(core.to_string()))
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, ErrorBody::Errors(msg.clone()))
                }
                CoreError::InvalidReference { .. } => {
                    (StatusCode::BAD_REQUEST, ErrorBody::Errors(core.to_string()))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::Errors(msg.clone())),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = match body {
            ErrorBody::Errors(message) => json!({ "errors": [message] }),
            ErrorBody::Error(message) => json!({ "error": message }),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, ErrorBody) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::Error("An internal error occurred".to_string()),
    )
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (23503) not already translated by a handler map to 400.
/// - Check constraint violations (23514) map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            ErrorBody::Error("Resource not found".to_string()),
        ),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => (
            StatusCode::BAD_REQUEST,
            ErrorBody::Errors("Referenced record does not exist".to_string()),
        ),
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::BAD_REQUEST,
                ErrorBody::Errors(format!("Value violates constraint: {constraint}")),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
