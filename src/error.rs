use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;

const GENERIC_FAILURE: &str = "Internal server error";

/// Every handler failure. Renders as `{"error": message}` with a matching status.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    RateLimited(String),
    /// Logged in full, answered with a generic message.
    Internal(String),
    Store(StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::RateLimited(msg)
            | AppError::Internal(msg) => write!(f, "{}: {msg}", self.status()),
            AppError::Store(err) => write!(f, "{}: {err}", self.status()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::RateLimited(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                GENERIC_FAILURE.to_string()
            }
            AppError::Store(err) => {
                tracing::error!("Store error: {err}");
                GENERIC_FAILURE.to_string()
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Duplicates and rule breaks are the caller's fault, missing nested items are 404s;
/// anything else from the store is an outage.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(msg) | StoreError::Invalid(msg) => AppError::BadRequest(msg),
            StoreError::Missing(msg) => AppError::NotFound(msg),
            other => AppError::Store(other),
        }
    }
}
