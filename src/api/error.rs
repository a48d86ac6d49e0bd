//! Unified error handling for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application error type with HTTP response mapping.
///
/// Upstream failures never surface here — they are absorbed inside the
/// aggregation pipeline. Only rate-limit rejections and genuine internal
/// faults are user-visible.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Too many requests for a rate-limited key (429).
    #[error("{0}")]
    RateLimited(String),

    /// Internal server error (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = axum::Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
