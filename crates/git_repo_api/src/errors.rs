//! Error handling and HTTP error conversion
//!
//! This module defines how domain errors from `github_client` are translated
//! to HTTP error responses. The conversion happens at the HTTP boundary and
//! never exposes internal implementation details; upstream 4xx statuses are
//! echoed to the caller, everything else becomes a gateway error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Standard error response body for all API errors.
///
/// All error responses carry the HTTP status code and a human-readable
/// message, e.g. `{"status": 404, "message": "User not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// The HTTP status code of the response
    pub status: u16,

    /// Human-readable error message
    pub message: String,
}

/// Axum response wrapper for API errors.
///
/// Handlers return `Result<Json<T>, ApiError>`; the `?` operator converts
/// domain errors into this type, and `IntoResponse` produces the final
/// HTTP response.
#[derive(Debug)]
pub struct ApiError(github_client::Error);

impl From<github_client::Error> for ApiError {
    fn from(err: github_client::Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = convert_error(&self.0);

        // Log error server-side
        log_error(&self.0, status);

        let body = ErrorMessage {
            status: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert a domain error to an HTTP status code and user-facing message.
fn convert_error(error: &github_client::Error) -> (StatusCode, String) {
    use github_client::Error;

    match error {
        Error::UserNotFound => (StatusCode::NOT_FOUND, error.to_string()),
        Error::RateLimitExceeded => (StatusCode::FORBIDDEN, error.to_string()),
        Error::Client { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST),
            error.to_string(),
        ),
        Error::Deserialization(_) | Error::Upstream(_) => (
            StatusCode::BAD_GATEWAY,
            "GitHub API request failed".to_string(),
        ),
        Error::AuthError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred".to_string(),
        ),
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &github_client::Error, status: StatusCode) {
    match status {
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
            tracing::error!("API error: {} - {}", status, error);
        }
        StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
            tracing::warn!("API error: {} - {}", status, error);
        }
        _ => {
            tracing::info!("API error: {} - {}", status, error);
        }
    }
}
