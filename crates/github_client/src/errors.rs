//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when fetching repository
//! and branch data from the GitHub API. The variants preserve enough context
//! for the HTTP layer to relay a meaningful status code to callers.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// The 4xx variants mirror the responses GitHub returns for the endpoints this
/// crate consumes: a missing user or repository surfaces as `UserNotFound`, an
/// exhausted rate limit as `RateLimitExceeded`, and any other client error
/// keeps its upstream status so it can be echoed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failure to construct or authenticate the underlying Octocrab client.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// GitHub rejected the request with a 4xx status other than 404 or 403.
    ///
    /// The original status code is retained so the HTTP layer can relay it.
    #[error("GitHub client error: {message}")]
    Client {
        /// Upstream HTTP status code.
        status: u16,
        /// Human-readable description of the upstream failure.
        message: String,
    },

    /// Error deserializing the response from GitHub.
    ///
    /// This occurs when GitHub returns a payload that cannot be parsed into
    /// the expected data structure, e.g. after an API format change.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// GitHub API rate limit has been exceeded (HTTP 403).
    ///
    /// Unauthenticated requests are limited to 60 per hour; supplying a
    /// personal access token raises the limit considerably.
    #[error("GitHub API rate limit exceeded")]
    RateLimitExceeded,

    /// The request failed for a reason other than a client error.
    ///
    /// Covers transport failures and 5xx responses from GitHub.
    #[error("GitHub API request failed: {0}")]
    Upstream(String),

    /// The requested user (or repository) does not exist (HTTP 404).
    #[error("User not found")]
    UserNotFound,
}
