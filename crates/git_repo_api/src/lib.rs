//! GitRepoAPI REST service
//!
//! This crate exposes a small REST API over the GitHub API: for a given user
//! it lists every repository that is not a fork, each enriched with its
//! branches and their head commit SHAs.
//!
//! # Architecture
//!
//! - `service` holds the aggregation logic (filter forks, fan out branch
//!   lookups) on top of the `github_client` crate.
//! - `handlers`, `routes` and `server` form the HTTP layer.
//! - `errors` maps domain errors from `github_client` to HTTP responses.
//!
//! The HTTP layer depends on the service, never the reverse.

use std::sync::Arc;

use github_client::GitHubOps;

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod service;

// Re-export key types for convenience
pub use errors::{ApiError, ErrorMessage};
pub use server::{ApiConfig, ApiServer};
pub use service::RepositoryService;

/// API version
pub const API_VERSION: &str = "v1";

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Default GitHub API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Aggregation service used by the repository listing handler
    pub service: RepositoryService,
}

impl AppState {
    /// Create new application state backed by the given GitHub client.
    pub fn new(github: Arc<dyn GitHubOps>) -> Self {
        Self {
            service: RepositoryService::new(github),
        }
    }
}
