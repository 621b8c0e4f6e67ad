//! HTTP request handlers
//!
//! Handlers translate HTTP requests to service calls and service results to
//! HTTP responses. Domain errors convert to [`ApiError`] via `?`.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    errors::ApiError,
    models::{HealthCheckResponse, RepositoryWithBranches},
    AppState,
};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// GET /api/v1/github/:username/repos
///
/// List all non-fork repositories of a GitHub user together with their
/// branches.
pub async fn list_user_repositories(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<RepositoryWithBranches>>, ApiError> {
    let repositories = state.service.list_user_repositories(&username).await?;
    Ok(Json(repositories))
}

/// GET /api/v1/health
///
/// Health check endpoint.
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
