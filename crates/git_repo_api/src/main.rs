//! GitRepoAPI REST server
//!
//! Main binary for running the API server.
//!
//! # Environment Variables
//!
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GITHUB_API_BASE_URL`: GitHub API base (default: https://api.github.com)
//! - `GITHUB_TOKEN`: Optional personal access token for higher rate limits
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use git_repo_api::{ApiConfig, ApiServer, API_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = ApiConfig::from_env()?;

    tracing::info!("Starting GitRepoAPI server");
    tracing::info!("API version: {}", API_VERSION);
    tracing::info!("GitHub API base: {}", config.github_api_url);

    let server = ApiServer::new(config)?;

    // Start server with graceful shutdown
    server.serve().await
}
