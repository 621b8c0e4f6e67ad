//! HTTP server configuration and startup
//!
//! This module provides the server configuration, the wiring of the GitHub
//! client into the application state, and the startup logic.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use url::Url;

use github_client::{create_rest_client, GitHubClient};

use crate::{routes, AppState, DEFAULT_GITHUB_API_URL, DEFAULT_PORT};

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Base URL of the GitHub API
    pub github_api_url: String,

    /// Optional personal access token for GitHub requests
    pub github_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_token: None,
        }
    }
}

impl ApiConfig {
    /// Load the configuration from environment variables.
    ///
    /// - `API_PORT`: port to listen on (default: 8080)
    /// - `API_HOST`: host to bind to (default: 0.0.0.0)
    /// - `GITHUB_API_BASE_URL`: GitHub API base (default: https://api.github.com)
    /// - `GITHUB_TOKEN`: optional personal access token
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is not a number or if
    /// `GITHUB_API_BASE_URL` is not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid API_PORT: {}", e))?;

        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let github_api_url =
            env::var("GITHUB_API_BASE_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());
        Url::parse(&github_api_url)
            .map_err(|e| anyhow::anyhow!("Invalid GITHUB_API_BASE_URL: {}", e))?;

        let github_token = env::var("GITHUB_TOKEN").ok();

        Ok(Self {
            port,
            host,
            github_api_url,
            github_token,
        })
    }
}

/// API server
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a new API server, building the GitHub client from the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub client cannot be constructed.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let octocrab =
            create_rest_client(&config.github_api_url, config.github_token.as_deref())?;
        let state = AppState::new(Arc::new(GitHubClient::new(octocrab)));

        Ok(Self { config, state })
    }

    /// Build the Axum router with all routes and middleware.
    pub fn router(&self) -> axum::Router {
        routes::create_router(self.state.clone())
    }

    /// Start the server and listen for requests.
    ///
    /// This method blocks until the server is shut down gracefully via
    /// CTRL+C (SIGINT) or SIGTERM signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from((
            self.config.host.parse::<std::net::IpAddr>()?,
            self.config.port,
        ));

        tracing::info!("Starting API server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        let app = self.router();

        // Serve with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Wait for shutdown signal (CTRL+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
