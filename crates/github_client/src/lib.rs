//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for the two GitHub endpoints the repository
//! listing service consumes: the repositories of a user and the branches of a
//! repository. The [`GitHubOps`] trait is the seam the service layer depends
//! on, allowing tests to substitute a mock client.

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Trait for the GitHub read operations the service needs.
#[async_trait]
pub trait GitHubOps: Send + Sync {
    /// Fetches all repositories owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if the user does not exist and
    /// [`Error::RateLimitExceeded`] when GitHub rejects the request with 403.
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<models::Repository>, Error>;

    /// Fetches all branches of the given repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if the repository does not exist and
    /// [`Error::RateLimitExceeded`] when GitHub rejects the request with 403.
    async fn fetch_repository_branches(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<models::Branch>, Error>;
}

/// A client for the GitHub REST API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` wrapping the given Octocrab instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GitHubOps for GitHubClient {
    /// Fetches the repositories of a user using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `username` - The login of the user whose repositories to list.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`Error`] if the API call fails; see
    /// [`errors::Error`] for the 404/403 mapping.
    #[instrument(skip(self), fields(username = %username))]
    async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<models::Repository>, Error> {
        let path = format!("/users/{}/repos", username);
        let result: OctocrabResult<Vec<models::Repository>> =
            self.client.get(path, None::<&()>).await;
        match result {
            Ok(repositories) => {
                info!(
                    username = username,
                    count = repositories.len(),
                    "Fetched repositories for user"
                );
                Ok(repositories)
            }
            Err(e) => Err(map_octocrab_error("Failed to fetch repositories for user", e)),
        }
    }

    /// Fetches the branches of a repository using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    ///
    /// Returns the mapped [`Error`] if the API call fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn fetch_repository_branches(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<models::Branch>, Error> {
        let path = format!("/repos/{}/{}/branches", owner, repo);
        let result: OctocrabResult<Vec<models::Branch>> =
            self.client.get(path, None::<&()>).await;
        match result {
            Ok(branches) => {
                info!(
                    owner = owner,
                    repo = repo,
                    count = branches.len(),
                    "Fetched branches for repository"
                );
                Ok(branches)
            }
            Err(e) => Err(map_octocrab_error("Failed to fetch branches for repository", e)),
        }
    }
}

/// Creates an `Octocrab` client against the given GitHub API base URL.
///
/// The base URL is configurable so tests can point the client at a mock
/// server. When a personal access token is supplied the client authenticates
/// with it, which raises the GitHub rate limit.
///
/// # Arguments
///
/// * `base_url` - The GitHub API base, e.g. `https://api.github.com`.
/// * `token` - Optional personal access token.
///
/// # Errors
///
/// Returns [`Error::AuthError`] if the client cannot be built, e.g. when the
/// base URL is not a valid URI.
pub fn create_rest_client(base_url: &str, token: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().base_uri(base_url).map_err(|e| {
        error!(
            base_url = base_url,
            error = %e,
            "Invalid GitHub API base URL"
        );
        Error::AuthError(format!("Invalid GitHub API base URL: {}", e))
    })?;

    if let Some(token) = token {
        builder = builder.personal_token(token.to_string());
    }

    builder
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build GitHub client: {}", e)))
}

/// Translates an `octocrab::Error` into the crate's [`Error`] taxonomy.
///
/// GitHub error responses carry the upstream status code; 404 and 403 get
/// dedicated variants so the HTTP layer can produce the matching response,
/// other 4xx statuses are relayed as [`Error::Client`].
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            error!(
                status = %source.status_code,
                error_message = source.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            match source.status_code {
                StatusCode::NOT_FOUND => Error::UserNotFound,
                StatusCode::FORBIDDEN => Error::RateLimitExceeded,
                status if status.is_client_error() => Error::Client {
                    status: status.as_u16(),
                    message: source.message.clone(),
                },
                _ => Error::Upstream(source.message.clone()),
            }
        }
        octocrab::Error::Serde { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to deserialize the response.",
                message
            );
            Error::Deserialization(source)
        }
        octocrab::Error::UriParse { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::Upstream(source.to_string())
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::Upstream(e.to_string())
        }
    }
}
