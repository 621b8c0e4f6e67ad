//! HTTP response models
//!
//! These types define the JSON shapes the API returns. They are distinct from
//! the `github_client` models: the `fork` flag is consumed while filtering and
//! is deliberately absent from the response.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A repository with its branches, as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryWithBranches {
    /// The name of the repository
    pub name: String,
    /// The account that owns the repository
    pub owner: OwnerInfo,
    /// All branches of the repository
    pub branches: Vec<BranchInfo>,
}

/// Owner information in a repository response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    /// The login name of the owning account
    pub login: String,
}

/// Branch information in a repository response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchInfo {
    /// The name of the branch
    pub name: String,
    /// The commit the branch currently points at
    pub commit: CommitInfo,
}

/// Head commit of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// The full SHA of the commit
    pub sha: String,
}

impl From<github_client::models::Owner> for OwnerInfo {
    fn from(value: github_client::models::Owner) -> Self {
        Self { login: value.login }
    }
}

impl From<github_client::models::Branch> for BranchInfo {
    fn from(value: github_client::models::Branch) -> Self {
        Self {
            name: value.name,
            commit: CommitInfo {
                sha: value.commit.sha,
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,
}
