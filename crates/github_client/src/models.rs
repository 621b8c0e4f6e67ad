//! # Models
//!
//! Data models for the GitHub REST endpoints this crate consumes. The field
//! names match the GitHub response payloads so the structs deserialize
//! directly from the API without renaming.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// The owner of a repository, as embedded in a repository response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// The login name of the owning account
    pub login: String,
}

/// A repository as returned by `GET /users/{username}/repos`.
///
/// Only the fields this service consumes are modeled; GitHub returns many
/// more, which serde ignores on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// The name of the repository (without owner)
    pub name: String,
    /// The account that owns the repository
    pub owner: Owner,
    /// Whether the repository is a fork of another repository
    #[serde(default)]
    pub fork: bool,
}

/// A branch as returned by `GET /repos/{owner}/{repo}/branches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// The name of the branch
    pub name: String,
    /// The commit the branch currently points at
    pub commit: Commit,
}

/// The head commit of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The full SHA of the commit
    pub sha: String,
}
