//! Repository aggregation service
//!
//! Combines the two GitHub endpoints into the response the API serves: the
//! user's repositories are fetched first, forks are dropped, and the branches
//! of the remaining repositories are fetched concurrently.

use std::sync::Arc;

use futures::future;
use github_client::{Error, GitHubOps};
use tracing::{info, instrument};

use crate::models::{BranchInfo, OwnerInfo, RepositoryWithBranches};

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

/// Service that assembles the repository listing for a user.
#[derive(Clone)]
pub struct RepositoryService {
    github: Arc<dyn GitHubOps>,
}

impl RepositoryService {
    /// Create a new service backed by the given GitHub client.
    pub fn new(github: Arc<dyn GitHubOps>) -> Self {
        Self { github }
    }

    /// Lists all non-fork repositories of a user, each with its branches.
    ///
    /// Branch lookups for the individual repositories run concurrently; the
    /// first failing lookup aborts the whole request.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the underlying GitHub client.
    #[instrument(skip(self), fields(username = %username))]
    pub async fn list_user_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositoryWithBranches>, Error> {
        let repositories = self.github.fetch_user_repositories(username).await?;

        let total = repositories.len();
        let sources: Vec<_> = repositories.into_iter().filter(|repo| !repo.fork).collect();

        info!(
            username = username,
            total = total,
            kept = sources.len(),
            "Filtered fork repositories"
        );

        let lookups = sources.into_iter().map(|repo| async move {
            let branches = self
                .github
                .fetch_repository_branches(username, &repo.name)
                .await?;

            Ok::<_, Error>(RepositoryWithBranches {
                name: repo.name,
                owner: OwnerInfo::from(repo.owner),
                branches: branches.into_iter().map(BranchInfo::from).collect(),
            })
        });

        future::try_join_all(lookups).await
    }
}
