//! Remote capabilities needed by the reuse-or-create workflow.
//!
//! The workflow never talks to GitHub directly. It is handed a client
//! implementing [`UpdateClient`] (to find and edit a pull request) or
//! [`EnsureClient`] (to additionally open one). [`GitHubClient`] is the
//! octocrab-backed implementation, [`DryRunClient`] wraps any client and
//! turns mutations into log lines.

mod dry_run;
mod error;
mod github;
mod issue;
mod request;

pub use dry_run::{DryRunClient, DRY_RUN_PR_NUMBER};
pub use error::ClientError;
pub use github::GitHubClient;
pub use issue::FoundIssue;
pub use request::{CreateRequest, PrState, UpdateRequest};

use async_trait::async_trait;

/// Identity, search and edit of pull requests.
#[async_trait]
pub trait UpdateClient: Send + Sync {
    /// Returns the login the client is authenticated as.
    async fn bot_name(&self) -> Result<String, ClientError>;

    /// Searches issues and pull requests.
    ///
    /// `sort` names the field to sort by (e.g. `updated`); `ascending = false`
    /// puts the highest values first.
    async fn find_issues(
        &self,
        query: &str,
        sort: &str,
        ascending: bool,
    ) -> Result<Vec<FoundIssue>, ClientError>;

    /// Edits an existing pull request, touching only the fields set in `request`.
    async fn update_pull_request(&self, request: &UpdateRequest) -> Result<(), ClientError>;
}

/// Everything in [`UpdateClient`] plus opening new pull requests.
#[async_trait]
pub trait EnsureClient: UpdateClient {
    /// Opens a pull request and returns its number.
    async fn create_pull_request(&self, request: &CreateRequest) -> Result<u64, ClientError>;
}
