//! Client wrapper that performs reads but only logs writes.

use super::{ClientError, CreateRequest, EnsureClient, FoundIssue, UpdateClient, UpdateRequest};
use async_trait::async_trait;
use tracing::info;

/// Number reported for a pull request that was not actually created.
pub const DRY_RUN_PR_NUMBER: u64 = 0;

/// Wraps a client so that identity lookups and searches reach the remote,
/// while updates and creations are logged and skipped.
#[derive(Debug, Clone)]
pub struct DryRunClient<C> {
    inner: C,
}

impl<C> DryRunClient<C> {
    /// Wraps `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped client.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

#[async_trait]
impl<C: UpdateClient> UpdateClient for DryRunClient<C> {
    async fn bot_name(&self) -> Result<String, ClientError> {
        self.inner.bot_name().await
    }

    async fn find_issues(
        &self,
        query: &str,
        sort: &str,
        ascending: bool,
    ) -> Result<Vec<FoundIssue>, ClientError> {
        self.inner.find_issues(query, sort, ascending).await
    }

    async fn update_pull_request(&self, request: &UpdateRequest) -> Result<(), ClientError> {
        info!(
            org = %request.org,
            repo = %request.repo,
            number = request.number,
            title = ?request.title,
            "[DRY RUN] Would update pull request"
        );
        Ok(())
    }
}

#[async_trait]
impl<C: UpdateClient> EnsureClient for DryRunClient<C> {
    async fn create_pull_request(&self, request: &CreateRequest) -> Result<u64, ClientError> {
        info!(
            org = %request.org,
            repo = %request.repo,
            head = %request.head,
            base = %request.base,
            title = %request.title,
            "[DRY RUN] Would create pull request"
        );
        Ok(DRY_RUN_PR_NUMBER)
    }
}
