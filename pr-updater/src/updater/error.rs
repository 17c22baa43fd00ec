//! Updater error types.

use crate::client::ClientError;
use thiserror::Error;

/// Errors that can occur while looking for and updating a reusable PR.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Resolving the authenticated identity failed.
    #[error("bot name: {0}")]
    BotName(#[source] ClientError),

    /// The issue search failed.
    #[error("find issues: {0}")]
    FindIssues(#[source] ClientError),

    /// Updating the matched pull request failed.
    #[error("update {number}: {source}")]
    Update {
        number: u64,
        #[source]
        source: ClientError,
    },
}

/// Errors that can occur while ensuring a PR exists.
#[derive(Debug, Error)]
pub enum EnsureError {
    /// Looking for or updating an existing PR failed.
    #[error("update error: {0}")]
    Update(#[from] UpdateError),

    /// Opening a new PR failed.
    #[error("create error: {0}")]
    Create(#[source] ClientError),
}
