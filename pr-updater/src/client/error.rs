//! Client error types.

use thiserror::Error;

/// Errors returned by a remote hosting-service client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The remote refused the call or answered with something unusable.
    #[error("request rejected: {message}")]
    Rejected { message: String },
}
