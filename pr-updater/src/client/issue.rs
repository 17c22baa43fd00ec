//! Search results.

/// An issue or pull request returned by an issue search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundIssue {
    /// Issue/PR number within its repository.
    pub number: u64,

    /// Current title.
    pub title: String,
}
