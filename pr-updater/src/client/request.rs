//! Pull request mutation requests.

/// Open/closed state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    Open,
    Closed,
}

/// Edit of an existing pull request.
///
/// Every optional field left as `None` leaves the corresponding attribute of
/// the remote pull request untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Organization or user owning the repository.
    pub org: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number.
    pub number: u64,

    /// New title.
    pub title: Option<String>,

    /// New body.
    pub body: Option<String>,

    /// New open/closed state.
    pub state: Option<PrState>,

    /// New base branch.
    pub base: Option<String>,

    /// Whether maintainers of the base repository may push to the head branch.
    pub maintainer_can_modify: Option<bool>,
}

impl UpdateRequest {
    /// Creates a request that rewrites only the title and body.
    #[must_use]
    pub fn content(org: &str, repo: &str, number: u64, title: &str, body: &str) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
            number,
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            state: None,
            base: None,
            maintainer_can_modify: None,
        }
    }
}

/// A new pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Organization or user owning the repository.
    pub org: String,

    /// Repository name.
    pub repo: String,

    /// Title.
    pub title: String,

    /// Body.
    pub body: String,

    /// Source branch, optionally `user:branch` for forks.
    pub head: String,

    /// Target branch.
    pub base: String,

    /// Whether maintainers of the base repository may push to the head branch.
    pub maintainer_can_modify: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_update_leaves_other_fields_unset() {
        let request = UpdateRequest::content("kubernetes", "test-infra", 42, "Bump deps", "auto");

        assert_eq!(request.number, 42);
        assert_eq!(request.title.as_deref(), Some("Bump deps"));
        assert_eq!(request.body.as_deref(), Some("auto"));
        assert_eq!(request.state, None);
        assert_eq!(request.base, None);
        assert_eq!(request.maintainer_can_modify, None);
    }
}
