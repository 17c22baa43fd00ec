//! octocrab-backed client.

use super::{
    ClientError, CreateRequest, EnsureClient, FoundIssue, PrState, UpdateClient, UpdateRequest,
};
use async_trait::async_trait;
use octocrab::params;
use octocrab::Octocrab;
use tracing::debug;

/// Search results per page. Only the first page is ever read.
const RESULTS_PER_PAGE: u8 = 100;

/// A GitHub client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Wraps an already configured octocrab instance.
    #[must_use]
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Builds a client authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the underlying HTTP client cannot be built.
    pub fn from_token(token: impl Into<String>) -> Result<Self, ClientError> {
        let octocrab = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(octocrab))
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl UpdateClient for GitHubClient {
    async fn bot_name(&self) -> Result<String, ClientError> {
        let user = self.octocrab.current().user().await?;
        Ok(user.login)
    }

    async fn find_issues(
        &self,
        query: &str,
        sort: &str,
        ascending: bool,
    ) -> Result<Vec<FoundIssue>, ClientError> {
        debug!(query, sort, ascending, "Searching issues");

        let page = self
            .octocrab
            .search()
            .issues_and_pull_requests(query)
            .sort(sort.to_string())
            .order(sort_order(ascending).to_string())
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|issue| FoundIssue {
                number: issue.number,
                title: issue.title,
            })
            .collect())
    }

    async fn update_pull_request(&self, request: &UpdateRequest) -> Result<(), ClientError> {
        debug!(
            org = %request.org,
            repo = %request.repo,
            number = request.number,
            "Updating pull request"
        );

        let pulls = self.octocrab.pulls(&request.org, &request.repo);
        let mut builder = pulls.update(request.number);

        if let Some(title) = &request.title {
            builder = builder.title(title.clone());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        if let Some(state) = request.state {
            builder = builder.state(match state {
                PrState::Open => params::pulls::State::Open,
                PrState::Closed => params::pulls::State::Closed,
            });
        }
        if let Some(base) = &request.base {
            builder = builder.base(base.clone());
        }
        if let Some(can_modify) = request.maintainer_can_modify {
            builder = builder.maintainer_can_modify(can_modify);
        }

        builder.send().await?;
        Ok(())
    }
}

#[async_trait]
impl EnsureClient for GitHubClient {
    async fn create_pull_request(&self, request: &CreateRequest) -> Result<u64, ClientError> {
        debug!(
            org = %request.org,
            repo = %request.repo,
            head = %request.head,
            base = %request.base,
            "Creating pull request"
        );

        let pr = self
            .octocrab
            .pulls(&request.org, &request.repo)
            .create(&request.title, &request.head, &request.base)
            .body(request.body.clone())
            .maintainer_can_modify(request.maintainer_can_modify)
            .send()
            .await?;

        Ok(pr.number)
    }
}

/// Maps the ascending flag onto the search API's `order` parameter.
fn sort_order(ascending: bool) -> &'static str {
    if ascending {
        "asc"
    } else {
        "desc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_sort_order() {
        assert_eq!(sort_order(true), "asc");
        assert_eq!(sort_order(false), "desc");
    }
}
