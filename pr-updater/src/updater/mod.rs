//! Reuse-or-create workflow for bot pull requests.
//!
//! [`update_pr`] looks for an open pull request authored by the bot whose
//! title matches a fragment and rewrites its title and body. [`ensure_pr`]
//! does the same and opens a new pull request when nothing matched.
//!
//! Search and creation are separate remote calls. Two runs racing on the same
//! fragment with no existing PR can both end up creating one.

mod error;
mod query;

pub use error::{EnsureError, UpdateError};
pub use query::{search_query, SORT_ASCENDING, SORT_FIELD};

use crate::client::{CreateRequest, EnsureClient, UpdateClient, UpdateRequest};
use tracing::{info, info_span, Instrument};

/// Finds the bot's most recently updated open PR matching `match_fragment`
/// and replaces its title and body.
///
/// An empty `match_fragment` disables reuse: no remote call is made and
/// `Ok(None)` is returned.
///
/// # Arguments
///
/// * `client` - Client with identity, search and update capabilities
/// * `org` - Repository owner
/// * `repo` - Repository name
/// * `title` - Desired PR title
/// * `body` - Desired PR body
/// * `match_fragment` - Search fragment identifying a reusable PR
///
/// # Returns
///
/// The number of the updated PR, or `None` if no PR matched.
///
/// # Errors
///
/// Returns [`UpdateError`] if resolving the bot name, searching or updating fails.
pub async fn update_pr<C>(
    client: &C,
    org: &str,
    repo: &str,
    title: &str,
    body: &str,
    match_fragment: &str,
) -> Result<Option<u64>, UpdateError>
where
    C: UpdateClient + ?Sized,
{
    if match_fragment.is_empty() {
        return Ok(None);
    }

    let span = info_span!("update_pr", org, repo, match_fragment);

    async {
        info!("Looking for a PR to reuse");
        let me = client.bot_name().await.map_err(UpdateError::BotName)?;

        let query = search_query(&me, match_fragment);
        let issues = client
            .find_issues(&query, SORT_FIELD, SORT_ASCENDING)
            .await
            .map_err(UpdateError::FindIssues)?;

        let Some(found) = issues.first() else {
            info!("No reusable PRs found");
            return Ok(None);
        };

        let number = found.number;
        info!(pr_number = number, "Found reusable PR");

        let request = UpdateRequest::content(org, repo, number, title, body);
        client
            .update_pull_request(&request)
            .await
            .map_err(|source| UpdateError::Update { number, source })?;

        Ok(Some(number))
    }
    .instrument(span)
    .await
}

/// Makes sure a PR with the given content exists, reusing a matching one when
/// possible.
///
/// Delegates to [`update_pr`]; when it finds nothing, opens a PR from `source`
/// into `branch` with maintainer edits allowed.
///
/// # Returns
///
/// The number of the updated or newly created PR.
///
/// # Errors
///
/// Returns [`EnsureError::Update`] if the reuse step fails and
/// [`EnsureError::Create`] if opening the PR fails.
#[allow(clippy::too_many_arguments)]
pub async fn ensure_pr<C>(
    client: &C,
    org: &str,
    repo: &str,
    title: &str,
    body: &str,
    source: &str,
    branch: &str,
    match_fragment: &str,
) -> Result<u64, EnsureError>
where
    C: EnsureClient + ?Sized,
{
    if let Some(number) = update_pr(client, org, repo, title, body, match_fragment).await? {
        return Ok(number);
    }

    let request = CreateRequest {
        org: org.to_string(),
        repo: repo.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        head: source.to_string(),
        base: branch.to_string(),
        maintainer_can_modify: true,
    };

    let number = client
        .create_pull_request(&request)
        .await
        .map_err(EnsureError::Create)?;

    info!(org, repo, pr_number = number, "Created PR");
    Ok(number)
}
