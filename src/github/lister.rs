//! Discovery of recently merged pull requests.

use tracing::debug;

use super::error::HarvestError;
use super::gateway::ReviewGateway;
use super::locator::RepositoryLocator;
use super::models::PullRequest;
use super::pagination::{MAX_PER_PAGE, PageRequest};

/// Walks the closed pull request listing and keeps merged entries.
pub struct PullRequestLister<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestLister<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    /// Create a lister reading pages through `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Returns up to `target_count` merged pull requests in listing order.
    ///
    /// Pages of 100 closed pull requests are requested from page 1 onwards.
    /// The walk ends as soon as `target_count` merged entries have been
    /// accepted or a page comes back empty. A `target_count` of zero returns
    /// an empty list without issuing any request.
    ///
    /// # Errors
    ///
    /// Returns the first gateway failure unchanged; nothing gathered before
    /// the failure is returned.
    pub async fn list_merged(
        &self,
        locator: &RepositoryLocator,
        target_count: usize,
    ) -> Result<Vec<PullRequest>, HarvestError> {
        let mut merged: Vec<PullRequest> = Vec::new();
        let mut page = PageRequest::first(MAX_PER_PAGE)?;

        while merged.len() < target_count {
            let items = self.client.closed_pull_requests_page(locator, page).await?;
            debug!(
                page = page.page(),
                items = items.len(),
                "fetched closed pull request page"
            );
            if items.is_empty() {
                break;
            }

            let remaining = target_count.saturating_sub(merged.len());
            merged.extend(
                items
                    .into_iter()
                    .filter(PullRequest::is_merged)
                    .take(remaining),
            );
            page = page.next()?;
        }

        Ok(merged)
    }
}
