//! Retrieval of every review comment on a pull request.

use tracing::debug;

use super::error::HarvestError;
use super::gateway::ReviewGateway;
use super::locator::RepositoryLocator;
use super::models::Comment;
use super::pagination::{MAX_PER_PAGE, PageRequest};

/// Walks a pull request's review comment listing to the end.
pub struct CommentFetcher<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> CommentFetcher<'client, Gateway>
where
    Gateway: ReviewGateway,
{
    /// Create a fetcher reading pages through `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Returns every review comment on `pr_number`, page order then
    /// in-page order.
    ///
    /// An empty page is the only stopping condition.
    ///
    /// # Errors
    ///
    /// Any page failure abandons the pull request; no partial list is
    /// returned.
    pub async fn list_comments(
        &self,
        locator: &RepositoryLocator,
        pr_number: u64,
    ) -> Result<Vec<Comment>, HarvestError> {
        let mut comments = Vec::new();
        let mut page = PageRequest::first(MAX_PER_PAGE)?;

        loop {
            let items = self
                .client
                .review_comments_page(locator, pr_number, page)
                .await?;
            debug!(
                pr_number,
                page = page.page(),
                items = items.len(),
                "fetched review comment page"
            );
            if items.is_empty() {
                return Ok(comments);
            }
            comments.extend(items);
            page = page.next()?;
        }
    }
}
