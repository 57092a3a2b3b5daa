//! Gateways for reading GitHub listing pages.
//!
//! The pipeline only ever needs one page at a time, so the gateway trait
//! exposes page-level reads and leaves the walking to
//! [`PullRequestLister`](crate::github::PullRequestLister) and
//! [`CommentFetcher`](crate::github::CommentFetcher). Tests substitute the
//! generated mock; the Octocrab implementation performs the HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod review;

pub use review::OctocrabReviewGateway;

use async_trait::async_trait;

use crate::github::error::HarvestError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{Comment, PullRequest};
use crate::github::pagination::PageRequest;

/// Gateway that reads single pages of pull requests and review comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch one page of closed pull requests, most recently updated first.
    async fn closed_pull_requests_page(
        &self,
        locator: &RepositoryLocator,
        page: PageRequest,
    ) -> Result<Vec<PullRequest>, HarvestError>;

    /// Fetch one page of review comments for a pull request.
    async fn review_comments_page(
        &self,
        locator: &RepositoryLocator,
        pr_number: u64,
        page: PageRequest,
    ) -> Result<Vec<Comment>, HarvestError>;
}
