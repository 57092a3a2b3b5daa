//! GitHub retrieval of merged pull requests and their review comments.
//!
//! This module wraps Octocrab behind a page-level gateway trait. The
//! [`PullRequestLister`] and [`CommentFetcher`] walk those pages to build the
//! two stages of the harvest, and errors are mapped into [`HarvestError`]
//! variants that keep the HTTP status visible to callers.

pub mod error;
pub mod fetcher;
pub mod gateway;
pub mod lister;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::HarvestError;
pub use fetcher::CommentFetcher;
pub use gateway::{OctocrabReviewGateway, ReviewGateway};
pub use lister::PullRequestLister;
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{AggregatedComment, Comment, PullRequest};
pub use pagination::PageRequest;

#[cfg(test)]
pub use gateway::MockReviewGateway;
