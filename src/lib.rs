//! Gleaner library crate for harvesting pull request review comments.
//!
//! The library lists recently merged pull requests through Octocrab, pulls
//! every review comment attached to them, and archives the comments as plain
//! text beneath `<output_root>/<owner>_<repo>`. Errors are reported through
//! [`HarvestError`] so the CLI can surface friendly messages.

pub mod archive;
pub mod config;
pub mod github;
pub mod harvest;

pub use archive::{ArchiveDirectory, CommentArchive};
pub use config::GleanerConfig;
pub use github::{
    AggregatedComment, Comment, CommentFetcher, HarvestError, OctocrabReviewGateway,
    PersonalAccessToken, PullRequest, PullRequestLister, RepositoryLocator, ReviewGateway,
};
pub use harvest::{FailurePolicy, HarvestOptions, HarvestSummary, OutputMode, run_harvest};
