//! Data models for pull requests and review comments.
//!
//! Types prefixed with `Api` are internal deserialisation targets for GitHub
//! responses; they convert into the public domain types the pipeline passes
//! between stages.

use serde::Deserialize;

/// Login rendered for comments whose author account no longer exists.
pub const GHOST_AUTHOR: &str = "ghost";

/// Pull request as returned by the closed pull request listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number, unique within its repository.
    pub number: u64,
    /// Title, recorded in diagnostics when its comments are fetched.
    pub title: Option<String>,
    /// Merge timestamp (ISO 8601); `None` when the pull request was closed
    /// without merging.
    pub merged_at: Option<String>,
}

impl PullRequest {
    /// Returns true when the pull request carries a merge timestamp.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// Review comment attached to a pull request diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Author login.
    pub author: String,
    /// Free-text comment body.
    pub body: String,
    /// Creation timestamp exactly as GitHub reported it.
    pub created_at: String,
}

/// Review comment tagged with the pull request it came from.
///
/// Only built in aggregate mode, where comments from several pull requests
/// share one output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedComment {
    /// Owning pull request number.
    pub pr_number: u64,
    /// The comment itself.
    pub comment: Comment,
}

impl AggregatedComment {
    /// Tags every comment in `comments` with `pr_number`, keeping order.
    pub fn tag_all(
        pr_number: u64,
        comments: impl IntoIterator<Item = Comment>,
    ) -> impl Iterator<Item = Self> {
        comments
            .into_iter()
            .map(move |comment| Self { pr_number, comment })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) merged_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiReviewComment {
    pub(super) body: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            merged_at: value.merged_at,
        }
    }
}

impl From<ApiReviewComment> for Comment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            author: value
                .user
                .and_then(|user| user.login)
                .unwrap_or_else(|| GHOST_AUTHOR.to_owned()),
            body: value.body.unwrap_or_default(),
            created_at: value.created_at.unwrap_or_default(),
        }
    }
}
