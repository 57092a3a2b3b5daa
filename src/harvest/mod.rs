//! Orchestration of a complete harvest run.
//!
//! [`run_harvest`] lists merged pull requests, fetches each one's review
//! comments in listing order, and hands them to the archive either one file
//! per pull request or as a single aggregate file. Human-readable progress
//! goes to a caller-supplied writer; diagnostics go through `tracing`.

use std::io::Write;

use camino::Utf8PathBuf;
use tracing::{debug, info, warn};

use crate::archive::{ArchiveDirectory, CommentArchive};
use crate::github::{
    AggregatedComment, Comment, CommentFetcher, HarvestError, PullRequest, PullRequestLister,
    RepositoryLocator, ReviewGateway,
};

/// How harvested comments are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `pr_<n>_comments.txt` file per pull request.
    #[default]
    PerPullRequest,
    /// A single `all_pr_comments.txt` written once at the end of the run.
    Aggregate,
}

/// What happens when one pull request cannot be fetched or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and continue with the next pull request.
    #[default]
    SkipAndContinue,
    /// Abort the run with the first per-pull-request failure.
    FailFast,
}

/// Parameters of a single harvest run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Maximum number of merged pull requests to process.
    pub target_count: usize,
    /// File layout for the archive.
    pub output_mode: OutputMode,
    /// Handling of per-pull-request failures.
    pub failure_policy: FailurePolicy,
}

/// Outcome of a completed harvest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Merged pull requests returned by the listing.
    pub pull_requests: usize,
    /// Comments written to disk.
    pub comments_saved: usize,
    /// Files written, in write order.
    pub files_written: Vec<Utf8PathBuf>,
    /// Pull requests skipped because fetching or writing failed.
    pub skipped: Vec<u64>,
}

/// Runs a harvest for `locator`, writing files beneath `archive`.
///
/// # Errors
///
/// Returns an error when the pull request listing fails, the archive
/// directory cannot be created, the aggregate file cannot be written, or
/// progress output fails. Under [`FailurePolicy::FailFast`] the first
/// per-pull-request failure is returned as well.
pub async fn run_harvest<G, W>(
    gateway: &G,
    locator: &RepositoryLocator,
    archive: &CommentArchive,
    options: HarvestOptions,
    progress: &mut W,
) -> Result<HarvestSummary, HarvestError>
where
    G: ReviewGateway,
    W: Write,
{
    let pull_requests = PullRequestLister::new(gateway)
        .list_merged(locator, options.target_count)
        .await?;

    let mut run = HarvestRun::new(archive, options, progress);
    if pull_requests.is_empty() {
        run.report("No merged PRs found.")?;
        return Ok(run.summary);
    }

    info!(
        pull_requests = pull_requests.len(),
        repository = %locator.archive_directory_name(),
        "harvesting review comments"
    );
    run.summary.pull_requests = pull_requests.len();

    let fetcher = CommentFetcher::new(gateway);
    for pull_request in &pull_requests {
        run.report(&format!(
            "Fetching comments for PR #{}...",
            pull_request.number
        ))?;
        debug!(
            pr_number = pull_request.number,
            title = pull_request.title.as_deref().unwrap_or_default(),
            "fetching review comments"
        );
        match fetcher.list_comments(locator, pull_request.number).await {
            Ok(comments) => run.accept(pull_request, comments)?,
            Err(error) => run.skip(pull_request.number, "fetching comments", error)?,
        }
    }

    run.finish()
}

struct HarvestRun<'run, W> {
    archive: &'run CommentArchive,
    directory: Option<ArchiveDirectory>,
    options: HarvestOptions,
    progress: &'run mut W,
    buffer: Vec<AggregatedComment>,
    summary: HarvestSummary,
}

impl<'run, W: Write> HarvestRun<'run, W> {
    fn new(archive: &'run CommentArchive, options: HarvestOptions, progress: &'run mut W) -> Self {
        Self {
            archive,
            directory: None,
            options,
            progress,
            buffer: Vec::new(),
            summary: HarvestSummary::default(),
        }
    }

    fn accept(
        &mut self,
        pull_request: &PullRequest,
        comments: Vec<Comment>,
    ) -> Result<(), HarvestError> {
        let number = pull_request.number;
        if comments.is_empty() {
            return self.report(&format!("PR #{number} has no review comments."));
        }

        match self.options.output_mode {
            OutputMode::Aggregate => {
                let count = comments.len();
                self.buffer
                    .extend(AggregatedComment::tag_all(number, comments));
                self.report(&format!("Collected {count} comments from PR #{number}"))
            }
            OutputMode::PerPullRequest => self.write_pull_request(number, &comments),
        }
    }

    fn write_pull_request(&mut self, number: u64, comments: &[Comment]) -> Result<(), HarvestError> {
        let written = self.directory()?.write_pull_request(number, comments);
        match written {
            Ok(path) => {
                self.report(&format!("Saved {} comments to {path}", comments.len()))?;
                self.summary.comments_saved += comments.len();
                self.summary.files_written.push(path);
                Ok(())
            }
            Err(error) => self.skip(number, "saving comments", error),
        }
    }

    fn skip(&mut self, number: u64, stage: &str, error: HarvestError) -> Result<(), HarvestError> {
        if self.options.failure_policy == FailurePolicy::FailFast {
            return Err(error);
        }
        warn!(pr_number = number, %error, "skipping pull request after {stage} failed");
        self.summary.skipped.push(number);
        Ok(())
    }

    fn finish(mut self) -> Result<HarvestSummary, HarvestError> {
        if self.options.output_mode == OutputMode::Aggregate && !self.buffer.is_empty() {
            let buffer = std::mem::take(&mut self.buffer);
            let written = self.directory()?.write_aggregate(&buffer)?;
            if let Some(path) = written {
                self.report(&format!(
                    "Saved all {} comments from {} PRs to {path}",
                    buffer.len(),
                    self.summary.pull_requests
                ))?;
                self.summary.comments_saved += buffer.len();
                self.summary.files_written.push(path);
            }
        }

        info!(
            comments = self.summary.comments_saved,
            files = self.summary.files_written.len(),
            skipped = self.summary.skipped.len(),
            "harvest complete"
        );
        Ok(self.summary)
    }

    /// Opens the archive directory on first use.
    fn directory(&mut self) -> Result<&ArchiveDirectory, HarvestError> {
        let directory = self
            .directory
            .take()
            .map_or_else(|| self.archive.open(), Ok)?;
        Ok(self.directory.insert(directory))
    }

    fn report(&mut self, line: &str) -> Result<(), HarvestError> {
        writeln!(self.progress, "{line}").map_err(|error| HarvestError::Io {
            message: format!("failed to write progress: {error}"),
        })
    }
}
