//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gleaner.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GLEANER_OWNER`, `GLEANER_TOKEN`, and so
//!    on, plus the legacy `GITHUB_TOKEN_PR` token fallback
//! 4. **Command-line arguments** – `--owner`/`-o`, `--repo`/`-r`, etc.
//!
//! # Configuration File
//!
//! ```toml
//! owner = "octocat"
//! repo = "hello-world"
//! count = 25
//! merge = true
//! output_dir = "review-notes"
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::archive::DEFAULT_OUTPUT_ROOT;
use crate::github::locator::DEFAULT_API_BASE;
use crate::github::{HarvestError, PersonalAccessToken};
use crate::harvest::{FailurePolicy, OutputMode};

/// Environment variable consulted when no other source supplies a token.
pub const LEGACY_TOKEN_ENV: &str = "GITHUB_TOKEN_PR";

const DEFAULT_COUNT: i64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use gleaner::GleanerConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GleanerConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// let (owner, repo) = config.require_repository_info().expect("repository required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GLEANER",
    discovery(
        dotfile_name = ".gleaner.toml",
        config_file_name = "gleaner.toml",
        app_name = "gleaner"
    )
)]
pub struct GleanerConfig {
    /// Repository owner (e.g., "octocat").
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `GLEANER_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `GLEANER_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GLEANER_TOKEN` or `GITHUB_TOKEN_PR` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Number of merged pull requests to harvest. Negative values behave
    /// like zero.
    ///
    /// Defaults to 10.
    #[ortho_config(cli_short = 'c')]
    pub count: i64,

    /// Collects every comment into a single `all_pr_comments.txt`.
    ///
    /// Can be provided via:
    /// - CLI: `--merge` / `-m`
    /// - Config file: `merge = true`
    ///
    /// Note: `GLEANER_MERGE` is not supported because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 'm')]
    pub merge: bool,

    /// Root directory for archives. Each repository gets an
    /// `<owner>_<repo>` directory beneath it.
    ///
    /// Defaults to `comments`.
    #[ortho_config(cli_short = 'd')]
    pub output_dir: String,

    /// GitHub REST API root, for GitHub Enterprise installations.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config(cli_short = 'a')]
    pub api_base: String,

    /// Connect and read timeout applied to each page request, in seconds.
    /// Zero disables the timeout.
    ///
    /// Defaults to 30 seconds.
    #[ortho_config(cli_short = 'w')]
    pub request_timeout_seconds: u64,

    /// Aborts the run on the first per-pull-request failure instead of
    /// skipping it.
    ///
    /// Can be provided via:
    /// - CLI: `--fail-fast` / `-f`
    /// - Config file: `fail_fast = true`
    #[ortho_config(cli_short = 'f')]
    pub fail_fast: bool,
}

impl Default for GleanerConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            token: None,
            count: DEFAULT_COUNT,
            merge: false,
            output_dir: DEFAULT_OUTPUT_ROOT.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            fail_fast: false,
        }
    }
}

impl GleanerConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN_PR`
    /// environment variable.
    ///
    /// A blank configured token counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, HarvestError> {
        let raw = self
            .token
            .clone()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| env::var(LEGACY_TOKEN_ENV).ok())
            .ok_or(HarvestError::MissingToken)?;
        PersonalAccessToken::new(raw)
    }

    /// Returns owner and repo if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Configuration`] when owner or repo is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), HarvestError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(HarvestError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(HarvestError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Number of merged pull requests to collect, with negatives clamped to
    /// zero.
    #[must_use]
    pub fn target_count(&self) -> usize {
        usize::try_from(self.count.max(0)).unwrap_or(usize::MAX)
    }

    /// Output mode selected by the `merge` flag.
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        if self.merge {
            OutputMode::Aggregate
        } else {
            OutputMode::PerPullRequest
        }
    }

    /// Failure policy selected by the `fail_fast` flag.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::SkipAndContinue
        }
    }

    /// Root directory under which repository archives are written.
    #[must_use]
    pub fn output_root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.output_dir.as_str())
    }

    /// Per-request timeout, or `None` when disabled.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_seconds {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }
}
