//! Repository identity wrappers and API path construction.

use url::Url;

use super::error::HarvestError;

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::BlankIdentifier`] for an empty value.
    pub fn new(value: &str) -> Result<Self, HarvestError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(HarvestError::BlankIdentifier { field: "owner" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is not blank.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::BlankIdentifier`] for an empty value.
    pub fn new(value: &str) -> Result<Self, HarvestError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(HarvestError::BlankIdentifier {
                field: "repository",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, HarvestError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(HarvestError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Repository identity plus the API root it is served from.
///
/// # Example
///
/// ```
/// use gleaner::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "widgets")
///     .expect("should create locator");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.archive_directory_name(), "octo_widgets");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for `github.com` from owner and repository strings.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::BlankIdentifier` when owner or repo is blank.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, HarvestError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let api_base = parse_api_base(DEFAULT_API_BASE)?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Points the locator at a different API root, such as a GitHub
    /// Enterprise `https://ghe.example.com/api/v3` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::InvalidUrl` when `api_base` is not an absolute
    /// HTTP(S) URL.
    pub fn with_api_base(self, api_base: &str) -> Result<Self, HarvestError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            ..self
        })
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Directory name used for this repository's archive: `<owner>_<repo>`.
    #[must_use]
    pub fn archive_directory_name(&self) -> String {
        format!("{}_{}", self.owner.as_str(), self.repository.as_str())
    }

    /// API path listing the repository's pull requests.
    pub(crate) fn pulls_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// API path listing review comments for one pull request.
    pub(crate) fn review_comments_path(&self, pr_number: u64) -> String {
        format!("{}/{pr_number}/comments", self.pulls_path())
    }
}

fn parse_api_base(value: &str) -> Result<Url, HarvestError> {
    let parsed = Url::parse(value).map_err(|error| HarvestError::InvalidUrl(error.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(parsed),
        _ => Err(HarvestError::InvalidUrl(format!(
            "API base must be an http(s) URL with a host: {value}"
        ))),
    }
}
