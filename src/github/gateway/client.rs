//! Octocrab client construction for gateway implementations.

use std::time::Duration;

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::HarvestError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Retries are disabled so that every page is requested exactly once, and
/// `timeout`, when set, bounds each individual request.
///
/// # Errors
///
/// Returns `HarvestError::InvalidUrl` when the base URI cannot be parsed or
/// `HarvestError::Network` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
    timeout: Option<Duration>,
) -> Result<Octocrab, HarvestError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| HarvestError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .set_connect_timeout(timeout)
        .set_read_timeout(timeout)
        .add_retry_config(RetryConfig::None)
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| HarvestError::InvalidUrl(format!("API base rejected: {error}")))?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
