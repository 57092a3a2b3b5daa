//! Octocrab-backed gateway for pull request and review comment pages.

use std::time::Duration;

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;

use crate::github::error::HarvestError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiPullRequest, ApiReviewComment, Comment, PullRequest};
use crate::github::pagination::PageRequest;

use super::ReviewGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{api_headers, extract_github_message};

/// Ordering applied to the closed pull request listing.
const CLOSED_PULLS_QUERY: &str = "state=closed&sort=updated&direction=desc";

/// Gateway that reads listing pages through Octocrab.
pub struct OctocrabReviewGateway {
    client: Octocrab,
}

impl OctocrabReviewGateway {
    /// Creates a gateway from an already configured Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway for the token, targeting the locator's API base.
    ///
    /// # Arguments
    ///
    /// * `token` - Personal access token sent as a bearer credential.
    /// * `locator` - Repository whose API base the client is bound to.
    /// * `timeout` - Optional per-request connect and read timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the Octocrab client cannot be built.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
        timeout: Option<Duration>,
    ) -> Result<Self, HarvestError> {
        let client = build_octocrab_client(token, locator.api_base().as_str(), timeout)?;
        Ok(Self::new(client))
    }

    /// Issues one GET and decodes the JSON array body.
    ///
    /// The raw response is inspected so that any non-success status, whatever
    /// its body, becomes a [`HarvestError`] carrying the numeric status.
    async fn get_page<T>(&self, operation: &str, path_and_query: &str) -> Result<Vec<T>, HarvestError>
    where
        T: DeserializeOwned,
    {
        let uri: Uri = path_and_query
            .parse::<Uri>()
            .map_err(|error| HarvestError::InvalidUrl(format!("{path_and_query}: {error}")))?;

        let response = self
            .client
            ._get_with_headers(uri, Some(api_headers()))
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = self
                .client
                .body_to_string(response)
                .await
                .unwrap_or_default();
            return Err(map_http_error(
                operation,
                status,
                extract_github_message(&body),
            ));
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        serde_json::from_str(&body).map_err(|error| HarvestError::Decode {
            operation: operation.to_owned(),
            message: error.to_string(),
        })
    }
}

#[async_trait]
impl ReviewGateway for OctocrabReviewGateway {
    async fn closed_pull_requests_page(
        &self,
        locator: &RepositoryLocator,
        page: PageRequest,
    ) -> Result<Vec<PullRequest>, HarvestError> {
        let path = format!(
            "{}?{CLOSED_PULLS_QUERY}&{}",
            locator.pulls_path(),
            page.query()
        );
        let items: Vec<ApiPullRequest> = self.get_page("list pulls", &path).await?;
        Ok(items.into_iter().map(PullRequest::from).collect())
    }

    async fn review_comments_page(
        &self,
        locator: &RepositoryLocator,
        pr_number: u64,
        page: PageRequest,
    ) -> Result<Vec<Comment>, HarvestError> {
        let path = format!(
            "{}?{}",
            locator.review_comments_path(pr_number),
            page.query()
        );
        let items: Vec<ApiReviewComment> = self.get_page("review comments", &path).await?;
        Ok(items.into_iter().map(Comment::from).collect())
    }
}
