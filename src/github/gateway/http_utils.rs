//! Shared HTTP utilities for gateway implementations.

use http::header::{ACCEPT, HeaderMap, HeaderValue};

/// Media type selecting version 3 of the GitHub REST API.
pub(super) const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Headers sent with every listing request.
pub(super) fn api_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));
    headers
}

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
