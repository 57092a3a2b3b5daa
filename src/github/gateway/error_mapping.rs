//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::HarvestError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> HarvestError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return HarvestError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    HarvestError::Decode {
        operation: operation.to_owned(),
        message: error.to_string(),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> HarvestError {
    let message = maybe_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    });

    if is_auth_failure(status) {
        HarvestError::Authentication {
            operation: operation.to_owned(),
            status: status.as_u16(),
            message,
        }
    } else {
        HarvestError::Status {
            operation: operation.to_owned(),
            status: status.as_u16(),
            message,
        }
    }
}
