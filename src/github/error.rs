//! Error types surfaced while harvesting review comments.

use thiserror::Error;

/// Errors surfaced while configuring a run, talking to GitHub, or writing the
/// comment archive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HarvestError {
    /// No personal access token was supplied by any source.
    #[error(
        "GitHub token must be provided via --token, GLEANER_TOKEN, or the GITHUB_TOKEN_PR environment variable"
    )]
    MissingToken,

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A repository identifier was present but blank.
    #[error("{field} must not be blank")]
    BlankIdentifier {
        /// Name of the offending identifier (`owner` or `repository`).
        field: &'static str,
    },

    /// A URL or request path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Page parameters fell outside what GitHub accepts.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// GitHub rejected the token with 401 or 403.
    #[error("{operation} failed: GitHub rejected the token ({status}): {message}")]
    Authentication {
        /// Request that failed.
        operation: String,
        /// Numeric HTTP status.
        status: u16,
        /// Message returned by GitHub.
        message: String,
    },

    /// GitHub answered with a non-success status.
    #[error("{operation} failed: GitHub API returned status {status}: {message}")]
    Status {
        /// Request that failed.
        operation: String,
        /// Numeric HTTP status.
        status: u16,
        /// Message returned by GitHub.
        message: String,
    },

    /// The request never produced a response.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A successful response body did not match the expected shape.
    #[error("{operation} response could not be decoded: {message}")]
    Decode {
        /// Request whose response failed to decode.
        operation: String,
        /// Decoder error detail.
        message: String,
    },

    /// Local filesystem or output stream operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl HarvestError {
    /// Returns the HTTP status carried by transport errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::HarvestError;

    #[rstest]
    #[case::status(
        HarvestError::Status {
            operation: "review comments".to_owned(),
            status: 404,
            message: "Not Found".to_owned(),
        },
        Some(404)
    )]
    #[case::authentication(
        HarvestError::Authentication {
            operation: "list pulls".to_owned(),
            status: 401,
            message: "Bad credentials".to_owned(),
        },
        Some(401)
    )]
    #[case::network(
        HarvestError::Network { message: "connection reset".to_owned() },
        None
    )]
    fn status_is_exposed_for_transport_errors(
        #[case] error: HarvestError,
        #[case] expected: Option<u16>,
    ) {
        assert_eq!(error.status(), expected);
    }

    #[rstest]
    fn status_error_message_includes_numeric_status() {
        let error = HarvestError::Status {
            operation: "review comments".to_owned(),
            status: 502,
            message: "Bad Gateway".to_owned(),
        };

        assert_eq!(
            error.to_string(),
            "review comments failed: GitHub API returned status 502: Bad Gateway"
        );
    }
}
