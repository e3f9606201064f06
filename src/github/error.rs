//! Error types surfaced while resolving arguments, talking to GitHub, and
//! writing the report.

use thiserror::Error;

/// Errors surfaced by any stage of the review comment export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// One or more mandatory `Key:Value` parameters were not supplied.
    #[error(
        "Parameter Missing - GitHub's Organization Name, Repository Name & Personal Access Token are mandatory!!! (missing: {})",
        missing.join(", ")
    )]
    MissingParameter {
        /// Names of the absent parameters, in declaration order.
        missing: Vec<&'static str>,
    },

    /// A supplied parameter could not be interpreted.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// A review comment's pull request reference did not end in a number.
    #[error("pull request reference is malformed: '{reference}'")]
    MalformedReference {
        /// The reference URL exactly as GitHub returned it.
        reference: String,
    },

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub could not find the requested repository or pull request.
    #[error("GitHub resource not found: {message}")]
    NotFound {
        /// GitHub error message returned with the 404 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ExportError {
    /// Returns `true` when the error means the user supplied too few
    /// parameters, rather than a runtime failure.
    #[must_use]
    pub const fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }
}
