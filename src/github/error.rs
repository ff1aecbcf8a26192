//! Error types exposed by the resolution, fetch, and output layers.

use thiserror::Error;

/// Errors surfaced while resolving a URL, talking to GitHub, or writing output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// No resource URL was supplied.
    #[error("a GitHub issue, pull request, or discussion URL is required")]
    MissingUrl,

    /// The input is not a well-formed, host-correct, sufficiently specified
    /// GitHub resource URL.
    #[error("invalid URL format: {reason}")]
    InvalidUrlFormat {
        /// Why the URL was rejected.
        reason: String,
    },

    /// The URL is a valid GitHub path naming something that cannot be
    /// converted (repository home, wiki, actions, ...).
    #[error("unsupported resource type: {reason}")]
    UnsupportedResource {
        /// Which resource was requested.
        reason: String,
    },

    /// The upstream resource does not exist or is not visible with the
    /// supplied credentials.
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource.
        resource: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// GitHub answered with a non-success status other than 404.
    #[error("unexpected status code {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Operation and message returned with the response.
        message: String,
    },

    /// GitHub returned a payload that could not be interpreted.
    #[error("GitHub API error: {message}")]
    Api {
        /// Description of the failure.
        message: String,
    },

    /// Writing the rendered document failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is contradictory.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ConvertError {
    /// Returns true for failures caused by the input URL itself.
    #[must_use]
    pub const fn is_url_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrlFormat { .. } | Self::UnsupportedResource { .. }
        )
    }

    /// Returns true when the input was valid but the target is missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::InvalidUrlFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedResource {
            reason: reason.into(),
        }
    }
}
