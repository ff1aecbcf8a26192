//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::ConvertError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Maps an Octocrab failure for `operation` into the conversion taxonomy.
///
/// 404 becomes [`ConvertError::NotFound`]; any other GitHub status becomes
/// [`ConvertError::UnexpectedStatus`].
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ConvertError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, &source.message);
    }

    if is_network_error(error) {
        return ConvertError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ConvertError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(operation: &str, status: StatusCode, message: &str) -> ConvertError {
    if status == StatusCode::NOT_FOUND {
        ConvertError::NotFound {
            resource: operation.to_owned(),
        }
    } else {
        ConvertError::UnexpectedStatus {
            status: status.as_u16(),
            message: format!("{operation} failed: {message}"),
        }
    }
}
