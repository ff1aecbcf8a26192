//! Octocrab client construction.

use std::time::Duration;

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::ConvertError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the API base URL.
///
/// Requests are unauthenticated when `token` is `None`. Retries are disabled
/// and both connect and read are bounded by `timeout`.
///
/// # Errors
///
/// Returns `ConvertError::Configuration` when the base URI cannot be parsed
/// or `ConvertError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
    timeout: Duration,
) -> Result<Octocrab, ConvertError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ConvertError::Configuration {
            message: format!("invalid API base '{api_base}': {error}"),
        })?;

    let builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| ConvertError::Api {
            message: format!("build client failed: {error}"),
        })?
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout));

    let authenticated = match token {
        Some(token) => builder.personal_token(token.value()),
        None => builder,
    };

    authenticated
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
