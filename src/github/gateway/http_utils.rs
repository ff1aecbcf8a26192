//! Shared HTTP utilities for gateway implementations.
//!
//! Requests go through Octocrab's raw `_get`/`_post` so the status code is
//! classified before the body is decoded. Error bodies that are not GitHub
//! JSON (HTML gateway pages, empty 404s, plain text) keep their status.

use http::{StatusCode, Uri};
use octocrab::Octocrab;
use serde::de::DeserializeOwned;

use crate::github::error::ConvertError;

use super::error_mapping::{map_http_error, map_octocrab_error};

/// Sends a GET (or a POST when `payload` is present) to `route` and decodes a
/// successful JSON response into `T`.
///
/// # Errors
///
/// Returns [`ConvertError::NotFound`] for 404, [`ConvertError::UnexpectedStatus`]
/// for any other non-success status, [`ConvertError::Network`] for transport
/// failures and [`ConvertError::Api`] when a success body does not decode.
pub(super) async fn fetch_json<T>(
    client: &Octocrab,
    route: &str,
    payload: Option<&serde_json::Value>,
    operation: &str,
) -> Result<T, ConvertError>
where
    T: DeserializeOwned,
{
    let uri: Uri = route
        .parse::<Uri>()
        .map_err(|error| ConvertError::Api {
            message: format!("{operation} route '{route}' is invalid: {error}"),
        })?;

    let response = match payload {
        Some(body) => client._post(uri, Some(body)).await,
        None => client._get(uri).await,
    }
    .map_err(|error| map_octocrab_error(operation, &error))?;

    let status = response.status();
    let body = client.body_to_string(response).await;

    if !status.is_success() {
        let text = body.unwrap_or_default();
        return Err(map_http_error(
            operation,
            status,
            &failure_message(status, &text),
        ));
    }

    let text = body.map_err(|error| map_octocrab_error(operation, &error))?;
    serde_json::from_str(&text).map_err(|error| ConvertError::Api {
        message: format!("{operation} response deserialisation failed: {error}"),
    })
}

/// Picks GitHub's `message` field when the body carries one, else the
/// canonical reason phrase for `status`.
fn failure_message(status: StatusCode, body: &str) -> String {
    extract_github_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned()
    })
}

fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
