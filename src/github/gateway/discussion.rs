//! GraphQL fetch for discussions.

use octocrab::Octocrab;
use serde_json::json;

use crate::github::error::ConvertError;
use crate::github::locator::ResourceDescriptor;
use crate::github::models::Conversation;
use crate::github::models::graphql::{DiscussionData, GraphqlError, GraphqlResponse};

use super::http_utils::fetch_json;

static DISCUSSION_QUERY: &str = include_str!("./discussion.graphql");

const GRAPHQL_ROUTE: &str = "/graphql";

pub(super) async fn fetch_discussion(
    client: &Octocrab,
    descriptor: &ResourceDescriptor,
) -> Result<Conversation, ConvertError> {
    let payload = json!({
        "query": DISCUSSION_QUERY,
        "variables": {
            "owner": descriptor.owner().as_str(),
            "name": descriptor.repository().as_str(),
            "number": descriptor.number().get(),
        }
    });

    tracing::debug!(
        "POST {GRAPHQL_ROUTE} discussion {}/{}#{}",
        descriptor.owner().as_str(),
        descriptor.repository().as_str(),
        descriptor.number().get()
    );

    let response: GraphqlResponse<DiscussionData> =
        fetch_json(client, GRAPHQL_ROUTE, Some(&payload), "discussion").await?;

    extract_discussion(response)
}

/// Unwraps the discussion node, classifying GraphQL errors and null nodes.
fn extract_discussion(
    response: GraphqlResponse<DiscussionData>,
) -> Result<Conversation, ConvertError> {
    if response.errors.iter().any(GraphqlError::is_not_found) {
        return Err(ConvertError::NotFound {
            resource: "discussion".to_owned(),
        });
    }

    if let Some(first) = response.errors.first() {
        return Err(ConvertError::Api {
            message: format!("discussion query failed: {}", first.message),
        });
    }

    response
        .data
        .and_then(|data| data.repository)
        .and_then(|repository| repository.discussion)
        .map(Conversation::from)
        .ok_or_else(|| ConvertError::NotFound {
            resource: "discussion".to_owned(),
        })
}
