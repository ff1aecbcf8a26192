//! REST fetches for issues and pull requests.

use octocrab::Octocrab;

use crate::github::error::ConvertError;
use crate::github::locator::{ResourceDescriptor, ResourceKind};
use crate::github::models::{ApiComment, ApiIssue, ApiPullRequest, Comment, Conversation};

use super::PAGE_SIZE;
use super::http_utils::fetch_json;

pub(super) async fn fetch_issue(
    client: &Octocrab,
    descriptor: &ResourceDescriptor,
) -> Result<Conversation, ConvertError> {
    let route = descriptor.issue_path();
    tracing::debug!("GET {route}");
    fetch_json::<ApiIssue>(client, &route, None, "issue")
        .await
        .map(|issue| issue.into_conversation(ResourceKind::Issue))
}

pub(super) async fn fetch_pull_request(
    client: &Octocrab,
    descriptor: &ResourceDescriptor,
) -> Result<Conversation, ConvertError> {
    let route = descriptor.pull_request_path();
    tracing::debug!("GET {route}");
    fetch_json::<ApiPullRequest>(client, &route, None, "pull request")
        .await
        .map(Conversation::from)
}

/// Fetches the first page of comments from a REST comment list route.
pub(super) async fn fetch_comment_page(
    client: &Octocrab,
    route: String,
    operation: &str,
) -> Result<Vec<Comment>, ConvertError> {
    let first_page = format!("{route}?per_page={PAGE_SIZE}");
    tracing::debug!("GET {first_page}");
    fetch_json::<Vec<ApiComment>>(client, &first_page, None, operation)
        .await
        .map(|comments| comments.into_iter().map(Comment::from).collect())
}
