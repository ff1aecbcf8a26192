//! High-level intake facade used by the CLI.

use super::error::ConvertError;
use super::gateway::ConversationGateway;
use super::locator::{ResourceDescriptor, ResourceKind};
use super::models::{Comment, Conversation};

/// Loads a normalised [`Conversation`] for any resource kind using a gateway.
pub struct ConversationIntake<'client, Gateway>
where
    Gateway: ConversationGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ConversationIntake<'client, Gateway>
where
    Gateway: ConversationGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the resource named by `descriptor` with its comments in
    /// chronological order.
    ///
    /// Issue and pull request comment-list failures degrade to an empty list;
    /// every other failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedResource`] for
    /// [`ResourceKind::Unknown`] and propagates root fetch failures from the
    /// gateway, such as [`ConvertError::NotFound`] or network problems.
    pub async fn load(&self, descriptor: &ResourceDescriptor) -> Result<Conversation, ConvertError> {
        let mut conversation = match descriptor.kind() {
            ResourceKind::Issue => {
                let mut issue = self.client.issue(descriptor).await?;
                issue.comments =
                    recover_comments(self.client.issue_comments(descriptor).await, descriptor);
                issue
            }
            ResourceKind::PullRequest => {
                let mut pull_request = self.client.pull_request(descriptor).await?;
                pull_request.comments = recover_comments(
                    self.client.pull_request_comments(descriptor).await,
                    descriptor,
                );
                pull_request
            }
            ResourceKind::Discussion => self.client.discussion(descriptor).await?,
            ResourceKind::Unknown => {
                return Err(ConvertError::UnsupportedResource {
                    reason: format!("cannot fetch {}", descriptor.canonical_url()),
                });
            }
        };

        conversation
            .comments
            .sort_by_key(|comment| comment.created_at);
        Ok(conversation)
    }
}

fn recover_comments(
    result: Result<Vec<Comment>, ConvertError>,
    descriptor: &ResourceDescriptor,
) -> Vec<Comment> {
    result.unwrap_or_else(|error| {
        tracing::warn!(
            "continuing without comments for {}: {error}",
            descriptor.canonical_url()
        );
        Vec::new()
    })
}
