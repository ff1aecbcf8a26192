//! GraphQL payload shapes for the discussion query.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::{Author, Comment, Conversation, ReactionKind, collect_reactions};
use crate::github::locator::ResourceKind;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub(crate) data: Option<T>,
    #[serde(default)]
    pub(crate) errors: Vec<GraphqlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphqlError {
    pub(crate) message: String,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
}

impl GraphqlError {
    pub(crate) fn is_not_found(&self) -> bool {
        self.kind.as_deref() == Some("NOT_FOUND")
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiscussionData {
    pub(crate) repository: Option<DiscussionRepository>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiscussionRepository {
    pub(crate) discussion: Option<GraphqlDiscussion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphqlDiscussion {
    title: String,
    url: String,
    author: Option<GraphqlActor>,
    created_at: DateTime<FixedOffset>,
    closed_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    body: String,
    comments: Nodes<GraphqlComment>,
}

#[derive(Debug, Deserialize)]
struct GraphqlActor {
    login: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct Nodes<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlComment {
    database_id: Option<u64>,
    author: Option<GraphqlActor>,
    created_at: DateTime<FixedOffset>,
    deleted_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    body: String,
    #[serde(default)]
    reactions: Nodes<GraphqlReaction>,
    #[serde(default)]
    replies: Nodes<GraphqlComment>,
}

#[derive(Debug, Deserialize)]
struct GraphqlReaction {
    content: String,
}

fn actor_to_author(actor: Option<GraphqlActor>) -> Author {
    actor.map_or_else(Author::ghost, |actor| Author::new(actor.login, actor.url))
}

impl GraphqlComment {
    /// Pushes this comment and all of its replies onto `into`, flattened.
    fn flatten_into(self, into: &mut Vec<Comment>) {
        let reactions = collect_reactions(self.reactions.nodes.iter().filter_map(|reaction| {
            let kind = ReactionKind::from_token(&reaction.content);
            if kind.is_none() {
                tracing::debug!("ignoring unknown reaction content {}", reaction.content);
            }
            kind.map(|kind| (kind, 1))
        }));

        into.push(Comment {
            id: self.database_id.unwrap_or(0),
            author: actor_to_author(self.author),
            created_at: self.created_at,
            body: self.body,
            reactions,
            deleted: self.deleted_at.is_some(),
        });

        for reply in self.replies.nodes {
            reply.flatten_into(into);
        }
    }
}

impl From<GraphqlDiscussion> for Conversation {
    fn from(value: GraphqlDiscussion) -> Self {
        let status = if value.closed_at.is_some() {
            "closed"
        } else {
            "open"
        };

        let mut comments = Vec::new();
        for comment in value.comments.nodes {
            comment.flatten_into(&mut comments);
        }

        Self {
            kind: ResourceKind::Discussion,
            title: value.title,
            url: value.url,
            author: actor_to_author(value.author),
            created_at: value.created_at,
            status: status.to_owned(),
            body: value.body,
            comments,
        }
    }
}
