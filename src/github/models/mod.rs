//! Normalised conversation records and their upstream payload shapes.
//!
//! Issues, pull requests, and discussions all normalise into a single
//! [`Conversation`]. Types prefixed with `Api` are internal REST
//! deserialisation targets; GraphQL payloads live in [`graphql`].

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::locator::ResourceKind;

pub(crate) mod graphql;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Login shown for accounts GitHub no longer resolves.
pub const GHOST_LOGIN: &str = "ghost";

/// Profile URL of the placeholder account.
pub const GHOST_PROFILE_URL: &str = "https://github.com/ghost";

/// A GitHub account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    /// Account login.
    pub login: String,
    /// Profile page URL; may be empty.
    pub profile_url: String,
}

impl Author {
    /// Creates an author from a login and profile URL.
    #[must_use]
    pub fn new(login: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            profile_url: profile_url.into(),
        }
    }

    /// The placeholder account used when upstream reports no author.
    #[must_use]
    pub fn ghost() -> Self {
        Self::new(GHOST_LOGIN, GHOST_PROFILE_URL)
    }
}

/// Reaction vocabulary shared by every transport.
///
/// Declaration order is the kind priority used when sorting reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReactionKind {
    /// `+1`
    ThumbsUp,
    /// `-1`
    ThumbsDown,
    /// `laugh`
    Laugh,
    /// `hooray`
    Hooray,
    /// `confused`
    Confused,
    /// `heart`
    Heart,
    /// `rocket`
    Rocket,
    /// `eyes`
    Eyes,
}

impl ReactionKind {
    /// Every kind in priority order.
    pub const ALL: [Self; 8] = [
        Self::ThumbsUp,
        Self::ThumbsDown,
        Self::Laugh,
        Self::Hooray,
        Self::Confused,
        Self::Heart,
        Self::Rocket,
        Self::Eyes,
    ];

    /// Lowercase token (`+1`, `heart`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThumbsUp => "+1",
            Self::ThumbsDown => "-1",
            Self::Laugh => "laugh",
            Self::Hooray => "hooray",
            Self::Confused => "confused",
            Self::Heart => "heart",
            Self::Rocket => "rocket",
            Self::Eyes => "eyes",
        }
    }

    /// Unicode emoji for the reaction.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::ThumbsUp => "\u{1f44d}",
            Self::ThumbsDown => "\u{1f44e}",
            Self::Laugh => "\u{1f604}",
            Self::Hooray => "\u{1f389}",
            Self::Confused => "\u{1f615}",
            Self::Heart => "\u{2764}\u{fe0f}",
            Self::Rocket => "\u{1f680}",
            Self::Eyes => "\u{1f440}",
        }
    }

    /// Normalises a REST token (`+1`) or GraphQL enum (`THUMBS_UP`).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "+1" | "thumbs_up" => Some(Self::ThumbsUp),
            "-1" | "thumbs_down" => Some(Self::ThumbsDown),
            "laugh" => Some(Self::Laugh),
            "hooray" => Some(Self::Hooray),
            "confused" => Some(Self::Confused),
            "heart" => Some(Self::Heart),
            "rocket" => Some(Self::Rocket),
            "eyes" => Some(Self::Eyes),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-aggregated count for one reaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    /// Reaction kind.
    pub kind: ReactionKind,
    /// Number of users who reacted.
    pub count: u64,
}

/// A comment on any resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Upstream identifier, 0 when unknown.
    pub id: u64,
    /// Comment author.
    pub author: Author,
    /// Creation time with the offset GitHub reported.
    pub created_at: DateTime<FixedOffset>,
    /// Raw Markdown body.
    pub body: String,
    /// At most one entry per kind, sorted by kind priority.
    pub reactions: Vec<Reaction>,
    /// Deleted comments render without a body.
    pub deleted: bool,
}

/// The normalised record consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Which kind of resource this came from.
    pub kind: ResourceKind,
    /// Title.
    pub title: String,
    /// Web URL.
    pub url: String,
    /// Author of the opening post.
    pub author: Author,
    /// Creation time with the offset GitHub reported.
    pub created_at: DateTime<FixedOffset>,
    /// Free-form status: `open`, `closed`, or `merged`.
    pub status: String,
    /// Raw Markdown body of the opening post.
    pub body: String,
    /// Comments in ascending `created_at` order.
    pub comments: Vec<Comment>,
}

/// Builds a reaction list from per-kind counts, dropping zero counts and
/// sorting by kind priority.
pub(crate) fn collect_reactions(
    counts: impl IntoIterator<Item = (ReactionKind, u64)>,
) -> Vec<Reaction> {
    let mut reactions: Vec<Reaction> = Vec::new();
    for (kind, count) in counts {
        if count == 0 {
            continue;
        }
        if let Some(existing) = reactions.iter_mut().find(|reaction| reaction.kind == kind) {
            existing.count += count;
        } else {
            reactions.push(Reaction { kind, count });
        }
    }
    reactions.sort_by_key(|reaction| reaction.kind);
    reactions
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
    pub(crate) html_url: Option<String>,
}

impl ApiUser {
    fn into_author(user: Option<Self>) -> Author {
        match user {
            Some(Self {
                login: Some(login),
                html_url,
            }) => Author::new(login, html_url.unwrap_or_default()),
            _ => Author::ghost(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) title: Option<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: DateTime<FixedOffset>,
    pub(crate) state: Option<String>,
    pub(crate) body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) title: Option<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: DateTime<FixedOffset>,
    pub(crate) state: Option<String>,
    pub(crate) body: Option<String>,
    #[serde(default)]
    pub(crate) merged: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiComment {
    pub(crate) id: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: DateTime<FixedOffset>,
    pub(crate) body: Option<String>,
    pub(crate) reactions: Option<ApiReactionRollup>,
}

/// The `reactions` summary object GitHub attaches to REST comments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiReactionRollup {
    #[serde(rename = "+1")]
    pub(crate) thumbs_up: u64,
    #[serde(rename = "-1")]
    pub(crate) thumbs_down: u64,
    pub(crate) laugh: u64,
    pub(crate) hooray: u64,
    pub(crate) confused: u64,
    pub(crate) heart: u64,
    pub(crate) rocket: u64,
    pub(crate) eyes: u64,
}

impl ApiReactionRollup {
    pub(crate) fn into_reactions(self) -> Vec<Reaction> {
        collect_reactions([
            (ReactionKind::ThumbsUp, self.thumbs_up),
            (ReactionKind::ThumbsDown, self.thumbs_down),
            (ReactionKind::Laugh, self.laugh),
            (ReactionKind::Hooray, self.hooray),
            (ReactionKind::Confused, self.confused),
            (ReactionKind::Heart, self.heart),
            (ReactionKind::Rocket, self.rocket),
            (ReactionKind::Eyes, self.eyes),
        ])
    }
}

impl ApiIssue {
    pub(crate) fn into_conversation(self, kind: ResourceKind) -> Conversation {
        Conversation {
            kind,
            title: self.title.unwrap_or_default(),
            url: self.html_url.unwrap_or_default(),
            author: ApiUser::into_author(self.user),
            created_at: self.created_at,
            status: self.state.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            comments: Vec::new(),
        }
    }
}

impl From<ApiPullRequest> for Conversation {
    fn from(value: ApiPullRequest) -> Self {
        let status = if value.merged {
            "merged".to_owned()
        } else {
            value.state.unwrap_or_default()
        };
        Self {
            kind: ResourceKind::PullRequest,
            title: value.title.unwrap_or_default(),
            url: value.html_url.unwrap_or_default(),
            author: ApiUser::into_author(value.user),
            created_at: value.created_at,
            status,
            body: value.body.unwrap_or_default(),
            comments: Vec::new(),
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            author: ApiUser::into_author(value.user),
            created_at: value.created_at,
            body: value.body.unwrap_or_default(),
            reactions: value
                .reactions
                .map(ApiReactionRollup::into_reactions)
                .unwrap_or_default(),
            deleted: false,
        }
    }
}
