//! Test helpers for constructing `Conversation` and `Comment` fixtures.
//!
//! # Examples
//!
//! ```
//! use issue2md::github::models::test_support::{comment, conversation};
//! use issue2md::github::ResourceKind;
//!
//! let mut issue = conversation(ResourceKind::Issue, "Test Issue");
//! issue.comments.push(comment(1, "alice", "2024-01-02T00:00:00Z", "Hi"));
//! assert_eq!(issue.comments.len(), 1);
//! ```

use chrono::{DateTime, FixedOffset};

use super::{Author, Comment, Conversation, Reaction, ReactionKind};
use crate::github::locator::ResourceKind;

/// Parses an RFC 3339 timestamp, falling back to the Unix epoch when the
/// literal is malformed.
#[must_use]
pub fn timestamp(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap_or_default()
}

/// Author whose profile lives at `https://github.com/{login}`.
#[must_use]
pub fn author(login: &str) -> Author {
    Author::new(login, format!("https://github.com/{login}"))
}

/// An open conversation by `testuser` created at `2024-01-01T00:00:00Z`
/// with body `"Issue body"` and no comments.
#[must_use]
pub fn conversation(kind: ResourceKind, title: &str) -> Conversation {
    Conversation {
        kind,
        title: title.to_owned(),
        url: "https://github.com/owner/repo/issues/1".to_owned(),
        author: author("testuser"),
        created_at: timestamp("2024-01-01T00:00:00Z"),
        status: "open".to_owned(),
        body: "Issue body".to_owned(),
        comments: Vec::new(),
    }
}

/// A live comment without reactions.
///
/// ```
/// use issue2md::github::models::test_support::comment;
///
/// let first = comment(1001, "alice", "2024-01-02T00:00:00Z", "First comment");
/// assert_eq!(first.author.login, "alice");
/// assert!(!first.deleted);
/// ```
#[must_use]
pub fn comment(id: u64, login: &str, created_at: &str, body: &str) -> Comment {
    Comment {
        id,
        author: author(login),
        created_at: timestamp(created_at),
        body: body.to_owned(),
        reactions: Vec::new(),
        deleted: false,
    }
}

/// Builds a reaction list in the given order without normalising it.
#[must_use]
pub fn reactions(counts: &[(ReactionKind, u64)]) -> Vec<Reaction> {
    counts
        .iter()
        .map(|&(kind, count)| Reaction { kind, count })
        .collect()
}
