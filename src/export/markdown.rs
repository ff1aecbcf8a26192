//! Markdown renderer for conversations.
//!
//! Produces a YAML-style front matter block, a title heading, a metadata
//! block, the opening post, and an optional comments section. Values in the
//! front matter are quoted verbatim; embedded double quotes are not escaped.

use chrono::{DateTime, FixedOffset};

use crate::github::{Author, Comment, Conversation, Reaction, ReactionKind};

use super::emoji::replace_shortcodes;
use super::model::RenderOptions;

/// Reaction kinds shown in the per-comment summary, in display order.
const SUMMARY_KINDS: [ReactionKind; 4] = [
    ReactionKind::ThumbsUp,
    ReactionKind::Heart,
    ReactionKind::Laugh,
    ReactionKind::Hooray,
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a conversation as a Markdown document.
///
/// The output always ends with a blank line.
///
/// # Examples
///
/// ```
/// use issue2md::export::{RenderOptions, render};
/// use issue2md::github::ResourceKind;
/// use issue2md::github::models::test_support::conversation;
///
/// let document = render(&conversation(ResourceKind::Issue, "Test Issue"), RenderOptions::default());
/// assert!(document.starts_with("---\ntitle: \"Test Issue\"\n"));
/// assert!(document.contains("# Test Issue\n\n"));
/// ```
#[must_use]
pub fn render(conversation: &Conversation, options: RenderOptions) -> String {
    let mut document = front_matter(conversation);

    document.push_str(&format!("# {}\n\n", conversation.title));
    document.push_str(&metadata(conversation, options));

    if !conversation.body.is_empty() {
        document.push_str(&replace_shortcodes(&conversation.body));
        document.push_str("\n\n");
    }

    if !conversation.comments.is_empty() {
        document.push_str("## Comments\n\n");
        for comment in &conversation.comments {
            document.push_str(&comment_section(comment, options));
        }
    }

    document
}

fn front_matter(conversation: &Conversation) -> String {
    format!(
        "---\ntitle: \"{}\"\nurl: \"{}\"\nauthor: \"@{}\"\ncreated_at: \"{}\"\nstatus: \"{}\"\n---\n\n",
        conversation.title,
        conversation.url,
        conversation.author.login,
        format_timestamp(&conversation.created_at),
        conversation.status,
    )
}

fn metadata(conversation: &Conversation, options: RenderOptions) -> String {
    format!(
        "**Author**: {}\n**Created**: {}\n**Status**: {}\n\n",
        format_author(&conversation.author, options.link_authors),
        format_timestamp(&conversation.created_at),
        capitalize_status(&conversation.status),
    )
}

fn comment_section(comment: &Comment, options: RenderOptions) -> String {
    let mut section = format!(
        "### {} - {}\n\n",
        format_author(&comment.author, options.link_authors),
        format_timestamp(&comment.created_at),
    );

    if comment.deleted {
        section.push_str("~~deleted~~\n\n");
    } else if !comment.body.is_empty() {
        section.push_str(&replace_shortcodes(&comment.body));
        section.push_str("\n\n");
    }

    if options.show_reactions {
        let summary = format_reactions(&comment.reactions);
        if !summary.is_empty() {
            section.push_str(&summary);
            section.push_str("\n\n");
        }
    }

    section
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in its own offset.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Formats an author as `@login`, or `[@login](profile)` when `link` is set
/// and a profile URL is known.
#[must_use]
pub fn format_author(author: &Author, link: bool) -> String {
    if link && !author.profile_url.is_empty() {
        format!("[@{}]({})", author.login, author.profile_url)
    } else {
        format!("@{}", author.login)
    }
}

/// Uppercases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize_status(status: &str) -> String {
    let mut chars = status.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Builds the space-separated `<emoji> <count>` summary.
///
/// Only `+1`, `heart`, `laugh`, and `hooray` appear, in that order. Returns
/// an empty string when none of them is present.
#[must_use]
pub fn format_reactions(reactions: &[Reaction]) -> String {
    SUMMARY_KINDS
        .iter()
        .filter_map(|kind| {
            reactions
                .iter()
                .find(|reaction| reaction.kind == *kind && reaction.count > 0)
                .map(|reaction| format!("{} {}", kind.emoji(), reaction.count))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
