//! Markdown export of normalised conversations.
//!
//! [`render`] is a pure function of a [`crate::github::Conversation`] and
//! [`RenderOptions`]; it never fails. Emoji shortcodes in bodies are replaced
//! with Unicode through [`replace_shortcodes`].

mod emoji;
mod markdown;
mod model;

pub use emoji::replace_shortcodes;
pub use markdown::{capitalize_status, format_author, format_reactions, format_timestamp, render};
pub use model::RenderOptions;
