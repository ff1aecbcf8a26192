//! issue2md library crate converting GitHub conversations into Markdown.
//!
//! The library resolves issue, pull request, and discussion URLs, fetches
//! them through Octocrab into one normalised [`github::Conversation`], and
//! renders that record as a Markdown document with front matter. Errors are
//! classified so the CLI can tell malformed input from missing resources and
//! transport failures.

pub mod config;
pub mod export;
pub mod github;

pub use config::{Issue2mdConfig, Positionals};
pub use export::{RenderOptions, render};
pub use github::{
    Conversation, ConversationIntake, ConvertError, OctocrabGateway, PersonalAccessToken,
    ResourceDescriptor, ResourceKind,
};
