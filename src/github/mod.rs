//! GitHub URL resolution and conversation intake.
//!
//! This module resolves GitHub web URLs into typed descriptors, wraps
//! Octocrab to fetch issues, pull requests, and discussions, and normalises
//! the REST and GraphQL shapes into one [`Conversation`] record. Errors are
//! mapped into a single taxonomy so callers can tell bad input from missing
//! targets and transport failures.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;

pub use error::ConvertError;
pub use gateway::{ConversationGateway, OctocrabGateway};
pub use intake::ConversationIntake;
pub use locator::{
    PersonalAccessToken, RepositoryName, RepositoryOwner, ResourceDescriptor, ResourceKind,
    ResourceNumber,
};
pub use models::{Author, Comment, Conversation, Reaction, ReactionKind};

#[cfg(test)]
pub use gateway::MockConversationGateway;

#[cfg(test)]
mod tests;
