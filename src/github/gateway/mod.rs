//! Gateways for loading conversations through Octocrab.
//!
//! The [`ConversationGateway`] trait is the fetch boundary. Each method
//! performs exactly one upstream request so that the intake layer can decide
//! which failures abort the run and which degrade gracefully.

mod client;
mod discussion;
mod error_mapping;
mod http_utils;
mod octocrab_gateway;
mod rest;

pub use octocrab_gateway::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ConvertError;
use crate::github::locator::ResourceDescriptor;
use crate::github::models::{Comment, Conversation};

/// Upper bound on comments, replies, and reactions requested per call.
pub const PAGE_SIZE: u8 = 100;

/// Gateway that can load conversation data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationGateway: Send + Sync {
    /// Fetch the issue root fields. Comments are left empty.
    async fn issue(&self, descriptor: &ResourceDescriptor) -> Result<Conversation, ConvertError>;

    /// Fetch the first page of issue comments.
    async fn issue_comments(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<Comment>, ConvertError>;

    /// Fetch the pull request root fields. Comments are left empty.
    async fn pull_request(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Conversation, ConvertError>;

    /// Fetch the first page of pull request review comments.
    async fn pull_request_comments(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<Comment>, ConvertError>;

    /// Fetch a discussion together with its comments and replies.
    async fn discussion(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Conversation, ConvertError>;
}
