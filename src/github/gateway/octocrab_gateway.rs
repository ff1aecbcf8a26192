//! Octocrab implementation of the conversation gateway.

use std::time::Duration;

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::ConvertError;
use crate::github::locator::{PersonalAccessToken, ResourceDescriptor};
use crate::github::models::{Comment, Conversation};

use super::ConversationGateway;
use super::client::build_octocrab_client;
use super::discussion::fetch_discussion;
use super::rest::{fetch_comment_page, fetch_issue, fetch_pull_request};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway against `api_base`, authenticated when a token is
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Configuration` when the base URI cannot be
    /// parsed or `ConvertError::Api` when Octocrab fails to construct a
    /// client.
    pub fn connect(
        token: Option<&PersonalAccessToken>,
        api_base: &str,
        timeout: Duration,
    ) -> Result<Self, ConvertError> {
        let client = build_octocrab_client(token, api_base, timeout)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl ConversationGateway for OctocrabGateway {
    async fn issue(&self, descriptor: &ResourceDescriptor) -> Result<Conversation, ConvertError> {
        fetch_issue(&self.client, descriptor).await
    }

    async fn issue_comments(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<Comment>, ConvertError> {
        fetch_comment_page(
            &self.client,
            descriptor.issue_comments_path(),
            "issue comments",
        )
        .await
    }

    async fn pull_request(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Conversation, ConvertError> {
        fetch_pull_request(&self.client, descriptor).await
    }

    async fn pull_request_comments(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Vec<Comment>, ConvertError> {
        fetch_comment_page(
            &self.client,
            descriptor.pull_request_comments_path(),
            "pull request comments",
        )
        .await
    }

    async fn discussion(
        &self,
        descriptor: &ResourceDescriptor,
    ) -> Result<Conversation, ConvertError> {
        fetch_discussion(&self.client, descriptor).await
    }
}
