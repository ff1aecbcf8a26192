//! Conversion of a single GitHub resource into a Markdown document.

use std::time::Duration;

use camino::Utf8Path;
use issue2md::{
    ConversationIntake, ConvertError, Issue2mdConfig, OctocrabGateway, PersonalAccessToken,
    ResourceDescriptor, render,
};

use super::output::write_document;

/// Converts the configured resource and writes the document to the
/// configured sink.
///
/// # Errors
///
/// Returns an error if:
/// - The URL is missing, malformed, or names an unsupported resource
/// - The Octocrab client cannot be built
/// - The resource cannot be fetched
/// - Writing to the output fails
pub async fn run(config: &Issue2mdConfig) -> Result<(), ConvertError> {
    let url = config.require_url()?;
    let descriptor = ResourceDescriptor::resolve(url)?;
    tracing::debug!(
        "converting {} {}",
        descriptor.kind(),
        descriptor.canonical_url()
    );

    let token = config.resolve_token().and_then(PersonalAccessToken::new);
    let gateway = OctocrabGateway::connect(
        token.as_ref(),
        &config.api_base,
        Duration::from_secs(config.timeout_seconds),
    )?;
    let intake = ConversationIntake::new(&gateway);
    let conversation = intake.load(&descriptor).await?;

    let document = render(&conversation, config.render_options());
    write_document(config.output.as_deref().map(Utf8Path::new), &document)
}
