//! Rendering options.

/// Switches that change how a conversation is rendered.
///
/// Both switches are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append a reaction summary line to each comment.
    pub show_reactions: bool,
    /// Render authors as `[@login](profile)` instead of `@login`.
    pub link_authors: bool,
}

impl RenderOptions {
    /// Returns options with reactions toggled.
    #[must_use]
    pub const fn with_reactions(mut self, enabled: bool) -> Self {
        self.show_reactions = enabled;
        self
    }

    /// Returns options with author links toggled.
    #[must_use]
    pub const fn with_author_links(mut self, enabled: bool) -> Self {
        self.link_authors = enabled;
        self
    }
}
