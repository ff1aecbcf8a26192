//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.issue2md.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `ISSUE2MD_URL`, `ISSUE2MD_TOKEN`, or legacy
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--url`/`-u`, `--token`/`-t`, and the
//!    positional `<url> [output_file]`
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! enable_reactions = true
//! enable_user_links = true
//! timeout_seconds = 60
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::RenderOptions;
use crate::github::error::ConvertError;

/// Default GitHub REST and GraphQL API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `ISSUE2MD_URL` or `--url`: Issue, pull request, or discussion URL
/// - `ISSUE2MD_OUTPUT` or `--output`: Output file path
/// - `ISSUE2MD_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `ISSUE2MD_API_BASE` or `--api-base`: API base URL
/// - `ISSUE2MD_TIMEOUT_SECONDS` or `--timeout-seconds`: Request timeout
///
/// # Example
///
/// ```no_run
/// use issue2md::Issue2mdConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = Issue2mdConfig::load().expect("failed to load configuration");
/// let url = config.require_url().expect("URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "ISSUE2MD",
    discovery(
        dotfile_name = ".issue2md.toml",
        config_file_name = "issue2md.toml",
        app_name = "issue2md"
    )
)]
pub struct Issue2mdConfig {
    /// GitHub issue, pull request, or discussion URL to convert.
    ///
    /// Can be provided via:
    /// - CLI: first positional argument, or `--url <URL>` / `-u <URL>`
    /// - Environment: `ISSUE2MD_URL`
    /// - Config file: `url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub url: Option<String>,

    /// File to write the Markdown document to; standard output when unset.
    ///
    /// Can be provided via:
    /// - CLI: second positional argument, or `--output <PATH>` / `-o <PATH>`
    /// - Environment: `ISSUE2MD_OUTPUT`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Requests are unauthenticated when no source provides a token.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `ISSUE2MD_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Appends a reaction summary to each comment.
    ///
    /// Can be provided via:
    /// - CLI: `--enable-reactions` / `-r`
    /// - Config file: `enable_reactions = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 'r')]
    pub enable_reactions: bool,

    /// Renders authors as profile links.
    ///
    /// Can be provided via:
    /// - CLI: `--enable-user-links` / `-l`
    /// - Config file: `enable_user_links = true`
    #[ortho_config(cli_short = 'l')]
    pub enable_user_links: bool,

    /// Base URL of the GitHub API.
    ///
    /// Defaults to `https://api.github.com`. GraphQL requests go to
    /// `{api_base}/graphql`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` / `-a <URL>`
    /// - Environment: `ISSUE2MD_API_BASE`
    #[ortho_config(cli_short = 'a')]
    pub api_base: String,

    /// Connect and read timeout for each request, in seconds.
    ///
    /// Defaults to 30 seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--timeout-seconds <SECS>` / `-T <SECS>`
    /// - Environment: `ISSUE2MD_TIMEOUT_SECONDS`
    #[ortho_config(cli_short = 'T')]
    pub timeout_seconds: u64,
}

impl Default for Issue2mdConfig {
    fn default() -> Self {
        Self {
            url: None,
            output: None,
            token: None,
            enable_reactions: false,
            enable_user_links: false,
            api_base: DEFAULT_API_BASE.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Positional arguments removed from the command line before configuration
/// loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positionals {
    /// First positional argument.
    pub url: Option<String>,
    /// Second positional argument.
    pub output: Option<String>,
}

impl Issue2mdConfig {
    /// Returns the resource URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingUrl`] when no source supplied a URL.
    pub fn require_url(&self) -> Result<&str, ConvertError> {
        self.url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConvertError::MissingUrl)
    }

    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values count as absent, so an empty `ISSUE2MD_TOKEN` falls back
    /// to `GITHUB_TOKEN`. `None` means requests are made unauthenticated.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| {
                env::var("GITHUB_TOKEN")
                    .ok()
                    .filter(|token| !token.trim().is_empty())
            })
    }

    /// Maps the reaction and author-link switches onto renderer options.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_reactions: self.enable_reactions,
            link_authors: self.enable_user_links,
        }
    }

    /// Fills `url` and `output` from positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Configuration`] when a positional value is
    /// combined with the same setting from a flag, the environment, or a
    /// configuration file.
    pub fn set_positionals(&mut self, positionals: Positionals) -> Result<(), ConvertError> {
        fill_positional(&mut self.url, positionals.url, "URL", "--url")?;
        fill_positional(&mut self.output, positionals.output, "output path", "--output")
    }

    /// Checks the configuration for contradictory or unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Configuration`] when the timeout is zero or
    /// the API base is blank.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.timeout_seconds == 0 {
            return Err(ConvertError::Configuration {
                message: "timeout_seconds must be at least 1".to_owned(),
            });
        }
        if self.api_base.trim().is_empty() {
            return Err(ConvertError::Configuration {
                message: "api_base must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}

fn fill_positional(
    slot: &mut Option<String>,
    positional: Option<String>,
    label: &str,
    flag: &str,
) -> Result<(), ConvertError> {
    let Some(value) = positional else {
        return Ok(());
    };
    if slot.is_some() {
        return Err(ConvertError::Configuration {
            message: format!(
                "{label} given both as a positional argument and via {flag} or configuration"
            ),
        });
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests;
