//! URL resolution and identity wrappers for GitHub resources.
//!
//! [`ResourceDescriptor::resolve`] turns a web URL into a typed descriptor or
//! a classified error. Classification distinguishes malformed input
//! ([`ConvertError::InvalidUrlFormat`]) from well-formed GitHub paths that name
//! something this tool does not convert
//! ([`ConvertError::UnsupportedResource`]).

use std::fmt;

use url::Url;

use super::error::ConvertError;

/// The only host accepted by the resolver. Compared case-sensitively.
const GITHUB_HOST: &str = "github.com";

/// First segments that look like a resource path with the owner missing.
const RESERVED_FIRST_SEGMENTS: &[&str] = &[
    "issues",
    "pull",
    "discussions",
    "settings",
    "actions",
    "wiki",
];

/// Third segments naming repository areas that are never converted.
const UNSUPPORTED_THIRD_SEGMENTS: &[&str] = &["wiki", "actions", "security", "pulse"];

/// Kind of GitHub resource a descriptor points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A repository issue.
    Issue,
    /// A pull request.
    PullRequest,
    /// A repository discussion.
    Discussion,
    /// Anything else; never produced by [`ResourceDescriptor::resolve`].
    #[default]
    Unknown,
}

impl ResourceKind {
    /// Maps a URL path token (`issues`, `pull`, `discussions`) to a kind,
    /// ignoring ASCII case.
    #[must_use]
    pub fn from_path_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "issues" => Some(Self::Issue),
            "pull" => Some(Self::PullRequest),
            "discussions" => Some(Self::Discussion),
            _ => None,
        }
    }

    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::PullRequest => "pull_request",
            Self::Discussion => "discussion",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ConvertError> {
        if value.is_empty() {
            return Err(ConvertError::format("owner or repository is empty"));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ConvertError> {
        if value.is_empty() {
            return Err(ConvertError::format("owner or repository is empty"));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Issue, pull request, or discussion number. Zero is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceNumber(u64);

impl ResourceNumber {
    /// Parses a decimal path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidUrlFormat`] when the segment is not a
    /// non-negative integer.
    pub fn parse(segment: &str) -> Result<Self, ConvertError> {
        segment
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ConvertError::format(format!("cannot parse number {segment:?}")))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Trims whitespace and returns `None` for blank tokens.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Resolved GitHub resource: kind, repository, number, and canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    kind: ResourceKind,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: ResourceNumber,
    canonical_url: String,
}

impl ResourceDescriptor {
    /// Resolves a GitHub web URL such as
    /// `https://github.com/<owner>/<repo>/issues/<number>`.
    ///
    /// Query strings and fragments are dropped. Path casing is preserved in
    /// [`Self::canonical_url`]; only the resource-type token is matched
    /// case-insensitively. Segments are split from the path as written, so
    /// dot segments are not resolved and anything after the number is
    /// ignored.
    ///
    /// With four or more segments the resource type is classified before
    /// the number and before owner/repository emptiness. A path such as
    /// `owner/repo/blob/main/README.md` is therefore unsupported rather than
    /// malformed, whereas the Go `issue2md` parser checks owner/repository
    /// and the number first and reports it as a format error.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidUrlFormat`] for empty, malformed,
    /// non-`github.com`, or incomplete URLs, and
    /// [`ConvertError::UnsupportedResource`] for repository home pages,
    /// wiki/actions/security/pulse pages, and unknown resource types.
    pub fn resolve(input: &str) -> Result<Self, ConvertError> {
        if input.is_empty() {
            return Err(ConvertError::format("URL is empty"));
        }

        if input.chars().any(char::is_control) || input.trim() != input {
            return Err(ConvertError::format(format!(
                "URL {input:?} contains surrounding whitespace or control characters"
            )));
        }

        Url::parse(input)
            .map_err(|error| ConvertError::format(format!("parse URL {input:?} failed: {error}")))?;

        let host = raw_authority(input).unwrap_or_default();
        if host != GITHUB_HOST {
            return Err(ConvertError::format(format!(
                "host must be {GITHUB_HOST}, got {host:?}"
            )));
        }

        let path = raw_path(input).trim_matches('/');
        if path.is_empty() {
            return Err(ConvertError::format("empty URL path"));
        }

        let segments: Vec<&str> = path.split('/').collect();
        let [owner_segment, repository_segment, type_segment, number_segment, ..] =
            segments.as_slice()
        else {
            return Err(classify_short_path(&segments));
        };

        let kind = ResourceKind::from_path_token(type_segment).ok_or_else(|| {
            ConvertError::unsupported(format!("resource type {type_segment:?}"))
        })?;
        let number = ResourceNumber::parse(number_segment)?;
        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;

        let canonical_url = format!(
            "https://{GITHUB_HOST}/{}/{}/{type_segment}/{}",
            owner.as_str(),
            repository.as_str(),
            number.get()
        );

        Ok(Self {
            kind,
            owner,
            repository,
            number,
            canonical_url,
        })
    }

    /// Resource kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Issue, pull request, or discussion number.
    #[must_use]
    pub const fn number(&self) -> ResourceNumber {
        self.number
    }

    /// `https://github.com/{owner}/{repo}/{type}/{number}` without query or
    /// fragment.
    #[must_use]
    pub const fn canonical_url(&self) -> &str {
        self.canonical_url.as_str()
    }

    pub(crate) fn issue_path(&self) -> String {
        format!("{}/issues/{}", self.repo_path(), self.number.get())
    }

    pub(crate) fn issue_comments_path(&self) -> String {
        format!("{}/comments", self.issue_path())
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!("{}/pulls/{}", self.repo_path(), self.number.get())
    }

    pub(crate) fn pull_request_comments_path(&self) -> String {
        format!("{}/comments", self.pull_request_path())
    }

    fn repo_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}

/// Classifies paths with fewer than four segments.
fn classify_short_path(segments: &[&str]) -> ConvertError {
    match segments {
        [first, _] => {
            if RESERVED_FIRST_SEGMENTS.contains(&first.to_ascii_lowercase().as_str()) {
                ConvertError::format("resource path is missing the repository owner")
            } else {
                ConvertError::unsupported("repository home page")
            }
        }
        [_, _, third] => {
            let lowered = third.to_ascii_lowercase();
            if UNSUPPORTED_THIRD_SEGMENTS.contains(&lowered.as_str()) {
                ConvertError::unsupported(format!("resource type {lowered:?}"))
            } else {
                ConvertError::format("incomplete URL path")
            }
        }
        _ => ConvertError::format(format!(
            "invalid path segments count {}",
            segments.len()
        )),
    }
}

/// Returns the authority of `input` exactly as typed, without userinfo.
///
/// `Url` normalises host casing and default ports, so the host check works on
/// the raw text instead.
/// Path exactly as written: after the authority, before any query or
/// fragment.
fn raw_path(input: &str) -> &str {
    let Some((_, rest)) = input.split_once("://") else {
        return "";
    };
    let before_suffix = rest
        .find(['?', '#'])
        .and_then(|end| rest.get(..end))
        .unwrap_or(rest);
    before_suffix
        .find('/')
        .and_then(|start| before_suffix.get(start..))
        .unwrap_or("")
}

fn raw_authority(input: &str) -> Option<&str> {
    let (_, rest) = input.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = rest.get(..end)?;
    Some(
        authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host),
    )
}
