//! Release providers.
//!
//! A provider turns a repository coordinate into the list of releases
//! published for it. The GitHub implementation is the only one shipped; the
//! trait exists so the dashboard controller can be driven by a mock in tests.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

pub use github::{DEFAULT_API_URL, GitHubProvider};

/// Repository identifier, displayed as `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseAsset {
    pub name: String,
    pub size: u64,
    pub download_count: u64,
    pub download_url: String,
}

/// A published build as reported by the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag: String,
    /// Release name/title
    pub name: Option<String>,
    /// Publication time, `None` when absent or unparseable
    pub published_at: Option<DateTime<Utc>>,
    /// Free-text release notes
    pub body: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// The text used for classification, version parsing and filtering:
    /// the release name, or the tag when the name is absent or empty.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag,
        }
    }

    /// The headline shown to users. Unnamed releases are shown by tag with a
    /// `v` prefix.
    pub fn title(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if self.tag.starts_with(['v', 'V']) => self.tag.clone(),
            _ => format!("v{}", self.tag),
        }
    }

    /// Release notes, if any non-blank text was published.
    pub fn notes(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.trim().is_empty())
    }

    /// Sum of download counts across all assets.
    pub fn download_count(&self) -> u64 {
        self.assets.iter().map(|a| a.download_count).sum()
    }
}

/// Trait for release providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the API base URL.
    fn api_url(&self) -> &str;

    /// Fetch the releases of a repository, in the order the API returns them.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>>;
}
