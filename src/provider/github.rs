//! GitHub provider implementation.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
#[cfg(test)]
use reqwest::Client;

use crate::http::HttpClient;

use super::{Provider, Release, ReleaseAsset, RepoId};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub published_at: Option<String>,
        #[serde(default)]
        pub body: Option<String>,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        #[serde(default)]
        pub size: u64,
        #[serde(default)]
        pub download_count: u64,
        #[serde(default)]
        pub browser_download_url: String,
    }
}

/// GitHub provider implementation.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create a provider against the public GitHub API.
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, DEFAULT_API_URL)
    }

    /// Create a provider against a custom API URL.
    #[cfg(test)]
    pub fn with_api_url(client: Client, api_url: &str) -> Self {
        Self::from_http_client(HttpClient::new(client), api_url)
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_releases(&self, repo: &RepoId) -> Result<Vec<api::Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        debug!("Fetching releases from {}...", url);
        self.http_client.get_json(&url).await
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let releases = self.fetch_releases(repo).await?;
        debug!("Fetched {} release(s) for {}", releases.len(), repo);
        Ok(releases.into_iter().map(|r| r.into()).collect())
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Some(at.with_timezone(&Utc)),
        Err(e) => {
            debug!("Ignoring unparseable published_at {:?}: {}", raw, e);
            None
        }
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            name: r.name,
            published_at: r.published_at.as_deref().and_then(parse_timestamp),
            body: r.body,
            assets: r.assets.into_iter().map(|a| a.into()).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            size: a.size,
            download_count: a.download_count,
            download_url: a.browser_download_url,
        }
    }
}
