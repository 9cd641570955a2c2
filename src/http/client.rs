//! HTTP client for the releases API.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::classify_status;

/// Thin wrapper over a configured reqwest Client. One request per call; no
/// retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Non-2xx responses become a [`super::FetchError`].
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            debug!("GET {} failed with {}: {}", url, status, detail);
            return Err(classify_status(status, url, &detail).into());
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }
}
