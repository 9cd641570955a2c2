use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    http::HttpClient,
    provider::{DEFAULT_API_URL, GitHubProvider},
    runtime::Runtime,
};

const USER_AGENT: &str = "relboard";

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub provider: GitHubProvider,
    pub http_client: HttpClient,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(&token));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        let http_client = HttpClient::new(client);
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let provider = GitHubProvider::from_http_client(http_client.clone(), &api_url);

        Ok(Self {
            runtime,
            provider,
            http_client,
        })
    }
}

/// Keeps the first 8 and last 4 characters of long tokens.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
