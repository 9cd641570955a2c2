//! Readable classification of failed HTTP responses.

use reqwest::StatusCode;

/// A non-2xx response from the releases API.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Rate limit exceeded (HTTP 403 with rate limit message or 429)
    RateLimitExceeded,
    /// Authentication failed (HTTP 401)
    AuthenticationFailed,
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden,
    /// Any other unsuccessful status
    Status(u16),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::RateLimitExceeded => write!(
                f,
                "GitHub API rate limit exceeded. Try again later or set GITHUB_TOKEN environment variable."
            ),
            FetchError::AuthenticationFailed => {
                write!(f, "Authentication failed. Check your GITHUB_TOKEN.")
            }
            FetchError::NotFound(url) => write!(f, "Not found: {}", url),
            FetchError::Forbidden => {
                write!(f, "Access forbidden. You may need authentication.")
            }
            FetchError::Status(code) => write!(f, "GitHub API error: {}", code),
        }
    }
}

impl std::error::Error for FetchError {}

/// Maps an unsuccessful status to a [`FetchError`].
///
/// `detail` is the response body (or error text) and is only inspected to
/// tell a rate-limited 403 apart from a plain one.
pub fn classify_status(status: StatusCode, url: &str, detail: &str) -> FetchError {
    match status {
        StatusCode::UNAUTHORIZED => FetchError::AuthenticationFailed,
        StatusCode::FORBIDDEN if detail.to_lowercase().contains("rate limit") => {
            FetchError::RateLimitExceeded
        }
        StatusCode::FORBIDDEN => FetchError::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimitExceeded,
        StatusCode::NOT_FOUND => FetchError::NotFound(url.to_string()),
        s => FetchError::Status(s.as_u16()),
    }
}
