//! HTTP client module with status classification.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{FetchError, classify_status};
