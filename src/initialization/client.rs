//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every `products.json` request.
///
/// Creates a `reqwest::Client` configured with:
/// - The exporter's User-Agent
/// - A per-request timeout only when `--timeout-seconds` was given
///
/// Authentication headers are attached per request by the fetcher, so the
/// same client can be pointed at any store.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(DEFAULT_USER_AGENT);
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
