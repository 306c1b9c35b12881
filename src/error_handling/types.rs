//! Error type definitions.
//!
//! This module defines the error types used throughout the exporter.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors raised while validating configuration, before any network call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop name or access token not provided (or empty).
    #[error("Missing Shopify_shop_name or Shopify_access_token in environment or .env file")]
    MissingCredentials,

    /// The API base URL could not be parsed.
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending URL
        url: String,
        /// Parser message
        reason: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a single page request ended pagination.
///
/// None of these abort the run: the fetcher logs the error, stops paging, and
/// hands back what it already has.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The API answered with a non-success status.
    #[error("Error: {status} - {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body as text (may be empty)
        body: String,
    },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Request to {url} failed ({kind}): {message}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Coarse category from the reqwest error
        kind: TransportErrorKind,
        /// Underlying error message
        message: String,
    },

    /// The `Link` header announced a next page that is not a valid URL.
    #[error("Invalid next-page link '{link}': {message}")]
    InvalidNextLink {
        /// Raw link target
        link: String,
        /// URL parser message
        message: String,
    },

    /// A `rel="next"` link pointed back at a page already fetched.
    #[error("Next-page link {url} was already fetched; stopping to avoid a loop")]
    RepeatedNextLink {
        /// The repeated URL
        url: String,
    },

    /// The response body was not the expected `{"products": [...]}` JSON.
    #[error("Could not decode products response from {url}: {message}")]
    Decode {
        /// URL that was requested
        url: String,
        /// serde_json message
        message: String,
    },
}

/// Coarse classification of transport failures, for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Redirect,
    Body,
    Builder,
    Other,
}

/// Top-level failures of an export run.
///
/// Page-level problems are not here: they end up as a partial
/// [`FetchOutcome`](crate::fetch::FetchOutcome) instead.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration was incomplete or invalid; nothing was fetched.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client could not be built.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// The CSV file or its directory could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying IO/CSV error chain, rendered with context
        message: String,
    },
}
