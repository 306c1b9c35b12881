//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - HTTP client for the Shopify Admin API
//! - Logger (plain or JSON)
//!
//! All initialization functions return [`InitializationError`](crate::error_handling::InitializationError).

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
