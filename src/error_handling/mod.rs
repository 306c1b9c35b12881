//! Error handling.
//!
//! This module provides:
//! - Error type definitions for configuration, initialization, page fetches,
//!   and the export run as a whole
//! - Categorization of `reqwest` errors and HTTP statuses
//!
//! Only [`ExportError`] ends a run. [`PageError`] stops pagination but the
//! products fetched so far still go through flattening and writing.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, status_hint, transport_error};
pub use types::{ConfigError, ExportError, InitializationError, PageError, TransportErrorKind};
