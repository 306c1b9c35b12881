//! Main application modules.
//!
//! This module provides the exit code policy and the end-of-run summary used
//! by the binary.

pub mod exit_code;
pub mod summary;

// Re-export public API
pub use exit_code::{evaluate_exit_code, EXIT_EMPTY_CATALOG, EXIT_FAILURE, EXIT_PARTIAL, EXIT_SUCCESS};
pub use summary::format_summary;
