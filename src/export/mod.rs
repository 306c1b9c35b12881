//! Export functionality.
//!
//! This module turns fetched products into CSV:
//! - [`flatten_products`]: one [`ExportRow`] per product variant
//! - [`export_csv`]: writes the rows under a fixed header

mod csv;
mod row;

pub use self::csv::{export_csv, write_rows};
pub use row::{flatten_products, ExportRow};
