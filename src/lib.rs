//! shopify_export library: Shopify product catalog → CSV
//!
//! This library fetches every product of a Shopify store through the Admin
//! REST API (following `Link` header pagination), flattens each product into
//! one row per variant, and writes the rows to a CSV file.
//!
//! # Example
//!
//! ```no_run
//! use shopify_export::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     shop_name: Some("your-store".to_string()),
//!     access_token: Some("shpat_xxx".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("{} rows written", report.rows_written);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Requests are issued one at a time,
//! so a current-thread runtime is enough.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::ExportError;
pub use run::{run_export, ExportReport};

// Internal run module (contains the export orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use log::{debug, info, warn};

    use crate::config::Config;
    use crate::error_handling::ExportError;
    use crate::export::{export_csv, flatten_products};
    use crate::fetch::{fetch_all_products, FetchStatus};
    use crate::initialization::init_client;

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Products fetched across all successful pages
        pub products_fetched: usize,
        /// Pages fetched successfully
        pub pages_fetched: usize,
        /// Data rows written to the CSV (one per variant)
        pub rows_written: usize,
        /// CSV path, or `None` when the catalog was empty and nothing was written
        pub output_path: Option<PathBuf>,
        /// Whether pagination completed or stopped on a failed page
        pub fetch: FetchStatus,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export with the provided configuration.
    ///
    /// Validates the credentials, fetches every product, flattens them into
    /// per-variant rows, and writes the CSV. A page failure during the fetch
    /// does not fail the run: the products from earlier pages are still
    /// written and [`ExportReport::fetch`] records the failure. When no
    /// products were fetched at all, nothing is written.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The shop name or access token is missing (before any network call)
    /// - The HTTP client cannot be built
    /// - The output directory or CSV file cannot be written
    pub async fn run_export(config: Config) -> Result<ExportReport, ExportError> {
        let credentials = config.validate()?;
        debug!("Using {:?}", credentials);

        info!("{}", "=".repeat(50));
        info!("Shopify Products → CSV Exporter");
        info!("{}", "=".repeat(50));

        let client = init_client(&config)?;
        let start_time = Instant::now();

        // Step 1: fetch
        let outcome = fetch_all_products(
            &client,
            &credentials.products_url,
            &credentials.access_token,
        )
        .await;

        if outcome.products.is_empty() {
            warn!("No product found or error occurred");
            return Ok(ExportReport {
                products_fetched: 0,
                pages_fetched: outcome.pages,
                rows_written: 0,
                output_path: None,
                fetch: outcome.status,
                elapsed_seconds: start_time.elapsed().as_secs_f64(),
            });
        }

        // Step 2: flatten
        let rows = flatten_products(&outcome.products);

        // Step 3: write
        let output_path = export_csv(&rows, &config.output_dir, &config.output_file).map_err(
            |e| ExportError::Write {
                path: config.output_path(),
                message: format!("{:#}", e),
            },
        )?;

        Ok(ExportReport {
            products_fetched: outcome.products.len(),
            pages_fetched: outcome.pages,
            rows_written: rows.len(),
            output_path: Some(output_path),
            fetch: outcome.status,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
