//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `shopify_export` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and the exit code policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::process;

use shopify_export::app::{evaluate_exit_code, format_summary};
use shopify_export::initialization::init_logger_with;
use shopify_export::{run_export, Config, ExportError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Credentials usually live in .env: try the current directory, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    let result = run_export(config).await;

    match &result {
        Ok(report) => println!("{}", format_summary(report)),
        Err(ExportError::Config(e)) => error!("Error: {}", e),
        Err(e) => eprintln!("shopify_export error: {:#}", e),
    }

    let code = evaluate_exit_code(fail_on, &result);
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
