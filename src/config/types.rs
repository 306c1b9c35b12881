//! Configuration types and CLI options.
//!
//! This module defines the enums and structs used for command-line and
//! environment parsing, plus the validation step that turns a raw [`Config`]
//! into the [`Credentials`] the fetcher needs.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_API_VERSION, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE, ENV_ACCESS_TOKEN, ENV_SHOP_NAME,
    PRODUCTS_ENDPOINT,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy.
///
/// The exporter always finishes its run and logs what happened; this only
/// decides whether the process exit status reflects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Exit 0 for every handled outcome (missing config, partial fetch, empty catalog)
    Never,
    /// Exit 2 when pagination stopped early on a page failure
    Partial,
    /// Non-zero for any handled failure: 1 missing config, 2 partial, 3 empty catalog
    AnyFailure,
}

/// Exporter configuration.
///
/// Populated once at startup from command-line flags and environment
/// variables (a `.env` file is loaded first by the binary). The credential
/// fields are optional here so that a missing value is reported by
/// [`Config::validate`] with a clear message instead of a clap usage error.
///
/// # Examples
///
/// ```bash
/// # Credentials from .env
/// shopify_export
///
/// # Explicit credentials and a different output location
/// shopify_export --shop-name my-store --access-token shpat_xxx --output-dir ./exports
///
/// # Non-zero exit when pagination stopped early
/// shopify_export --fail-on partial
/// ```
#[derive(Clone, Parser)]
#[command(
    name = "shopify_export",
    about = "Exports a Shopify store's products to CSV, one row per variant."
)]
pub struct Config {
    /// Shop subdomain, e.g. `your-store` for your-store.myshopify.com
    #[arg(long, env = ENV_SHOP_NAME)]
    pub shop_name: Option<String>,

    /// Admin API access token of a private/custom app
    #[arg(long, env = ENV_ACCESS_TOKEN, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Admin API version
    #[arg(long, env = "SHOPIFY_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Override the API base URL (defaults to https://{shop}.myshopify.com/admin/api/{version})
    #[arg(long, env = "SHOPIFY_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory the CSV file is written into (created if missing)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Name of the CSV file inside the output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy: never|partial|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shop_name: None,
            access_token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            timeout_seconds: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

// Hand-written so the access token never reaches a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("shop_name", &self.shop_name)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("output_dir", &self.output_dir)
            .field("output_file", &self.output_file)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("fail_on", &self.fail_on)
            .finish()
    }
}

/// Validated connection details for one store.
#[derive(Clone)]
pub struct Credentials {
    /// Shop subdomain
    pub shop_name: String,
    /// Admin API access token
    pub access_token: String,
    /// Fully-qualified `products.json` URL for the first request
    pub products_url: Url,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("shop_name", &self.shop_name)
            .field("access_token", &"***")
            .field("products_url", &self.products_url.as_str())
            .finish()
    }
}

impl Config {
    /// Checks that both credentials are present and builds the products URL.
    ///
    /// Empty strings count as missing, the same as unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if the shop name or token is
    /// absent, or [`ConfigError::InvalidBaseUrl`] if the resulting URL does not
    /// parse.
    pub fn validate(&self) -> Result<Credentials, ConfigError> {
        let shop_name = non_empty(self.shop_name.as_deref());
        let access_token = non_empty(self.access_token.as_deref());
        let (Some(shop_name), Some(access_token)) = (shop_name, access_token) else {
            return Err(ConfigError::MissingCredentials);
        };

        let base = match non_empty(self.base_url.as_deref()) {
            Some(base) => base.to_string(),
            None => format!(
                "https://{}.myshopify.com/admin/api/{}",
                shop_name, self.api_version
            ),
        };
        let raw = format!("{}/{}", base.trim_end_matches('/'), PRODUCTS_ENDPOINT);
        let products_url = Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Credentials {
            shop_name: shop_name.to_string(),
            access_token: access_token.to_string(),
            products_url,
        })
    }

    /// Full path of the CSV file this configuration writes.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
