//! Configuration constants.
//!
//! Defaults for the Shopify Admin API endpoint and the export destination.

/// Shopify Admin REST API version used when building the default endpoint.
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Page size requested on the first `products.json` call.
///
/// 250 is the platform maximum. Later pages inherit whatever the server
/// encoded into the `Link` header, so this is only sent once.
pub const PRODUCTS_PAGE_LIMIT: u32 = 250;

/// Resource path appended to the API base URL.
pub const PRODUCTS_ENDPOINT: &str = "products.json";

/// Directory the CSV is written into (created if missing).
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name of the exported CSV.
pub const DEFAULT_OUTPUT_FILE: &str = "shopify_products.csv";

/// Environment variable holding the shop subdomain (e.g. `your-store`).
pub const ENV_SHOP_NAME: &str = "Shopify_shop_name";

/// Environment variable holding the private app access token.
pub const ENV_ACCESS_TOKEN: &str = "Shopify_access_token";

/// User-Agent sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("shopify_export/", env!("CARGO_PKG_VERSION"));

/// Fallback value for price when a variant carries none.
pub const DEFAULT_PRICE: &str = "0.00";

/// Column header of the exported CSV, in `ExportRow` field order.
pub const CSV_HEADER: [&str; 7] = [
    "product_id",
    "title",
    "vendor",
    "sku",
    "price",
    "inventory_quantity",
    "status",
];
