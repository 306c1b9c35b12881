//! HTTP header name constants.

/// Shopify Admin API authentication header
pub const HEADER_SHOPIFY_ACCESS_TOKEN: &str = "X-Shopify-Access-Token";

/// Web-linking header carrying the cursor for the next page (RFC 8288)
pub const HEADER_LINK: &str = "Link";

/// Content type sent with every API request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Relation type marking the next page in a `Link` header
pub const LINK_REL_NEXT: &str = "next";
