// Shared test helpers for the mock Admin API and export configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use std::path::Path;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_export::{Config, FailOn, LogFormat, LogLevel};

/// Access token the mock server expects.
#[allow(dead_code)] // Used by other test files
pub const TEST_TOKEN: &str = "shpat_integration";

/// Builds a config pointed at the mock server, writing under `output_root/output`.
#[allow(dead_code)]
pub fn create_test_config(server: &MockServer, output_root: &Path) -> Config {
    Config {
        shop_name: Some("test-shop".to_string()),
        access_token: Some(TEST_TOKEN.to_string()),
        base_url: Some(server.uri()),
        output_dir: output_root.join("output"),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        fail_on: FailOn::Never,
        ..Default::default()
    }
}

/// A `products.json` body with one product per `(id, variants)` entry.
#[allow(dead_code)]
pub fn page_body(products: &[(u64, Value)]) -> Value {
    let products: Vec<Value> = products
        .iter()
        .map(|(id, variants)| {
            json!({
                "id": id,
                "title": format!("Product {}", id),
                "vendor": "Acme",
                "status": "active",
                "variants": variants
            })
        })
        .collect();
    json!({ "products": products })
}

/// `Link` header value pointing at `cursor` on the mock server.
#[allow(dead_code)]
pub fn next_link(server: &MockServer, cursor: &str) -> String {
    format!(
        "<{}/products.json?page_info={}>; rel=\"next\"",
        server.uri(),
        cursor
    )
}

/// Mounts the first page (no cursor), optionally announcing `next_cursor`.
#[allow(dead_code)]
pub async fn mount_first_page(server: &MockServer, body: Value, next_cursor: Option<&str>) {
    let mut response = ResponseTemplate::new(200).set_body_json(body);
    if let Some(cursor) = next_cursor {
        response = response.insert_header("Link", next_link(server, cursor));
    }
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts the page served for `cursor`.
#[allow(dead_code)]
pub async fn mount_cursor_page(server: &MockServer, cursor: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", cursor))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
