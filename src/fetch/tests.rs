//! Pagination tests against a mock Admin API.

use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const TOKEN: &str = "shpat_test_token";

fn products_json(ids: &[u64]) -> Value {
    let products: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Product {}", id),
                "vendor": "Acme",
                "status": "active",
                "variants": [{"sku": format!("SKU-{}", id), "price": "10.00", "inventory_quantity": 1}]
            })
        })
        .collect();
    json!({ "products": products })
}

fn next_link(server: &MockServer, cursor: &str) -> String {
    format!(
        "<{}/products.json?page_info={}>; rel=\"next\"",
        server.uri(),
        cursor
    )
}

fn products_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/products.json", server.uri())).unwrap()
}

fn ids(outcome: &FetchOutcome) -> Vec<u64> {
    outcome.products.iter().filter_map(|p| p.id).collect()
}

/// Mounts a three-page catalog: 1-2, 3-4, 5.
async fn mount_three_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(server, "p2"))
                .set_body_json(products_json(&[1, 2])),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(server, "p3"))
                .set_body_json(products_json(&[3, 4])),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[5])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_follows_next_links_until_absent() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert_eq!(outcome.status, FetchStatus::Complete);
    assert_eq!(outcome.pages, 3);
    assert_eq!(ids(&outcome), vec![1, 2, 3, 4, 5]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_limit_only_on_first_request() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = reqwest::Client::new();
    fetch_all_products(&client, &products_url(&server), TOKEN).await;

    let requests = server.received_requests().await.unwrap();
    let limits: Vec<Option<String>> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "limit")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(limits, vec![Some("250".to_string()), None, None]);
}

#[tokio::test]
async fn test_sends_auth_and_content_type_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(header("X-Shopify-Access-Token", TOKEN))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[1])))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert_eq!(outcome.status, FetchStatus::Complete);
    assert_eq!(ids(&outcome), vec![1]);
}

#[tokio::test]
async fn test_http_error_on_second_page_keeps_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "p2"))
                .set_body_json(products_json(&[1, 2])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert!(outcome.is_partial());
    assert_eq!(outcome.pages, 1);
    assert_eq!(ids(&outcome), vec![1, 2]);
    assert_eq!(
        outcome.page_error(),
        Some(&PageError::HttpStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        })
    );
}

#[tokio::test]
async fn test_unauthorized_first_page_returns_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"errors":"[API] Invalid API key or access token"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), "wrong").await;

    assert!(outcome.products.is_empty());
    assert_eq!(outcome.pages, 0);
    assert!(matches!(
        outcome.page_error(),
        Some(PageError::HttpStatus { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_undecodable_body_stops_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert!(outcome.products.is_empty());
    assert!(matches!(outcome.page_error(), Some(PageError::Decode { .. })));
}

#[tokio::test]
async fn test_relative_next_link_resolves_against_current_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-01/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", "<products.json?page_info=rel2>; rel=\"next\"")
                .set_body_json(products_json(&[1])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-01/products.json"))
        .and(query_param("page_info", "rel2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[2])))
        .expect(1)
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/admin/api/2024-01/products.json", server.uri())).unwrap();
    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &url, TOKEN).await;

    assert_eq!(outcome.status, FetchStatus::Complete);
    assert_eq!(ids(&outcome), vec![1, 2]);
}

#[tokio::test]
async fn test_previous_link_alone_ends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(
                        "<{}/products.json?page_info=back>; rel=\"previous\"",
                        server.uri()
                    ),
                )
                .set_body_json(products_json(&[9])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert_eq!(outcome.status, FetchStatus::Complete);
    assert_eq!(outcome.pages, 1);
}

#[tokio::test]
async fn test_empty_catalog_is_complete_and_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert_eq!(outcome.status, FetchStatus::Complete);
    assert!(outcome.products.is_empty());
}

#[test]
fn test_fetch_status_is_partial() {
    assert!(!FetchStatus::Complete.is_partial());
    let status = FetchStatus::Partial(PageError::HttpStatus {
        status: 502,
        body: String::new(),
    });
    assert!(status.is_partial());

    let outcome = FetchOutcome {
        products: Vec::new(),
        pages: 0,
        status,
    };
    assert!(outcome.is_partial());
}

#[tokio::test]
async fn test_next_link_to_fetched_page_stops_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "loop"))
                .set_body_json(products_json(&[1])),
        )
        .expect(1)
        .mount(&server)
        .await;
    // This page keeps pointing at itself
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "loop"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "loop"))
                .set_body_json(products_json(&[2])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert_eq!(outcome.pages, 2);
    assert_eq!(ids(&outcome), vec![1, 2]);
    assert_eq!(
        outcome.page_error(),
        Some(&PageError::RepeatedNextLink {
            url: format!("{}/products.json?page_info=loop", server.uri()),
        })
    );
}

#[tokio::test]
async fn test_mistyped_fields_do_not_drop_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next_link(&server, "p2"))
                .set_body_json(json!({
                    "products": [
                        {"id": 1, "variants": [{"sku": "A", "price": "1.00", "inventory_quantity": 1}]},
                        {"id": 2, "variants": [{"sku": 12345, "price": 4.5, "inventory_quantity": "7"}]}
                    ]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json(&[3])))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let outcome = fetch_all_products(&client, &products_url(&server), TOKEN).await;

    assert_eq!(outcome.status, FetchStatus::Complete);
    assert_eq!(ids(&outcome), vec![1, 2, 3]);
    let variant = &outcome.products[1].variants[0];
    assert_eq!(variant.sku.as_deref(), Some("12345"));
    assert_eq!(variant.price.as_deref(), Some("4.5"));
    assert_eq!(variant.inventory_quantity, Some(7));
}
