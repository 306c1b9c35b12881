//! Single-page `products.json` request.

use log::debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::{
    CONTENT_TYPE_JSON, HEADER_LINK, HEADER_SHOPIFY_ACCESS_TOKEN, PRODUCTS_PAGE_LIMIT,
};
use crate::error_handling::{transport_error, PageError};
use crate::models::{Product, ProductsPage};

use super::link::parse_next_link;

/// One successfully fetched page.
#[derive(Debug)]
pub struct FetchedPage {
    /// Products on the page, in API order
    pub products: Vec<Product>,
    /// Absolute URL of the next page, if the server announced one
    pub next_url: Option<Url>,
}

/// Requests one page of products.
///
/// The `limit` query parameter is only added when `first_page` is true. Later
/// URLs come verbatim from the previous `Link` header and already carry the
/// server's cursor, which must not be mixed with our own parameters.
///
/// # Errors
///
/// Returns a [`PageError`] for a non-success status (with the response body),
/// a transport failure, an undecodable body, or an unusable next link.
pub async fn fetch_products_page(
    client: &reqwest::Client,
    url: &Url,
    access_token: &str,
    first_page: bool,
) -> Result<FetchedPage, PageError> {
    let mut request = client
        .get(url.clone())
        .header(HEADER_SHOPIFY_ACCESS_TOKEN, access_token)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON);
    if first_page {
        request = request.query(&[("limit", PRODUCTS_PAGE_LIMIT)]);
    }

    debug!("GET {}", url);
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(url.as_str(), &e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(PageError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    // Servers may split links over several Link headers
    let link_header = response
        .headers()
        .get_all(HEADER_LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(", ");

    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(url.as_str(), &e))?;
    let page: ProductsPage = serde_json::from_slice(&body).map_err(|e| PageError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let next_url = match parse_next_link(&link_header) {
        // Relative targets resolve against the page that announced them
        Some(link) => Some(url.join(&link).map_err(|e| PageError::InvalidNextLink {
            link,
            message: e.to_string(),
        })?),
        None => None,
    };

    Ok(FetchedPage {
        products: page.products,
        next_url,
    })
}
