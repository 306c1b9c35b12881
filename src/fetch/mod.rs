//! Product fetching.
//!
//! This module walks the cursor-paginated `products.json` endpoint:
//! - [`fetch_products_page`]: one authenticated GET, returning the products
//!   and the next-page URL from the `Link` header
//! - [`fetch_all_products`]: follows next links until none is announced or a
//!   page fails
//!
//! A failed page does not fail the fetch. It ends pagination and the outcome
//! is marked [`FetchStatus::Partial`], carrying everything fetched before it.

mod link;
mod request;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use log::{debug, error, info, warn};
use reqwest::StatusCode;
use url::Url;

use crate::error_handling::{status_hint, PageError};
use crate::models::Product;

pub use link::parse_next_link;
pub use request::{fetch_products_page, FetchedPage};

/// Whether pagination ran to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The last page had no `rel="next"` link.
    Complete,
    /// A page failed; products from earlier pages were kept.
    Partial(PageError),
}

impl FetchStatus {
    /// True when pagination stopped on a failed page.
    pub fn is_partial(&self) -> bool {
        matches!(self, FetchStatus::Partial(_))
    }
}

/// Everything a fetch produced.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Products from every successful page, in page order
    pub products: Vec<Product>,
    /// Number of pages fetched successfully
    pub pages: usize,
    /// Whether pagination completed or stopped on an error
    pub status: FetchStatus,
}

impl FetchOutcome {
    /// True when pagination stopped on a failed page.
    pub fn is_partial(&self) -> bool {
        self.status.is_partial()
    }

    /// The page error that ended pagination, if any.
    pub fn page_error(&self) -> Option<&PageError> {
        match &self.status {
            FetchStatus::Complete => None,
            FetchStatus::Partial(e) => Some(e),
        }
    }
}

/// Fetches every product, following `rel="next"` links from `products_url`.
///
/// Requests are issued one at a time. There is no retry or backoff: the first
/// failed page is logged with its status and body, and the products gathered
/// so far are returned as a partial outcome. A next link that points at a URL
/// already fetched ends pagination the same way.
pub async fn fetch_all_products(
    client: &reqwest::Client,
    products_url: &Url,
    access_token: &str,
) -> FetchOutcome {
    info!("Fetching products from Shopify...");

    let mut products: Vec<Product> = Vec::new();
    let mut pages = 0usize;
    let mut next: Option<Url> = Some(products_url.clone());
    let mut seen: HashSet<Url> = HashSet::new();

    let status = loop {
        let Some(url) = next.take() else {
            break FetchStatus::Complete;
        };

        let result = if seen.insert(url.clone()) {
            fetch_products_page(client, &url, access_token, pages == 0).await
        } else {
            Err(PageError::RepeatedNextLink {
                url: url.to_string(),
            })
        };

        match result {
            Ok(page) => {
                pages += 1;
                let count = page.products.len();
                products.extend(page.products);
                info!("Fetched {} products (Total: {})", count, products.len());

                if let Some(ref next_url) = page.next_url {
                    debug!("Next page: {}", next_url);
                }
                next = page.next_url;
            }
            Err(e) => {
                error!("{}", e);
                if let PageError::HttpStatus { status, .. } = &e {
                    if let Some(hint) = StatusCode::from_u16(*status).ok().and_then(status_hint) {
                        warn!("{}", hint);
                    }
                }
                warn!(
                    "Stopping pagination after {} page(s); continuing with {} products",
                    pages,
                    products.len()
                );
                break FetchStatus::Partial(e);
            }
        }
    };

    info!("Total products fetched: {}", products.len());

    FetchOutcome {
        products,
        pages,
        status,
    }
}
