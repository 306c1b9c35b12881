//! Error categorization.
//!
//! Maps `reqwest` failures and HTTP statuses onto the exporter's error types.

use reqwest::StatusCode;

use super::types::{PageError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a [`TransportErrorKind`].
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_body() || error.is_decode() {
        TransportErrorKind::Body
    } else if error.is_builder() {
        TransportErrorKind::Builder
    } else {
        TransportErrorKind::Other
    }
}

/// Builds a [`PageError::Transport`] for a request that produced no response.
pub fn transport_error(url: &str, error: &reqwest::Error) -> PageError {
    PageError::Transport {
        url: url.to_string(),
        kind: categorize_reqwest_error(error),
        message: error.to_string(),
    }
}

/// Returns a short operator hint for statuses the Admin API commonly returns.
pub fn status_hint(status: StatusCode) -> Option<&'static str> {
    match status.as_u16() {
        401 => Some("access token rejected; check Shopify_access_token"),
        403 => Some("token lacks the read_products scope"),
        404 => Some("shop or API version not found; check Shopify_shop_name"),
        429 => Some("rate limited by Shopify; rerun later"),
        _ if status.is_server_error() => Some("Shopify server error"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hint_known_codes() {
        assert!(status_hint(StatusCode::UNAUTHORIZED)
            .unwrap()
            .contains("access token"));
        assert!(status_hint(StatusCode::NOT_FOUND)
            .unwrap()
            .contains("Shopify_shop_name"));
        assert!(status_hint(StatusCode::TOO_MANY_REQUESTS).is_some());
        assert!(status_hint(StatusCode::BAD_GATEWAY).is_some());
    }

    #[test]
    fn test_status_hint_unknown_code() {
        assert_eq!(status_hint(StatusCode::IM_A_TEAPOT), None);
    }

    #[tokio::test]
    async fn test_connect_failure_is_categorized() {
        // Bind then drop a listener to get a port nothing is listening on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/products.json", port);
        let client = reqwest::Client::new();
        let err = client
            .get(&url)
            .send()
            .await
            .expect_err("port was released");
        match transport_error(&url, &err) {
            PageError::Transport { kind, url: failed, .. } => {
                assert_eq!(kind, TransportErrorKind::Connect);
                assert_eq!(failed, url);
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
