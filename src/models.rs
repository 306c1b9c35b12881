//! Shopify Admin API response types for `GET /products.json`.
//!
//! Only the fields the export needs are modeled; everything else in the
//! response is ignored. Scalar fields are optional because the API may send
//! `null` or omit them, and a missing value is written as an empty cell (or
//! the documented default for variants) rather than failing the page.
//!
//! Scalars are also decoded leniently: a value of an unexpected JSON type
//! (a numeric `sku`, a string `inventory_quantity`) is carried over as cell
//! text instead of failing the page it arrived on.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level response body of one `products.json` page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductsPage {
    /// Products on this page. A missing or `null` key is an empty page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// A catalog product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Product {
    /// Numeric product ID
    #[serde(default, deserialize_with = "lenient_integer")]
    pub id: Option<u64>,
    /// Display name
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Brand or supplier
    #[serde(default, deserialize_with = "lenient_text")]
    pub vendor: Option<String>,
    /// `active`, `draft` or `archived`
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    /// Purchasable configurations, in the order the API lists them
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
}

/// A purchasable configuration (size, colour, ...) of a product.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Variant {
    /// Stock keeping unit; empty or missing for many stores
    #[serde(default, deserialize_with = "lenient_text")]
    pub sku: Option<String>,
    /// Decimal price as the API sends it, e.g. `"19.99"`
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: Option<String>,
    /// Stock across all locations; negative when oversold
    #[serde(default, deserialize_with = "lenient_integer")]
    pub inventory_quantity: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON value as cell text. Strings are taken as-is, other values use
/// their compact JSON rendering.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// An integer sent as a JSON number or a numeric string. Anything else
/// (fractions, out-of-range numbers, words) is treated as absent.
fn lenient_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.to_string().parse().ok(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
