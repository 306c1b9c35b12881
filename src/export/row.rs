//! Product → row flattening.
//!
//! One [`ExportRow`] per (product, variant) pair. Products are visited in
//! input order and variants in the order the API listed them, so the output
//! order is fully determined by the fetched order.

use log::info;
use serde::Serialize;

use crate::config::DEFAULT_PRICE;
use crate::models::{Product, Variant};

/// A product's scalar fields joined with one of its variants.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)] // columns mirror Product/Variant fields
pub struct ExportRow {
    pub product_id: Option<u64>,
    pub title: Option<String>,
    pub vendor: Option<String>,
    pub sku: String,
    pub price: String,
    pub inventory_quantity: i64,
    pub status: Option<String>,
}

impl ExportRow {
    /// Builds the row for one variant, substituting defaults for missing
    /// variant fields (`sku` → `""`, `price` → `"0.00"`, quantity → `0`).
    pub fn from_parts(product: &Product, variant: &Variant) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            sku: variant.sku.clone().unwrap_or_default(),
            price: variant
                .price
                .clone()
                .unwrap_or_else(|| DEFAULT_PRICE.to_string()),
            inventory_quantity: variant.inventory_quantity.unwrap_or(0),
            status: product.status.clone(),
        }
    }
}

/// Flattens products into export rows, one per variant.
///
/// Products with no variants contribute nothing.
pub fn flatten_products(products: &[Product]) -> Vec<ExportRow> {
    info!("Parsing products data...");

    let rows: Vec<ExportRow> = products
        .iter()
        .flat_map(|product| {
            product
                .variants
                .iter()
                .map(move |variant| ExportRow::from_parts(product, variant))
        })
        .collect();

    info!("Parsed {} product variants", rows.len());
    rows
}
