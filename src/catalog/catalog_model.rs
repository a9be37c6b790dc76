use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx;

/// An upstream catalog entry. Transient: fetched, cached, snapshotted into
/// packages, but never persisted itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalProduct {
    pub id: String,
    pub name: String,
    /// Absent when the upstream record carries no price. For package
    /// creation that is a data-validity error, not a zero price.
    #[serde(default)]
    pub usd_price: Option<Decimal>,
}

/// A catalog entry projected into a display currency for browsing screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub currency: String,
}

/// Projects catalog entries into a display currency at the given rate.
/// Unpriced entries display as zero; only package creation rejects them.
pub fn to_product_views(
    products: &[ExternalProduct],
    currency: &str,
    rate: Decimal,
) -> Vec<ProductView> {
    products
        .iter()
        .map(|product| ProductView {
            id: product.id.clone(),
            name: product.name.clone(),
            price: fx::convert_optional(product.usd_price, rate),
            currency: currency.to_string(),
        })
        .collect()
}
