use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate root: a bundle of external products snapshotted at creation
/// time. The line item list and the base-currency total are immutable once
/// created; only name, description and the deleted flag may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Exact sum of line item prices, stored unrounded in the base currency.
    pub total_price_usd: Decimal,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
    /// Ordered by insertion; deleted only together with the package.
    pub products: Vec<PackageLineItem>,
}

impl Package {
    pub fn new(
        name: String,
        description: Option<String>,
        total_price_usd: Decimal,
        products: Vec<PackageLineItem>,
    ) -> Self {
        Package {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            total_price_usd,
            created_at: Utc::now(),
            deleted: false,
            products,
        }
    }
}

/// Snapshot of one external product at package-creation time. Does not
/// track upstream renames or price changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageLineItem {
    pub external_product_id: String,
    pub product_name: String,
    pub product_price_usd: Decimal,
}

/// Creation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
    pub name: String,
    pub description: Option<String>,
    pub product_ids: Vec<String>,
}

/// Name/description update. The product list is immutable after creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpdate {
    pub name: String,
    pub description: Option<String>,
}

/// Full projection with line items, priced in the display currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub total_price: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub products: Vec<LineItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub external_product_id: String,
    pub product_name: String,
    pub price: Decimal,
}

/// Summary projection for listings; omits line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub total_price: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// One page of summaries plus paging metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePage {
    pub content: Vec<PackageSummary>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}
