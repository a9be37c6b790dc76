use async_trait::async_trait;
use std::collections::HashMap;

use super::catalog_model::ExternalProduct;
use crate::errors::Result;

/// Trait defining the contract for product catalog gateway operations.
#[async_trait]
pub trait ProductCatalogServiceTrait: Send + Sync {
    /// Fetches a single product, served from cache within the TTL window.
    async fn get_product(&self, id: &str) -> Result<ExternalProduct>;

    /// Resolves a batch of IDs with one concurrent fetch per distinct ID.
    /// IDs the upstream does not know are omitted from the result mapping;
    /// detecting the omission is the caller's responsibility. Any upstream
    /// availability failure fails the whole batch.
    async fn get_products_by_ids(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, ExternalProduct>>;

    /// Fetches the full product list in upstream order.
    async fn get_catalog(&self) -> Result<Vec<ExternalProduct>>;
}
