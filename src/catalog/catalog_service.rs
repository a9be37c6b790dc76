use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;

use super::catalog_cache::{CatalogCache, CATALOG_CACHE_KEY};
use super::catalog_errors::CatalogError;
use super::catalog_model::ExternalProduct;
use super::catalog_provider::ProductApi;
use super::catalog_traits::ProductCatalogServiceTrait;
use crate::errors::Result;
use crate::utils::RetryPolicy;

const MAX_RETRIES: u32 = 2;
const RETRY_DELAY_MS: u64 = 500;

/// Gateway over the external product service: caching, bounded retry on
/// transient failure, and parallel batch resolution.
pub struct ProductCatalogService {
    api: Arc<dyn ProductApi>,
    cache: Arc<CatalogCache>,
    retry: RetryPolicy,
}

impl ProductCatalogService {
    pub fn new(api: Arc<dyn ProductApi>, cache: Arc<CatalogCache>) -> Self {
        Self::with_retry(
            api,
            cache,
            RetryPolicy::new(MAX_RETRIES, Duration::from_millis(RETRY_DELAY_MS)),
        )
    }

    pub fn with_retry(api: Arc<dyn ProductApi>, cache: Arc<CatalogCache>, retry: RetryPolicy) -> Self {
        ProductCatalogService { api, cache, retry }
    }

    /// Cache population is coalesced per key: concurrent callers for the
    /// same uncached ID wait on a single upstream fetch.
    async fn get_product_inner(&self, id: &str) -> std::result::Result<ExternalProduct, CatalogError> {
        let api = Arc::clone(&self.api);
        let retry = self.retry.clone();
        let product_id = id.to_string();

        self.cache
            .products()
            .try_get_with(id.to_string(), async move {
                retry
                    .run(
                        || {
                            let api = Arc::clone(&api);
                            let id = product_id.clone();
                            async move { api.fetch_product(&id).await }
                        },
                        CatalogError::is_retryable,
                    )
                    .await
            })
            .await
            .map_err(|err| (*err).clone())
    }

    async fn get_catalog_inner(&self) -> std::result::Result<Vec<ExternalProduct>, CatalogError> {
        let api = Arc::clone(&self.api);
        let retry = self.retry.clone();

        self.cache
            .catalog()
            .try_get_with(CATALOG_CACHE_KEY, async move {
                retry
                    .run(
                        || {
                            let api = Arc::clone(&api);
                            async move { api.fetch_products().await }
                        },
                        CatalogError::is_retryable,
                    )
                    .await
            })
            .await
            .map_err(|err| (*err).clone())
    }
}

#[async_trait]
impl ProductCatalogServiceTrait for ProductCatalogService {
    async fn get_product(&self, id: &str) -> Result<ExternalProduct> {
        self.get_product_inner(id).await.map_err(|err| {
            log::error!("Failed to fetch product id {}: {}", id, err);
            err.into()
        })
    }

    async fn get_products_by_ids(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, ExternalProduct>> {
        let mut seen = HashSet::new();
        let distinct: Vec<&String> = ids.iter().filter(|id| seen.insert(id.as_str())).collect();

        let fetches = distinct.iter().map(|id| async move {
            match self.get_product_inner(id).await {
                Ok(product) => Ok(Some((id.to_string(), product))),
                // Omitted from the mapping; the caller decides what a
                // missing ID means.
                Err(CatalogError::NotFound(_)) => Ok(None),
                Err(err) => Err(err),
            }
        });

        // Fan-out/fan-in: siblings run to completion, but the first
        // availability failure fails the whole batch and discards the rest.
        let mut resolved = HashMap::with_capacity(distinct.len());
        for outcome in join_all(fetches).await {
            match outcome {
                Ok(Some((id, product))) => {
                    resolved.insert(id, product);
                }
                Ok(None) => {}
                Err(err) => {
                    log::error!("Batch product resolution failed: {}", err);
                    return Err(err.into());
                }
            }
        }
        Ok(resolved)
    }

    async fn get_catalog(&self) -> Result<Vec<ExternalProduct>> {
        self.get_catalog_inner().await.map_err(|err| {
            log::error!("Failed to fetch product list: {}", err);
            err.into()
        })
    }
}
