use moka::future::Cache;
use std::time::Duration;

use super::catalog_model::ExternalProduct;

/// Products and the full catalog expire 30 minutes after being fetched.
pub const PRODUCT_CACHE_TTL_SECS: u64 = 30 * 60;
/// Bound on cached single products; least-recently-used entries are evicted.
pub const PRODUCT_CACHE_MAX_ENTRIES: u64 = 500;

pub(super) const CATALOG_CACHE_KEY: &str = "all-products";

/// In-memory cache shared by single-product and full-catalog lookups.
///
/// Constructed once at process start and handed to the catalog gateway;
/// there is no ambient cache state.
pub struct CatalogCache {
    products: Cache<String, ExternalProduct>,
    catalog: Cache<&'static str, Vec<ExternalProduct>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::with_policy(
            Duration::from_secs(PRODUCT_CACHE_TTL_SECS),
            PRODUCT_CACHE_MAX_ENTRIES,
        )
    }

    pub fn with_policy(ttl: Duration, max_entries: u64) -> Self {
        CatalogCache {
            products: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(max_entries)
                .build(),
            catalog: Cache::builder().time_to_live(ttl).max_capacity(1).build(),
        }
    }

    pub(super) fn products(&self) -> &Cache<String, ExternalProduct> {
        &self.products
    }

    pub(super) fn catalog(&self) -> &Cache<&'static str, Vec<ExternalProduct>> {
        &self.catalog
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}
