mod catalog_cache;
mod catalog_errors;
mod catalog_model;
mod catalog_provider;
mod catalog_service;
mod catalog_traits;

pub use catalog_cache::CatalogCache;
pub use catalog_errors::CatalogError;
pub use catalog_model::{to_product_views, ExternalProduct, ProductView};
pub use catalog_provider::{HttpProductApi, ProductApi, ProductApiConfig};
pub use catalog_service::ProductCatalogService;
pub use catalog_traits::ProductCatalogServiceTrait;
