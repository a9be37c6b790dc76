use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::packages_model::{
    LineItemView, NewPackage, Package, PackageLineItem, PackagePage, PackageSummary,
    PackageUpdate, PackageView,
};
use super::packages_traits::{PackageRepositoryTrait, PackageServiceTrait};
use crate::catalog::ProductCatalogServiceTrait;
use crate::constants::DEFAULT_CURRENCY;
use crate::errors::{Error, Result};
use crate::fx::{self, FxServiceTrait};

/// Orchestrates package creation, currency-projected reads, updates and
/// soft deletion. External-service calls always complete before any
/// repository write, so no storage transaction spans a network call.
pub struct PackageService {
    repository: Arc<dyn PackageRepositoryTrait>,
    catalog: Arc<dyn ProductCatalogServiceTrait>,
    fx: Arc<dyn FxServiceTrait>,
}

impl PackageService {
    pub fn new(
        repository: Arc<dyn PackageRepositoryTrait>,
        catalog: Arc<dyn ProductCatalogServiceTrait>,
        fx: Arc<dyn FxServiceTrait>,
    ) -> Self {
        PackageService {
            repository,
            catalog,
            fx,
        }
    }

    /// Blank or absent currency means the base currency.
    fn target_currency(currency: Option<&str>) -> String {
        match currency {
            Some(code) if !code.trim().is_empty() => code.trim().to_ascii_uppercase(),
            _ => DEFAULT_CURRENCY.to_string(),
        }
    }

    async fn display_rate(&self, currency: &str) -> Result<Decimal> {
        if currency.eq_ignore_ascii_case(DEFAULT_CURRENCY) {
            return Ok(Decimal::ONE);
        }
        self.fx.rate_usd_to(currency).await
    }

    fn to_view(package: &Package, currency: &str, rate: Decimal) -> PackageView {
        PackageView {
            id: package.id.clone(),
            name: package.name.clone(),
            description: package.description.clone(),
            total_price: fx::convert(package.total_price_usd, rate),
            currency: currency.to_string(),
            created_at: package.created_at,
            products: package
                .products
                .iter()
                .map(|item| LineItemView {
                    external_product_id: item.external_product_id.clone(),
                    product_name: item.product_name.clone(),
                    price: fx::convert(item.product_price_usd, rate),
                })
                .collect(),
        }
    }

    fn to_summary(package: &Package, currency: &str, rate: Decimal) -> PackageSummary {
        PackageSummary {
            id: package.id.clone(),
            name: package.name.clone(),
            description: package.description.clone(),
            total_price: fx::convert(package.total_price_usd, rate),
            currency: currency.to_string(),
            created_at: package.created_at,
        }
    }
}

#[async_trait]
impl PackageServiceTrait for PackageService {
    async fn create(&self, request: NewPackage) -> Result<PackageView> {
        if request.name.trim().is_empty() {
            return Err(Error::Validation("Package name must not be blank".to_string()));
        }
        if request.product_ids.is_empty() {
            return Err(Error::Validation("At least one product is required".to_string()));
        }

        // Deduplicate preserving first-occurrence order; line item order is
        // user-observable in the response.
        let mut seen = HashSet::new();
        let unique_ids: Vec<String> = request
            .product_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        log::info!(
            "Creating package '{}' with {} product(s)",
            request.name,
            unique_ids.len()
        );

        let resolved = self.catalog.get_products_by_ids(&unique_ids).await?;
        if resolved.len() != unique_ids.len() {
            return Err(Error::InvalidProduct(
                "One or more products do not exist or are unavailable".to_string(),
            ));
        }

        let mut products = Vec::with_capacity(unique_ids.len());
        let mut total_usd = Decimal::ZERO;
        for product_id in &unique_ids {
            let product = resolved.get(product_id).ok_or_else(|| {
                Error::InvalidProduct(format!("Missing product data for id: {}", product_id))
            })?;
            let price = product.usd_price.ok_or_else(|| {
                Error::InvalidProduct(format!("Missing price for product id: {}", product_id))
            })?;
            total_usd += price;
            products.push(PackageLineItem {
                external_product_id: product.id.clone(),
                product_name: product.name.clone(),
                product_price_usd: price,
            });
        }

        let package = Package::new(request.name, request.description, total_usd, products);
        let saved = self.repository.save(package).await?;
        // Freshly created packages are served in the base currency.
        Ok(Self::to_view(&saved, DEFAULT_CURRENCY, Decimal::ONE))
    }

    async fn get_by_id(&self, id: &str, currency: Option<&str>) -> Result<PackageView> {
        let target = Self::target_currency(currency);
        let package = self
            .repository
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Package not found: {}", id)))?;
        let rate = self.display_rate(&target).await?;
        Ok(Self::to_view(&package, &target, rate))
    }

    async fn list(&self, page: usize, size: usize, currency: Option<&str>) -> Result<PackagePage> {
        if size == 0 {
            return Err(Error::Validation("Page size must be positive".to_string()));
        }
        let target = Self::target_currency(currency);
        // One rate lookup per call, shared by every item on the page.
        let rate = self.display_rate(&target).await?;

        let (items, total_elements) = self.repository.find_active_paged(page, size).await?;
        let content = items
            .iter()
            .map(|package| Self::to_summary(package, &target, rate))
            .collect();

        let total_pages = total_elements.div_ceil(size as u64);
        Ok(PackagePage {
            content,
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: total_pages == 0 || page as u64 >= total_pages - 1,
        })
    }

    async fn update(&self, id: &str, request: PackageUpdate) -> Result<PackageView> {
        if request.name.trim().is_empty() {
            return Err(Error::Validation("Package name must not be blank".to_string()));
        }
        let mut package = self
            .repository
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Package not found: {}", id)))?;

        // Line items and the stored total are immutable.
        package.name = request.name;
        package.description = request.description;
        let saved = self.repository.save(package).await?;
        Ok(Self::to_view(&saved, DEFAULT_CURRENCY, Decimal::ONE))
    }

    async fn soft_delete(&self, id: &str) -> Result<()> {
        let mut package = self
            .repository
            .find_any_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Package not found: {}", id)))?;

        if package.deleted {
            // Already deleted; idempotent no-op.
            return Ok(());
        }

        package.deleted = true;
        self.repository.save(package).await?;
        log::info!("Soft deleted package: {}", id);
        Ok(())
    }
}
