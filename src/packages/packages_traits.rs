use async_trait::async_trait;

use super::packages_model::{NewPackage, Package, PackagePage, PackageUpdate, PackageView};
use crate::errors::Result;

/// Contract the durable package store must satisfy.
///
/// `save` is an upsert and persists the package together with all of its
/// line items as a single atomic unit. Packages are independent aggregates;
/// no cross-package locking is expected of an implementation.
#[async_trait]
pub trait PackageRepositoryTrait: Send + Sync {
    async fn save(&self, package: Package) -> Result<Package>;

    /// Excludes soft-deleted packages.
    async fn find_active_by_id(&self, id: &str) -> Result<Option<Package>>;

    /// Includes soft-deleted packages, for delete-idempotency checks.
    async fn find_any_by_id(&self, id: &str) -> Result<Option<Package>>;

    /// Active packages sorted by creation time, newest first. Returns the
    /// requested page slice plus the total number of active packages.
    async fn find_active_paged(&self, page: usize, size: usize) -> Result<(Vec<Package>, u64)>;
}

/// Trait defining the contract for package aggregation operations.
#[async_trait]
pub trait PackageServiceTrait: Send + Sync {
    async fn create(&self, request: NewPackage) -> Result<PackageView>;
    async fn get_by_id(&self, id: &str, currency: Option<&str>) -> Result<PackageView>;
    async fn list(&self, page: usize, size: usize, currency: Option<&str>) -> Result<PackagePage>;
    async fn update(&self, id: &str, request: PackageUpdate) -> Result<PackageView>;
    async fn soft_delete(&self, id: &str) -> Result<()>;
}
