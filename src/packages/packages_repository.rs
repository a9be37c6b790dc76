use async_trait::async_trait;
use dashmap::DashMap;

use super::packages_model::Package;
use super::packages_traits::PackageRepositoryTrait;
use crate::errors::Result;

/// Process-local package store backed by a concurrent map.
///
/// The default implementation of the repository contract; a durable engine
/// plugs in behind the same trait. Inserts replace the whole aggregate, so
/// a package and its line items always land together.
pub struct InMemoryPackageRepository {
    packages: DashMap<String, Package>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        InMemoryPackageRepository {
            packages: DashMap::new(),
        }
    }
}

impl Default for InMemoryPackageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageRepositoryTrait for InMemoryPackageRepository {
    async fn save(&self, package: Package) -> Result<Package> {
        self.packages.insert(package.id.clone(), package.clone());
        Ok(package)
    }

    async fn find_active_by_id(&self, id: &str) -> Result<Option<Package>> {
        Ok(self
            .packages
            .get(id)
            .map(|entry| entry.value().clone())
            .filter(|package| !package.deleted))
    }

    async fn find_any_by_id(&self, id: &str) -> Result<Option<Package>> {
        Ok(self.packages.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_active_paged(&self, page: usize, size: usize) -> Result<(Vec<Package>, u64)> {
        let mut active: Vec<Package> = self
            .packages
            .iter()
            .filter(|entry| !entry.value().deleted)
            .map(|entry| entry.value().clone())
            .collect();

        // Newest first; the ID breaks ties deterministically.
        active.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = active.len() as u64;
        let items = active
            .into_iter()
            .skip(page.saturating_mul(size))
            .take(size)
            .collect();
        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn package(id: &str, minutes_ago: i64, deleted: bool) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Package {}", id),
            description: None,
            total_price_usd: dec!(10.00),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            deleted,
            products: Vec::new(),
        }
    }

    #[tokio::test]
    async fn save_is_an_upsert() {
        let repo = InMemoryPackageRepository::new();
        let original = package("p1", 0, false);
        repo.save(original.clone()).await.unwrap();

        let mut renamed = original.clone();
        renamed.name = "Renamed".to_string();
        repo.save(renamed).await.unwrap();

        let found = repo.find_any_by_id("p1").await.unwrap().unwrap();
        assert_eq!(found.name, "Renamed");
        let (_, total) = repo.find_active_paged(0, 10).await.unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn active_lookup_excludes_deleted_packages() {
        let repo = InMemoryPackageRepository::new();
        repo.save(package("gone", 0, true)).await.unwrap();

        assert!(repo.find_active_by_id("gone").await.unwrap().is_none());
        assert!(repo.find_any_by_id("gone").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn paging_sorts_newest_first_and_slices() {
        let repo = InMemoryPackageRepository::new();
        repo.save(package("oldest", 30, false)).await.unwrap();
        repo.save(package("newest", 0, false)).await.unwrap();
        repo.save(package("middle", 15, false)).await.unwrap();
        repo.save(package("deleted", 5, true)).await.unwrap();

        let (first_page, total) = repo.find_active_paged(0, 2).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(first_page[0].id, "newest");
        assert_eq!(first_page[1].id, "middle");

        let (second_page, _) = repo.find_active_paged(1, 2).await.unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].id, "oldest");

        let (beyond, _) = repo.find_active_paged(5, 2).await.unwrap();
        assert!(beyond.is_empty());
    }
}
