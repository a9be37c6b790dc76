mod packages_model;
mod packages_repository;
mod packages_service;
mod packages_traits;

pub use packages_model::{
    LineItemView, NewPackage, Package, PackageLineItem, PackagePage, PackageSummary,
    PackageUpdate, PackageView,
};
pub use packages_repository::InMemoryPackageRepository;
pub use packages_service::PackageService;
pub use packages_traits::{PackageRepositoryTrait, PackageServiceTrait};
