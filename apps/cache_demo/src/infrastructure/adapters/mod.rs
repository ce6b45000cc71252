pub mod static_catalog_repository;

pub use static_catalog_repository::StaticCatalogRepository;
