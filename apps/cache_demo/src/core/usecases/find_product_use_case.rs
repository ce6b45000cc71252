use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use ttl_cache::CacheRegion;

use crate::{
    app_common::AppError,
    core::domain::{models::Product, services::CatalogRepository},
};

/// `products` carries no TTL declaration and uses the default configuration.
pub struct FindProductUseCase {
    cache: Arc<CacheRegion>,
    repository: Arc<dyn CatalogRepository>,
}

impl FindProductUseCase {
    pub fn new(cache: Arc<CacheRegion>, repository: Arc<dyn CatalogRepository>) -> Self {
        Self { cache, repository }
    }
}

#[async_trait]
impl UseCase<String, Option<Product>, AppError> for FindProductUseCase {
    async fn execute(&self, sku: String) -> Result<Option<Product>, AppError> {
        let repository = self.repository.clone();
        let lookup = sku.clone();

        let product = self
            .cache
            .get_or_load(&sku, || async move { repository.find_product(&lookup).await })
            .await?;

        Ok(product)
    }
}

#[async_trait]
impl UseCaseValidatable<String, Option<Product>, AppError> for FindProductUseCase {
    async fn validate(&self, sku: &String) -> Result<(), AppError> {
        if sku.trim().is_empty() {
            return Err(AppError::BadRequest("SKU is empty".to_string()));
        }

        Ok(())
    }
}
