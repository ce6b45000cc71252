use async_trait::async_trait;

use crate::{
    app_common::AppError,
    core::domain::models::{Order, Product, User},
};

/// Slow source of truth sitting behind the caches.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_user(&self, user_id: u64) -> Result<Option<User>, AppError>;

    async fn orders_for(&self, user_id: u64) -> Result<Vec<Order>, AppError>;

    async fn find_product(&self, sku: &str) -> Result<Option<Product>, AppError>;
}
