use std::sync::Arc;

use app_core::UseCase;
use async_trait::async_trait;
use ttl_cache::CacheRegion;

use crate::{
    app_common::AppError,
    core::domain::{models::Order, services::CatalogRepository},
};

#[derive(Debug)]
pub struct ListOrdersOutput {
    pub orders: Vec<Order>,
    pub count: usize,
}

/// Orders and their count live in two regions declared by the same
/// operation, so they share one TTL but expire independently.
pub struct ListOrdersUseCase {
    orders_cache: Arc<CacheRegion>,
    counts_cache: Arc<CacheRegion>,
    repository: Arc<dyn CatalogRepository>,
}

impl ListOrdersUseCase {
    pub fn new(
        orders_cache: Arc<CacheRegion>,
        counts_cache: Arc<CacheRegion>,
        repository: Arc<dyn CatalogRepository>,
    ) -> Self {
        Self {
            orders_cache,
            counts_cache,
            repository,
        }
    }
}

#[async_trait]
impl UseCase<u64, ListOrdersOutput, AppError> for ListOrdersUseCase {
    async fn execute(&self, user_id: u64) -> Result<ListOrdersOutput, AppError> {
        let repository = self.repository.clone();

        let orders: Vec<Order> = self
            .orders_cache
            .get_or_load(&user_id, || async move { repository.orders_for(user_id).await })
            .await?;

        let count = orders.len();
        self.counts_cache.put(&user_id, &count).await?;

        Ok(ListOrdersOutput { orders, count })
    }
}
