use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::{
    app_common::AppError,
    core::domain::{
        models::{Order, Product, User},
        services::CatalogRepository,
    },
};

/// Hard-coded catalog with an artificial delay, standing in for a database.
pub struct StaticCatalogRepository {
    users: Vec<User>,
    orders: Vec<Order>,
    products: Vec<Product>,
    latency: Duration,
    loads: Mutex<usize>,
}

impl StaticCatalogRepository {
    pub fn new(latency: Duration) -> Self {
        Self {
            users: vec![
                User { id: 1, name: "Ada".to_string() },
                User { id: 2, name: "Grace".to_string() },
            ],
            orders: vec![
                Order { id: 10, user_id: 1, total_cents: 1_250 },
                Order { id: 11, user_id: 1, total_cents: 4_990 },
                Order { id: 12, user_id: 2, total_cents: 300 },
            ],
            products: vec![Product {
                sku: "SKU-1".to_string(),
                title: "Mechanical keyboard".to_string(),
            }],
            latency,
            loads: Mutex::new(0),
        }
    }

    /// How many times the backing data was hit.
    pub fn loads(&self) -> usize {
        *self.loads.lock()
    }

    async fn hit(&self, what: &str) {
        *self.loads.lock() += 1;
        info!(what, "Loading from catalog");
        tokio::time::sleep(self.latency).await;
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn find_user(&self, user_id: u64) -> Result<Option<User>, AppError> {
        self.hit("user").await;
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn orders_for(&self, user_id: u64) -> Result<Vec<Order>, AppError> {
        self.hit("orders").await;
        Ok(self
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_product(&self, sku: &str) -> Result<Option<Product>, AppError> {
        self.hit("product").await;
        Ok(self.products.iter().find(|p| p.sku == sku).cloned())
    }
}
