use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use ttl_cache::CacheRegion;

use crate::{
    app_common::AppError,
    core::domain::{models::User, services::CatalogRepository},
};

/// Cached under `users` with a one minute TTL.
pub struct FindUserUseCase {
    cache: Arc<CacheRegion>,
    repository: Arc<dyn CatalogRepository>,
}

impl FindUserUseCase {
    pub fn new(cache: Arc<CacheRegion>, repository: Arc<dyn CatalogRepository>) -> Self {
        Self { cache, repository }
    }
}

#[async_trait]
impl UseCase<u64, Option<User>, AppError> for FindUserUseCase {
    async fn execute(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let repository = self.repository.clone();

        let user = self
            .cache
            .get_or_load(&user_id, || async move { repository.find_user(user_id).await })
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl UseCaseValidatable<u64, Option<User>, AppError> for FindUserUseCase {
    async fn validate(&self, user_id: &u64) -> Result<(), AppError> {
        if *user_id == 0 {
            return Err(AppError::BadRequest("User id must be positive".to_string()));
        }

        Ok(())
    }
}
