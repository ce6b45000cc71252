use std::{sync::Arc, time::Duration};

use tracing::info;
use ttl_cache::{
    CacheComponent, CacheRegion, CacheSettings, InMemCacheWriter, TtlCacheManager, TtlTable,
    registered_components,
};

use crate::{
    app_common::AppError,
    core::{
        domain::{models::cache_names, services::CatalogRepository},
        usecases::{FindProductUseCase, FindUserUseCase, ListOrdersUseCase},
    },
    infrastructure::adapters::StaticCatalogRepository,
};

pub struct CacheDemoModule {
    pub cache_manager: Arc<TtlCacheManager>,
    pub repository: Arc<StaticCatalogRepository>,
    pub find_user_use_case: Arc<FindUserUseCase>,
    pub list_orders_use_case: Arc<ListOrdersUseCase>,
    pub find_product_use_case: Arc<FindProductUseCase>,
}

impl CacheDemoModule {
    pub fn init_dependencies(settings: &CacheSettings) -> Result<Self, AppError> {
        let mut components = registered_components();
        components.extend(load_ttl_table(settings)?);

        let writer = Arc::new(InMemCacheWriter::new());
        let cache_manager = Arc::new(
            TtlCacheManager::builder(writer)
                .default_configuration(settings.default_configuration())
                .conflict_policy(settings.conflict_policy)
                .initialize(&components)?,
        );

        let repository = Arc::new(StaticCatalogRepository::new(Duration::from_millis(50)));

        Self::build(cache_manager, repository)
    }

    pub fn build(
        cache_manager: Arc<TtlCacheManager>,
        repository: Arc<StaticCatalogRepository>,
    ) -> Result<Self, AppError> {
        let catalog: Arc<dyn CatalogRepository> = repository.clone();

        let find_user_use_case = Arc::new(FindUserUseCase::new(
            region(&cache_manager, cache_names::USERS)?,
            catalog.clone(),
        ));
        let list_orders_use_case = Arc::new(ListOrdersUseCase::new(
            region(&cache_manager, cache_names::ORDERS)?,
            region(&cache_manager, cache_names::ORDER_COUNTS)?,
            catalog.clone(),
        ));
        let find_product_use_case = Arc::new(FindProductUseCase::new(
            region(&cache_manager, cache_names::PRODUCTS)?,
            catalog,
        ));

        Ok(Self {
            cache_manager,
            repository,
            find_user_use_case,
            list_orders_use_case,
            find_product_use_case,
        })
    }
}

fn region(manager: &TtlCacheManager, name: &str) -> Result<Arc<CacheRegion>, AppError> {
    manager
        .cache(name)
        .ok_or_else(|| AppError::MissingCache(name.to_string()))
}

fn load_ttl_table(settings: &CacheSettings) -> Result<Vec<Box<dyn CacheComponent>>, AppError> {
    let Some(path) = &settings.ttl_table else {
        return Ok(Vec::new());
    };

    info!(path = %path.display(), "Loading TTL table");
    Ok(TtlTable::load(path)?.into_components())
}
