//! Cache declarations of the use cases, registered at compile time.

use ttl_cache::{CACHE_COMPONENTS, CacheComponent, CacheComponentEntry, CachedOperation};

use crate::core::domain::models::cache_names;

pub struct UserServiceComponent;

impl CacheComponent for UserServiceComponent {
    fn component_name(&self) -> &str {
        "user_service"
    }

    fn operations(&self) -> Vec<CachedOperation> {
        vec![
            CachedOperation::new("find_user")
                .cacheable([cache_names::USERS])
                .expire(60_000),
            CachedOperation::new("list_orders")
                .cacheable([cache_names::ORDERS, cache_names::ORDER_COUNTS])
                .default_expire(),
        ]
    }
}

pub struct ProductServiceComponent;

impl CacheComponent for ProductServiceComponent {
    fn component_name(&self) -> &str {
        "product_service"
    }

    fn operations(&self) -> Vec<CachedOperation> {
        vec![
            CachedOperation::new("find_product").cacheable([cache_names::PRODUCTS]),
            CachedOperation::new("reindex"),
        ]
    }
}

#[linkme::distributed_slice(CACHE_COMPONENTS)]
static USER_SERVICE: CacheComponentEntry = CacheComponentEntry {
    name: "user_service",
    factory: || Box::new(UserServiceComponent),
};

#[linkme::distributed_slice(CACHE_COMPONENTS)]
static PRODUCT_SERVICE: CacheComponentEntry = CacheComponentEntry {
    name: "product_service",
    factory: || Box::new(ProductServiceComponent),
};
