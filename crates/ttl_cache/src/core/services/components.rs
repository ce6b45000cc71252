//! Compile-time registration of cache components.
//!
//! A component submits an entry into [`CACHE_COMPONENTS`] and is picked up by
//! [`registered_components`] when the cache manager starts:
//!
//! ```ignore
//! #[linkme::distributed_slice(CACHE_COMPONENTS)]
//! static USER_SERVICE: CacheComponentEntry = CacheComponentEntry {
//!     name: "user_service",
//!     factory: || Box::new(UserService::component()),
//! };
//! ```

use tracing::debug;

use crate::core::domain::{models::CachedOperation, services::CacheComponent};

pub struct CacheComponentEntry {
    pub name: &'static str,
    pub factory: fn() -> Box<dyn CacheComponent>,
}

#[linkme::distributed_slice]
pub static CACHE_COMPONENTS: [CacheComponentEntry] = [..];

/// Instantiates every registered component, in slice order.
pub fn registered_components() -> Vec<Box<dyn CacheComponent>> {
    CACHE_COMPONENTS
        .iter()
        .map(|entry| {
            debug!(component = entry.name, "Loading registered cache component");
            (entry.factory)()
        })
        .collect()
}

/// A component described by plain data, e.g. one loaded from a TTL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticComponent {
    name: String,
    operations: Vec<CachedOperation>,
}

impl StaticComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: CachedOperation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn push(&mut self, operation: CachedOperation) {
        self.operations.push(operation);
    }

    pub fn boxed(self) -> Box<dyn CacheComponent> {
        Box::new(self)
    }
}

impl CacheComponent for StaticComponent {
    fn component_name(&self) -> &str {
        &self.name
    }

    fn operations(&self) -> Vec<CachedOperation> {
        self.operations.clone()
    }
}
