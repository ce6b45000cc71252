pub mod cache_manager;
pub mod cache_region;
pub mod components;
pub mod registry;
pub mod registry_builder;
pub mod serializers;

pub use cache_manager::{TtlCacheManager, TtlCacheManagerBuilder};
pub use cache_region::CacheRegion;
pub use components::{
    CACHE_COMPONENTS, CacheComponentEntry, StaticComponent, registered_components,
};
pub use registry::CacheConfigurationRegistry;
pub use registry_builder::RegistryBuilder;
pub use serializers::{JsonSerializer, StringSerializer};
