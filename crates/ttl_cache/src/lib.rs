//! Per-cache-name TTL configuration for a cache manager.
//!
//! Components publish their cacheable operations (with an optional
//! [`CacheExpire`] declaration) as an explicit table. At startup the
//! [`TtlCacheManager`] scans every component once, freezes the resulting
//! name -> [`CacheConfiguration`] mapping and materializes one
//! [`CacheRegion`] per configured name on top of a [`CacheWriter`].

pub mod core;
pub mod infrastructure;


pub use crate::core::domain::models::{
    CacheConfiguration, CacheError, CacheExpire, Cacheable, CachedOperation, ConfigError,
    ConflictPolicy, DEFAULT_EXPIRE_MILLIS, KeyPrefix, RegistryError,
};
pub use crate::core::domain::services::{CacheComponent, CacheWriter, SerializationPair};
pub use crate::core::services::{
    CACHE_COMPONENTS, CacheComponentEntry, CacheConfigurationRegistry, CacheRegion,
    JsonSerializer, RegistryBuilder, StaticComponent, StringSerializer, TtlCacheManager,
    TtlCacheManagerBuilder, registered_components,
};
pub use crate::infrastructure::adapters::services::InMemCacheWriter;
pub use crate::infrastructure::config::{CacheSettings, TtlTable};
