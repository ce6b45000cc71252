use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::core::{
    domain::{
        models::{CacheConfiguration, ConflictPolicy, RegistryError},
        services::{CacheComponent, CacheWriter, SerializationPair},
    },
    services::{CacheConfigurationRegistry, CacheRegion, RegistryBuilder, registered_components},
};

/// Cache manager whose regions carry per-name TTLs declared by components.
///
/// Built once at startup through [`TtlCacheManager::builder`]: the component
/// scan produces a frozen [`CacheConfigurationRegistry`], then one region is
/// created per configured name. Names never seen during the scan get a
/// region with the default configuration the first time they are asked for.
pub struct TtlCacheManager {
    writer: Arc<dyn CacheWriter>,
    default_configuration: CacheConfiguration,
    registry: CacheConfigurationRegistry,
    caches: DashMap<String, Arc<CacheRegion>>,
}

impl TtlCacheManager {
    pub fn builder(writer: Arc<dyn CacheWriter>) -> TtlCacheManagerBuilder {
        TtlCacheManagerBuilder::new(writer)
    }

    fn new(
        writer: Arc<dyn CacheWriter>,
        default_configuration: CacheConfiguration,
        registry: CacheConfigurationRegistry,
    ) -> Self {
        let manager = Self {
            writer,
            default_configuration,
            registry,
            caches: DashMap::new(),
        };

        manager.load_caches();
        manager
    }

    fn load_caches(&self) {
        for (name, configuration) in self.registry.iter() {
            let region = CacheRegion::new(name, configuration.clone(), self.writer.clone());
            self.caches.insert(name.to_string(), Arc::new(region));
        }

        info!(
            regions = self.caches.len(),
            "Cache regions created from TTL declarations"
        );
    }

    /// `None` only for an empty name.
    pub fn cache(&self, name: &str) -> Option<Arc<CacheRegion>> {
        if name.is_empty() {
            return None;
        }

        if let Some(region) = self.caches.get(name) {
            return Some(region.value().clone());
        }

        let region = self
            .caches
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(cache = %name, "Creating cache region with default configuration");
                Arc::new(CacheRegion::new(
                    name,
                    self.default_configuration.clone(),
                    self.writer.clone(),
                ))
            })
            .value()
            .clone();

        Some(region)
    }

    /// Configured names first, in registration order, then names created on
    /// demand, sorted.
    pub fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.cache_names().map(str::to_string).collect();

        let mut dynamic: Vec<String> = self
            .caches
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|name| !self.registry.contains(name))
            .collect();
        dynamic.sort();

        names.extend(dynamic);
        names
    }

    #[inline]
    pub fn registry(&self) -> &CacheConfigurationRegistry {
        &self.registry
    }

    #[inline]
    pub fn default_configuration(&self) -> &CacheConfiguration {
        &self.default_configuration
    }

    pub fn is_configured(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}

pub struct TtlCacheManagerBuilder {
    writer: Arc<dyn CacheWriter>,
    default_configuration: CacheConfiguration,
    keys: Option<Arc<dyn SerializationPair>>,
    values: Option<Arc<dyn SerializationPair>>,
    conflict_policy: ConflictPolicy,
}

impl TtlCacheManagerBuilder {
    fn new(writer: Arc<dyn CacheWriter>) -> Self {
        Self {
            writer,
            default_configuration: CacheConfiguration::default_config(),
            keys: None,
            values: None,
            conflict_policy: ConflictPolicy::default(),
        }
    }

    pub fn default_configuration(mut self, configuration: CacheConfiguration) -> Self {
        self.default_configuration = configuration;
        self
    }

    /// Key serializer of TTL-configured regions. Defaults to the one of the
    /// default configuration.
    pub fn key_serializer(mut self, keys: Arc<dyn SerializationPair>) -> Self {
        self.keys = Some(keys);
        self
    }

    pub fn value_serializer(mut self, values: Arc<dyn SerializationPair>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn conflict_policy(mut self, conflict_policy: ConflictPolicy) -> Self {
        self.conflict_policy = conflict_policy;
        self
    }

    /// Scans `components` once and creates the manager. Any scan error
    /// aborts startup.
    pub fn initialize(
        self,
        components: &[Box<dyn CacheComponent>],
    ) -> Result<TtlCacheManager, RegistryError> {
        let Self {
            writer,
            default_configuration,
            keys,
            values,
            conflict_policy,
        } = self;

        let keys = keys.unwrap_or_else(|| default_configuration.keys().clone());
        let values = values.unwrap_or_else(|| default_configuration.values().clone());

        let mut builder = RegistryBuilder::new(keys, values)
            .with_conflict_policy(conflict_policy)
            .with_key_prefix(default_configuration.key_prefix().clone());

        builder.scan(components)?;

        Ok(TtlCacheManager::new(
            writer,
            default_configuration,
            builder.build(),
        ))
    }

    /// Same as `initialize` over every component in `CACHE_COMPONENTS`.
    pub fn initialize_registered(self) -> Result<TtlCacheManager, RegistryError> {
        self.initialize(&registered_components())
    }
}
