use std::{collections::HashMap, sync::Arc};

use tracing::{debug, info, warn};

use crate::core::{
    domain::{
        models::{CacheConfiguration, CacheExpire, ConflictPolicy, KeyPrefix, RegistryError},
        services::{CacheComponent, SerializationPair},
    },
    services::{CacheConfigurationRegistry, JsonSerializer, StringSerializer},
};

/// Which operation put a name into the registry, and with which TTL.
#[derive(Debug, Clone)]
struct Origin {
    operation: String,
    expire: i64,
}

/// Startup-only builder of the per-cache-name configuration map.
///
/// `scan` walks the operation tables of every component and `register`s the
/// names of operations carrying both a `Cacheable` marker and a
/// `CacheExpire` declaration. `build` consumes the builder; the resulting
/// [`CacheConfigurationRegistry`] is read-only.
pub struct RegistryBuilder {
    keys: Arc<dyn SerializationPair>,
    values: Arc<dyn SerializationPair>,
    key_prefix: KeyPrefix,
    conflict_policy: ConflictPolicy,
    order: Vec<String>,
    entries: HashMap<String, CacheConfiguration>,
    origins: HashMap<String, Origin>,
}

impl RegistryBuilder {
    pub fn new(keys: Arc<dyn SerializationPair>, values: Arc<dyn SerializationPair>) -> Self {
        Self {
            keys,
            values,
            key_prefix: KeyPrefix::Simple,
            conflict_policy: ConflictPolicy::default(),
            order: Vec::new(),
            entries: HashMap::new(),
            origins: HashMap::new(),
        }
    }

    pub fn with_conflict_policy(mut self, conflict_policy: ConflictPolicy) -> Self {
        self.conflict_policy = conflict_policy;
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: KeyPrefix) -> Self {
        if key_prefix.uses_prefix() {
            self.key_prefix = key_prefix;
        } else {
            debug!("Ignoring disabled key prefix for TTL caches");
            self.key_prefix = KeyPrefix::Simple;
        }
        self
    }

    pub fn scan(&mut self, components: &[Box<dyn CacheComponent>]) -> Result<(), RegistryError> {
        for component in components {
            self.scan_component(component.as_ref())?;
        }

        info!(
            components = components.len(),
            caches = self.order.len(),
            "Cache TTL scan finished"
        );

        Ok(())
    }

    pub fn scan_component(&mut self, component: &dyn CacheComponent) -> Result<(), RegistryError> {
        let component_name = component.component_name();

        if component_name.trim().is_empty() {
            return Err(RegistryError::MalformedComponent {
                component: component_name.to_string(),
                reason: "component name is empty".to_string(),
            });
        }

        for operation in component.operations() {
            if operation.name.trim().is_empty() {
                return Err(RegistryError::MalformedComponent {
                    component: component_name.to_string(),
                    reason: "operation without a name".to_string(),
                });
            }

            let Some((cacheable, expire)) = operation.ttl_declaration() else {
                continue;
            };

            let origin = format!("{component_name}::{}", operation.name);

            self.check_conflicts(&origin, &cacheable.cache_names, expire)?;

            let registered = self.register(&cacheable.cache_names, Some(expire));

            if registered > 0 {
                for cache_name in cacheable.cache_names.iter().filter(|n| !n.is_empty()) {
                    self.origins.insert(
                        cache_name.clone(),
                        Origin {
                            operation: origin.clone(),
                            expire: expire.expire,
                        },
                    );
                }
            }
        }

        Ok(())
    }

    /// Stores a configuration for every non-empty name when `expire` is a
    /// positive TTL, overwriting any previous entry for that name. Returns
    /// how many names were registered.
    ///
    /// `KeyPrefix::Disabled` is never applied here: every TTL region keeps
    /// its own key space.
    pub fn register(&mut self, cache_names: &[String], expire: Option<&CacheExpire>) -> usize {
        let Some(ttl) = expire.and_then(CacheExpire::as_duration) else {
            debug!(
                ?cache_names,
                expire = expire.map(|e| e.expire),
                "Skipping cache names without a positive TTL"
            );
            return 0;
        };

        let mut registered = 0;

        for cache_name in cache_names {
            if cache_name.is_empty() {
                debug!("Skipping empty cache name");
                continue;
            }

            let config = CacheConfiguration::default_config()
                .entry_ttl(ttl)
                .disable_caching_null_values()
                .with_key_prefix(self.key_prefix.clone())
                .serialize_keys_with(self.keys.clone())
                .serialize_values_with(self.values.clone());

            if self.entries.insert(cache_name.clone(), config).is_none() {
                self.order.push(cache_name.clone());
            }
            // direct registrations are not attributed to an operation
            self.origins.remove(cache_name);

            debug!(cache_name = %cache_name, ?ttl, "Registered cache TTL");
            registered += 1;
        }

        registered
    }

    fn check_conflicts(
        &self,
        origin: &str,
        cache_names: &[String],
        expire: &CacheExpire,
    ) -> Result<(), RegistryError> {
        if !expire.is_positive() {
            return Ok(());
        }

        for cache_name in cache_names.iter().filter(|n| !n.is_empty()) {
            let Some(previous) = self.origins.get(cache_name) else {
                continue;
            };

            // Operation names are not unique within a component (overloads,
            // repeated table rows), so only the TTL value decides.
            if previous.expire == expire.expire {
                continue;
            }

            match self.conflict_policy {
                ConflictPolicy::Reject => {
                    return Err(RegistryError::ConflictingTtl {
                        cache_name: cache_name.clone(),
                        first_operation: previous.operation.clone(),
                        first_ms: previous.expire,
                        second_operation: origin.to_string(),
                        second_ms: expire.expire,
                    });
                }
                ConflictPolicy::LastWins => {
                    warn!(
                        cache_name = %cache_name,
                        previous = %previous.operation,
                        previous_ms = previous.expire,
                        current = %origin,
                        current_ms = expire.expire,
                        "Cache TTL overwritten by a later operation"
                    );
                }
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn build(self) -> CacheConfigurationRegistry {
        CacheConfigurationRegistry::from_parts(self.order, self.entries)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new(Arc::new(StringSerializer), Arc::new(JsonSerializer))
    }
}
