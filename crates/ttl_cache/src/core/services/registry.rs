use std::{collections::HashMap, sync::Arc};

use crate::core::domain::models::CacheConfiguration;

/// Frozen name -> configuration mapping produced by `RegistryBuilder::build`.
///
/// There is no way to add, replace or remove an entry once built. Clones
/// share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct CacheConfigurationRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    order: Vec<String>,
    entries: HashMap<String, CacheConfiguration>,
}

impl CacheConfigurationRegistry {
    pub(crate) fn from_parts(
        order: Vec<String>,
        entries: HashMap<String, CacheConfiguration>,
    ) -> Self {
        Self {
            inner: Arc::new(RegistryInner { order, entries }),
        }
    }

    pub fn get(&self, cache_name: &str) -> Option<&CacheConfiguration> {
        self.inner.entries.get(cache_name)
    }

    pub fn contains(&self, cache_name: &str) -> bool {
        self.inner.entries.contains_key(cache_name)
    }

    pub fn len(&self) -> usize {
        self.inner.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.order.is_empty()
    }

    /// Cache names in the order they were first registered.
    pub fn cache_names(&self) -> impl Iterator<Item = &str> {
        self.inner.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheConfiguration)> {
        self.inner
            .order
            .iter()
            .filter_map(|name| self.inner.entries.get(name).map(|cfg| (name.as_str(), cfg)))
    }
}

impl PartialEq for CacheConfigurationRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.inner.order == other.inner.order && self.inner.entries == other.inner.entries
    }
}
