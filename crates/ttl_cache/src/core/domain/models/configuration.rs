use std::{fmt, sync::Arc, time::Duration};

use crate::core::{
    domain::{models::KeyPrefix, services::SerializationPair},
    services::{JsonSerializer, StringSerializer},
};

/// Immutable settings of one cache region.
///
/// Every `with`-style method consumes `self` and returns a modified copy, so
/// a value handed to a region can never change underneath it.
#[derive(Clone)]
pub struct CacheConfiguration {
    ttl: Option<Duration>,
    cache_null_values: bool,
    key_prefix: KeyPrefix,
    keys: Arc<dyn SerializationPair>,
    values: Arc<dyn SerializationPair>,
}

impl CacheConfiguration {
    /// No expiration, null values allowed, `"{name}::"` key prefix, string
    /// keys and JSON values.
    pub fn default_config() -> Self {
        Self {
            ttl: None,
            cache_null_values: true,
            key_prefix: KeyPrefix::Simple,
            keys: Arc::new(StringSerializer),
            values: Arc::new(JsonSerializer),
        }
    }

    /// A zero duration means entries never expire.
    pub fn entry_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = (!ttl.is_zero()).then_some(ttl);
        self
    }

    pub fn disable_caching_null_values(mut self) -> Self {
        self.cache_null_values = false;
        self
    }

    pub fn serialize_keys_with(mut self, keys: Arc<dyn SerializationPair>) -> Self {
        self.keys = keys;
        self
    }

    pub fn serialize_values_with(mut self, values: Arc<dyn SerializationPair>) -> Self {
        self.values = values;
        self
    }

    pub fn prefix_cache_names_with(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = KeyPrefix::Prefixed(prefix.into());
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: KeyPrefix) -> Self {
        self.key_prefix = key_prefix;
        self
    }

    pub fn disable_key_prefix(self) -> Self {
        self.with_key_prefix(KeyPrefix::Disabled)
    }

    #[inline]
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    #[inline]
    pub fn allow_cache_null_values(&self) -> bool {
        self.cache_null_values
    }

    #[inline]
    pub fn key_prefix(&self) -> &KeyPrefix {
        &self.key_prefix
    }

    pub fn key_prefix_for(&self, cache_name: &str) -> String {
        self.key_prefix.compute(cache_name)
    }

    #[inline]
    pub fn keys(&self) -> &Arc<dyn SerializationPair> {
        &self.keys
    }

    #[inline]
    pub fn values(&self) -> &Arc<dyn SerializationPair> {
        &self.values
    }
}

impl Default for CacheConfiguration {
    fn default() -> Self {
        Self::default_config()
    }
}

impl fmt::Debug for CacheConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfiguration")
            .field("ttl", &self.ttl)
            .field("cache_null_values", &self.cache_null_values)
            .field("key_prefix", &self.key_prefix)
            .field("keys", &self.keys.name())
            .field("values", &self.values.name())
            .finish()
    }
}

// Serializers compare by name: two configurations built from equivalent
// serializer instances are the same configuration.
impl PartialEq for CacheConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.ttl == other.ttl
            && self.cache_null_values == other.cache_null_values
            && self.key_prefix == other.key_prefix
            && self.keys.name() == other.keys.name()
            && self.values.name() == other.values.name()
    }
}
