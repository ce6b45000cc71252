use std::{fmt, future::Future, sync::Arc};

use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::core::domain::{
    models::{CacheConfiguration, CacheError},
    services::CacheWriter,
};

/// One named cache backed by a shared [`CacheWriter`].
///
/// Keys and values go through the serialization pairs of the region's
/// configuration. Every put carries the region TTL down to the writer.
pub struct CacheRegion {
    name: String,
    configuration: CacheConfiguration,
    key_prefix: Bytes,
    writer: Arc<dyn CacheWriter>,
}

impl fmt::Debug for CacheRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheRegion")
            .field("name", &self.name)
            .field("configuration", &self.configuration)
            .finish()
    }
}

impl CacheRegion {
    pub fn new(
        name: impl Into<String>,
        configuration: CacheConfiguration,
        writer: Arc<dyn CacheWriter>,
    ) -> Self {
        let name = name.into();
        let key_prefix = Bytes::from(configuration.key_prefix_for(&name));

        Self {
            name,
            configuration,
            key_prefix,
            writer,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn configuration(&self) -> &CacheConfiguration {
        &self.configuration
    }

    pub async fn get<K, V>(&self, key: &K) -> Result<Option<V>, CacheError>
    where
        K: Serialize + ?Sized,
        V: DeserializeOwned,
    {
        let cache_key = self.create_cache_key(key)?;

        match self.writer.get(&self.name, &cache_key).await? {
            Some(bytes) => self.deserialize_value(&bytes).map(Some),
            None => Ok(None),
        }
    }

    pub async fn put<K, V>(&self, key: &K, value: &V) -> Result<(), CacheError>
    where
        K: Serialize + ?Sized,
        V: Serialize + ?Sized,
    {
        let value = self.serialize_value(value)?;
        let cache_key = self.create_cache_key(key)?;

        self.writer
            .put(&self.name, &cache_key, value, self.configuration.ttl())
            .await
    }

    /// Returns the value already cached under `key`, or `None` when `value`
    /// was stored.
    pub async fn put_if_absent<K, V>(&self, key: &K, value: &V) -> Result<Option<V>, CacheError>
    where
        K: Serialize + ?Sized,
        V: Serialize + DeserializeOwned,
    {
        let bytes = self.serialize_value(value)?;
        let cache_key = self.create_cache_key(key)?;

        match self
            .writer
            .put_if_absent(&self.name, &cache_key, bytes, self.configuration.ttl())
            .await?
        {
            Some(existing) => self.deserialize_value(&existing).map(Some),
            None => Ok(None),
        }
    }

    pub async fn evict<K>(&self, key: &K) -> Result<bool, CacheError>
    where
        K: Serialize + ?Sized,
    {
        let cache_key = self.create_cache_key(key)?;
        self.writer.remove(&self.name, &cache_key).await
    }

    /// Removes every entry of this region. With key prefixes disabled this
    /// clears the whole store.
    pub async fn clear(&self) -> Result<usize, CacheError> {
        self.writer.clean(&self.name, &self.key_prefix).await
    }

    /// Cached-call path: returns the cached value or runs `loader` and caches
    /// its result. A `null` result is returned but not stored when the region
    /// disallows null values.
    pub async fn get_or_load<K, V, F, Fut, E>(&self, key: &K, loader: F) -> Result<V, CacheError>
    where
        K: Serialize + ?Sized,
        V: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: fmt::Display,
    {
        if let Some(value) = self.get::<K, V>(key).await? {
            debug!(cache = %self.name, "Cache hit");
            return Ok(value);
        }

        debug!(cache = %self.name, "Cache miss, loading value");

        let value = loader()
            .await
            .map_err(|e| CacheError::Loader(e.to_string()))?;

        let json = to_json(&value)?;
        if json.is_null() && !self.configuration.allow_cache_null_values() {
            return Ok(value);
        }

        let bytes = self.configuration.values().write(&json)?;
        let cache_key = self.create_cache_key(key)?;
        self.writer
            .put(&self.name, &cache_key, bytes, self.configuration.ttl())
            .await?;

        Ok(value)
    }

    fn create_cache_key<K>(&self, key: &K) -> Result<Vec<u8>, CacheError>
    where
        K: Serialize + ?Sized,
    {
        let key = self.configuration.keys().write(&to_json(key)?)?;

        let mut cache_key = Vec::with_capacity(self.key_prefix.len() + key.len());
        cache_key.extend_from_slice(&self.key_prefix);
        cache_key.extend_from_slice(&key);

        Ok(cache_key)
    }

    fn serialize_value<V>(&self, value: &V) -> Result<Bytes, CacheError>
    where
        V: Serialize + ?Sized,
    {
        let json = to_json(value)?;

        if json.is_null() && !self.configuration.allow_cache_null_values() {
            return Err(CacheError::NullValueNotAllowed(self.name.clone()));
        }

        self.configuration.values().write(&json)
    }

    fn deserialize_value<V: DeserializeOwned>(&self, bytes: &[u8]) -> Result<V, CacheError> {
        let json = self.configuration.values().read(bytes)?;
        serde_json::from_value(json).map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, CacheError> {
    serde_json::to_value(value).map_err(|e| CacheError::Serialization(e.to_string()))
}
