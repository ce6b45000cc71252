use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::core::domain::models::CacheError;

/// Low level access to the key-value store backing every cache region.
///
/// Keys arrive fully prefixed and serialized; the writer never interprets
/// them. `name` is the region issuing the call.
#[async_trait]
pub trait CacheWriter: Send + Sync {
    async fn put(
        &self,
        name: &str,
        key: &[u8],
        value: Bytes,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError>;

    /// Stores `value` only when no live entry exists and returns the entry
    /// that was already there otherwise.
    async fn put_if_absent(
        &self,
        name: &str,
        key: &[u8],
        value: Bytes,
        ttl: Option<Duration>,
    ) -> Result<Option<Bytes>, CacheError>;

    async fn get(&self, name: &str, key: &[u8]) -> Result<Option<Bytes>, CacheError>;

    async fn remove(&self, name: &str, key: &[u8]) -> Result<bool, CacheError>;

    /// Removes every key starting with `key_prefix`, returning how many.
    async fn clean(&self, name: &str, key_prefix: &[u8]) -> Result<usize, CacheError>;
}
