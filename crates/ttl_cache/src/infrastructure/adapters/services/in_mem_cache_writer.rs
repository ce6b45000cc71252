use std::{sync::Arc, time::Duration};

use app_core::clock::{AppClock, AppTime, Clock};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::{DashMap, mapref::entry::Entry};
use tracing::trace;

use crate::core::domain::{models::CacheError, services::CacheWriter};

#[derive(Clone)]
pub(crate) struct StoredEntry {
    pub value: Bytes,
    pub expires_at: Option<AppTime>,
}

impl StoredEntry {
    #[inline]
    fn new(value: Bytes, expires_at: Option<AppTime>) -> Self {
        Self {
            value,
            expires_at,
        }
    }

    #[inline]
    fn is_expired(&self, now: &AppTime) -> bool {
        self.expires_at
            .as_ref()
            .is_some_and(|exp| exp.is_before_or_eq(now))
    }
}

/// Process-local [`CacheWriter`].
///
/// Entries expire at `put time + ttl`; an expired entry reads as absent and
/// is dropped when touched. There is no capacity bound and no background
/// reaper, `purge_expired` sweeps on demand.
pub struct InMemCacheWriter {
    pub(crate) map: DashMap<Vec<u8>, StoredEntry>,
    clock: Arc<dyn Clock>,
}

impl InMemCacheWriter {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(AppClock::new()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            map: DashMap::new(),
            clock,
        }
    }

    #[inline]
    fn expires_at(&self, ttl: Option<Duration>) -> Option<AppTime> {
        ttl.map(|ttl| self.clock.now_millis().plus(ttl))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_millis();
        let before = self.map.len();
        self.map.retain(|_, entry| !entry.is_expired(&now));
        before.saturating_sub(self.map.len())
    }
}

impl Default for InMemCacheWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheWriter for InMemCacheWriter {
    async fn put(
        &self,
        name: &str,
        key: &[u8],
        value: Bytes,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let expires_at = self.expires_at(ttl);

        self.map
            .insert(key.to_vec(), StoredEntry::new(value, expires_at));

        trace!(cache = %name, ?ttl, "Stored entry");
        Ok(())
    }

    async fn put_if_absent(
        &self,
        name: &str,
        key: &[u8],
        value: Bytes,
        ttl: Option<Duration>,
    ) -> Result<Option<Bytes>, CacheError> {
        let now = self.clock.now_millis();
        let expires_at = ttl.map(|ttl| now.plus(ttl));

        match self.map.entry(key.to_vec()) {
            Entry::Occupied(mut occ) => {
                if !occ.get().is_expired(&now) {
                    return Ok(Some(occ.get().value.clone()));
                }
                *occ.get_mut() = StoredEntry::new(value, expires_at);
            }
            Entry::Vacant(vac) => {
                vac.insert(StoredEntry::new(value, expires_at));
            }
        }

        trace!(cache = %name, ?ttl, "Stored absent entry");
        Ok(None)
    }

    async fn get(&self, _name: &str, key: &[u8]) -> Result<Option<Bytes>, CacheError> {
        let now = self.clock.now_millis();

        if let Some(entry) = self.map.get(key) {
            if entry.is_expired(&now) {
                drop(entry);
                self.map.remove_if(key, |_, e| e.is_expired(&now));
                return Ok(None);
            }

            return Ok(Some(entry.value.clone()));
        }

        Ok(None)
    }

    async fn remove(&self, _name: &str, key: &[u8]) -> Result<bool, CacheError> {
        Ok(self.map.remove(key).is_some())
    }

    async fn clean(&self, name: &str, key_prefix: &[u8]) -> Result<usize, CacheError> {
        // An empty prefix matches the entries of every region.
        if key_prefix.is_empty() {
            return Err(CacheError::Backend(format!(
                "cannot clean cache '{name}' without a key prefix"
            )));
        }

        let before = self.map.len();
        self.map.retain(|key, _| !key.starts_with(key_prefix));
        let removed = before.saturating_sub(self.map.len());

        trace!(cache = %name, removed, "Cleaned entries");
        Ok(removed)
    }
}
