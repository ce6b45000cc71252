use crate::core::domain::models::{CacheExpire, Cacheable};

/// One entry of the table a component publishes about its operations.
///
/// This stands in for runtime introspection: each component lists the
/// operations it exposes together with their cache markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedOperation {
    pub name: String,
    pub cacheable: Option<Cacheable>,
    pub expire: Option<CacheExpire>,
}

impl CachedOperation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cacheable: None,
            expire: None,
        }
    }

    pub fn cacheable<I, S>(mut self, cache_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cacheable = Some(Cacheable::new(cache_names));
        self
    }

    pub fn expire(mut self, millis: i64) -> Self {
        self.expire = Some(CacheExpire::millis(millis));
        self
    }

    pub fn default_expire(mut self) -> Self {
        self.expire = Some(CacheExpire::default());
        self
    }

    /// Both markers, when present. The TTL value itself is checked later.
    #[inline]
    pub fn ttl_declaration(&self) -> Option<(&Cacheable, &CacheExpire)> {
        self.cacheable.as_ref().zip(self.expire.as_ref())
    }
}
