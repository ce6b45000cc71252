use std::time::Duration;

/// Expiration applied when an operation attaches a `CacheExpire` without an
/// explicit value.
pub const DEFAULT_EXPIRE_MILLIS: i64 = 1000 * 60 * 50 * 24;

/// TTL declaration attached to a cacheable operation, in milliseconds.
///
/// The value is not validated here. A non-positive `expire` is accepted and
/// simply means "do not override the default configuration" when the
/// registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheExpire {
    pub expire: i64,
}

impl CacheExpire {
    #[inline]
    pub const fn millis(expire: i64) -> Self {
        Self { expire }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.expire > 0
    }

    /// `None` when the declaration does not describe a usable TTL.
    pub fn as_duration(&self) -> Option<Duration> {
        u64::try_from(self.expire)
            .ok()
            .filter(|millis| *millis > 0)
            .map(Duration::from_millis)
    }
}

impl Default for CacheExpire {
    fn default() -> Self {
        Self::millis(DEFAULT_EXPIRE_MILLIS)
    }
}
