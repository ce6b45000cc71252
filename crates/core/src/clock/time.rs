use std::time::Duration;

/// A point in time, in milliseconds since the unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppTime {
    date: u64,
}

impl AppTime {
    #[inline]
    pub fn new(date: u64) -> Self {
        Self { date }
    }

    pub fn is_before(&self, date2: &AppTime) -> bool {
        self.date < date2.date
    }

    pub fn is_before_or_eq(&self, date2: &AppTime) -> bool {
        self.date <= date2.date
    }

    /// Saturates at `u64::MAX` instead of wrapping for very long TTLs.
    pub fn plus(&self, duration: Duration) -> AppTime {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        AppTime::new(self.date.saturating_add(millis))
    }

    pub fn as_millis_u64(&self) -> u64 {
        self.date
    }
}

impl From<u128> for AppTime {
    fn from(value: u128) -> Self {
        AppTime::new(u64::try_from(value).unwrap_or(u64::MAX))
    }
}
