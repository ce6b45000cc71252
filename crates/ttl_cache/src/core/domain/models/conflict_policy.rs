use std::str::FromStr;

use crate::core::domain::models::ConfigError;

/// What the scan does when two different operations declare different TTLs
/// for the same cache name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Abort the scan with `RegistryError::ConflictingTtl`.
    #[default]
    Reject,
    /// Keep the declaration scanned last and log a warning.
    LastWins,
}

impl FromStr for ConflictPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(ConflictPolicy::Reject),
            "last-wins" | "last_wins" => Ok(ConflictPolicy::LastWins),
            other => Err(ConfigError::InvalidValue {
                var: "conflict policy".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
