use std::{env, path::PathBuf, time::Duration};

use crate::core::domain::models::{CacheConfiguration, ConfigError, ConflictPolicy};

pub const DEFAULT_TTL_VAR: &str = "CACHE_DEFAULT_TTL_MS";
pub const NULL_VALUES_VAR: &str = "CACHE_NULL_VALUES";
pub const KEY_PREFIX_VAR: &str = "CACHE_KEY_PREFIX";
pub const CONFLICT_VAR: &str = "CACHE_TTL_CONFLICT";
pub const TTL_TABLE_VAR: &str = "CACHE_TTL_TABLE";

/// Manager-wide cache settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheSettings {
    /// TTL of regions without a declaration. `None` keeps entries forever.
    pub default_ttl: Option<Duration>,
    pub cache_null_values: bool,
    pub key_prefix: Option<String>,
    pub conflict_policy: ConflictPolicy,
    pub ttl_table: Option<PathBuf>,
}

impl CacheSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the settings from any variable source. Unset and blank
    /// variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let default_ttl = match read(DEFAULT_TTL_VAR) {
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|_| invalid(DEFAULT_TTL_VAR, &raw))?;
                (millis > 0).then(|| Duration::from_millis(millis))
            }
            None => None,
        };

        let cache_null_values = match read(NULL_VALUES_VAR) {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(invalid(NULL_VALUES_VAR, &raw)),
            },
            None => true,
        };

        let conflict_policy = match read(CONFLICT_VAR) {
            Some(raw) => raw
                .parse::<ConflictPolicy>()
                .map_err(|_| invalid(CONFLICT_VAR, &raw))?,
            None => ConflictPolicy::default(),
        };

        Ok(Self {
            default_ttl,
            cache_null_values,
            key_prefix: read(KEY_PREFIX_VAR),
            conflict_policy,
            ttl_table: read(TTL_TABLE_VAR).map(PathBuf::from),
        })
    }

    /// Configuration used by regions without a TTL declaration.
    pub fn default_configuration(&self) -> CacheConfiguration {
        let mut configuration = CacheConfiguration::default_config();

        if let Some(ttl) = self.default_ttl {
            configuration = configuration.entry_ttl(ttl);
        }
        if !self.cache_null_values {
            configuration = configuration.disable_caching_null_values();
        }
        if let Some(prefix) = &self.key_prefix {
            configuration = configuration.prefix_cache_names_with(prefix.clone());
        }

        configuration
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value: value.to_string(),
    }
}
