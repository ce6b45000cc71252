//! TTL declarations kept in a TOML file instead of in code.
//!
//! ```toml
//! [[operation]]
//! component = "user_service"
//! name = "find_user"
//! cache_names = ["users"]
//! expire_ms = 60000
//!
//! [[operation]]
//! component = "report_service"
//! name = "monthly_report"
//! cache_names = ["reports"]
//! default_expire = true
//! ```
//!
//! An operation with neither `expire_ms` nor `default_expire` is cacheable
//! without a TTL declaration and keeps the default configuration.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::{
    domain::{
        models::{CacheExpire, Cacheable, CachedOperation, ConfigError},
        services::CacheComponent,
    },
    services::StaticComponent,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TtlTable {
    #[serde(default, rename = "operation")]
    pub operations: Vec<TtlTableEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtlTableEntry {
    pub component: String,
    pub name: String,
    #[serde(default)]
    pub cache_names: Vec<String>,
    pub expire_ms: Option<i64>,
    #[serde(default)]
    pub default_expire: bool,
}

impl TtlTableEntry {
    fn to_operation(&self) -> CachedOperation {
        let expire = match (self.expire_ms, self.default_expire) {
            (Some(millis), _) => Some(CacheExpire::millis(millis)),
            (None, true) => Some(CacheExpire::default()),
            (None, false) => None,
        };

        CachedOperation {
            name: self.name.clone(),
            cacheable: Some(Cacheable::new(self.cache_names.iter().cloned())),
            expire,
        }
    }
}

impl TtlTable {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::TtlTableFormat(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::TtlTableIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_toml_str(&raw)
    }

    /// Groups entries by component, keeping the order components first
    /// appear in the file.
    pub fn into_components(self) -> Vec<Box<dyn CacheComponent>> {
        let mut components: Vec<StaticComponent> = Vec::new();
        let mut names: Vec<String> = Vec::new();

        for entry in &self.operations {
            let operation = entry.to_operation();

            match names.iter().position(|n| n == &entry.component) {
                Some(idx) => components[idx].push(operation),
                None => {
                    names.push(entry.component.clone());
                    components.push(
                        StaticComponent::new(entry.component.clone()).with_operation(operation),
                    );
                }
            }
        }

        components.into_iter().map(StaticComponent::boxed).collect()
    }
}
