use thiserror::Error;
use ttl_cache::{CacheError, ConfigError, RegistryError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cache startup failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Cache region not available: {0}")]
    MissingCache(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}
