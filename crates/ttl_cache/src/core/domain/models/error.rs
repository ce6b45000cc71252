use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Cache '{0}' does not allow null values")]
    NullValueNotAllowed(String),

    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Value loader failed: {0}")]
    Loader(String),
}

/// Startup failures of the TTL scan. Any of these aborts initialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(
        "Conflicting TTL for cache '{cache_name}': {first_operation} declares {first_ms}ms, {second_operation} declares {second_ms}ms"
    )]
    ConflictingTtl {
        cache_name: String,
        first_operation: String,
        first_ms: i64,
        second_operation: String,
        second_ms: i64,
    },

    #[error("Malformed component '{component}': {reason}")]
    MalformedComponent { component: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },

    #[error("Could not read TTL table {path}: {reason}")]
    TtlTableIo { path: String, reason: String },

    #[error("Invalid TTL table: {0}")]
    TtlTableFormat(String),
}
