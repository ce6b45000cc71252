pub mod cache_expire;
pub mod cacheable;
pub mod configuration;
pub mod conflict_policy;
pub mod error;
pub mod key_prefix;
pub mod operation;

pub use self::cache_expire::{CacheExpire, DEFAULT_EXPIRE_MILLIS};
pub use self::cacheable::Cacheable;
pub use self::configuration::CacheConfiguration;
pub use self::conflict_policy::ConflictPolicy;
pub use self::error::{CacheError, ConfigError, RegistryError};
pub use self::key_prefix::KeyPrefix;
pub use self::operation::CachedOperation;
