use crate::core::domain::models::CachedOperation;

/// A component managed by the host application.
///
/// Instead of being introspected at runtime, a component publishes the table
/// of its operations and their cache markers. The TTL scan reads this table
/// exactly once, before any cache region exists.
pub trait CacheComponent: Send + Sync {
    fn component_name(&self) -> &str;

    fn operations(&self) -> Vec<CachedOperation>;
}
