use std::fmt;

use bytes::Bytes;
use serde_json::Value;

use crate::core::domain::models::CacheError;

/// Encodes keys or values to the bytes kept in the store, and back.
pub trait SerializationPair: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    fn write(&self, value: &Value) -> Result<Bytes, CacheError>;

    fn read(&self, bytes: &[u8]) -> Result<Value, CacheError>;
}
