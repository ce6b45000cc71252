use bytes::Bytes;
use serde_json::Value;

use crate::core::domain::{models::CacheError, services::SerializationPair};

/// UTF-8 strings. Numbers and booleans are written through their display
/// form so they can be used as keys; structured values are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringSerializer;

impl SerializationPair for StringSerializer {
    fn name(&self) -> &'static str {
        "string"
    }

    fn write(&self, value: &Value) -> Result<Bytes, CacheError> {
        match value {
            Value::String(s) => Ok(Bytes::copy_from_slice(s.as_bytes())),
            Value::Number(n) => Ok(Bytes::from(n.to_string())),
            Value::Bool(b) => Ok(Bytes::from(b.to_string())),
            other => Err(CacheError::Serialization(format!(
                "string serializer cannot write {other}"
            ))),
        }
    }

    fn read(&self, bytes: &[u8]) -> Result<Value, CacheError> {
        std::str::from_utf8(bytes)
            .map(|s| Value::String(s.to_string()))
            .map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl SerializationPair for JsonSerializer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn write(&self, value: &Value) -> Result<Bytes, CacheError> {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(|e| CacheError::Serialization(e.to_string()))
    }

    fn read(&self, bytes: &[u8]) -> Result<Value, CacheError> {
        serde_json::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))
    }
}
