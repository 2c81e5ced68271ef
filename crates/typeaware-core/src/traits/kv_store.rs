use crate::errors::TypeAwareResult;

/// Minimal key-value persistence backend for extension state.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> TypeAwareResult<Option<serde_json::Value>>;
    fn set(&self, key: &str, value: serde_json::Value) -> TypeAwareResult<()>;
    fn remove(&self, key: &str) -> TypeAwareResult<()>;
    fn clear(&self) -> TypeAwareResult<()>;
}
