use dashmap::DashMap;
use serde_json::Value;
use typeaware_core::traits::IKeyValueStore;
use typeaware_core::TypeAwareResult;

/// Process-local backend. Cheap to construct; used by tests and by hosts
/// that persist state some other way.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: DashMap<String, Value>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IKeyValueStore for InMemoryKvStore {
    fn get(&self, key: &str) -> TypeAwareResult<Option<Value>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: Value) -> TypeAwareResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> TypeAwareResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> TypeAwareResult<()> {
        self.entries.clear();
        Ok(())
    }
}
