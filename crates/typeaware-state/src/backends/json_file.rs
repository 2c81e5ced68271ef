use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use typeaware_core::errors::StorageError;
use typeaware_core::traits::IKeyValueStore;
use typeaware_core::TypeAwareResult;

/// Backend that keeps every key in one JSON object on disk. The whole file
/// is rewritten through a temp file and rename on each mutation.
#[derive(Debug)]
pub struct JsonFileKvStore {
    path: PathBuf,
    entries: Mutex<Map<String, Value>>,
}

impl JsonFileKvStore {
    /// Open `path`, starting empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> TypeAwareResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            if raw.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&raw) {
                    Ok(Value::Object(map)) => map,
                    Ok(_) => {
                        return Err(StorageError::Corrupt {
                            key: path.display().to_string(),
                            reason: "top-level value is not an object".to_string(),
                        }
                        .into())
                    }
                    Err(e) => {
                        return Err(StorageError::Corrupt {
                            key: path.display().to_string(),
                            reason: e.to_string(),
                        }
                        .into())
                    }
                }
            }
        } else {
            Map::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, f: impl FnOnce(&mut Map<String, Value>)) -> TypeAwareResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Backend {
            message: "json store lock poisoned".to_string(),
        })?;
        f(&mut entries);
        self.flush(&entries)
    }

    fn flush(&self, entries: &Map<String, Value>) -> TypeAwareResult<()> {
        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

impl IKeyValueStore for JsonFileKvStore {
    fn get(&self, key: &str) -> TypeAwareResult<Option<Value>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Backend {
            message: "json store lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> TypeAwareResult<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> TypeAwareResult<()> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> TypeAwareResult<()> {
        self.mutate(Map::clear)
    }
}
