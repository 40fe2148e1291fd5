//! In-memory key-value store for tests

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{TallyError, TallyResult};

use super::KeyValueStore;

/// Volatile store holding values in a map; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TallyResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TallyResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }
}
