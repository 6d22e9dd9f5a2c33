use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::StoreError;
use crate::ports::KeyValueStore;

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    // Arc<Mutex> so clones observe the same underlying map.
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
