use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::app::Config;
use crate::domain::StoreError;
use crate::ports::KeyValueStore;

const STORAGE_FILE: &str = "storage.json";

/// Durable key-value store backed by a single JSON object file.
///
/// The localStorage analog for a non-browser session: every key lives in
/// one `storage.json` document under the configured directory, rewritten
/// wholesale on each `set`.
#[derive(Debug, Clone)]
pub struct FilesystemKeyValueStore {
    path: PathBuf,
}

impl FilesystemKeyValueStore {
    /// Create a store rooted at the configured storage directory.
    pub fn new(config: &Config) -> Self {
        Self { path: config.storage_path.join(STORAGE_FILE) }
    }

    /// Create a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            path: self.path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

impl KeyValueStore for FilesystemKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(&entries)
            .map_err(|e| StoreError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}
