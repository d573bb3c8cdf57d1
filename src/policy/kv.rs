use std::collections::HashMap;
use std::path::PathBuf;

use crate::common::errors::KvError;

/// Key-value persistence for the policy store. One string value per key,
/// last write wins, no transactionality.
pub trait KvBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| KvError::Read { path, source })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        std::fs::create_dir_all(&self.root).map_err(|source| KvError::Write {
            path: self.root.clone(),
            source,
        })?;
        let path = self.entry_path(key);
        std::fs::write(&path, value).map_err(|source| KvError::Write { path, source })
    }
}

/// In-process backend for tests and embedding without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
