//! Durable key/value backends for the persisted snapshot.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous string store keyed by a fixed record name
/// (`localStorage` on the web).
pub trait SnapshotStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same records, so a test can keep a
/// handle and inspect what the store wrote or build a second store over it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn record(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend used when no durable storage exists (private browsing, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStorage;

impl SnapshotStorage for NoStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
