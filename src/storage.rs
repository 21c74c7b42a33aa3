use viewer_core::{SnapshotStorage, StorageError};
use web_sys as web;

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    inner: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[storage] localStorage unavailable; state lasts for this session only");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl SnapshotStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}
