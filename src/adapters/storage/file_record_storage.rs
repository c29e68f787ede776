//! File-based Record Storage Adapter
//!
//! Stores each entity collection as a JSON file named after its storage
//! key (`smart_deals.json`, ...) inside one data directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::store::CollectionKey;
use crate::ports::{RecordStorage, RecordStorageError};

/// File-based storage for entity collections
#[derive(Debug, Clone)]
pub struct FileRecordStorage {
    base_path: PathBuf,
}

impl FileRecordStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileRecordStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a collection
    fn file_path(&self, key: CollectionKey) -> PathBuf {
        self.base_path.join(format!("{}.json", key.storage_key()))
    }
}

#[async_trait]
impl RecordStorage for FileRecordStorage {
    async fn load(&self, key: CollectionKey) -> Result<Option<String>, RecordStorageError> {
        match fs::read_to_string(self.file_path(key)).await {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: CollectionKey, json: &str) -> Result<(), RecordStorageError> {
        fs::create_dir_all(&self.base_path).await?;

        // Write-then-rename so a crash never leaves a half-written collection.
        let target = self.file_path(key);
        let staging = target.with_extension("json.tmp");
        fs::write(&staging, json).await?;
        fs::rename(&staging, &target).await?;

        tracing::trace!(key = key.storage_key(), bytes = json.len(), "collection written");
        Ok(())
    }
}
