//! In-Memory Record Storage Adapter
//!
//! Keeps serialized collections in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::store::CollectionKey;
use crate::ports::{RecordStorage, RecordStorageError};

/// In-memory storage for entity collections
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStorage {
    documents: Arc<RwLock<HashMap<CollectionKey, String>>>,
    writes: Arc<RwLock<Vec<CollectionKey>>>,
}

impl InMemoryRecordStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.documents.write().await.clear();
        self.writes.write().await.clear();
    }

    /// Keys in the order they were saved, including repeats
    pub async fn write_log(&self) -> Vec<CollectionKey> {
        self.writes.read().await.clone()
    }

    /// Forget recorded writes, keeping the stored documents
    pub async fn clear_write_log(&self) {
        self.writes.write().await.clear();
    }

    /// Get the number of stored collections
    pub async fn collection_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl RecordStorage for InMemoryRecordStorage {
    async fn load(&self, key: CollectionKey) -> Result<Option<String>, RecordStorageError> {
        Ok(self.documents.read().await.get(&key).cloned())
    }

    async fn save(&self, key: CollectionKey, json: &str) -> Result<(), RecordStorageError> {
        self.documents.write().await.insert(key, json.to_string());
        self.writes.write().await.push(key);
        Ok(())
    }
}
