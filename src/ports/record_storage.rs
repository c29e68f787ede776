//! Record Storage Port - Interface for persisting entity collections.
//!
//! Each collection is stored as one JSON document under its storage key and
//! is always written and read as a whole.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::store::CollectionKey;

/// Errors that can occur during record storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordStorageError {
    #[error("Failed to serialize {key}: {message}")]
    SerializationFailed { key: &'static str, message: String },

    #[error("Failed to deserialize {key}: {message}")]
    DeserializationFailed { key: &'static str, message: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl RecordStorageError {
    pub fn serialization(key: CollectionKey, err: impl std::fmt::Display) -> Self {
        Self::SerializationFailed {
            key: key.storage_key(),
            message: err.to_string(),
        }
    }

    pub fn deserialization(key: CollectionKey, err: impl std::fmt::Display) -> Self {
        Self::DeserializationFailed {
            key: key.storage_key(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RecordStorageError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<RecordStorageError> for DomainError {
    fn from(err: RecordStorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for saving and loading serialized record collections
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Load the JSON document stored under `key`
    ///
    /// # Returns
    /// `None` if nothing has been saved under the key yet
    async fn load(&self, key: CollectionKey) -> Result<Option<String>, RecordStorageError>;

    /// Replace the JSON document stored under `key`
    ///
    /// # Errors
    /// Returns `RecordStorageError` if the write fails
    async fn save(&self, key: CollectionKey, json: &str) -> Result<(), RecordStorageError>;
}
