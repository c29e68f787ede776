//! Storage Adapters
//!
//! Implementations of the RecordStorage port for persisting entity
//! collections.
//!
//! ## Available Adapters
//!
//! - **FileRecordStorage** - Stores each collection as a JSON file on disk
//! - **InMemoryRecordStorage** - Stores collections in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRecordStorage, InMemoryRecordStorage};
//!
//! // Production: file-based storage
//! let storage = FileRecordStorage::new("./data");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryRecordStorage::new();
//! ```

mod file_record_storage;
mod in_memory_record_storage;

pub use file_record_storage::FileRecordStorage;
pub use in_memory_record_storage::InMemoryRecordStorage;
