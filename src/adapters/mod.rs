//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Record storage (JSON files, in-memory)
//! - `ai` - Generative text providers and the suggestion advisor

pub mod ai;
pub mod storage;

pub use ai::{AiSuggestionAdvisor, DisabledAdvisor, GeminiProvider, MockAIProvider, OpenAIProvider};
pub use storage::{FileRecordStorage, InMemoryRecordStorage};
