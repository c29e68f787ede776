//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStorage` - Persistence of whole entity collections
//! - `AIProvider` - Generative text service used by the advisor
//! - `SuggestionAdvisor` - Catalog recommendations for a deal

mod ai_provider;
mod record_storage;
mod suggestion_advisor;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
pub use record_storage::{RecordStorage, RecordStorageError};
pub use suggestion_advisor::{AdvisorError, SuggestionAdvisor};
