//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers, and
//! the suggestion advisor built on top of them.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI chat-completions models
//! - `GeminiProvider` - Google Gemini models
//! - `AiSuggestionAdvisor` - SuggestionAdvisor over any AIProvider
//! - `DisabledAdvisor` - SuggestionAdvisor used when AI is switched off

mod gemini_provider;
mod http_support;
mod mock_provider;
mod openai_provider;
mod suggestion_advisor;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
pub use suggestion_advisor::{AiSuggestionAdvisor, DisabledAdvisor};
