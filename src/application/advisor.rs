//! Wires the configured generative provider into a suggestion advisor.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::adapters::ai::{
    AiSuggestionAdvisor, DisabledAdvisor, GeminiConfig, GeminiProvider, OpenAIConfig,
    OpenAIProvider,
};
use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider, AdvisorError, SuggestionAdvisor};

/// Builds the advisor selected by `config.provider`.
///
/// A disabled provider yields an advisor that always reports
/// [`AdvisorError::Disabled`].
pub fn build_advisor(config: &AiConfig) -> Result<Arc<dyn SuggestionAdvisor>, AdvisorError> {
    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Disabled => return Ok(Arc::new(DisabledAdvisor)),
        AiProvider::OpenAI => {
            let mut provider_config = OpenAIConfig::new(api_key(&config.openai_api_key)?)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(model) = &config.model {
                provider_config = provider_config.with_model(model);
            }
            if let Some(url) = &config.base_url {
                provider_config = provider_config.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(provider_config)?)
        }
        AiProvider::Gemini => {
            let mut provider_config = GeminiConfig::new(api_key(&config.gemini_api_key)?)
                .with_timeout(config.timeout())
                .with_max_retries(config.max_retries);
            if let Some(model) = &config.model {
                provider_config = provider_config.with_model(model);
            }
            if let Some(url) = &config.base_url {
                provider_config = provider_config.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(provider_config)?)
        }
    };

    let mut advisor = AiSuggestionAdvisor::new(provider);
    if let Some(temperature) = config.temperature {
        advisor = advisor.with_temperature(temperature);
    }
    Ok(Arc::new(advisor))
}

fn api_key(key: &Option<SecretString>) -> Result<String, AIError> {
    key.as_ref()
        .map(|k| k.expose_secret().trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or(AIError::AuthenticationFailed)
}
