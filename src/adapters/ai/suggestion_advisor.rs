//! Suggestion advisor backed by an [`AIProvider`].
//!
//! Builds a single prompt from the deal context and the catalog, asks the
//! provider for a JSON reply, and parses it into a [`Suggestion`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::crm::Deal;
use crate::domain::proposal::Suggestion;
use crate::ports::{
    AIProvider, AdvisorError, CompletionRequest, MessageRole, ProviderInfo, RequestMetadata,
    SuggestionAdvisor,
};

const SYSTEM_PROMPT: &str = "Você é o assistente da Agência Smart, especialista em \
Comunicação Interna e Employer Branding. Você monta propostas comerciais a partir \
do cardápio de serviços da agência e responde sempre em JSON.";

/// Advisor that delegates to a generative text service.
pub struct AiSuggestionAdvisor {
    provider: Arc<dyn AIProvider>,
    temperature: Option<f32>,
}

impl AiSuggestionAdvisor {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The user prompt for one deal.
    pub fn build_prompt(deal: &Deal, catalog: &Catalog) -> String {
        let mut prompt = format!(
            "NEGÓCIO:\nTítulo: {}\nDescrição: {}\nFoco inicial: {}\n\nCARDÁPIO DE SERVIÇOS DISPONÍVEIS:\n",
            deal.title,
            deal.description_or_default(),
            deal.products.join(", ")
        );
        for item in catalog.list_items() {
            prompt.push_str(&format!(
                "- ID {}: {} (Tamanho {})\n",
                item.id,
                item.description,
                item.size.as_str()
            ));
        }
        prompt.push_str(
            "\nINSTRUÇÕES:\n\
             1. Escolha de 2 a 4 IDs do cardápio que mais combinam com este projeto.\n\
             2. Para cada ID escolhido, estime um prazo de entrega realista (ex: 3 dias úteis, 1 semana).\n\
             3. Dê um insight de precificação.\n\
             4. Escreva um parágrafo curto e bem-humorado explicando por que essas escolhas farão o cliente brilhar.\n\
             \n\
             Responda APENAS com um objeto JSON no formato:\n\
             {\"suggestedItemIds\": [\"id1\", \"id2\"], \"deadlines\": {\"id1\": \"prazo\"}, \
             \"pricingInsight\": \"texto\", \"creativeReasoning\": \"texto\"}\n",
        );
        prompt
    }

    /// Parses a model reply. Tolerates a surrounding Markdown code fence and
    /// prose around the JSON object.
    pub fn parse_reply(content: &str) -> Result<Suggestion, AdvisorError> {
        let body = strip_code_fence(content.trim());
        let json = match (body.find('{'), body.rfind('}')) {
            (Some(start), Some(end)) if start < end => &body[start..=end],
            _ => return Err(AdvisorError::malformed("reply contains no JSON object")),
        };
        serde_json::from_str(json).map_err(|e| AdvisorError::malformed(e.to_string()))
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (```json) up to the first newline.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[async_trait]
impl SuggestionAdvisor for AiSuggestionAdvisor {
    async fn suggest(&self, deal: &Deal, catalog: &Catalog) -> Result<Suggestion, AdvisorError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let mut request =
            CompletionRequest::new(RequestMetadata::new(&trace_id).for_deal(deal.id.as_str()))
                .with_system_prompt(SYSTEM_PROMPT)
                .with_message(MessageRole::User, Self::build_prompt(deal, catalog))
                .expecting_json();
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        let response = self.provider.complete(request).await?;
        let suggestion = Self::parse_reply(&response.content)?;

        tracing::debug!(
            deal_id = %deal.id,
            trace_id = %trace_id,
            suggested = suggestion.suggested_item_ids.len(),
            model = %response.model,
            "suggestion received"
        );
        Ok(suggestion)
    }

    fn provider_info(&self) -> Option<ProviderInfo> {
        Some(self.provider.provider_info())
    }
}

/// Advisor used when no generative service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAdvisor;

#[async_trait]
impl SuggestionAdvisor for DisabledAdvisor {
    async fn suggest(&self, _deal: &Deal, _catalog: &Catalog) -> Result<Suggestion, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}
