//! Suggestion Advisor Port - recommends catalog items for a deal.
//!
//! The advisor is optional and read-only: it sees a deal and the catalog
//! and returns a [`Suggestion`]. Applying the suggestion to a cart is the
//! caller's decision.

use async_trait::async_trait;

use crate::domain::catalog::Catalog;
use crate::domain::crm::Deal;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::proposal::Suggestion;
use crate::ports::{AIError, ProviderInfo};

/// Reasons a suggestion could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisorError {
    /// No generative service is configured.
    #[error("suggestion advisor is disabled")]
    Disabled,

    /// The generative service failed (network, auth, rate limit).
    #[error("provider error: {0}")]
    Provider(#[from] AIError),

    /// The service replied with something that is not a suggestion.
    #[error("malformed suggestion: {0}")]
    MalformedResponse(String),

    /// The background request was cancelled or panicked.
    #[error("suggestion task failed: {0}")]
    TaskFailed(String),
}

impl AdvisorError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::SuggestionUnavailable
    }

    /// Advisory text shown next to the suggestion button.
    pub fn user_message(&self) -> &'static str {
        match self {
            AdvisorError::Disabled => "Sugestões de IA não estão configuradas.",
            _ => "Sugestão indisponível no momento. Tente novamente.",
        }
    }
}

impl From<AdvisorError> for DomainError {
    fn from(err: AdvisorError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Port for catalog recommendations.
#[async_trait]
pub trait SuggestionAdvisor: Send + Sync {
    /// Recommend catalog items for `deal`.
    ///
    /// # Errors
    /// Any failure leaves the caller's cart untouched; callers report it as
    /// "suggestion unavailable".
    async fn suggest(&self, deal: &Deal, catalog: &Catalog) -> Result<Suggestion, AdvisorError>;

    /// The generative provider behind this advisor, if any.
    fn provider_info(&self) -> Option<ProviderInfo> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_maps_to_suggestion_unavailable() {
        for err in [
            AdvisorError::Disabled,
            AdvisorError::Provider(AIError::AuthenticationFailed),
            AdvisorError::malformed("not json"),
        ] {
            assert_eq!(err.code(), ErrorCode::SuggestionUnavailable);
        }
    }

    #[test]
    fn provider_errors_convert() {
        let err: AdvisorError = AIError::network("reset").into();
        assert!(err.to_string().contains("network error"));
        assert!(err.user_message().contains("indisponível"));
    }
}
