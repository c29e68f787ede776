//! Authentication types for the domain layer.
//!
//! The identity provider (Google sign-in in production) is an external
//! collaborator. The domain only sees the signed-in identity it hands over and
//! decides one thing about it: whether the email belongs to the corporate
//! domain.

use thiserror::Error;

/// Identity handed over by the external sign-in provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInIdentity {
    /// Provider-side subject identifier.
    pub subject: String,

    /// Email address from the provider's claims.
    pub email: String,

    /// Display name if the provider supplies one.
    pub display_name: Option<String>,
}

impl SignedInIdentity {
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            display_name,
        }
    }

    /// Returns the display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// The corporate email domain allowed to use the application.
///
/// Stored normalised as `@domain` in lowercase, so `wearesmart.com.br` and
/// `@WeAreSmart.com.br` configure the same predicate and a look-alike such as
/// `x@notwearesmart.com.br` never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorporateDomain(String);

impl CorporateDomain {
    pub fn new(domain: impl AsRef<str>) -> Result<Self, super::ValidationError> {
        let trimmed = domain.as_ref().trim().trim_start_matches('@').to_lowercase();
        if trimmed.is_empty() {
            return Err(super::ValidationError::empty_field("allowed_email_domain"));
        }
        if trimmed.contains('@') || !trimmed.contains('.') {
            return Err(super::ValidationError::invalid_format(
                "allowed_email_domain",
                "expected a domain such as example.com",
            ));
        }
        Ok(Self(format!("@{}", trimmed)))
    }

    /// Returns the normalised `@domain` suffix.
    pub fn suffix(&self) -> &str {
        &self.0
    }

    /// `isAuthorized(email)`: the email ends with the corporate suffix.
    pub fn is_authorized(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        email.len() > self.0.len() && email.ends_with(&self.0)
    }

    /// Checks an identity, returning the rejection as an error.
    pub fn authorize(&self, identity: &SignedInIdentity) -> Result<(), AuthorizationError> {
        if self.is_authorized(&identity.email) {
            Ok(())
        } else {
            Err(AuthorizationError::DomainNotAllowed {
                email: identity.email.clone(),
                required_suffix: self.0.clone(),
            })
        }
    }
}

/// Authorization failures at the session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Email is outside the corporate domain. The session is terminated.
    #[error("Access restricted to {required_suffix} accounts (signed in as {email})")]
    DomainNotAllowed {
        email: String,
        required_suffix: String,
    },

    /// No session is active.
    #[error("Not signed in")]
    NotSignedIn,
}

impl AuthorizationError {
    /// Message shown to the user on rejection.
    pub fn user_message(&self) -> String {
        match self {
            AuthorizationError::DomainNotAllowed {
                required_suffix, ..
            } => format!(
                "Acesso negado. Use uma conta {} para entrar.",
                required_suffix
            ),
            AuthorizationError::NotSignedIn => "Faça login para continuar.".to_string(),
        }
    }
}
