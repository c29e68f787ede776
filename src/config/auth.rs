//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::CorporateDomain;

/// Authentication configuration
///
/// Identity is established by an external provider; this crate only checks
/// the signed-in email against the corporate domain.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Email domain allowed to sign in, without the `@`
    #[serde(default = "default_domain")]
    pub allowed_email_domain: String,
}

impl AuthConfig {
    /// The configured domain as a checked value
    pub fn corporate_domain(&self) -> Result<CorporateDomain, ValidationError> {
        CorporateDomain::new(&self.allowed_email_domain)
            .map_err(|_| ValidationError::InvalidEmailDomain(self.allowed_email_domain.clone()))
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.corporate_domain().map(|_| ())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allowed_email_domain: default_domain(),
        }
    }
}

fn default_domain() -> String {
    "wearesmart.com.br".to_string()
}
