//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the CRM domain.

mod auth;
mod errors;
mod ids;
mod money;
mod timestamp;

pub use auth::{AuthorizationError, CorporateDomain, SignedInIdentity};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CatalogItemId, ContactId, DealId, LineItemId, ProposalId, TaskId, TeamMemberId};
pub use money::Money;
pub use timestamp::Timestamp;
