//! Entity store error types.

use std::fmt::Display;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Update or lookup against an id that is not in the collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Insert of an id that already exists.
    #[error("{kind} already exists: {id}")]
    Duplicate { kind: &'static str, id: String },
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: &impl Display) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn duplicate(kind: &'static str, id: &impl Display) -> Self {
        StoreError::Duplicate {
            kind,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::NotFound { kind, .. } => match *kind {
                "contact" => ErrorCode::ContactNotFound,
                "deal" => ErrorCode::DealNotFound,
                "task" => ErrorCode::TaskNotFound,
                "proposal" => ErrorCode::ProposalNotFound,
                _ => ErrorCode::InternalError,
            },
            StoreError::Duplicate { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_kind_to_code() {
        assert_eq!(
            StoreError::not_found("deal", &"9").code(),
            ErrorCode::DealNotFound
        );
        assert_eq!(
            StoreError::not_found("task", &"9").code(),
            ErrorCode::TaskNotFound
        );
    }

    #[test]
    fn displays_kind_and_id() {
        let err = StoreError::not_found("contact", &"42");
        assert_eq!(err.to_string(), "contact not found: 42");
    }
}
