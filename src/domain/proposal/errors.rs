//! Proposal-builder error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    /// Commit attempted with no lines in the cart.
    #[error("Cannot commit an empty cart")]
    EmptyCart,

    /// Commit attempted before a deal was selected.
    #[error("No deal selected for this proposal")]
    NoDealSelected,

    /// Line quantity outside `1..=MAX_QUANTITY`.
    #[error("Quantity must be between 1 and 10000, got {quantity}")]
    InvalidQuantity { quantity: u32 },

    /// The store refused the new proposal record.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ProposalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ProposalError::EmptyCart => ErrorCode::EmptyCart,
            ProposalError::NoDealSelected => ErrorCode::ValidationFailed,
            ProposalError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            ProposalError::Store(err) => err.code(),
        }
    }

    /// True for errors the user caused and can fix from the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProposalError::EmptyCart
                | ProposalError::NoDealSelected
                | ProposalError::InvalidQuantity { .. }
        )
    }
}

impl From<ProposalError> for DomainError {
    fn from(err: ProposalError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_is_a_validation_error() {
        let err = ProposalError::EmptyCart;
        assert!(err.is_validation());
        assert_eq!(err.code(), ErrorCode::EmptyCart);
        assert_eq!(err.to_string(), "Cannot commit an empty cart");
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = ProposalError::InvalidQuantity { quantity: 0 }.into();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
    }
}
