//! Commit path - freezes the cart into a proposal and syncs the deal.

use super::cart::ProposalCart;
use super::errors::ProposalError;
use super::record::Proposal;
use crate::domain::crm::Deal;
use crate::domain::foundation::DealId;
use crate::domain::store::EntityStore;

/// What a successful commit changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub proposal: Proposal,
    /// The deal after the sync, or `None` when the deal id did not resolve.
    pub synced_deal: Option<Deal>,
}

impl CommitOutcome {
    pub fn deal_synced(&self) -> bool {
        self.synced_deal.is_some()
    }
}

/// Commits the cart as a new proposal for `deal_id`.
///
/// Order of effects: the proposal is prepended to the proposal collection,
/// then the deal takes the proposal total as its value and moves to the
/// proposal stage, then the cart is cleared. A deal id that no longer
/// resolves skips the deal update; the proposal is still created.
///
/// An empty cart fails with [`ProposalError::EmptyCart`] and mutates nothing.
pub fn commit(
    cart: &mut ProposalCart,
    deal_id: &DealId,
    store: &mut EntityStore,
    date: String,
) -> Result<CommitOutcome, ProposalError> {
    if cart.is_empty() {
        return Err(ProposalError::EmptyCart);
    }

    let proposal = Proposal::draft(deal_id.clone(), date, cart.snapshot());
    store.proposals.prepend(proposal.clone())?;

    let synced_deal = match store.deal(deal_id) {
        Some(deal) => {
            let updated = deal.with_proposal_total(proposal.total_value());
            store.deals.update(updated.clone())?;
            Some(updated)
        }
        None => {
            tracing::debug!(deal_id = %deal_id, "proposal references unknown deal, skipping sync");
            None
        }
    };

    cart.clear();

    Ok(CommitOutcome {
        proposal,
        synced_deal,
    })
}
