//! Proposal builder - cart, commit path, suggestions and the printable
//! document.

mod aggregator;
mod cart;
mod document;
mod errors;
mod item;
mod record;
mod suggestion;

pub use aggregator::{commit, CommitOutcome};
pub use cart::{ProposalCart, MAX_QUANTITY};
pub use document::ProposalDocument;
pub use errors::ProposalError;
pub use item::ProposalItem;
pub use record::{Proposal, ProposalStatus};
pub use suggestion::{Suggestion, DEADLINE_ON_REQUEST};
