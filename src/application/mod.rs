//! Application layer - orchestrates domain operations over the ports.
//!
//! - [`Workspace`] binds the entity store to record storage
//! - [`ProposalDraft`] runs the cart and the background suggestion request
//! - [`SessionGate`] admits corporate accounts
//! - [`build_advisor`] wires the configured AI provider

mod advisor;
mod proposal_draft;
mod session_gate;
mod workspace;

pub use advisor::build_advisor;
pub use proposal_draft::{ProposalDraft, SuggestionStatus};
pub use session_gate::{AuthorizedSession, SessionGate};
pub use workspace::{Workspace, WorkspaceError};
