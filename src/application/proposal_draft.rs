//! Proposal draft - a cart plus an optional in-flight suggestion request.
//!
//! The suggestion runs as a background task so the cart stays editable
//! while the advisor works. Its result is never applied on its own: the
//! caller polls or awaits it, then accepts or dismisses it.

use std::mem;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

use crate::domain::catalog::Catalog;
use crate::domain::crm::Deal;
use crate::domain::foundation::DealId;
use crate::domain::proposal::{ProposalCart, Suggestion};
use crate::ports::{AdvisorError, SuggestionAdvisor};

type SuggestionTask = JoinHandle<Result<Suggestion, AdvisorError>>;

/// Where the current suggestion request stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionStatus {
    #[default]
    Idle,
    Pending,
    Ready(Suggestion),
    Unavailable(AdvisorError),
}

impl SuggestionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SuggestionStatus::Pending)
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        match self {
            SuggestionStatus::Ready(suggestion) => Some(suggestion),
            _ => None,
        }
    }
}

/// One proposal being assembled.
pub struct ProposalDraft {
    cart: ProposalCart,
    advisor: Arc<dyn SuggestionAdvisor>,
    status: SuggestionStatus,
    task: Option<SuggestionTask>,
}

impl ProposalDraft {
    pub fn new(advisor: Arc<dyn SuggestionAdvisor>) -> Self {
        Self {
            cart: ProposalCart::new(),
            advisor,
            status: SuggestionStatus::Idle,
            task: None,
        }
    }

    /// Draft with the target deal already selected.
    pub fn for_deal(advisor: Arc<dyn SuggestionAdvisor>, deal_id: DealId) -> Self {
        let mut draft = Self::new(advisor);
        draft.cart.select_deal(deal_id);
        draft
    }

    pub fn cart(&self) -> &ProposalCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut ProposalCart {
        &mut self.cart
    }

    pub fn status(&self) -> &SuggestionStatus {
        &self.status
    }

    /// Starts a suggestion request for `deal` in the background.
    ///
    /// Returns `false` without doing anything while a request is already
    /// pending. Must be called from inside a Tokio runtime; outside one the
    /// status becomes [`SuggestionStatus::Unavailable`].
    pub fn request_suggestion(&mut self, deal: &Deal, catalog: &Catalog) -> bool {
        self.poll_suggestion();
        if self.task.is_some() {
            tracing::debug!(deal_id = %deal.id, "suggestion already pending, ignoring request");
            return false;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                self.status = SuggestionStatus::Unavailable(AdvisorError::TaskFailed(err.to_string()));
                return false;
            }
        };

        let advisor = Arc::clone(&self.advisor);
        let deal = deal.clone();
        let catalog = catalog.clone();
        tracing::debug!(deal_id = %deal.id, "requesting suggestion");

        self.task = Some(runtime.spawn(async move { advisor.suggest(&deal, &catalog).await }));
        self.status = SuggestionStatus::Pending;
        true
    }

    /// Picks up the result if the request has finished. Never blocks.
    pub fn poll_suggestion(&mut self) -> &SuggestionStatus {
        let finished = self.task.as_mut().and_then(|task| task.now_or_never());
        if let Some(joined) = finished {
            self.task = None;
            self.settle(joined);
        }
        &self.status
    }

    /// Waits for a pending request to finish.
    pub async fn await_suggestion(&mut self) -> &SuggestionStatus {
        if let Some(task) = self.task.as_mut() {
            let joined = task.await;
            self.task = None;
            self.settle(joined);
        }
        &self.status
    }

    /// Applies a ready suggestion to the cart and returns the number of
    /// lines added. Returns `None` when no suggestion is ready.
    pub fn accept_suggestion(&mut self, catalog: &Catalog) -> Option<usize> {
        match mem::take(&mut self.status) {
            SuggestionStatus::Ready(suggestion) => {
                let added = self.cart.apply_suggestion(catalog, &suggestion);
                tracing::debug!(
                    suggested = suggestion.suggested_item_ids.len(),
                    added,
                    "suggestion applied"
                );
                Some(added)
            }
            other => {
                self.status = other;
                None
            }
        }
    }

    /// Drops the current suggestion, cancelling it if still pending.
    pub fn dismiss_suggestion(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.status = SuggestionStatus::Idle;
    }

    /// Abandons the draft: cancels any request and empties the cart.
    pub fn discard(&mut self) {
        self.dismiss_suggestion();
        self.cart = ProposalCart::new();
    }

    fn settle(&mut self, joined: Result<Result<Suggestion, AdvisorError>, JoinError>) {
        self.status = match joined {
            Ok(Ok(suggestion)) => SuggestionStatus::Ready(suggestion),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "suggestion unavailable");
                SuggestionStatus::Unavailable(err)
            }
            Err(err) => {
                tracing::warn!(error = %err, "suggestion task did not complete");
                SuggestionStatus::Unavailable(AdvisorError::TaskFailed(err.to_string()))
            }
        };
    }
}

impl Drop for ProposalDraft {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
