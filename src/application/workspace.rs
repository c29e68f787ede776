//! Workspace - the entity store bound to its persistence.
//!
//! Every mutation goes through the store first and then rewrites the
//! affected collection as a whole. Reads never touch storage.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::proposal_draft::ProposalDraft;
use crate::domain::catalog::Catalog;
use crate::domain::crm::{
    demo_contacts, demo_deals, Contact, ContactForm, Deal, DealForm, DealStage, Task, TaskForm,
};
use crate::domain::dashboard::PipelineSummary;
use crate::domain::foundation::{
    ContactId, DealId, DomainError, ErrorCode, ProposalId, TaskId, Timestamp, ValidationError,
};
use crate::domain::proposal::{commit, CommitOutcome, ProposalCart, ProposalDocument, ProposalError};
use crate::domain::store::{CollectionKey, EntityStore, StoreError};
use crate::ports::{RecordStorage, RecordStorageError};

/// Failures surfaced by workspace operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkspaceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Proposal(#[from] ProposalError),

    #[error("Storage error: {0}")]
    Storage(#[from] RecordStorageError),
}

impl WorkspaceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkspaceError::Validation(_) => ErrorCode::ValidationFailed,
            WorkspaceError::Store(err) => err.code(),
            WorkspaceError::Proposal(err) => err.code(),
            WorkspaceError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<WorkspaceError> for DomainError {
    fn from(err: WorkspaceError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// The CRM state of one running application.
pub struct Workspace {
    store: EntityStore,
    storage: Arc<dyn RecordStorage>,
    catalog: Catalog,
}

impl Workspace {
    /// Loads every collection from `storage`.
    ///
    /// A collection that has never been saved starts empty. When
    /// `seed_demo_data` is set and both contacts and deals come back empty,
    /// the demo records are installed and persisted.
    pub async fn load(
        storage: Arc<dyn RecordStorage>,
        catalog: Catalog,
        seed_demo_data: bool,
    ) -> Result<Self, WorkspaceError> {
        let contacts: Vec<Contact> = read_collection(storage.as_ref(), CollectionKey::Contacts).await?;
        let deals: Vec<Deal> = read_collection(storage.as_ref(), CollectionKey::Deals).await?;
        let tasks = read_collection(storage.as_ref(), CollectionKey::Tasks).await?;
        let proposals = read_collection(storage.as_ref(), CollectionKey::Proposals).await?;

        let seed = seed_demo_data && contacts.is_empty() && deals.is_empty();
        let (contacts, deals) = if seed {
            (demo_contacts()?, demo_deals()?)
        } else {
            (contacts, deals)
        };
        let store = EntityStore::from_parts(contacts, deals, tasks, proposals);

        let workspace = Self {
            store,
            storage,
            catalog,
        };

        if seed {
            tracing::info!("installing demo contacts and deals");
            workspace.persist(CollectionKey::Contacts).await?;
            workspace.persist(CollectionKey::Deals).await?;
        }

        tracing::info!(
            contacts = workspace.store.contacts().len(),
            deals = workspace.store.deals().len(),
            tasks = workspace.store.tasks().len(),
            proposals = workspace.store.proposals().len(),
            "workspace loaded"
        );

        Ok(workspace)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Dashboard aggregates over the current deals.
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary::from_deals(self.store.deals(), self.store.contacts().len())
    }

    /// Printable view of a committed proposal.
    pub fn document(&self, id: &ProposalId) -> Option<ProposalDocument<'_>> {
        self.store
            .proposal(id)
            .map(|proposal| ProposalDocument::new(proposal, &self.store))
    }

    // Contacts

    pub async fn add_contact(&mut self, form: ContactForm) -> Result<Contact, WorkspaceError> {
        let contact = form.into_record()?;
        self.store.add_contact(contact.clone())?;
        self.persist(CollectionKey::Contacts).await?;
        Ok(contact)
    }

    pub async fn update_contact(
        &mut self,
        id: &ContactId,
        form: ContactForm,
    ) -> Result<Contact, WorkspaceError> {
        let contact = form.apply_to(id.clone())?;
        self.store.update_contact(contact.clone())?;
        self.persist(CollectionKey::Contacts).await?;
        Ok(contact)
    }

    // Deals

    pub async fn add_deal(&mut self, form: DealForm) -> Result<Deal, WorkspaceError> {
        let deal = form.into_record()?;
        self.store.add_deal(deal.clone())?;
        self.persist(CollectionKey::Deals).await?;
        Ok(deal)
    }

    pub async fn update_deal(&mut self, id: &DealId, form: DealForm) -> Result<Deal, WorkspaceError> {
        let deal = form.apply_to(id.clone())?;
        self.store.update_deal(deal.clone())?;
        self.persist(CollectionKey::Deals).await?;
        Ok(deal)
    }

    pub async fn move_deal(&mut self, id: &DealId, stage: DealStage) -> Result<Deal, WorkspaceError> {
        let deal = self.store.move_deal(id, stage)?.clone();
        tracing::debug!(deal_id = %id, stage = stage.label(), "deal moved");
        self.persist(CollectionKey::Deals).await?;
        Ok(deal)
    }

    // Tasks

    pub async fn add_task(&mut self, form: TaskForm) -> Result<Task, WorkspaceError> {
        let task = form.into_record()?;
        self.store.add_task(task.clone())?;
        self.persist(CollectionKey::Tasks).await?;
        Ok(task)
    }

    pub async fn toggle_task(&mut self, id: &TaskId) -> Result<Task, WorkspaceError> {
        let task = self.store.toggle_task(id)?.clone();
        self.persist(CollectionKey::Tasks).await?;
        Ok(task)
    }

    // Proposals

    /// Commits `cart` as a proposal for `deal_id`, dated today.
    ///
    /// The proposal collection is written before the deal collection.
    pub async fn commit_proposal(
        &mut self,
        cart: &mut ProposalCart,
        deal_id: &DealId,
    ) -> Result<CommitOutcome, WorkspaceError> {
        let date = Timestamp::now().to_locale_date();
        let outcome = commit(cart, deal_id, &mut self.store, date)?;

        self.persist(CollectionKey::Proposals).await?;
        if outcome.deal_synced() {
            self.persist(CollectionKey::Deals).await?;
        }

        tracing::info!(
            proposal_id = %outcome.proposal.id(),
            deal_id = %deal_id,
            total = %outcome.proposal.total_value(),
            lines = outcome.proposal.items().len(),
            deal_synced = outcome.deal_synced(),
            "proposal committed"
        );

        Ok(outcome)
    }

    /// Commits the draft's cart against its selected deal. On success the
    /// draft's suggestion is dropped, cancelling a request still in flight.
    pub async fn commit_draft(
        &mut self,
        draft: &mut ProposalDraft,
    ) -> Result<CommitOutcome, WorkspaceError> {
        let deal_id = draft
            .cart()
            .selected_deal()
            .cloned()
            .ok_or(ProposalError::NoDealSelected)?;
        let outcome = self.commit_proposal(draft.cart_mut(), &deal_id).await?;
        draft.dismiss_suggestion();
        Ok(outcome)
    }

    async fn persist(&self, key: CollectionKey) -> Result<(), WorkspaceError> {
        let json = match key {
            CollectionKey::Contacts => to_json(key, self.store.contacts())?,
            CollectionKey::Deals => to_json(key, self.store.deals())?,
            CollectionKey::Tasks => to_json(key, self.store.tasks())?,
            CollectionKey::Proposals => to_json(key, self.store.proposals())?,
        };

        self.storage.save(key, &json).await.map_err(|err| {
            tracing::error!(key = key.storage_key(), error = %err, "failed to persist collection");
            WorkspaceError::from(err)
        })
    }
}

fn to_json<T: Serialize>(key: CollectionKey, records: &[T]) -> Result<String, RecordStorageError> {
    serde_json::to_string(records).map_err(|err| RecordStorageError::serialization(key, err))
}

async fn read_collection<T: DeserializeOwned>(
    storage: &dyn RecordStorage,
    key: CollectionKey,
) -> Result<Vec<T>, RecordStorageError> {
    match storage.load(key).await? {
        Some(json) => {
            serde_json::from_str(&json).map_err(|err| RecordStorageError::deserialization(key, err))
        }
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{AiSuggestionAdvisor, MockAIProvider};
    use crate::adapters::storage::InMemoryRecordStorage;
    use crate::application::SuggestionStatus;
    use crate::domain::catalog::agency_catalog;
    use crate::domain::crm::{ContactStatus, JobLevel, TaskPriority};
    use crate::domain::foundation::Money;

    async fn workspace(seed: bool) -> (Workspace, Arc<InMemoryRecordStorage>) {
        let storage = Arc::new(InMemoryRecordStorage::new());
        let workspace = Workspace::load(storage.clone(), agency_catalog().unwrap(), seed)
            .await
            .unwrap();
        (workspace, storage)
    }

    fn contact_form(name: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            company: "Natura".to_string(),
            email: "ana@natura.com".to_string(),
            job_level: JobLevel::Diretor,
            status: ContactStatus::Active,
            ..ContactForm::default()
        }
    }

    #[tokio::test]
    async fn load_seeds_demo_data_when_empty() {
        let (workspace, storage) = workspace(true).await;

        assert_eq!(workspace.store().contacts().len(), 3);
        assert_eq!(workspace.store().deals().len(), 2);
        assert_eq!(
            storage.write_log().await,
            vec![CollectionKey::Contacts, CollectionKey::Deals]
        );
    }

    #[tokio::test]
    async fn load_without_seeding_starts_empty() {
        let (workspace, storage) = workspace(false).await;

        assert!(workspace.store().contacts().is_empty());
        assert!(workspace.store().deals().is_empty());
        assert!(storage.write_log().await.is_empty());
    }

    #[tokio::test]
    async fn load_reads_previously_saved_collections() {
        let (mut workspace, storage) = workspace(true).await;
        let added = workspace.add_contact(contact_form("Ana Souza")).await.unwrap();

        let reloaded = Workspace::load(storage.clone(), agency_catalog().unwrap(), true)
            .await
            .unwrap();

        assert_eq!(reloaded.store().contacts().len(), 4);
        assert_eq!(reloaded.store().contact(&added.id), Some(&added));
    }

    #[tokio::test]
    async fn load_rejects_corrupt_collection() {
        let storage = Arc::new(InMemoryRecordStorage::new());
        storage.save(CollectionKey::Deals, "{not json").await.unwrap();

        let result = Workspace::load(storage, agency_catalog().unwrap(), true).await;

        assert!(matches!(
            result,
            Err(WorkspaceError::Storage(RecordStorageError::DeserializationFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn invalid_form_changes_nothing() {
        let (mut workspace, storage) = workspace(true).await;
        let before = workspace.store().clone();
        storage.clear_write_log().await;

        let result = workspace.add_contact(contact_form("   ")).await;

        assert!(matches!(result, Err(WorkspaceError::Validation(_))));
        assert_eq!(workspace.store(), &before);
        assert!(storage.write_log().await.is_empty());
    }

    #[tokio::test]
    async fn move_deal_persists_deals_only() {
        let (mut workspace, storage) = workspace(true).await;
        storage.clear_write_log().await;

        let deal = workspace
            .move_deal(&DealId::new("2").unwrap(), DealStage::ClosedWon)
            .await
            .unwrap();

        assert_eq!(deal.stage, DealStage::ClosedWon);
        assert_eq!(storage.write_log().await, vec![CollectionKey::Deals]);
    }

    #[tokio::test]
    async fn update_unknown_contact_is_not_found() {
        let (mut workspace, _) = workspace(true).await;

        let result = workspace
            .update_contact(&ContactId::new("404").unwrap(), contact_form("Ana"))
            .await;

        assert_eq!(result.unwrap_err().code(), ErrorCode::ContactNotFound);
    }

    #[tokio::test]
    async fn toggle_task_round_trips_through_storage() {
        let (mut workspace, storage) = workspace(true).await;
        let task = workspace
            .add_task(TaskForm {
                title: "Enviar briefing".to_string(),
                description: String::new(),
                due_date: "20/10/2026".to_string(),
                priority: TaskPriority::High,
                assigned_to: "1".to_string(),
            })
            .await
            .unwrap();

        let toggled = workspace.toggle_task(&task.id).await.unwrap();
        assert!(toggled.completed);

        let reloaded = Workspace::load(storage, agency_catalog().unwrap(), true)
            .await
            .unwrap();
        assert!(reloaded.store().task(&task.id).unwrap().completed);
    }

    #[tokio::test]
    async fn commit_writes_proposals_before_deals() {
        let (mut workspace, storage) = workspace(true).await;
        let catalog = workspace.catalog().clone();
        let mut cart = ProposalCart::new();
        cart.add_item(&catalog, "1");
        cart.add_item(&catalog, "2");
        storage.clear_write_log().await;

        let deal_id = DealId::new("1").unwrap();
        let outcome = workspace.commit_proposal(&mut cart, &deal_id).await.unwrap();

        assert_eq!(
            storage.write_log().await,
            vec![CollectionKey::Proposals, CollectionKey::Deals]
        );
        assert_eq!(
            workspace.store().deal(&deal_id).unwrap().value,
            outcome.proposal.total_value()
        );
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn commit_for_unknown_deal_skips_deal_write() {
        let (mut workspace, storage) = workspace(true).await;
        let catalog = workspace.catalog().clone();
        let mut cart = ProposalCart::new();
        cart.add_item(&catalog, "1");
        storage.clear_write_log().await;

        let outcome = workspace
            .commit_proposal(&mut cart, &DealId::new("gone").unwrap())
            .await
            .unwrap();

        assert!(!outcome.deal_synced());
        assert_eq!(storage.write_log().await, vec![CollectionKey::Proposals]);
    }

    #[tokio::test]
    async fn empty_commit_writes_nothing() {
        let (mut workspace, storage) = workspace(true).await;
        storage.clear_write_log().await;

        let result = workspace
            .commit_proposal(&mut ProposalCart::new(), &DealId::new("1").unwrap())
            .await;

        assert_eq!(
            result.unwrap_err(),
            WorkspaceError::Proposal(ProposalError::EmptyCart)
        );
        assert!(storage.write_log().await.is_empty());
        assert!(workspace.store().proposals().is_empty());
    }

    #[tokio::test]
    async fn summary_and_document_reflect_committed_proposal() {
        let (mut workspace, _) = workspace(true).await;
        let catalog = workspace.catalog().clone();
        let mut cart = ProposalCart::new();
        cart.add_item(&catalog, "1");
        let deal_id = DealId::new("2").unwrap();

        let outcome = workspace.commit_proposal(&mut cart, &deal_id).await.unwrap();
        let summary = workspace.summary();
        let document = workspace.document(outcome.proposal.id()).unwrap();

        assert_eq!(
            summary.total_value,
            Money::from_reais(45000) + outcome.proposal.total_value()
        );
        assert_eq!(document.company(), "XP Inc");
    }

    const SUGGESTION_REPLY: &str = r#"{"suggestedItemIds":["1","2"],"deadlines":{},"pricingInsight":"ok","creativeReasoning":"ok"}"#;

    #[tokio::test]
    async fn commit_draft_clears_ready_suggestion() {
        let (mut workspace, _) = workspace(true).await;
        let catalog = workspace.catalog().clone();
        let deal = workspace.store().deal(&DealId::new("1").unwrap()).unwrap().clone();
        let provider = Arc::new(MockAIProvider::new().with_response(SUGGESTION_REPLY));
        let mut draft =
            ProposalDraft::for_deal(Arc::new(AiSuggestionAdvisor::new(provider)), deal.id.clone());
        draft.cart_mut().add_item(&catalog, "1");

        assert!(draft.request_suggestion(&deal, &catalog));
        assert!(matches!(draft.await_suggestion().await, SuggestionStatus::Ready(_)));

        workspace.commit_draft(&mut draft).await.unwrap();

        assert_eq!(draft.status(), &SuggestionStatus::Idle);
        assert_eq!(draft.accept_suggestion(&catalog), None);
        assert!(draft.cart().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn commit_draft_cancels_pending_suggestion() {
        let (mut workspace, _) = workspace(true).await;
        let catalog = workspace.catalog().clone();
        let deal = workspace.store().deal(&DealId::new("1").unwrap()).unwrap().clone();
        let provider = Arc::new(
            MockAIProvider::new()
                .with_response(SUGGESTION_REPLY)
                .with_delay(std::time::Duration::from_secs(30)),
        );
        let mut draft =
            ProposalDraft::for_deal(Arc::new(AiSuggestionAdvisor::new(provider)), deal.id.clone());
        draft.cart_mut().add_item(&catalog, "1");

        assert!(draft.request_suggestion(&deal, &catalog));
        assert!(draft.status().is_pending());

        workspace.commit_draft(&mut draft).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;

        assert_eq!(draft.poll_suggestion(), &SuggestionStatus::Idle);
        assert_eq!(draft.accept_suggestion(&catalog), None);
    }

    #[tokio::test]
    async fn failed_commit_keeps_suggestion() {
        let (mut workspace, _) = workspace(true).await;
        let catalog = workspace.catalog().clone();
        let deal = workspace.store().deal(&DealId::new("1").unwrap()).unwrap().clone();
        let provider = Arc::new(MockAIProvider::new().with_response(SUGGESTION_REPLY));
        let mut draft =
            ProposalDraft::for_deal(Arc::new(AiSuggestionAdvisor::new(provider)), deal.id.clone());

        draft.request_suggestion(&deal, &catalog);
        draft.await_suggestion().await;
        let err = workspace.commit_draft(&mut draft).await.unwrap_err();

        assert_eq!(err, WorkspaceError::Proposal(ProposalError::EmptyCart));
        assert_eq!(draft.accept_suggestion(&catalog), Some(2));
    }
}
