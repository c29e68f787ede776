//! The entity store - single source of truth for all CRM records.

use super::collection::{Collection, Record};
use super::StoreError;
use crate::domain::crm::{demo_contacts, demo_deals, Contact, Deal, DealStage, Task};
use crate::domain::foundation::{ContactId, DealId, ProposalId, TaskId, ValidationError};
use crate::domain::proposal::Proposal;

impl Record for Contact {
    type Id = ContactId;
    const KIND: &'static str = "contact";

    fn id(&self) -> &ContactId {
        &self.id
    }
}

impl Record for Deal {
    type Id = DealId;
    const KIND: &'static str = "deal";

    fn id(&self) -> &DealId {
        &self.id
    }
}

impl Record for Task {
    type Id = TaskId;
    const KIND: &'static str = "task";

    fn id(&self) -> &TaskId {
        &self.id
    }
}

impl Record for Proposal {
    type Id = ProposalId;
    const KIND: &'static str = "proposal";

    fn id(&self) -> &ProposalId {
        Proposal::id(self)
    }
}

/// All record collections, owned exclusively by the store.
///
/// Records reference each other by id only. Nothing here enforces that a
/// referenced id resolves; readers tolerate dangling references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStore {
    pub(crate) contacts: Collection<Contact>,
    pub(crate) deals: Collection<Deal>,
    pub(crate) tasks: Collection<Task>,
    pub(crate) proposals: Collection<Proposal>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted collections.
    pub fn from_parts(
        contacts: Vec<Contact>,
        deals: Vec<Deal>,
        tasks: Vec<Task>,
        proposals: Vec<Proposal>,
    ) -> Self {
        Self {
            contacts: Collection::from_records(contacts),
            deals: Collection::from_records(deals),
            tasks: Collection::from_records(tasks),
            proposals: Collection::from_records(proposals),
        }
    }

    /// Store pre-filled with the demo contacts and deals.
    pub fn with_demo_data() -> Result<Self, ValidationError> {
        Ok(Self::from_parts(
            demo_contacts()?,
            demo_deals()?,
            Vec::new(),
            Vec::new(),
        ))
    }

    // Contacts

    pub fn contacts(&self) -> &[Contact] {
        self.contacts.as_slice()
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<(), StoreError> {
        self.contacts.add(contact)
    }

    pub fn update_contact(&mut self, contact: Contact) -> Result<(), StoreError> {
        self.contacts.update(contact)
    }

    /// Contacts whose name, company or email contain `term`.
    pub fn search_contacts(&self, term: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.matches(term)).collect()
    }

    // Deals

    pub fn deals(&self) -> &[Deal] {
        self.deals.as_slice()
    }

    pub fn deal(&self, id: &DealId) -> Option<&Deal> {
        self.deals.get(id)
    }

    pub fn add_deal(&mut self, deal: Deal) -> Result<(), StoreError> {
        self.deals.add(deal)
    }

    pub fn update_deal(&mut self, deal: Deal) -> Result<(), StoreError> {
        self.deals.update(deal)
    }

    /// Moves a deal to another pipeline column. Only `stage` changes.
    pub fn move_deal(&mut self, id: &DealId, stage: DealStage) -> Result<&Deal, StoreError> {
        let moved = self
            .deals
            .get(id)
            .ok_or_else(|| StoreError::not_found(Deal::KIND, id))?
            .moved_to(stage);
        self.deals.update(moved)?;
        self.deals
            .get(id)
            .ok_or_else(|| StoreError::not_found(Deal::KIND, id))
    }

    pub fn deals_in_stage(&self, stage: DealStage) -> Vec<&Deal> {
        self.deals.iter().filter(|d| d.stage == stage).collect()
    }

    // Tasks

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), StoreError> {
        self.tasks.add(task)
    }

    /// Flips a task's `completed` flag.
    pub fn toggle_task(&mut self, id: &TaskId) -> Result<&Task, StoreError> {
        let toggled = self
            .tasks
            .get(id)
            .ok_or_else(|| StoreError::not_found(Task::KIND, id))?
            .toggled();
        self.tasks.update(toggled)?;
        self.tasks
            .get(id)
            .ok_or_else(|| StoreError::not_found(Task::KIND, id))
    }

    // Proposals

    /// Proposals, most recent first.
    pub fn proposals(&self) -> &[Proposal] {
        self.proposals.as_slice()
    }

    pub fn proposal(&self, id: &ProposalId) -> Option<&Proposal> {
        self.proposals.get(id)
    }

    pub fn proposals_for_deal(&self, deal_id: &DealId) -> Vec<&Proposal> {
        self.proposals
            .iter()
            .filter(|p| p.deal_id() == deal_id)
            .collect()
    }
}
