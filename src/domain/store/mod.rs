//! Entity store - contacts, deals, tasks and proposals as independent
//! collections linked by string ids.

mod collection;
mod entity_store;
mod errors;

pub use collection::{Collection, Record};
pub use entity_store::EntityStore;
pub use errors::StoreError;

/// One persisted record set, saved and loaded as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Contacts,
    Deals,
    Tasks,
    Proposals,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 4] = [
        CollectionKey::Contacts,
        CollectionKey::Deals,
        CollectionKey::Tasks,
        CollectionKey::Proposals,
    ];

    /// Key under which the collection is stored.
    pub fn storage_key(&self) -> &'static str {
        match self {
            CollectionKey::Contacts => "smart_contacts",
            CollectionKey::Deals => "smart_deals",
            CollectionKey::Tasks => "smart_tasks",
            CollectionKey::Proposals => "smart_proposals",
        }
    }
}
