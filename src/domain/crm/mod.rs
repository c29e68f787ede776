//! CRM records - contacts, deals, tasks and the agency roster.
//!
//! Each record type has a matching form struct. Forms are validated at the
//! boundary and only then lifted into records.

mod contact;
mod deal;
mod seed;
mod task;
mod team;

pub use contact::{Contact, ContactForm, ContactStatus, JobLevel};
pub use deal::{
    parse_product_tags, Deal, DealForm, DealStage, DealTemperature, EngagementModel, SaleType,
};
pub use seed::{default_roster, demo_contacts, demo_deals};
pub use task::{Task, TaskForm, TaskPriority};
pub use team::{TeamMember, TeamRoster};
