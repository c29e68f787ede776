//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, money, errors)
//! - `catalog` - The fixed reference price list
//! - `crm` - Contacts, deals, tasks and the agency roster
//! - `store` - Record collections owned by the entity store
//! - `proposal` - Cart, commit path, suggestions and printable proposals
//! - `dashboard` - Read-only pipeline aggregation

pub mod catalog;
pub mod crm;
pub mod dashboard;
pub mod foundation;
pub mod proposal;
pub mod store;
