//! Smart CRM - sales pipeline management for a creative agency.
//!
//! Contacts, deals and tasks live in an entity store persisted as JSON
//! collections. Proposals are assembled in a cart from a fixed price list,
//! optionally seeded by an AI suggestion, and committed against a deal,
//! which then takes the proposal total as its value.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
