//! Catalog - the fixed reference price list.

mod agency_price_list;
mod price_list;

pub use agency_price_list::{agency_catalog, PROPOSAL_TERMS};
pub use price_list::{Catalog, ItemSize, PriceListItem};
