//! Proposal line items.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PriceListItem;
use crate::domain::foundation::{CatalogItemId, LineItemId, Money};

/// One line of a cart or committed proposal.
///
/// Description and unit value are copied from the catalog when the line is
/// created. Later catalog changes never reach existing lines, and
/// `price_item_id` may point at an entry that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalItem {
    pub id: LineItemId,
    pub price_item_id: CatalogItemId,
    pub description: String,
    pub quantity: u32,
    pub unit_value: Money,
}

impl ProposalItem {
    /// Copies a catalog entry into a new line with quantity 1.
    pub fn from_catalog(entry: &PriceListItem) -> Self {
        Self {
            id: LineItemId::generate(),
            price_item_id: entry.id.clone(),
            description: entry.description.clone(),
            quantity: 1,
            unit_value: entry.unit_value,
        }
    }

    /// `unitValue * quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_value.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ItemSize;

    #[test]
    fn from_catalog_copies_fields_with_fresh_id() {
        let entry =
            PriceListItem::new("6", "Logo ou selo (1 versão)", ItemSize::G, Money::from_reais(2340))
                .unwrap();

        let a = ProposalItem::from_catalog(&entry);
        let b = ProposalItem::from_catalog(&entry);

        assert_ne!(a.id, b.id);
        assert_eq!(a.price_item_id, entry.id);
        assert_eq!(a.description, entry.description);
        assert_eq!(a.quantity, 1);
        assert_eq!(a.line_total(), Money::from_reais(2340));
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let entry = PriceListItem::new("7", "Post", ItemSize::M, Money::from_reais(1620)).unwrap();
        let item = ProposalItem {
            quantity: 3,
            ..ProposalItem::from_catalog(&entry)
        };
        assert_eq!(item.line_total(), Money::from_reais(4860));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let entry = PriceListItem::new("2", "PPT", ItemSize::M, Money::from_reais(1080)).unwrap();
        let json = serde_json::to_value(ProposalItem::from_catalog(&entry)).unwrap();
        assert_eq!(json["priceItemId"], "2");
        assert_eq!(json["unitValue"], 1080.0);
        assert_eq!(json["quantity"], 1);
    }
}
