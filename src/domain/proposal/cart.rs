//! Proposal cart - the transient working set of lines for one draft.

use super::errors::ProposalError;
use super::item::ProposalItem;
use super::suggestion::Suggestion;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::{DealId, LineItemId, Money};

/// Largest quantity a single line accepts.
pub const MAX_QUANTITY: u32 = 10_000;

/// Ordered lines being assembled for one deal.
///
/// The cart has no persistence of its own. Dropping it before commit loses
/// its contents and touches nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalCart {
    deal_id: Option<DealId>,
    lines: Vec<ProposalItem>,
}

impl ProposalCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target deal. Existing lines are kept.
    pub fn select_deal(&mut self, deal_id: DealId) {
        self.deal_id = Some(deal_id);
    }

    pub fn selected_deal(&self) -> Option<&DealId> {
        self.deal_id.as_ref()
    }

    /// Appends a copy of the catalog entry. Unknown ids are ignored and
    /// return `None`.
    pub fn add_item(&mut self, catalog: &Catalog, catalog_id: &str) -> Option<&ProposalItem> {
        let Some(entry) = catalog.get_str(catalog_id) else {
            tracing::debug!(catalog_id, "ignoring unknown catalog id");
            return None;
        };
        self.lines.push(ProposalItem::from_catalog(entry));
        self.lines.last()
    }

    /// Removes the line with the given id, if present.
    pub fn remove_item(&mut self, line_id: &LineItemId) -> Option<ProposalItem> {
        let index = self.lines.iter().position(|line| &line.id == line_id)?;
        Some(self.lines.remove(index))
    }

    /// Changes a line's quantity, which must lie in `1..=MAX_QUANTITY`.
    /// Returns `Ok(false)` when the line is absent.
    pub fn set_quantity(
        &mut self,
        line_id: &LineItemId,
        quantity: u32,
    ) -> Result<bool, ProposalError> {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(ProposalError::InvalidQuantity { quantity });
        }
        match self.lines.iter_mut().find(|line| &line.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Appends every suggested item found in the catalog, with the deadline
    /// estimate folded into the description. Unknown ids are skipped.
    /// Applying the same suggestion twice appends the lines twice.
    pub fn apply_suggestion(&mut self, catalog: &Catalog, suggestion: &Suggestion) -> usize {
        let before = self.lines.len();
        for catalog_id in &suggestion.suggested_item_ids {
            match catalog.get_str(catalog_id) {
                Some(entry) => {
                    let mut line = ProposalItem::from_catalog(entry);
                    line.description = suggestion.annotate(&entry.description, catalog_id);
                    self.lines.push(line);
                }
                None => tracing::debug!(catalog_id = %catalog_id, "skipping suggested id missing from catalog"),
            }
        }
        self.lines.len() - before
    }

    /// Empties the cart. The deal selection is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unitValue * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(ProposalItem::line_total).sum()
    }

    pub fn items(&self) -> &[ProposalItem] {
        &self.lines
    }

    pub fn get(&self, line_id: &LineItemId) -> Option<&ProposalItem> {
        self.lines.iter().find(|line| &line.id == line_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Deep copy of the lines, decoupled from the live cart.
    pub(crate) fn snapshot(&self) -> Vec<ProposalItem> {
        self.lines.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{agency_catalog, ItemSize, PriceListItem};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            PriceListItem::new("1", "Apresentação PPT", ItemSize::M, Money::from_reais(1080))
                .unwrap(),
            PriceListItem::new("2", "GIF animado", ItemSize::G, Money::from_reais(2520)).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(ProposalCart::new().total(), Money::ZERO);
    }

    #[test]
    fn add_items_sums_line_totals() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        cart.add_item(&catalog, "1");
        cart.add_item(&catalog, "2");
        cart.add_item(&catalog, "1");

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total(), Money::from_reais(4680));
    }

    #[test]
    fn add_unknown_id_is_a_no_op() {
        let mut cart = ProposalCart::new();
        assert!(cart.add_item(&catalog(), "99").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_item_drops_only_that_line() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        let first = cart.add_item(&catalog, "1").unwrap().id.clone();
        cart.add_item(&catalog, "2");

        let removed = cart.remove_item(&first).unwrap();
        assert_eq!(removed.id, first);
        assert!(cart.get(&first).is_none());
        assert_eq!(cart.total(), Money::from_reais(2520));

        assert!(cart.remove_item(&first).is_none());
    }

    #[test]
    fn set_quantity_validates_and_updates() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        let id = cart.add_item(&catalog, "1").unwrap().id.clone();

        assert_eq!(cart.set_quantity(&id, 3), Ok(true));
        assert_eq!(cart.total(), Money::from_reais(3240));
        assert_eq!(
            cart.set_quantity(&id, 0),
            Err(ProposalError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(cart.set_quantity(&LineItemId::generate(), 2), Ok(false));
    }

    #[test]
    fn quantity_above_limit_is_rejected() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        let id = cart.add_item(&catalog, "1").unwrap().id.clone();

        assert_eq!(cart.set_quantity(&id, MAX_QUANTITY), Ok(true));
        assert_eq!(
            cart.set_quantity(&id, MAX_QUANTITY + 1),
            Err(ProposalError::InvalidQuantity { quantity: MAX_QUANTITY + 1 })
        );
        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY);
    }

    #[test]
    fn total_of_maximum_lines_does_not_overflow() {
        let catalog = Catalog::from_items(vec![PriceListItem::new(
            "teto",
            "Projeto no teto",
            ItemSize::G,
            Money::MAX,
        )
        .unwrap()])
        .unwrap();
        let mut cart = ProposalCart::new();
        for _ in 0..3 {
            let id = cart.add_item(&catalog, "teto").unwrap().id.clone();
            cart.set_quantity(&id, MAX_QUANTITY).unwrap();
        }

        assert_eq!(cart.total(), Money::MAX.times(MAX_QUANTITY * 3));
    }

    #[test]
    fn select_deal_keeps_existing_lines() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        cart.select_deal(DealId::new("1").unwrap());
        cart.add_item(&catalog, "1");
        cart.select_deal(DealId::new("2").unwrap());

        assert_eq!(cart.selected_deal().unwrap().as_str(), "2");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn apply_suggestion_skips_unknown_ids_and_annotates() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        let suggestion = Suggestion {
            suggested_item_ids: vec!["1".to_string(), "99".to_string()],
            deadlines: BTreeMap::from([("1".to_string(), "1 semana".to_string())]),
            pricing_insight: String::new(),
            creative_reasoning: String::new(),
        };

        assert_eq!(cart.apply_suggestion(&catalog, &suggestion), 1);
        assert_eq!(cart.items()[0].description, "Apresentação PPT (Estimado: 1 semana)");
        assert_eq!(cart.items()[0].unit_value, Money::from_reais(1080));

        assert_eq!(cart.apply_suggestion(&catalog, &suggestion), 1);
        assert_eq!(cart.len(), 2);
        assert_ne!(cart.items()[0].id, cart.items()[1].id);
    }

    #[test]
    fn clear_empties_lines() {
        let catalog = catalog();
        let mut cart = ProposalCart::new();
        cart.add_item(&catalog, "2");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    fn agency_ids() -> Vec<String> {
        agency_catalog()
            .unwrap()
            .list_items()
            .iter()
            .map(|i| i.id.to_string())
            .collect()
    }

    proptest! {
        #[test]
        fn total_equals_sum_of_added_unit_values(picks in prop::collection::vec(0usize..14, 1..40)) {
            let catalog = agency_catalog().unwrap();
            let ids = agency_ids();
            let mut cart = ProposalCart::new();
            let mut expected = Money::ZERO;

            for pick in picks {
                let id = &ids[pick];
                expected += catalog.get_str(id).unwrap().unit_value;
                cart.add_item(&catalog, id);
            }

            prop_assert_eq!(cart.total(), expected);
        }

        #[test]
        fn removing_a_line_subtracts_exactly_its_contribution(
            picks in prop::collection::vec(0usize..14, 1..20),
            victim in any::<prop::sample::Index>(),
        ) {
            let catalog = agency_catalog().unwrap();
            let ids = agency_ids();
            let mut cart = ProposalCart::new();
            for pick in picks {
                cart.add_item(&catalog, &ids[pick]);
            }

            let before = cart.total();
            let line = cart.items()[victim.index(cart.len())].clone();
            cart.remove_item(&line.id);

            prop_assert!(cart.get(&line.id).is_none());
            prop_assert_eq!(cart.total(), before - line.line_total());
        }
    }
}
