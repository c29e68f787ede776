//! Committed proposals.

use serde::{Deserialize, Serialize};

use super::item::ProposalItem;
use crate::domain::foundation::{DealId, Money, ProposalId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Draft,
    Sent,
    Accepted,
}

/// A committed, priced quote for one deal.
///
/// Fields are private: a proposal is created once by the commit path and
/// then only read. `total_value` is computed at creation and never
/// recomputed from `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    id: ProposalId,
    deal_id: DealId,
    date: String,
    items: Vec<ProposalItem>,
    total_value: Money,
    status: ProposalStatus,
}

impl Proposal {
    /// Freezes a set of lines into a draft proposal.
    pub(crate) fn draft(deal_id: DealId, date: String, items: Vec<ProposalItem>) -> Self {
        let total_value = items.iter().map(ProposalItem::line_total).sum();
        Self {
            id: ProposalId::generate(),
            deal_id,
            date,
            items,
            total_value,
            status: ProposalStatus::Draft,
        }
    }

    pub fn id(&self) -> &ProposalId {
        &self.id
    }

    pub fn deal_id(&self) -> &DealId {
        &self.deal_id
    }

    /// Creation date, already locale-formatted.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Lines in display order.
    pub fn items(&self) -> &[ProposalItem] {
        &self.items
    }

    pub fn total_value(&self) -> Money {
        self.total_value
    }

    pub fn status(&self) -> ProposalStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ItemSize, PriceListItem};

    fn line(id: &str, reais: i64) -> ProposalItem {
        let entry = PriceListItem::new(id, "x", ItemSize::M, Money::from_reais(reais)).unwrap();
        ProposalItem::from_catalog(&entry)
    }

    #[test]
    fn draft_freezes_total_and_status() {
        let proposal = Proposal::draft(
            DealId::new("1").unwrap(),
            "20/10/2023".to_string(),
            vec![line("1", 1080), line("2", 2520)],
        );

        assert_eq!(proposal.total_value(), Money::from_reais(3600));
        assert_eq!(proposal.status(), ProposalStatus::Draft);
        assert_eq!(proposal.items().len(), 2);
        assert_eq!(proposal.date(), "20/10/2023");
    }

    #[test]
    fn persisted_shape_round_trips_with_frozen_total() {
        let json = r#"{
            "id": "p1",
            "dealId": "1",
            "date": "20/10/2023",
            "items": [
                {"id": "l1", "priceItemId": "2", "description": "PPT", "quantity": 1, "unitValue": 1080}
            ],
            "totalValue": 999,
            "status": "sent"
        }"#;

        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.status(), ProposalStatus::Sent);
        assert_eq!(proposal.total_value(), Money::from_reais(999));
    }
}
