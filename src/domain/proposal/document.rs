//! Printable rendering of a committed proposal.

use std::fmt;

use super::record::Proposal;
use crate::domain::catalog::PROPOSAL_TERMS;
use crate::domain::store::EntityStore;

const UNKNOWN: &str = "-";

/// Everything needed to print one proposal, with references resolved.
///
/// Lookups that fail (deal deleted, contact missing) render as a dash
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDocument<'a> {
    proposal: &'a Proposal,
    deal_title: Option<&'a str>,
    company: Option<&'a str>,
    contact_name: Option<&'a str>,
}

impl<'a> ProposalDocument<'a> {
    pub fn new(proposal: &'a Proposal, store: &'a EntityStore) -> Self {
        let deal = store.deal(proposal.deal_id());
        let contact = deal.and_then(|d| store.contact(&d.contact_id));
        Self {
            proposal,
            deal_title: deal.map(|d| d.title.as_str()),
            company: contact.map(|c| c.company.as_str()),
            contact_name: contact.map(|c| c.name.as_str()),
        }
    }

    pub fn proposal(&self) -> &Proposal {
        self.proposal
    }

    pub fn company(&self) -> &str {
        self.company.unwrap_or(UNKNOWN)
    }

    pub fn contact_name(&self) -> &str {
        self.contact_name.unwrap_or(UNKNOWN)
    }

    pub fn deal_title(&self) -> &str {
        self.deal_title.unwrap_or(UNKNOWN)
    }
}

impl fmt::Display for ProposalDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROPOSTA COMERCIAL")?;
        writeln!(f, "Cliente: {}", self.company())?;
        writeln!(f, "A/C: {}", self.contact_name())?;
        writeln!(f, "Projeto: {}", self.deal_title())?;
        writeln!(f, "Data: {}", self.proposal.date())?;
        writeln!(f)?;

        for (index, item) in self.proposal.items().iter().enumerate() {
            writeln!(
                f,
                "{:>2}. {} | {} x {} = {}",
                index + 1,
                item.description,
                item.quantity,
                item.unit_value.to_brl(),
                item.line_total().to_brl()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "TOTAL: {}", self.proposal.total_value().to_brl())?;
        writeln!(f)?;
        writeln!(f, "Condições comerciais")?;
        write!(f, "{}", PROPOSAL_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, ItemSize, PriceListItem};
    use crate::domain::foundation::{DealId, Money};
    use crate::domain::proposal::{commit, ProposalCart};

    fn committed(store: &mut EntityStore, deal: &str) -> Proposal {
        let catalog = Catalog::from_items(vec![PriceListItem::new(
            "1",
            "Apresentação PPT",
            ItemSize::M,
            Money::from_reais(1080),
        )
        .unwrap()])
        .unwrap();
        let mut cart = ProposalCart::new();
        cart.add_item(&catalog, "1");
        cart.add_item(&catalog, "1");
        commit(&mut cart, &DealId::new(deal).unwrap(), store, "16/10/2026".to_string())
            .unwrap()
            .proposal
    }

    #[test]
    fn renders_resolved_references_and_brl_amounts() {
        let mut store = EntityStore::with_demo_data().unwrap();
        let proposal = committed(&mut store, "1");
        let text = ProposalDocument::new(&proposal, &store).to_string();

        assert!(text.contains("Cliente: Ambev"), "{text}");
        assert!(text.contains("A/C: Juliana Silva"));
        assert!(text.contains("Projeto: Campanha Interna Q4"));
        assert!(text.contains("Data: 16/10/2026"));
        assert!(text.contains("Apresentação PPT | 1 x R$ 1.080,00 = R$ 1.080,00"));
        assert!(text.contains("TOTAL: R$ 2.160,00"));
        assert!(text.ends_with(PROPOSAL_TERMS));
    }

    #[test]
    fn tolerates_dangling_deal() {
        let mut store = EntityStore::with_demo_data().unwrap();
        let proposal = committed(&mut store, "gone");
        let doc = ProposalDocument::new(&proposal, &store);

        assert_eq!(doc.company(), "-");
        assert_eq!(doc.deal_title(), "-");
        assert!(doc.to_string().contains("TOTAL: R$ 2.160,00"));
    }
}
