//! Deal records - sales opportunities moving through pipeline stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactId, DealId, Money, TeamMemberId, ValidationError};

/// Pipeline stage of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Prospecting,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    /// All stages in pipeline order.
    pub const ALL: [DealStage; 5] = [
        DealStage::Prospecting,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    /// Board column label.
    pub fn label(&self) -> &'static str {
        match self {
            DealStage::Prospecting => "Prospecção",
            DealStage::Proposal => "Proposta Enviada",
            DealStage::Negotiation => "Em Negociação",
            DealStage::ClosedWon => "Fechado (Uhul!)",
            DealStage::ClosedLost => "Perdido (Próximo!)",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealTemperature {
    Hot,
    Warm,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleType {
    Normal,
    Upsell,
    CrossSell,
}

impl SaleType {
    pub const ALL: [SaleType; 3] = [SaleType::Normal, SaleType::Upsell, SaleType::CrossSell];

    pub fn label(&self) -> &'static str {
        match self {
            SaleType::Normal => "Nova Venda",
            SaleType::Upsell => "Upsell",
            SaleType::CrossSell => "Cross Sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementModel {
    Job,
    Fee,
}

/// A sales opportunity.
///
/// Proposals point at a deal through `dealId`; the deal keeps no list of
/// its proposals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub contact_id: ContactId,
    pub responsible_id: TeamMemberId,
    pub value: Money,
    pub stage: DealStage,
    pub expected_close_date: String,
    #[serde(default)]
    pub products: Vec<String>,
    pub temperature: DealTemperature,
    pub sale_type: SaleType,
    pub engagement_model: EngagementModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Deal {
    /// Returns a copy carrying a committed proposal total: value replaced,
    /// stage set to `proposal`, every other field untouched.
    pub fn with_proposal_total(&self, total: Money) -> Deal {
        Deal {
            value: total,
            stage: DealStage::Proposal,
            ..self.clone()
        }
    }

    /// Returns a copy moved to another stage.
    pub fn moved_to(&self, stage: DealStage) -> Deal {
        Deal {
            stage,
            ..self.clone()
        }
    }

    /// Text used as the suggestion context.
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("Não informada")
    }
}

/// Input for creating or editing a deal.
#[derive(Debug, Clone)]
pub struct DealForm {
    pub title: String,
    pub contact_id: String,
    pub responsible_id: String,
    pub value: f64,
    pub stage: DealStage,
    pub expected_close_date: String,
    /// Comma-separated product-focus tags.
    pub products: String,
    pub temperature: DealTemperature,
    pub sale_type: SaleType,
    pub engagement_model: EngagementModel,
    pub description: String,
}

impl Default for DealForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            contact_id: String::new(),
            responsible_id: String::new(),
            value: 0.0,
            stage: DealStage::Prospecting,
            expected_close_date: String::new(),
            products: String::new(),
            temperature: DealTemperature::Warm,
            sale_type: SaleType::Normal,
            engagement_model: EngagementModel::Job,
            description: String::new(),
        }
    }
}

impl DealForm {
    /// Validates the form and builds a new deal with a fresh id.
    pub fn into_record(self) -> Result<Deal, ValidationError> {
        self.apply_to(DealId::generate())
    }

    /// Validates the form and builds the full replacement for `id`.
    pub fn apply_to(self, id: DealId) -> Result<Deal, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let description = self.description.trim();

        Ok(Deal {
            id,
            title,
            contact_id: ContactId::new(self.contact_id.trim())?,
            responsible_id: TeamMemberId::new(self.responsible_id.trim())?,
            value: Money::try_non_negative(self.value)?,
            stage: self.stage,
            expected_close_date: self.expected_close_date.trim().to_string(),
            products: parse_product_tags(&self.products),
            temperature: self.temperature,
            sale_type: self.sale_type,
            engagement_model: self.engagement_model,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Splits a comma-separated tag list, dropping blanks.
pub fn parse_product_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
