//! Suggestions produced by the advisor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback deadline annotation when the advisor gave none for an item.
pub const DEADLINE_ON_REQUEST: &str = "Sob consulta";

/// Catalog items recommended for a deal, with delivery estimates and
/// free-text rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Catalog ids, in the order the advisor ranked them.
    #[serde(alias = "suggestedItemsIds")]
    pub suggested_item_ids: Vec<String>,

    /// Catalog id to delivery estimate.
    #[serde(default)]
    pub deadlines: BTreeMap<String, String>,

    #[serde(default)]
    pub pricing_insight: String,

    #[serde(default)]
    pub creative_reasoning: String,
}

impl Suggestion {
    /// Delivery estimate for a catalog id.
    pub fn deadline_for(&self, catalog_id: &str) -> &str {
        self.deadlines
            .get(catalog_id)
            .map(String::as_str)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEADLINE_ON_REQUEST)
    }

    /// Line description carrying the deadline estimate.
    pub fn annotate(&self, description: &str, catalog_id: &str) -> String {
        format!(
            "{} (Estimado: {})",
            description,
            self.deadline_for(catalog_id)
        )
    }
}
