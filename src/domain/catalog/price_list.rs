//! Price list entries and the read-only catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::{CatalogItemId, Money, ValidationError};

/// Delivery size tier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSize {
    P,
    M,
    G,
    GG,
}

impl ItemSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSize::P => "P",
            ItemSize::M => "M",
            ItemSize::G => "G",
            ItemSize::GG => "GG",
        }
    }
}

/// A priced service offered by the agency. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListItem {
    pub id: CatalogItemId,
    pub description: String,
    pub size: ItemSize,
    #[serde(alias = "value")]
    pub unit_value: Money,
}

impl PriceListItem {
    pub fn new(
        id: &str,
        description: impl Into<String>,
        size: ItemSize,
        unit_value: Money,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            id: CatalogItemId::new(id)?,
            description: description.into(),
            size,
            unit_value,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if self.unit_value.cents() <= 0 || self.unit_value > Money::MAX {
            return Err(ValidationError::out_of_range(
                "unitValue",
                1,
                Money::MAX.cents(),
                self.unit_value.cents(),
            ));
        }
        Ok(())
    }
}

/// Ordered, read-only list of price list items.
///
/// Cheap to clone; clones share the same underlying list, so a catalog can be
/// handed to a spawned suggestion task without copying.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<Vec<PriceListItem>>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and prices outside
    /// `1..=Money::MAX` cents.
    pub fn from_items(items: Vec<PriceListItem>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::invalid_format(
                    "id",
                    format!("duplicate catalog id '{}'", item.id),
                ));
            }
        }
        Ok(Self {
            items: Arc::new(items),
        })
    }

    /// Parses a catalog from a JSON array of price list items.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let items: Vec<PriceListItem> = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("catalog", e.to_string()))?;
        Self::from_items(items)
    }

    /// `listItems()`: every entry in display order.
    pub fn list_items(&self) -> &[PriceListItem] {
        &self.items
    }

    /// Looks up an entry. Absence is not an error: old proposals may point
    /// at ids that no longer exist.
    pub fn get(&self, id: &CatalogItemId) -> Option<&PriceListItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Looks up an entry by raw id string.
    pub fn get_str(&self, id: &str) -> Option<&PriceListItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
