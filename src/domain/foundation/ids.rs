//! Strongly-typed identifier value objects.
//!
//! Records reference each other by string id. Seed data and the price list use
//! short human ids (`"1"`, `"c2"`); ids minted at runtime are UUID v4 strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from an existing string, returning error if blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Mints a fresh, unique id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a contact record.
    ContactId,
    "contact_id"
);

string_id!(
    /// Identifier of a deal record.
    DealId,
    "deal_id"
);

string_id!(
    /// Identifier of a task record.
    TaskId,
    "task_id"
);

string_id!(
    /// Identifier of a committed proposal.
    ProposalId,
    "proposal_id"
);

string_id!(
    /// Identifier of a single proposal line. Unique per line instance,
    /// never the catalog id.
    LineItemId,
    "line_item_id"
);

string_id!(
    /// Identifier of a price list entry.
    CatalogItemId,
    "catalog_item_id"
);

string_id!(
    /// Identifier of an agency team member.
    TeamMemberId,
    "team_member_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_blank_ids() {
        assert!(DealId::new("").is_err());
        assert!(DealId::new("   ").is_err());
        assert!(DealId::new("1").is_ok());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = LineItemId::generate();
        let b = LineItemId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = CatalogItemId::new("c1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c1\"");

        let parsed: CatalogItemId = serde_json::from_str("\"10\"").unwrap();
        assert_eq!(parsed.as_str(), "10");
    }

    #[test]
    fn display_matches_inner_value() {
        let id = ProposalId::new("abc").unwrap();
        assert_eq!(id.to_string(), "abc");
    }
}
