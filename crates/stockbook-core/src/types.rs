//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │   ItemDraft     │        │      Item       │                        │
//! │  │  ─────────────  │ save   │  ─────────────  │                        │
//! │  │  name           │ ─────► │  id (store-     │                        │
//! │  │  price?         │        │      assigned)  │                        │
//! │  │  quantity?      │        │  name           │                        │
//! │  └─────────────────┘        │  price?         │                        │
//! │         │                   │  quantity?      │                        │
//! │         │ validate          └─────────────────┘                        │
//! │         ▼                                                               │
//! │  ValidationResult (see validation module)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! - `Item::id` is assigned by the store, monotonically, starting at 1.
//!   It is immutable for the lifetime of the record.
//! - An `ItemDraft` never carries an id: whatever identity a caller thinks
//!   it has, the store decides.

use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A persisted item.
///
/// ## Why `Option` on the numeric fields?
/// The submitted form fields are nullable and the update rule set accepts
/// drafts with absent numerics, so the record mirrors that: `price` and
/// `quantity` are *logically* required (validation enforces presence where
/// a rule set demands it) but the type carries exactly what was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the store on creation.
    pub id: u64,

    /// Display name shown in listings and on the detail page.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Option<i64>,

    /// Stocked quantity.
    pub quantity: Option<i64>,
}

impl Item {
    /// Materializes a stored item from an accepted draft.
    ///
    /// The id comes from the store's sequence; any notion of identity the
    /// caller had is discarded here.
    pub fn from_draft(id: u64, draft: ItemDraft) -> Self {
        Item {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
        }
    }
}

// =============================================================================
// Item Draft
// =============================================================================

/// A candidate item: user-submitted data before validation has run.
///
/// ## Lifecycle
/// ```text
/// form fields ──► ItemDraft ──► validate(draft, mode) ──┬─► errors: redisplay
///                                                       └─► empty:  store op
/// ```
///
/// The draft is deliberately permissive: a blank name or an out-of-range
/// price is representable. Deciding acceptability is the validator's job,
/// and the original submitted values must survive long enough to be shown
/// back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Submitted name, possibly empty or whitespace-only.
    pub name: String,

    /// Submitted price, absent when the field was left blank.
    pub price: Option<i64>,

    /// Submitted quantity, absent when the field was left blank.
    pub quantity: Option<i64>,
}

impl ItemDraft {
    /// Creates a draft from already-bound form values.
    pub fn new(name: impl Into<String>, price: Option<i64>, quantity: Option<i64>) -> Self {
        ItemDraft {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Saturating product of price and quantity, when both are present.
    ///
    /// Used by the cross-field minimum-total rule. Saturation keeps absurd
    /// submissions well-defined; a saturated total is far above the minimum
    /// and therefore never misreported.
    pub fn total_price(&self) -> Option<i64> {
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => Some(price.saturating_mul(quantity)),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_assigns_id() {
        let draft = ItemDraft::new("itemA", Some(10_000), Some(10));
        let item = Item::from_draft(7, draft);

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "itemA");
        assert_eq!(item.price, Some(10_000));
        assert_eq!(item.quantity, Some(10));
    }

    #[test]
    fn test_total_price_requires_both_fields() {
        assert_eq!(
            ItemDraft::new("itemA", Some(500), Some(10)).total_price(),
            Some(5_000)
        );
        assert_eq!(ItemDraft::new("itemA", None, Some(10)).total_price(), None);
        assert_eq!(ItemDraft::new("itemA", Some(500), None).total_price(), None);
    }

    #[test]
    fn test_total_price_saturates() {
        let draft = ItemDraft::new("itemA", Some(i64::MAX), Some(2));
        assert_eq!(draft.total_price(), Some(i64::MAX));
    }
}
