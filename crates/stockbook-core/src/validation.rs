//! # Validation Module
//!
//! Acceptability rules for candidate items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Pipeline                                │
//! │                                                                         │
//! │  ItemDraft (user-submitted, possibly garbage)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate(draft, mode) ← THIS MODULE                                    │
//! │       │                                                                 │
//! │       ├── rule 1: name has a non-whitespace character                   │
//! │       ├── rule 2: price within [1000, 1000000]                          │
//! │       ├── rule 3: quantity at most 9999                                 │
//! │       └── rule 4: price × quantity at least 10000 (cross-field)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationResult: EVERY violation, in rule order                       │
//! │       │                                                                 │
//! │       ├── empty     → caller proceeds to the store operation            │
//! │       └── non-empty → caller redisplays the form with all problems      │
//! │                                                                         │
//! │  All rules run on every call. No short-circuit: a blank name must not   │
//! │  hide an out-of-range price, because the UI shows everything at once.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Rule Sets
//! Create and update submissions share the bounds and the cross-field rule
//! but differ in which fields are mandatory: a create must carry all three
//! fields, an update may omit the numeric fields (present values are still
//! bound-checked). The difference is data (mandatory-field flags on
//! [`RuleSet`]), not two divergent code paths.
//!
//! ## Usage
//! ```rust
//! use stockbook_core::{validate, ItemDraft, Mode};
//!
//! let draft = ItemDraft::new("itemA", Some(10_000), Some(10));
//! assert!(validate(&draft, Mode::Save).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ErrorCode, ValidationError};
use crate::types::ItemDraft;
use crate::{PRICE_MAX, PRICE_MIN, QUANTITY_MAX, TOTAL_PRICE_MIN};

// =============================================================================
// Modes & Rule Sets
// =============================================================================

/// Which strictness regime to validate under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Creating a new item: every field is mandatory.
    Save,
    /// Updating an existing item: the numeric fields may be omitted.
    Update,
}

impl Mode {
    /// The rule set this mode validates under.
    pub const fn rules(self) -> RuleSet {
        match self {
            Mode::Save => RuleSet::SAVE,
            Mode::Update => RuleSet::UPDATE,
        }
    }
}

/// Mandatory-field flags for one strictness regime.
///
/// Bounds are shared by every rule set (see the crate-level constants);
/// only mandatoriness varies between create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Name must contain a non-whitespace character.
    pub require_name: bool,
    /// Price must be present (a present price is always range-checked).
    pub require_price: bool,
    /// Quantity must be present (a present quantity is always cap-checked).
    pub require_quantity: bool,
}

impl RuleSet {
    /// Rule set for creating an item.
    pub const SAVE: RuleSet = RuleSet {
        require_name: true,
        require_price: true,
        require_quantity: true,
    };

    /// Rule set for updating an item.
    pub const UPDATE: RuleSet = RuleSet {
        require_name: true,
        require_price: false,
        require_quantity: false,
    };
}

// =============================================================================
// Validation Result
// =============================================================================

/// Ordered collection of violations; empty means acceptance.
///
/// Ordering is deterministic: errors appear in rule order, so validating
/// the same candidate twice yields identical content and ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// True when the candidate was accepted.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when at least one violation was reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of reported violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All violations, in rule order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Field-scoped violations only, preserving order.
    pub fn field_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.field_name().is_some())
    }

    /// Object-scoped violations only, preserving order.
    pub fn object_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.field_name().is_none())
    }

    /// Consumes the result, yielding the violations.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Decides acceptability of a candidate item under the given mode.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Add-item form submit: { name: "itemA", price: 500, quantity: 10 }     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate(draft, Mode::Save) ← THIS FUNCTION                            │
/// │       │                                                                 │
/// │       ├── name "itemA" has text              → ok                       │
/// │       ├── price 500 below 1000               → field error "range"      │
/// │       ├── quantity 10 within cap             → ok                       │
/// │       └── total 500 × 10 = 5000 below 10000  → object error             │
/// │       │                                        "totalPriceMin"          │
/// │       ▼                                                                 │
/// │  Form redisplays BOTH problems, inputs still showing 500 and 10         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Never panics and never returns `Err`: invalidity is a normal,
/// fully-enumerated result value.
pub fn validate(draft: &ItemDraft, mode: Mode) -> ValidationResult {
    let rules = mode.rules();
    let mut result = ValidationResult::default();

    check_name(draft, &rules, &mut result);
    check_price(draft, &rules, &mut result);
    check_quantity(draft, &rules, &mut result);
    check_total_price(draft, &mut result);

    result
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: name must contain at least one non-whitespace character.
fn check_name(draft: &ItemDraft, rules: &RuleSet, result: &mut ValidationResult) {
    if rules.require_name && draft.name.trim().is_empty() {
        result.push(ValidationError::field(
            "name",
            ErrorCode::Required,
            vec![],
            json!(draft.name),
        ));
    }
}

/// Rule 2: price must fall within the inclusive price range.
///
/// An absent price counts as a range violation only when the rule set makes
/// the field mandatory; the reported args are the bounds either way.
fn check_price(draft: &ItemDraft, rules: &RuleSet, result: &mut ValidationResult) {
    let violated = match draft.price {
        Some(price) => !(PRICE_MIN..=PRICE_MAX).contains(&price),
        None => rules.require_price,
    };

    if violated {
        result.push(ValidationError::field(
            "price",
            ErrorCode::Range,
            vec![json!(PRICE_MIN), json!(PRICE_MAX)],
            json!(draft.price),
        ));
    }
}

/// Rule 3: quantity must not exceed the cap.
fn check_quantity(draft: &ItemDraft, rules: &RuleSet, result: &mut ValidationResult) {
    let violated = match draft.quantity {
        Some(quantity) => quantity > QUANTITY_MAX,
        None => rules.require_quantity,
    };

    if violated {
        result.push(ValidationError::field(
            "quantity",
            ErrorCode::Max,
            vec![json!(QUANTITY_MAX)],
            json!(draft.quantity),
        ));
    }
}

/// Rule 4: when both numerics are present, price × quantity must reach the
/// minimum order total. Cross-field, so the violation is object-scoped.
fn check_total_price(draft: &ItemDraft, result: &mut ValidationResult) {
    if let Some(total) = draft.total_price() {
        if total < TOTAL_PRICE_MIN {
            result.push(ValidationError::object(
                ErrorCode::TotalPriceMin,
                vec![json!(TOTAL_PRICE_MIN), json!(total)],
            ));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn codes(result: &ValidationResult) -> Vec<(Option<&str>, ErrorCode)> {
        result
            .errors()
            .iter()
            .map(|e| (e.field_name(), e.code()))
            .collect()
    }

    #[test]
    fn test_valid_draft_is_accepted() {
        let draft = ItemDraft::new("itemA", Some(10_000), Some(10));
        let result = validate(&draft, Mode::Save);

        assert!(result.is_empty());
        assert!(!result.has_errors());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_blank_name_is_required() {
        for name in ["", "   ", "\t\n"] {
            let draft = ItemDraft::new(name, Some(10_000), Some(10));
            let result = validate(&draft, Mode::Save);

            assert_eq!(codes(&result), vec![(Some("name"), ErrorCode::Required)]);
            assert_eq!(result.errors()[0].rejected_value(), Some(&json!(name)));
        }
    }

    #[test]
    fn test_blank_name_is_required_on_update_too() {
        let draft = ItemDraft::new("  ", Some(10_000), Some(10));
        let result = validate(&draft, Mode::Update);

        assert_eq!(codes(&result), vec![(Some("name"), ErrorCode::Required)]);
    }

    #[test]
    fn test_price_out_of_range() {
        for price in [0, 999, 1_000_001, -5] {
            let draft = ItemDraft::new("itemA", Some(price), Some(10));
            let result = validate(&draft, Mode::Save);

            let errors = result.errors();
            assert_eq!(errors[0].field_name(), Some("price"));
            assert_eq!(errors[0].code(), ErrorCode::Range);
            assert_eq!(errors[0].args(), &[json!(1000), json!(1000000)]);
            assert_eq!(errors[0].rejected_value(), Some(&json!(price)));
        }
    }

    #[test]
    fn test_price_boundaries_are_inclusive() {
        for price in [1_000, 1_000_000] {
            let draft = ItemDraft::new("itemA", Some(price), Some(10));
            assert!(validate(&draft, Mode::Save).is_empty(), "price {price}");
        }
    }

    #[test]
    fn test_missing_price_is_a_range_violation_on_save() {
        let draft = ItemDraft::new("itemA", None, Some(10));
        let result = validate(&draft, Mode::Save);

        assert_eq!(codes(&result), vec![(Some("price"), ErrorCode::Range)]);
        assert_eq!(result.errors()[0].rejected_value(), Some(&Value::Null));
    }

    #[test]
    fn test_missing_price_is_tolerated_on_update() {
        let draft = ItemDraft::new("itemA", None, Some(10));
        assert!(validate(&draft, Mode::Update).is_empty());
    }

    #[test]
    fn test_present_price_is_range_checked_on_update() {
        let draft = ItemDraft::new("itemA", Some(500), None);
        let result = validate(&draft, Mode::Update);

        assert_eq!(codes(&result), vec![(Some("price"), ErrorCode::Range)]);
    }

    #[test]
    fn test_quantity_over_cap() {
        let draft = ItemDraft::new("itemA", Some(10_000), Some(10_000));
        let result = validate(&draft, Mode::Save);

        let errors = result.errors();
        assert_eq!(errors[0].field_name(), Some("quantity"));
        assert_eq!(errors[0].code(), ErrorCode::Max);
        assert_eq!(errors[0].args(), &[json!(9999)]);
        assert_eq!(errors[0].rejected_value(), Some(&json!(10_000)));
    }

    #[test]
    fn test_quantity_cap_is_inclusive() {
        let draft = ItemDraft::new("itemA", Some(10_000), Some(9_999));
        assert!(validate(&draft, Mode::Save).is_empty());
    }

    #[test]
    fn test_quantity_cap_applies_on_update() {
        let draft = ItemDraft::new("itemA", Some(10_000), Some(10_000));
        let result = validate(&draft, Mode::Update);

        assert_eq!(codes(&result), vec![(Some("quantity"), ErrorCode::Max)]);
    }

    #[test]
    fn test_missing_quantity_is_tolerated_on_update() {
        let draft = ItemDraft::new("itemA", Some(10_000), None);
        assert!(validate(&draft, Mode::Update).is_empty());
    }

    #[test]
    fn test_total_price_minimum() {
        // 500 × 10 = 5000, below the 10000 floor: price range violation AND
        // the cross-field rule, both reported, in rule order.
        let draft = ItemDraft::new("itemA", Some(500), Some(10));
        let result = validate(&draft, Mode::Save);

        assert_eq!(
            codes(&result),
            vec![
                (Some("price"), ErrorCode::Range),
                (None, ErrorCode::TotalPriceMin),
            ]
        );
        let object = result.object_errors().next().unwrap();
        assert_eq!(object.args(), &[json!(10000), json!(5000)]);
    }

    #[test]
    fn test_total_price_rule_needs_both_fields() {
        let draft = ItemDraft::new("itemA", Some(500), None);
        let result = validate(&draft, Mode::Update);

        // Price violation reported, but no object error without a quantity.
        assert_eq!(codes(&result), vec![(Some("price"), ErrorCode::Range)]);
    }

    #[test]
    fn test_every_rule_reports_independently() {
        // Whitespace name, zero price, over-cap quantity: all three field
        // rules fire, and 0 × 10000 = 0 still triggers the total rule.
        let draft = ItemDraft::new("    ", Some(0), Some(10_000));
        let result = validate(&draft, Mode::Save);

        assert_eq!(
            codes(&result),
            vec![
                (Some("name"), ErrorCode::Required),
                (Some("price"), ErrorCode::Range),
                (Some("quantity"), ErrorCode::Max),
                (None, ErrorCode::TotalPriceMin),
            ]
        );
        let object = result.object_errors().next().unwrap();
        assert_eq!(object.args(), &[json!(10000), json!(0)]);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let draft = ItemDraft::new(" ", Some(500), Some(10));

        let first = validate(&draft, Mode::Save);
        let second = validate(&draft, Mode::Save);

        assert_eq!(first, second);
    }

    #[test]
    fn test_rule_sets_differ_only_in_mandatory_fields() {
        assert!(RuleSet::SAVE.require_price && RuleSet::SAVE.require_quantity);
        assert!(!RuleSet::UPDATE.require_price && !RuleSet::UPDATE.require_quantity);
        assert!(RuleSet::SAVE.require_name && RuleSet::UPDATE.require_name);
    }

    #[test]
    fn test_result_partitions_preserve_order() {
        let draft = ItemDraft::new("", Some(500), Some(10));
        let result = validate(&draft, Mode::Save);

        let fields: Vec<_> = result.field_errors().map(|e| e.field_name()).collect();
        assert_eq!(fields, vec![Some("name"), Some("price")]);
        assert_eq!(result.object_errors().count(), 1);
    }
}
