//! # Validation Report Types
//!
//! The per-violation report produced by the validator.
//!
//! ## Error Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ValidationError                                    │
//! │                                                                         │
//! │  Field  ── attaches to one named input                                  │
//! │  │         • field          "price"                                     │
//! │  │         • code           Range                                       │
//! │  │         • args           [1000, 1000000]                             │
//! │  │         • rejected_value 500        ← what the user actually typed   │
//! │  │                                                                      │
//! │  Object ── attaches to the form as a whole (cross-field rules)          │
//! │            • code           TotalPriceMin                               │
//! │            • args           [10000, 5000]                               │
//! │                                                                         │
//! │  The code is symbolic: turning (code, args) into human text is a        │
//! │  message-bundle concern in the rendering layer, not here.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. `Display` output is for logs and diagnostics only
//! 4. The rejected value is preserved verbatim so a redisplayed form can
//!    show exactly what was submitted, including null and out-of-range input

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Error Code
// =============================================================================

/// Symbolic reason for a validation failure.
///
/// Serialized forms are the message-resolution keys the rendering layer
/// looks up (`"required"`, `"range"`, `"max"`, `"totalPriceMin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    /// A required field is missing, empty, or whitespace-only.
    Required,

    /// A numeric field lies outside an inclusive range.
    Range,

    /// A numeric field exceeds its maximum.
    Max,

    /// The price × quantity total falls below the required minimum.
    TotalPriceMin,
}

impl ErrorCode {
    /// Returns the message-resolution key for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Range => "range",
            ErrorCode::Max => "max",
            ErrorCode::TotalPriceMin => "totalPriceMin",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// One reported validation problem.
///
/// Field-scoped and object-scoped violations are distinct variants because
/// they attach to different places in a rendered form (next to an input vs.
/// at the top), and a cross-field rule cannot be attributed to one input.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum ValidationError {
    /// Violation attributable to one named field.
    #[error("{field}: {code} (rejected value: {rejected_value})")]
    Field {
        /// Name of the offending field.
        field: String,

        /// Symbolic reason.
        code: ErrorCode,

        /// Ordered message-template parameters (bounds, computed values).
        args: Vec<Value>,

        /// The original submitted value, never coerced. `Value::Null` when
        /// the field was absent.
        #[serde(rename = "rejectedValue")]
        rejected_value: Value,
    },

    /// Violation that applies to the item as a whole.
    #[error("item: {code} {args:?}")]
    Object {
        /// Symbolic reason.
        code: ErrorCode,

        /// Ordered message-template parameters.
        args: Vec<Value>,
    },
}

impl ValidationError {
    /// Creates a field-scoped violation.
    pub fn field(
        field: impl Into<String>,
        code: ErrorCode,
        args: Vec<Value>,
        rejected_value: Value,
    ) -> Self {
        ValidationError::Field {
            field: field.into(),
            code,
            args,
            rejected_value,
        }
    }

    /// Creates an object-scoped violation.
    pub fn object(code: ErrorCode, args: Vec<Value>) -> Self {
        ValidationError::Object { code, args }
    }

    /// The symbolic reason, regardless of scope.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Field { code, .. } | ValidationError::Object { code, .. } => *code,
        }
    }

    /// The offending field name, when field-scoped.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ValidationError::Field { field, .. } => Some(field),
            ValidationError::Object { .. } => None,
        }
    }

    /// The ordered message-template parameters.
    pub fn args(&self) -> &[Value] {
        match self {
            ValidationError::Field { args, .. } | ValidationError::Object { args, .. } => args,
        }
    }

    /// The preserved submitted value, when field-scoped.
    pub fn rejected_value(&self) -> Option<&Value> {
        match self {
            ValidationError::Field { rejected_value, .. } => Some(rejected_value),
            ValidationError::Object { .. } => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_keys() {
        assert_eq!(ErrorCode::Required.as_str(), "required");
        assert_eq!(ErrorCode::Range.as_str(), "range");
        assert_eq!(ErrorCode::Max.as_str(), "max");
        assert_eq!(ErrorCode::TotalPriceMin.as_str(), "totalPriceMin");
    }

    #[test]
    fn test_field_error_display() {
        let err = ValidationError::field(
            "price",
            ErrorCode::Range,
            vec![json!(1000), json!(1000000)],
            json!(500),
        );
        assert_eq!(err.to_string(), "price: range (rejected value: 500)");
    }

    #[test]
    fn test_accessors_by_scope() {
        let field = ValidationError::field("name", ErrorCode::Required, vec![], json!("   "));
        assert_eq!(field.code(), ErrorCode::Required);
        assert_eq!(field.field_name(), Some("name"));
        assert_eq!(field.rejected_value(), Some(&json!("   ")));

        let object = ValidationError::object(ErrorCode::TotalPriceMin, vec![json!(10000)]);
        assert_eq!(object.code(), ErrorCode::TotalPriceMin);
        assert_eq!(object.field_name(), None);
        assert_eq!(object.rejected_value(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ValidationError::field(
            "quantity",
            ErrorCode::Max,
            vec![json!(9999)],
            Value::Null,
        );
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "scope": "field",
                "field": "quantity",
                "code": "max",
                "args": [9999],
                "rejectedValue": null,
            })
        );
    }
}
