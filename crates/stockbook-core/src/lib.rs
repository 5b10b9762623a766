//! # stockbook-core: Pure Business Logic for Stockbook
//!
//! This crate is the **heart** of Stockbook. It decides whether a submitted
//! item is acceptable and reports every violation as plain data, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stockbook Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Web / Form Layer (external collaborator)           │   │
//! │  │   routes ──► form binding ──► validate ──► store ──► render     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockbook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌────────────┐      ┌────────────┐        │   │
//! │  │   │   types   │      │ validation │      │   error    │        │   │
//! │  │   │   Item    │      │ rule sets  │      │ codes+args │        │   │
//! │  │   │ ItemDraft │      │  validate  │      │  rejected  │        │   │
//! │  │   └───────────┘      └────────────┘      └────────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockbook-store (Storage Layer)                │   │
//! │  │        in-memory item collection + identifier sequence          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`Item`, `ItemDraft`)
//! - [`error`] - Violation reports (`ValidationError`, `ErrorCode`)
//! - [`validation`] - Rule sets and the `validate` entry point
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: validation is deterministic - same input, same output
//! 2. **No I/O**: storage, network, file system access is FORBIDDEN here
//! 3. **Errors as Data**: invalid input is a normal result value, never a panic
//! 4. **Preserve the Submission**: rejected values survive verbatim so a form
//!    can be redisplayed exactly as the user left it
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::{validate, ErrorCode, ItemDraft, Mode};
//!
//! // Price below the floor AND total below the minimum: both reported.
//! let draft = ItemDraft::new("itemA", Some(500), Some(10));
//! let result = validate(&draft, Mode::Save);
//!
//! let codes: Vec<_> = result.errors().iter().map(|e| e.code()).collect();
//! assert_eq!(codes, vec![ErrorCode::Range, ErrorCode::TotalPriceMin]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Item` instead of
// `use stockbook_core::types::Item`

pub use error::{ErrorCode, ValidationError};
pub use types::{Item, ItemDraft};
pub use validation::{validate, Mode, RuleSet, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Inclusive lower bound on an item's price.
///
/// ## Business Reason
/// Items below this floor are not worth carrying; the bound doubles as a
/// guard against fat-fingered entries like `100` for `1000`.
pub const PRICE_MIN: i64 = 1_000;

/// Inclusive upper bound on an item's price.
pub const PRICE_MAX: i64 = 1_000_000;

/// Maximum stocked quantity for a single item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 1000).
/// The enforced bound and the bound reported to the user are the same value.
pub const QUANTITY_MAX: i64 = 9_999;

/// Minimum acceptable price × quantity total for one item.
///
/// ## Business Reason
/// An order line below this total costs more to handle than it returns.
pub const TOTAL_PRICE_MIN: i64 = 10_000;
