//! # stockbook-store: Storage Layer for Stockbook
//!
//! This crate provides the in-memory item store. Durability ends with the
//! process: there is no database, no file, no sync.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stockbook Data Flow                                │
//! │                                                                         │
//! │  Web layer (form submit, external collaborator)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockbook_core::validate(draft, mode)                                  │
//! │       │                                                                 │
//! │       ├── errors ──► redisplay form (store never touched)               │
//! │       │                                                                 │
//! │       ▼ empty                                                           │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockbook-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐              ┌────────────────┐            │   │
//! │  │   │   ItemStore    │              │   StoreError   │            │   │
//! │  │   │  (store.rs)    │              │   (error.rs)   │            │   │
//! │  │   │                │              │                │            │   │
//! │  │   │ Mutex<items +  │              │ NotFound       │            │   │
//! │  │   │ id sequence>   │              │                │            │   │
//! │  │   └────────────────┘              └────────────────┘            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ItemStore` (collection + identifier sequence)
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use stockbook_core::{validate, ItemDraft, Mode};
//! use stockbook_store::ItemStore;
//!
//! let store = ItemStore::new();
//! let draft = ItemDraft::new("itemA", Some(10_000), Some(10));
//!
//! // The caller gates the store on an empty validation result.
//! assert!(validate(&draft, Mode::Save).is_empty());
//! let saved = store.save(draft);
//!
//! assert_eq!(store.find_all(), vec![saved]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::ItemStore;
