//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ItemStore lookup miss                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::NotFound (this module)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Web layer decides the user-visible behavior (e.g. a not-found page)    │
//! │                                                                         │
//! │  Validation failures NEVER arrive here: they are result values from     │
//! │  stockbook-core, not errors.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Store operation errors.
///
/// An in-memory store has exactly one way to fail: the requested id does
/// not exist. There is no I/O, no connection, no constraint machinery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the requested identifier.
    ///
    /// ## When This Occurs
    /// - `update` against an id that was never assigned
    /// - `update` after `clear` wiped the collection
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
