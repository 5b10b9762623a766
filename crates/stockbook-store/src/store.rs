//! # Item Store
//!
//! Owns the canonical item collection and the identifier sequence.
//!
//! ## Thread Safety
//! The collection is wrapped in a `Mutex` because:
//! 1. Identifier assignment must be unique across concurrent savers
//! 2. Update-in-place must be atomic with respect to concurrent reads
//! 3. The hosting layer may serve requests from many threads
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Store Operations                                │
//! │                                                                         │
//! │  Caller Action            Store Method           State Change           │
//! │  ─────────────            ────────────           ────────────           │
//! │                                                                         │
//! │  Submit add form ────────► save(draft) ─────────► items.push(item)      │
//! │                                                   next_id += 1          │
//! │                                                                         │
//! │  Open detail page ───────► find_by_id(id) ──────► (read only)           │
//! │                                                                         │
//! │  Open listing page ──────► find_all() ──────────► (read only)           │
//! │                                                                         │
//! │  Submit edit form ───────► update(id, draft) ───► items[i].* = draft.*  │
//! │                                                                         │
//! │  Test teardown ──────────► clear() ─────────────► items.clear()         │
//! │                                                   (next_id untouched)   │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex; none blocks beyond the lock,   │
//! │        suspends, or performs I/O.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockbook_core::{Item, ItemDraft};

/// The guarded state: insertion-ordered items plus the id sequence.
#[derive(Debug)]
struct StoreInner {
    /// Items in insertion order. Listing order is this order, always,
    /// independent of identifier values.
    items: Vec<Item>,

    /// Next identifier to assign. Starts at 1 and only ever grows;
    /// `clear` does not rewind it, so ids are never reused.
    next_id: u64,
}

/// In-memory repository for items.
///
/// ## Usage
/// ```rust
/// use stockbook_store::ItemStore;
/// use stockbook_core::ItemDraft;
///
/// let store = ItemStore::new();
/// let saved = store.save(ItemDraft::new("itemA", Some(10_000), Some(10)));
///
/// assert_eq!(saved.id, 1);
/// assert_eq!(store.find_by_id(1), Some(saved));
/// ```
///
/// ## Error Convention
/// Point lookups return `Option` (absence is an ordinary outcome the caller
/// routes to a not-found page); mutations return `StoreResult` because a
/// missing target is a failed command.
#[derive(Debug)]
pub struct ItemStore {
    inner: Mutex<StoreInner>,
}

impl ItemStore {
    /// Creates an empty store with the identifier sequence at 1.
    pub fn new() -> Self {
        ItemStore {
            inner: Mutex::new(StoreInner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Stores a new item built from the draft and returns it, id assigned.
    ///
    /// The caller is expected to have run `validate(draft, Mode::Save)`
    /// first; the store itself accepts whatever it is given. Whatever
    /// identity the caller imagined the draft had is ignored; the next
    /// sequence value wins.
    pub fn save(&self, draft: ItemDraft) -> Item {
        let mut inner = self.inner.lock().expect("item store mutex poisoned");

        let id = inner.next_id;
        inner.next_id += 1;

        let item = Item::from_draft(id, draft);
        debug!(id = item.id, name = %item.name, "Saving item");
        inner.items.push(item.clone());

        item
    }

    /// Returns the item with the given id, or `None` when no such id exists.
    pub fn find_by_id(&self, id: u64) -> Option<Item> {
        let inner = self.inner.lock().expect("item store mutex poisoned");
        inner.items.iter().find(|item| item.id == id).cloned()
    }

    /// Returns all items in insertion order.
    ///
    /// Empty store yields an empty vec, never an absent result.
    pub fn find_all(&self) -> Vec<Item> {
        let inner = self.inner.lock().expect("item store mutex poisoned");
        inner.items.clone()
    }

    /// Overwrites name/price/quantity of the item with the given id.
    ///
    /// The identifier and the record's position in the listing are
    /// preserved; only the payload fields change.
    ///
    /// ## Returns
    /// * `Ok(())` - update applied
    /// * `Err(StoreError::NotFound)` - id was never assigned or was cleared
    pub fn update(&self, id: u64, draft: ItemDraft) -> StoreResult<()> {
        let mut inner = self.inner.lock().expect("item store mutex poisoned");

        debug!(id, "Updating item");

        match inner.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = draft.name;
                item.price = draft.price;
                item.quantity = draft.quantity;
                Ok(())
            }
            None => Err(StoreError::not_found("Item", id)),
        }
    }

    /// Removes all items. Test/maintenance hook, not an operational path.
    ///
    /// The identifier sequence keeps its position: items saved after a
    /// clear continue from where the sequence left off.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("item store mutex poisoned");
        debug!(dropped = inner.items.len(), "Clearing item store");
        inner.items.clear();
    }

    /// Number of stored items (for diagnostics).
    pub fn count(&self) -> usize {
        let inner = self.inner.lock().expect("item store mutex poisoned");
        inner.items.len()
    }

    /// Checks if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
