//! # Entity Store
//!
//! The generic in-memory collection behind equipment, work orders, and
//! suppliers.
//!
//! ## Mutation Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    EntityStore Operations                               │
//! │                                                                         │
//! │  Shell Action              Store Call              Collection Change    │
//! │  ────────────              ──────────              ─────────────────    │
//! │                                                                         │
//! │  Refresh completes ──────► complete_refresh() ───► full replace         │
//! │                                                    (if ticket latest)   │
//! │  Save edited record ─────► upsert_by_replace() ──► items[i] = item      │
//! │                                                    (no-op if absent)    │
//! │  Create new record ──────► prepend() ────────────► insert at front      │
//! │                                                                         │
//! │  Delete record ──────────► delete_by_id() ───────► retain others        │
//! │                                                    (no-op if absent)    │
//! │                                                                         │
//! │  Render list ────────────► snapshot() ───────────► (clone, read only)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Refresh Tickets (latest wins)
//! Two refreshes may be in flight at once - nothing de-duplicates the
//! trigger. Each refresh takes a ticket from a monotonic counter before
//! fetching and may only commit its result while its ticket is still the
//! newest issued. A slow first response arriving after a faster second
//! one is dropped instead of clobbering newer data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

use medboard_core::{Equipment, Supplier, WorkOrder};

// =============================================================================
// Identified
// =============================================================================

/// Anything stored by id in an [`EntityStore`].
pub trait Identified {
    /// The entity's unique identifier within its collection.
    fn id(&self) -> &str;
}

impl Identified for Equipment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for WorkOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Supplier {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Refresh Ticket
// =============================================================================

/// Proof of a started refresh; commits only while it is the latest issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

// =============================================================================
// Entity Store
// =============================================================================

/// An in-memory collection of one domain type.
#[derive(Debug)]
pub struct EntityStore<T> {
    items: Mutex<Vec<T>>,
    refresh_seq: AtomicU64,
    label: &'static str,
}

impl<T: Identified + Clone> EntityStore<T> {
    /// Creates an empty store. `label` names the collection in logs.
    pub fn new(label: &'static str) -> Self {
        EntityStore {
            items: Mutex::new(Vec::new()),
            refresh_seq: AtomicU64::new(0),
            label,
        }
    }

    /// A cloned snapshot of the collection in its stable order.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().expect("Entity store mutex poisoned").clone()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.lock().expect("Entity store mutex poisoned").len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds an item by id.
    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.items
            .lock()
            .expect("Entity store mutex poisoned")
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Replaces the whole collection in one step.
    pub fn replace_all(&self, items: Vec<T>) {
        let mut guard = self.items.lock().expect("Entity store mutex poisoned");
        *guard = items;
    }

    /// Replaces the entry whose id matches `item`.
    ///
    /// ## Returns
    /// `false` (collection unchanged) when no entry matches - there is
    /// no implicit insert. Applying the same value twice is idempotent.
    pub fn upsert_by_replace(&self, item: T) -> bool {
        let mut guard = self.items.lock().expect("Entity store mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    /// Inserts at the front of the list (new records show first).
    pub fn prepend(&self, item: T) {
        let mut guard = self.items.lock().expect("Entity store mutex poisoned");
        guard.insert(0, item);
    }

    /// Removes the entry with the given id.
    ///
    /// ## Returns
    /// `false` when no entry matched (no-op).
    pub fn delete_by_id(&self, id: &str) -> bool {
        let mut guard = self.items.lock().expect("Entity store mutex poisoned");
        let before = guard.len();
        guard.retain(|item| item.id() != id);
        guard.len() != before
    }

    /// Starts a refresh: issues a ticket newer than any before it.
    pub fn begin_refresh(&self) -> RefreshTicket {
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(store = self.label, seq, "Refresh started");
        RefreshTicket(seq)
    }

    /// Commits a refresh result if `ticket` is still the latest issued.
    ///
    /// ## Returns
    /// `true` when the collection was replaced; `false` when a newer
    /// refresh superseded this one and the result was dropped.
    pub fn complete_refresh(&self, ticket: RefreshTicket, items: Vec<T>) -> bool {
        if ticket.0 != self.refresh_seq.load(Ordering::SeqCst) {
            debug!(
                store = self.label,
                stale = ticket.0,
                "Stale refresh result dropped"
            );
            return false;
        }

        debug!(store = self.label, count = items.len(), "Refresh applied");
        self.replace_all(items);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(id: &str, name: &str) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: name.to_string(),
            contact_email: None,
            phone: None,
        }
    }

    #[test]
    fn test_replace_all_and_snapshot() {
        let store = EntityStore::new("suppliers");
        store.replace_all(vec![supplier("s1", "Acme"), supplier("s2", "MedParts")]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, "s1");
    }

    #[test]
    fn test_upsert_replaces_only_matching_id() {
        let store = EntityStore::new("suppliers");
        store.replace_all(vec![supplier("s1", "Acme")]);

        assert!(store.upsert_by_replace(supplier("s1", "Acme Medical")));
        assert_eq!(store.find_by_id("s1").unwrap().name, "Acme Medical");

        // No implicit insert for unknown ids
        assert!(!store.upsert_by_replace(supplier("s9", "Ghost")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let store = EntityStore::new("suppliers");
        store.replace_all(vec![supplier("s1", "Acme")]);

        store.upsert_by_replace(supplier("s1", "Acme Medical"));
        let once = store.snapshot();

        store.upsert_by_replace(supplier("s1", "Acme Medical"));
        assert_eq!(store.snapshot(), once);
    }

    #[test]
    fn test_prepend_puts_new_items_first() {
        let store = EntityStore::new("suppliers");
        store.prepend(supplier("s1", "Acme"));
        store.prepend(supplier("s2", "MedParts"));

        assert_eq!(store.snapshot()[0].id, "s2");
    }

    #[test]
    fn test_delete_by_id_is_noop_when_absent() {
        let store = EntityStore::new("suppliers");
        store.replace_all(vec![supplier("s1", "Acme")]);

        assert!(store.delete_by_id("s1"));
        assert!(store.is_empty());
        assert!(!store.delete_by_id("s1"));
    }

    #[test]
    fn test_latest_ticket_wins() {
        let store = EntityStore::new("suppliers");

        let first = store.begin_refresh();
        let second = store.begin_refresh();

        // The newer refresh lands first...
        assert!(store.complete_refresh(second, vec![supplier("s2", "New")]));

        // ...and the slow old response is dropped, not applied
        assert!(!store.complete_refresh(first, vec![supplier("s1", "Old")]));
        assert_eq!(store.snapshot()[0].id, "s2");
    }

    #[test]
    fn test_single_refresh_applies() {
        let store = EntityStore::new("suppliers");
        let ticket = store.begin_refresh();
        assert!(store.complete_refresh(ticket, vec![supplier("s1", "Acme")]));
        assert_eq!(store.len(), 1);
    }
}
