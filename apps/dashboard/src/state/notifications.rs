//! # Notification State
//!
//! The in-memory notification list and the panel visibility flag.
//!
//! Notifications are created outside this core and pushed in; the only
//! mutations owned here are the read-flag transitions. Counts and panel
//! ordering are derived views (see `medboard_core::views`), recomputed
//! from the snapshot on every read.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use medboard_core::{views, Notification};

/// Notification list + panel flag.
#[derive(Debug, Default)]
pub struct NotificationState {
    items: Mutex<Vec<Notification>>,
    panel_open: AtomicBool,
}

impl NotificationState {
    /// Creates an empty notification state with the panel closed.
    pub fn new() -> Self {
        NotificationState::default()
    }

    /// Adds an externally created notification at the front.
    pub fn push(&self, notification: Notification) {
        let mut items = self.items.lock().expect("Notification mutex poisoned");
        items.insert(0, notification);
    }

    /// A cloned snapshot in insertion order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.lock().expect("Notification mutex poisoned").clone()
    }

    /// Unread count, recomputed from the list.
    pub fn unread_count(&self) -> usize {
        views::unread_notification_count(&self.snapshot())
    }

    /// Marks one notification read.
    ///
    /// ## Returns
    /// `false` when the id is absent or the entry was already read
    /// (both are no-ops).
    pub fn mark_one_read(&self, id: &str) -> bool {
        let mut items = self.items.lock().expect("Notification mutex poisoned");
        match items.iter_mut().find(|n| n.id == id && !n.read) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Marks every notification read. Idempotent.
    pub fn mark_all_read(&self) {
        let mut items = self.items.lock().expect("Notification mutex poisoned");
        for notification in items.iter_mut() {
            notification.read = true;
        }
    }

    /// Whether the panel is currently shown.
    pub fn is_panel_open(&self) -> bool {
        self.panel_open.load(Ordering::SeqCst)
    }

    /// Opens the panel (no-op when already open).
    pub fn open_panel(&self) {
        self.panel_open.store(true, Ordering::SeqCst);
    }

    /// Closes the panel (no-op when already closed).
    pub fn close_panel(&self) {
        self.panel_open.store(false, Ordering::SeqCst);
    }

    /// Flips the panel flag, returning the new value.
    pub fn toggle_panel(&self) -> bool {
        // fetch_xor flips and returns the previous value
        !self.panel_open.fetch_xor(true, Ordering::SeqCst)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
