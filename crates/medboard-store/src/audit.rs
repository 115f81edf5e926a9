//! # Audit Log
//!
//! The append-only, user-attributed action trail.
//!
//! ## Invariants
//! - Entries are prepended: index 0 is always the most recent action
//! - No API exists to mutate or remove an entry
//! - The whole list is persisted write-through on every append, so the
//!   trail survives reloads (capped only by what the backend can hold)

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use medboard_core::AuditEntry;

use crate::backend::StorageBackend;
use crate::error::StoreResult;
use crate::slot::DurableSlot;
use crate::AUDIT_LOG_KEY;

/// The persisted audit log.
pub struct AuditLog {
    slot: DurableSlot<Vec<AuditEntry>>,
}

impl AuditLog {
    /// Creates an audit log over the given backend, under
    /// [`AUDIT_LOG_KEY`](crate::AUDIT_LOG_KEY).
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        AuditLog {
            slot: DurableSlot::new(backend, AUDIT_LOG_KEY),
        }
    }

    /// Records an action attributed to `user_id`, newest-first.
    ///
    /// The entry id and timestamp are assigned here; callers only say
    /// what happened.
    ///
    /// ## Returns
    /// The recorded entry, or the write error if persisting failed
    /// (the caller decides whether that degrades or aborts).
    pub fn record(
        &self,
        user_id: &str,
        action: &str,
        detail: Option<String>,
    ) -> StoreResult<AuditEntry> {
        let entry = AuditEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            action: action.to_string(),
            detail,
        };

        let mut entries = self.slot.load();
        entries.insert(0, entry.clone());
        self.slot.store(&entries)?;

        debug!(user_id = %entry.user_id, action = %entry.action, "Audit entry recorded");
        Ok(entry)
    }

    /// All entries, newest first. Reloaded from the backend on every call
    /// so concurrent dashboards over the same store agree.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.slot.load()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.slot.load().len()
    }

    /// Whether the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.slot.load().is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    fn audit_log() -> AuditLog {
        AuditLog::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_record_prepends_newest_first() {
        let log = audit_log();

        log.record("u1", "successful login", None).unwrap();
        log.record("u1", "equipment updated", Some("e1".to_string()))
            .unwrap();
        log.record("u1", "logout", None).unwrap();

        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].action, "logout");
        assert_eq!(entries[1].action, "equipment updated");
        assert_eq!(entries[1].detail.as_deref(), Some("e1"));
        assert_eq!(entries[2].action, "successful login");
    }

    #[test]
    fn test_entries_have_unique_ids() {
        let log = audit_log();
        log.record("u1", "successful login", None).unwrap();
        log.record("u2", "successful login", None).unwrap();

        let entries = log.entries();
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_persists_across_handles_on_shared_backend() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStore::new());

        let log = AuditLog::new(backend.clone());
        log.record("u1", "successful login", None).unwrap();

        // A second handle over the same backend sees the same trail
        let other = AuditLog::new(backend);
        assert_eq!(other.len(), 1);
        assert_eq!(other.entries()[0].user_id, "u1");
    }

    #[test]
    fn test_corrupt_trail_degrades_to_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend.write(AUDIT_LOG_KEY, "not json at all").unwrap();

        let log = AuditLog::new(backend.clone() as Arc<dyn StorageBackend>);
        assert!(log.is_empty());

        // Recording starts a fresh trail over the corrupt payload
        log.record("u1", "successful login", None).unwrap();
        assert_eq!(log.len(), 1);
    }
}
