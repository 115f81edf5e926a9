//! # Storage Backends
//!
//! The `StorageBackend` trait and its two implementations.
//!
//! ## Backend Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StorageBackend                                     │
//! │                                                                         │
//! │  read(key)   → Ok(Some(raw)) value present                             │
//! │              → Ok(None)      key missing (NOT an error)                │
//! │              → Err(..)       I/O failure                               │
//! │                                                                         │
//! │  write(key)  → replaces the whole value in one step                    │
//! │  remove(key) → idempotent; removing a missing key succeeds             │
//! │                                                                         │
//! │  FileStore   one `<key>.json` file per key under the app data dir      │
//! │  MemoryStore HashMap behind a mutex; tests and offline mode            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are opaque strings at this layer; typing and decode-or-default
//! semantics live in [`crate::slot::DurableSlot`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Trait
// =============================================================================

/// A durable (or test-double) key-value store.
pub trait StorageBackend: Send + Sync {
    /// Reads the raw value for `key`. A missing key is `Ok(None)`.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes the raw value for `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing a missing key is a successful no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed storage: one JSON file per key under a directory.
///
/// ## File Layout
/// - Linux: `~/.local/share/medboard/audit-log.json`, `theme.json`
/// - The directory is created on construction if missing
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a file store rooted at `dir`, creating the directory if
    /// it doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();

        std::fs::create_dir_all(&dir).map_err(|e| StoreError::Unavailable {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(dir = %dir.display(), "File store ready");
        Ok(FileStore { dir })
    }

    /// Resolves the file path for a key.
    ///
    /// Keys are internal constants, but sanitize anyway so a future key
    /// can never escape the storage directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);

        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);

        std::fs::write(&path, value).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory storage for tests and offline/demo mode.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use medboard_store::{MemoryStore, StorageBackend};
///
/// let store = Arc::new(MemoryStore::new());
/// store.write("theme", "\"dark\"").unwrap();
/// assert_eq!(store.read("theme").unwrap().as_deref(), Some("\"dark\""));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let values = self.values.lock().expect("Memory store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut values = self.values.lock().expect("Memory store mutex poisoned");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self.values.lock().expect("Memory store mutex poisoned");
        values.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();

        assert!(store.read("missing").unwrap().is_none());

        store.write("k", "v1").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v1"));

        store.write("k", "v2").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert!(store.read("k").unwrap().is_none());

        // Removing again is a no-op, not an error
        store.remove("k").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.read("missing").unwrap().is_none());

        store.write("audit-log", "[]").unwrap();
        assert_eq!(store.read("audit-log").unwrap().as_deref(), Some("[]"));

        store.remove("audit-log").unwrap();
        assert!(store.read("audit-log").unwrap().is_none());
        store.remove("audit-log").unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FileStore::new(dir.path()).unwrap();
            store.write("theme", "\"dark\"").unwrap();
        }

        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(reopened.read("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.write("../escape", "x").unwrap();
        // The file lands inside the store directory, not above it
        assert!(store.read("../escape").unwrap().is_some());
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
