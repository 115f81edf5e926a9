//! # Durable Slots
//!
//! A `DurableSlot<T>` is one typed value behind one storage key.
//!
//! ## Decode-Or-Default
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       DurableSlot::load                                 │
//! │                                                                         │
//! │  backend.read(key)                                                     │
//! │       │                                                                 │
//! │       ├── Ok(Some(raw)) ──► serde decode ──► Ok(value)  → value        │
//! │       │                         │                                       │
//! │       │                         └── Err ──► warn! ──────→ T::default() │
//! │       ├── Ok(None) ─────────────────────────────────────→ T::default() │
//! │       └── Err(..) ──────────────────────► warn! ────────→ T::default() │
//! │                                                                         │
//! │  load() NEVER fails. A corrupt or missing value silently becomes       │
//! │  the default, with a diagnostic log line for the curious.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are write-through: `store` serializes and hands the payload to
//! the backend immediately, surfacing any failure to the caller.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};

/// One typed value behind one storage key.
pub struct DurableSlot<T> {
    backend: Arc<dyn StorageBackend>,
    key: String,
    _value: std::marker::PhantomData<fn() -> T>,
}

impl<T> DurableSlot<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Creates a slot for `key` on the given backend.
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        DurableSlot {
            backend,
            key: key.into(),
            _value: std::marker::PhantomData,
        }
    }

    /// The storage key this slot owns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the value, falling back to `T::default()` on a missing key,
    /// unreadable backend, or malformed payload.
    pub fn load(&self) -> T {
        match self.backend.read(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Malformed persisted value, using default");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Storage read failed, using default");
                T::default()
            }
        }
    }

    /// Serializes and writes the value through to the backend.
    pub fn store(&self, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;

        self.backend.write(&self.key, &raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    fn slot(backend: &Arc<MemoryStore>) -> DurableSlot<Vec<String>> {
        DurableSlot::new(backend.clone() as Arc<dyn StorageBackend>, "names")
    }

    #[test]
    fn test_missing_key_loads_default() {
        let backend = Arc::new(MemoryStore::new());
        assert!(slot(&backend).load().is_empty());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let backend = Arc::new(MemoryStore::new());
        let slot = slot(&backend);

        slot.store(&vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(slot.load(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_malformed_payload_loads_default() {
        let backend = Arc::new(MemoryStore::new());
        backend.write("names", "{not json").unwrap();

        assert!(slot(&backend).load().is_empty());

        // The corrupt payload is left in place; the next successful store
        // overwrites it
        let slot = slot(&backend);
        slot.store(&vec!["fresh".to_string()]).unwrap();
        assert_eq!(slot.load(), vec!["fresh".to_string()]);
    }

    #[test]
    fn test_wrong_shape_payload_loads_default() {
        let backend = Arc::new(MemoryStore::new());
        // Valid JSON, wrong type for Vec<String>
        backend.write("names", "42").unwrap();
        assert!(slot(&backend).load().is_empty());
    }
}
