//! # Storage Error Types
//!
//! Error types for durable storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and operation context         │
//! │       │                                                                 │
//! │       ├── reads: swallowed by DurableSlot::load (decode-or-default)    │
//! │       │          with a warn! diagnostic                               │
//! │       ▼                                                                 │
//! │  writes: surfaced to the API layer, which logs and degrades            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed (I/O, not a missing key - missing keys are
    /// reported as `Ok(None)` by backends).
    #[error("Failed to read key '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    /// Writing a key failed (I/O, permissions, disk full).
    #[error("Failed to write key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// The backing directory could not be created or opened.
    #[error("Storage unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },

    /// A value could not be serialized for storage.
    #[error("Failed to serialize value for key '{key}': {reason}")]
    Serialization { key: String, reason: String },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
