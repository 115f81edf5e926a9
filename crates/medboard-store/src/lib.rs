//! # medboard-store: Durable Storage for MedBoard
//!
//! This crate persists the two pieces of state that survive a dashboard
//! reload: the append-only audit log and the theme preference. Everything
//! else in MedBoard is session-scoped and rebuilt at startup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       MedBoard Storage Flow                             │
//! │                                                                         │
//! │  Dashboard API (login, set_theme, ...)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  medboard-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  AuditLog     │    │ThemePreference│    │ DurableSlot  │  │   │
//! │  │   │  (audit.rs)   │    │  (theme.rs)   │    │  (slot.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ prepend-only  │───►│ write-through │───►│ decode or    │  │   │
//! │  │   │ entries       │    │ on change     │    │ default      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────┬───────┘  │   │
//! │  │                                                     │          │   │
//! │  │                              ┌──────────────────────▼───────┐  │   │
//! │  │                              │   StorageBackend (trait)     │  │   │
//! │  │                              │   FileStore │ MemoryStore    │  │   │
//! │  │                              └──────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/medboard/<key>.json   (one file per key)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The `StorageBackend` trait, `FileStore`, `MemoryStore`
//! - [`slot`] - `DurableSlot<T>`: typed decode-or-default wrapper
//! - [`audit`] - The append-only audit log
//! - [`theme`] - The theme preference
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use medboard_store::{AuditLog, FileStore, ThemePreference};
//!
//! let backend = Arc::new(FileStore::new("/path/to/data")?);
//! let audit = AuditLog::new(backend.clone());
//! audit.record("u1", "successful login", None)?;
//!
//! let theme = ThemePreference::new(backend);
//! theme.set(medboard_core::Theme::Dark)?; // persisted immediately
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod audit;
pub mod backend;
pub mod error;
pub mod slot;
pub mod theme;

// =============================================================================
// Re-exports
// =============================================================================

pub use audit::AuditLog;
pub use backend::{FileStore, MemoryStore, StorageBackend};
pub use error::{StoreError, StoreResult};
pub use slot::DurableSlot;
pub use theme::ThemePreference;

// =============================================================================
// Storage Keys
// =============================================================================

/// Key under which the serialized audit log lives.
pub const AUDIT_LOG_KEY: &str = "audit-log";

/// Key under which the theme preference lives.
pub const THEME_KEY: &str = "theme";
