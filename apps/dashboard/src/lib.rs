//! # MedBoard Dashboard Library
//!
//! Composition layer for the MedBoard dashboard. This is where the state
//! containers, durable storage, and remote client are wired into one
//! [`AppContext`] that the UI shell threads through every API call.
//!
//! ## Module Organization
//! ```text
//! medboard_dashboard/
//! ├── lib.rs          ◄─── You are here (AppConfig, AppContext, tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Current user + just-logged-in flag
//! │   ├── entities.rs ◄─── Generic entity store with refresh tickets
//! │   ├── notifications.rs ◄─ Notification list + panel flag
//! │   ├── inbox.rs    ◄─── Mocked email inbox
//! │   └── ui.rs       ◄─── Sidebar, search overlay, theme
//! ├── api/
//! │   ├── mod.rs      ◄─── API exports + auth guard
//! │   ├── session.rs  ◄─── login / logout
//! │   ├── equipment.rs, work_orders.rs, suppliers.rs
//! │   ├── messaging.rs◄─── Notifications + inbox
//! │   ├── search.rs   ◄─── Global search + overlay
//! │   └── ui.rs       ◄─── Sidebar / theme
//! ├── events.rs       ◄─── ShellEventEmitter trait
//! ├── directory.rs    ◄─── Fixed user directory
//! └── error.rs        ◄─── ApiError for the shell
//! ```
//!
//! ## Explicit Dependencies, No Globals
//! There is deliberately no `static CONTEXT` anywhere in this crate. The
//! shell builds one [`AppContext`] at startup and passes `&ctx` into every
//! call, which keeps each piece mockable and the whole thing testable with
//! [`AppConfig::in_memory`].
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. init_tracing() ───────────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Resolve data directory ───────────────────────────────────────────► │
//! │     • macOS: ~/Library/Application Support/org.medboard.dashboard       │
//! │     • Windows: %APPDATA%\medboard\dashboard                             │
//! │     • Linux: ~/.local/share/medboard-dashboard                          │
//! │     • Override: MEDBOARD_DATA_DIR                                       │
//! │                                                                         │
//! │  3. AppContext::new(config) ──────────────────────────────────────────► │
//! │     • FileStore + AuditLog + ThemePreference                            │
//! │     • RemoteClient from MEDBOARD_API_URL                                │
//! │     • Empty session, entity stores, notification/inbox state            │
//! │                                                                         │
//! │  4. Shell renders, calls api::session::login on sign-in ──────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod directory;
pub mod error;
pub mod events;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use medboard_core::{Equipment, Supplier, User, WorkOrder};
use medboard_remote::{RemoteClient, RemoteConfig};
use medboard_store::{AuditLog, FileStore, MemoryStore, StorageBackend, ThemePreference};

use error::{ApiError, ApiResult};
use events::{NullEmitter, ShellEventEmitter};
use state::{EntityStore, InboxState, NotificationState, SessionState, UiState};

// =============================================================================
// Configuration
// =============================================================================

/// Where the dashboard keeps its durable state.
#[derive(Debug, Clone)]
pub enum StorageMode {
    /// One JSON file per key under the app data directory.
    File,
    /// Everything in memory; durable state dies with the process.
    /// Used by tests and offline demos.
    InMemory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Durable storage mode.
    pub storage: StorageMode,

    /// Data directory override. `None` means the platform default
    /// (or `MEDBOARD_DATA_DIR` when set). Ignored for in-memory storage.
    pub data_dir: Option<PathBuf>,

    /// Remote endpoint configuration.
    pub remote: RemoteConfig,
}

impl AppConfig {
    /// File-backed configuration with remote settings from the environment.
    pub fn from_env() -> Self {
        AppConfig {
            storage: StorageMode::File,
            data_dir: None,
            remote: RemoteConfig::from_env(),
        }
    }

    /// Fully in-memory configuration for tests and offline demos.
    ///
    /// The remote client points at a closed local port with a short
    /// timeout, so refreshes settle quickly on their fallback
    /// collections instead of waiting on a service that isn't there.
    pub fn in_memory() -> Self {
        AppConfig {
            storage: StorageMode::InMemory,
            data_dir: None,
            remote: RemoteConfig::new("http://127.0.0.1:1")
                .request_timeout(std::time::Duration::from_secs(2)),
        }
    }

    /// Sets the data directory explicitly.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Sets the remote configuration.
    pub fn remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = remote;
        self
    }
}

// =============================================================================
// Application Context
// =============================================================================

/// Everything the API layer needs, built once at startup and passed by
/// reference into every call.
pub struct AppContext {
    /// Current user + transient just-logged-in flag.
    pub session: SessionState,

    /// Equipment collection (refreshed from `/api/inventory`).
    pub equipment: EntityStore<Equipment>,

    /// Work-order collection (refreshed from `/api/work-orders`).
    pub work_orders: EntityStore<WorkOrder>,

    /// Supplier collection (local CRUD only; no backing endpoint).
    pub suppliers: EntityStore<Supplier>,

    /// Notification list + panel flag.
    pub notifications: NotificationState,

    /// Mocked email inbox.
    pub inbox: InboxState,

    /// Sidebar, search overlay, theme.
    pub ui: UiState,

    /// The fixed user directory searched by super admins.
    pub directory: Vec<User>,

    /// Persisted, append-only audit trail.
    pub audit: AuditLog,

    /// HTTP client for the two read-only endpoints.
    pub remote: RemoteClient,

    /// Write-through notification channel to the UI shell.
    pub events: Arc<dyn ShellEventEmitter>,
}

impl AppContext {
    /// Builds a context with the no-op event emitter.
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        Self::with_emitter(config, Arc::new(NullEmitter))
    }

    /// Builds a context that notifies the given shell emitter.
    pub fn with_emitter(
        config: AppConfig,
        events: Arc<dyn ShellEventEmitter>,
    ) -> ApiResult<Self> {
        let backend: Arc<dyn StorageBackend> = match config.storage {
            StorageMode::InMemory => {
                debug!("Using in-memory storage backend");
                Arc::new(MemoryStore::new())
            }
            StorageMode::File => {
                let dir = resolve_data_dir(&config)?;
                info!(dir = %dir.display(), "Using file storage backend");
                Arc::new(FileStore::new(dir)?)
            }
        };

        let remote = RemoteClient::new(config.remote.clone())?;

        Ok(AppContext {
            session: SessionState::new(),
            equipment: EntityStore::new("equipment"),
            work_orders: EntityStore::new("work-orders"),
            suppliers: EntityStore::new("suppliers"),
            notifications: NotificationState::new(),
            inbox: InboxState::new(),
            ui: UiState::new(ThemePreference::new(backend.clone())),
            directory: directory::default_directory(),
            audit: AuditLog::new(backend),
            remote,
            events,
        })
    }

    /// Convenience for tests and demos: in-memory everything.
    pub fn in_memory() -> ApiResult<Self> {
        Self::new(AppConfig::in_memory())
    }
}

// =============================================================================
// Startup Helpers
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=medboard=trace` - Show trace for medboard crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medboard=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the durable-storage directory.
///
/// ## Resolution Order
/// 1. `MEDBOARD_DATA_DIR` environment variable
/// 2. `AppConfig::data_dir`
/// 3. Platform app-data directory via `directories`
fn resolve_data_dir(config: &AppConfig) -> ApiResult<PathBuf> {
    if let Ok(dir) = std::env::var("MEDBOARD_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    let proj_dirs = directories::ProjectDirs::from("org", "medboard", "dashboard")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    Ok(proj_dirs.data_dir().to_path_buf())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_context_builds() {
        let ctx = AppContext::in_memory().unwrap();

        assert!(ctx.session.current_user().is_none());
        assert!(ctx.equipment.is_empty());
        assert!(ctx.audit.is_empty());
        assert!(!ctx.directory.is_empty());
    }

    #[test]
    fn test_file_backed_context_builds_in_temp_dir() {
        let dir = std::env::temp_dir().join(format!("medboard-test-{}", uuid::Uuid::new_v4()));
        let config = AppConfig {
            storage: StorageMode::File,
            data_dir: Some(dir.clone()),
            remote: RemoteConfig::default(),
        };

        // MEDBOARD_DATA_DIR would take priority; this test relies on it
        // being unset in the test environment
        if std::env::var("MEDBOARD_DATA_DIR").is_ok() {
            return;
        }

        let ctx = AppContext::new(config).unwrap();
        assert!(ctx.session.current_user().is_none());
        assert!(dir.exists());

        std::fs::remove_dir_all(dir).ok();
    }
}
