//! # State Module
//!
//! Session-scoped application state for the dashboard.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer API Signatures**: Functions read exactly the state they need
//! 4. **Reduced Contention**: Independent states don't share a lock
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext                                 │   │
//! │  │  session · equipment · work_orders · suppliers ·                │   │
//! │  │  notifications · inbox · ui                                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │                  │                  │                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ SessionState │  │ EntityStore  │  │ NotificationState│              │
//! │  │              │  │   <T>        │  │ InboxState       │              │
//! │  │ Mutex<Option │  │ Mutex<Vec<T>>│  │ UiState          │              │
//! │  │  <User>>     │  │ + AtomicU64  │  │                  │              │
//! │  │ + AtomicBool │  │   tickets    │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Mutations are synchronous and lock one list at a time               │
//! │  • Refresh tickets make concurrent fetches latest-wins                 │
//! │  • Reads clone a snapshot; derived views never hold a lock             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod entities;
mod inbox;
mod notifications;
mod session;
mod ui;

pub use entities::{EntityStore, Identified, RefreshTicket};
pub use inbox::InboxState;
pub use notifications::NotificationState;
pub use session::SessionState;
pub use ui::{SearchOverlay, UiState};
