//! # Dashboard API Module
//!
//! The in-process API the UI shell calls.
//!
//! ## API Organization
//! ```text
//! api/
//! ├── mod.rs          ◄─── You are here (exports + guards)
//! ├── session.rs      ◄─── login / logout
//! ├── equipment.rs    ◄─── Inventory refresh + record updates
//! ├── work_orders.rs  ◄─── Work-order refresh / create / update
//! ├── suppliers.rs    ◄─── Supplier add / update / delete
//! ├── messaging.rs    ◄─── Notifications + email inbox
//! ├── search.rs       ◄─── Global search + overlay control
//! └── ui.rs           ◄─── Sidebar / theme
//! ```
//!
//! ## How Calls Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dashboard Call Flow                                  │
//! │                                                                         │
//! │  UI Shell                                                               │
//! │  ────────                                                               │
//! │  const results = globalSearch(query)      (however the shell binds)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Core                                                              │
//! │  ─────────                                                              │
//! │  pub fn global_search(                                                  │
//! │      ctx: &AppContext,        ◄── The one explicit dependency          │
//! │      query: &str,             ◄── Shell-provided input                 │
//! │  ) -> ApiResult<Vec<SearchResult>>                                      │
//! │         │                                                               │
//! │         ▼ (serde serialization at the shell boundary)                   │
//! │  Shell receives: SearchResult[] or { code, message }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function takes `&AppContext` - no ambient state, no globals.
//! Mutating functions notify the shell through `ctx.events` after the
//! state change lands, so re-renders always read the new snapshot.

pub mod equipment;
pub mod messaging;
pub mod search;
pub mod session;
pub mod suppliers;
pub mod ui;
pub mod work_orders;

use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::AppContext;
use medboard_core::User;

/// Returns the current user, or `Unauthorized` when nobody is logged in.
///
/// Refreshes and audited mutations need an actor; reads stay unguarded
/// (entity data deliberately persists across logout).
pub(crate) fn require_user(ctx: &AppContext) -> ApiResult<User> {
    ctx.session
        .current_user()
        .ok_or_else(|| ApiError::unauthorized("No user is logged in"))
}

/// Records an audit entry, degrading to a log line when storage fails.
///
/// Audit persistence must never abort the user action it describes.
pub(crate) fn record_audit(ctx: &AppContext, user_id: &str, action: &str, detail: Option<String>) {
    if let Err(e) = ctx.audit.record(user_id, action, detail) {
        warn!(error = %e, action, "Audit entry could not be persisted");
    }
}
