//! # Session API
//!
//! Login and logout.
//!
//! ## Login Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         login(ctx, user)                                │
//! │                                                                         │
//! │  1. Install the user, raise the just-logged-in flag                    │
//! │  2. Audit "successful login" attributed to that user                   │
//! │  3. Notify the shell (Session topic)                                   │
//! │  4. On the none→some transition ONLY: one refresh of equipment         │
//! │     and one of work orders                                             │
//! │     • fetch failures degrade to fallback collections                   │
//! │     • a repeat login (user already present) skips this step            │
//! │                                                                         │
//! │  logout(ctx)                                                           │
//! │  1. If a user was present: audit "logout", clear user + flag,          │
//! │     notify the shell                                                   │
//! │  2. Entity stores are NOT cleared - stale-but-visible data across      │
//! │     logout is the intended behavior                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::info;

use medboard_core::User;

use crate::api::{equipment, record_audit, work_orders};
use crate::error::ApiResult;
use crate::events::StateTopic;
use crate::AppContext;

/// What a completed login did.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    /// The now-current user.
    pub user: User,

    /// Whether this login triggered the initial entity refresh
    /// (false when a user was already present).
    pub refreshed: bool,
}

/// Logs a user in.
///
/// The entity refresh runs inline so callers (and tests) observe the
/// populated stores as soon as this returns; transient fetch failures
/// have already degraded to fallback collections by then.
pub async fn login(ctx: &AppContext, user: User) -> ApiResult<LoginOutcome> {
    let first_session = ctx.session.begin_session(user.clone());

    record_audit(ctx, &user.id, "successful login", None);
    info!(user_id = %user.id, role = %user.role, "User logged in");
    ctx.events.state_changed(StateTopic::Session);

    if first_session {
        equipment::refresh_equipment(ctx).await?;
        work_orders::refresh_work_orders(ctx).await?;
    }

    Ok(LoginOutcome {
        user,
        refreshed: first_session,
    })
}

/// Logs the current user out.
///
/// A no-op (no audit entry, no events) when nobody is logged in.
/// Entity data stays in place by design.
pub fn logout(ctx: &AppContext) -> ApiResult<()> {
    if let Some(user) = ctx.session.end_session() {
        record_audit(ctx, &user.id, "logout", None);
        info!(user_id = %user.id, "User logged out");
        ctx.events.state_changed(StateTopic::Session);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
