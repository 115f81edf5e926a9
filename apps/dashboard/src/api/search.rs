//! # Search API
//!
//! The global search command and overlay control.
//!
//! ## Overlay Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Search Overlay Lifecycle                             │
//! │                                                                         │
//! │  open_search ───────► overlay shown, query as it was (blank on first)  │
//! │       │                                                                 │
//! │  set_search_query ──► shell re-runs global_search on each change       │
//! │       │                                                                 │
//! │  select_result ─────► navigate(target) THEN close + reset query,       │
//! │       │               one user-visible transaction                      │
//! │       │                                                                 │
//! │  close_search ──────► overlay hidden, query reset to empty             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use medboard_core::{validation, SearchGroup, SearchResult, SearchScope};

use crate::error::ApiResult;
use crate::events::StateTopic;
use crate::AppContext;

/// Runs the global search over live snapshots and the fixed directory.
///
/// No current user or a sub-threshold query yields `Ok(vec![])`; only a
/// query past the length cap is an actual error.
pub fn global_search(ctx: &AppContext, query: &str) -> ApiResult<Vec<SearchResult>> {
    let query = validation::validate_search_query(query)?;

    let current_user = ctx.session.current_user();
    let equipment = ctx.equipment.snapshot();
    let work_orders = ctx.work_orders.snapshot();

    let results = medboard_core::global_search(
        &query,
        current_user.as_ref(),
        &SearchScope {
            equipment: &equipment,
            work_orders: &work_orders,
            directory: &ctx.directory,
        },
    );

    debug!(query = %query, count = results.len(), "global_search");
    Ok(results)
}

/// Like [`global_search`], grouped into display sections.
pub fn grouped_search(ctx: &AppContext, query: &str) -> ApiResult<Vec<SearchGroup>> {
    Ok(medboard_core::group_results(global_search(ctx, query)?))
}

/// Shows the overlay. Idempotent.
pub fn open_search(ctx: &AppContext) {
    ctx.ui.open_search();
    ctx.events.state_changed(StateTopic::Ui);
}

/// Hides the overlay and resets the query. Idempotent.
pub fn close_search(ctx: &AppContext) {
    ctx.ui.close_search();
    ctx.events.state_changed(StateTopic::Ui);
}

/// Updates the overlay query text (the shell queries results separately).
pub fn set_search_query(ctx: &AppContext, query: &str) {
    ctx.ui.set_search_query(query);
    ctx.events.state_changed(StateTopic::Ui);
}

/// Handles a result click: navigate, then close the overlay.
///
/// The two effects form one user-visible transaction - the navigate
/// event fires first, the overlay close (with its query reset) follows
/// before this returns, and neither happens without the other.
///
/// ## Returns
/// The navigation target, for shells that route synchronously.
pub fn select_result(ctx: &AppContext, result: &SearchResult) -> String {
    debug!(result_id = %result.id, target = %result.target, "Search result selected");

    ctx.events.navigate(&result.target);
    ctx.ui.close_search();
    ctx.events.state_changed(StateTopic::Ui);

    result.target.clone()
}

// =============================================================================
// Unit Tests
// =============================================================================
