//! # Equipment API
//!
//! Inventory refresh and record updates.

use tracing::debug;

use medboard_core::{validation, Equipment};
use medboard_remote::inventory_or_seed;

use crate::api::{record_audit, require_user};
use crate::error::{ApiError, ApiResult};
use crate::events::StateTopic;
use crate::AppContext;

/// Refreshes the equipment collection from `/api/inventory`.
///
/// Gated on a logged-in user. A fetch failure is not an error here: the
/// collection becomes the static seed set and the call still succeeds.
/// Concurrent refreshes are permitted; only the latest issued one
/// commits (see `EntityStore::complete_refresh`).
///
/// ## Returns
/// The size of the collection after the refresh settles.
pub async fn refresh_equipment(ctx: &AppContext) -> ApiResult<usize> {
    require_user(ctx)?;

    let ticket = ctx.equipment.begin_refresh();
    let items = inventory_or_seed(&ctx.remote).await;

    if ctx.equipment.complete_refresh(ticket, items) {
        ctx.events.state_changed(StateTopic::Equipment);
    }

    Ok(ctx.equipment.len())
}

/// The full equipment collection in its stable order.
pub fn list_equipment(ctx: &AppContext) -> Vec<Equipment> {
    ctx.equipment.snapshot()
}

/// One equipment record by id.
pub fn get_equipment(ctx: &AppContext, id: &str) -> ApiResult<Equipment> {
    debug!(%id, "get_equipment");
    ctx.equipment
        .find_by_id(id)
        .ok_or_else(|| ApiError::not_found("Equipment", id))
}

/// Applies a full-record replace keyed by `item.id`.
///
/// ## Returns
/// `false` when no record matched (the collection is unchanged; there is
/// no implicit insert). Only a real change is audited and announced.
pub fn update_equipment(ctx: &AppContext, item: Equipment) -> ApiResult<bool> {
    let user = require_user(ctx)?;

    validation::validate_id(&item.id)?;
    validation::validate_equipment_name(&item.name)?;
    validation::validate_serial_number(&item.serial_number)?;

    let changed = ctx.equipment.upsert_by_replace(item.clone());
    if changed {
        record_audit(ctx, &user.id, "equipment updated", Some(item.id));
        ctx.events.state_changed(StateTopic::Equipment);
    }

    Ok(changed)
}

// =============================================================================
// Unit Tests
// =============================================================================
