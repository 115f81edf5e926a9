//! # Work Order API
//!
//! Work-order refresh, creation, and updates.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use medboard_core::{validation, WorkOrder, WorkOrderStatus, WorkOrderType};
use medboard_remote::work_orders_or_empty;

use crate::api::{record_audit, require_user};
use crate::error::ApiResult;
use crate::events::StateTopic;
use crate::AppContext;

/// Refreshes the work-order collection from `/api/work-orders`.
///
/// Gated on a logged-in user. On a fetch failure the collection becomes
/// empty (no seed for work orders) and the call still succeeds.
///
/// ## Returns
/// The size of the collection after the refresh settles.
pub async fn refresh_work_orders(ctx: &AppContext) -> ApiResult<usize> {
    require_user(ctx)?;

    let ticket = ctx.work_orders.begin_refresh();
    let items = work_orders_or_empty(&ctx.remote).await;

    if ctx.work_orders.complete_refresh(ticket, items) {
        ctx.events.state_changed(StateTopic::WorkOrders);
    }

    Ok(ctx.work_orders.len())
}

/// The full work-order collection in its stable order.
pub fn list_work_orders(ctx: &AppContext) -> Vec<WorkOrder> {
    ctx.work_orders.snapshot()
}

/// Input for a locally created work order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkOrder {
    /// The equipment the order is for.
    pub equipment_id: String,

    /// What needs doing.
    pub description: String,

    /// Kind of work requested.
    #[serde(default)]
    pub order_type: WorkOrderType,
}

/// Creates a work order and prepends it to the collection.
///
/// Id, open status, and creation time are assigned here.
pub fn create_work_order(ctx: &AppContext, draft: NewWorkOrder) -> ApiResult<WorkOrder> {
    let user = require_user(ctx)?;

    validation::validate_id(&draft.equipment_id)?;
    validation::validate_work_order_description(&draft.description)?;

    let order = WorkOrder {
        id: Uuid::new_v4().to_string(),
        equipment_id: draft.equipment_id,
        description: draft.description,
        status: WorkOrderStatus::Open,
        order_type: draft.order_type,
        created_at: Utc::now(),
    };

    ctx.work_orders.prepend(order.clone());
    record_audit(ctx, &user.id, "work order created", Some(order.id.clone()));
    info!(order_id = %order.id, equipment_id = %order.equipment_id, "Work order created");
    ctx.events.state_changed(StateTopic::WorkOrders);

    Ok(order)
}

/// Applies a full-record replace keyed by `order.id`.
///
/// ## Returns
/// `false` when no record matched (no implicit insert).
pub fn update_work_order(ctx: &AppContext, order: WorkOrder) -> ApiResult<bool> {
    let user = require_user(ctx)?;

    validation::validate_id(&order.id)?;
    validation::validate_work_order_description(&order.description)?;

    let changed = ctx.work_orders.upsert_by_replace(order.clone());
    if changed {
        record_audit(ctx, &user.id, "work order updated", Some(order.id));
        ctx.events.state_changed(StateTopic::WorkOrders);
    }

    Ok(changed)
}

// =============================================================================
// Unit Tests
// =============================================================================
