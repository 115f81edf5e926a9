//! # Supplier API
//!
//! Supplier add / update / delete. Suppliers have no backing endpoint;
//! the collection lives and dies with the session.

use serde::Deserialize;
use uuid::Uuid;

use medboard_core::{validation, Supplier};

use crate::api::{record_audit, require_user};
use crate::error::ApiResult;
use crate::events::StateTopic;
use crate::AppContext;

/// The full supplier collection in its stable order.
pub fn list_suppliers(ctx: &AppContext) -> Vec<Supplier> {
    ctx.suppliers.snapshot()
}

/// Input for a new supplier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    /// Company name.
    pub name: String,

    /// Contact email, if known.
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Contact phone, if known.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Adds a supplier at the front of the collection.
pub fn add_supplier(ctx: &AppContext, draft: NewSupplier) -> ApiResult<Supplier> {
    let user = require_user(ctx)?;

    validation::validate_supplier_name(&draft.name)?;

    let supplier = Supplier {
        id: Uuid::new_v4().to_string(),
        name: draft.name,
        contact_email: draft.contact_email,
        phone: draft.phone,
    };

    ctx.suppliers.prepend(supplier.clone());
    record_audit(ctx, &user.id, "supplier added", Some(supplier.id.clone()));
    ctx.events.state_changed(StateTopic::Suppliers);

    Ok(supplier)
}

/// Applies a full-record replace keyed by `supplier.id`.
///
/// ## Returns
/// `false` when no record matched (no implicit insert).
pub fn update_supplier(ctx: &AppContext, supplier: Supplier) -> ApiResult<bool> {
    let user = require_user(ctx)?;

    validation::validate_id(&supplier.id)?;
    validation::validate_supplier_name(&supplier.name)?;

    let changed = ctx.suppliers.upsert_by_replace(supplier.clone());
    if changed {
        record_audit(ctx, &user.id, "supplier updated", Some(supplier.id));
        ctx.events.state_changed(StateTopic::Suppliers);
    }

    Ok(changed)
}

/// Deletes a supplier by id.
///
/// ## Returns
/// `false` when no record matched (no-op, nothing audited).
pub fn delete_supplier(ctx: &AppContext, id: &str) -> ApiResult<bool> {
    let user = require_user(ctx)?;

    let removed = ctx.suppliers.delete_by_id(id);
    if removed {
        record_audit(ctx, &user.id, "supplier deleted", Some(id.to_string()));
        ctx.events.state_changed(StateTopic::Suppliers);
    }

    Ok(removed)
}

// =============================================================================
// Unit Tests
// =============================================================================
