//! # medboard-remote: Remote Data for MedBoard
//!
//! The dashboard reads two collections from the hospital's backing REST
//! service: the equipment inventory and the work-order list. This crate
//! issues those reads and owns the degrade-gracefully fallbacks.
//!
//! ## Fetch-Or-Fallback
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Refresh Data Flow                                   │
//! │                                                                         │
//! │  login / manual refresh (app layer)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                medboard-remote (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │  GET /api/inventory ───► 200 + JSON array ──► Vec<Equipment>   │   │
//! │  │       │                                                         │   │
//! │  │       └── refused / 500 / bad JSON ──► warn! ──► seed devices  │   │
//! │  │                                                                 │   │
//! │  │  GET /api/work-orders ─► 200 + JSON array ──► Vec<WorkOrder>   │   │
//! │  │       │                                                         │   │
//! │  │       └── refused / 500 / bad JSON ──► warn! ──► empty vec     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Fetches are result-typed for testability; the *_or_* combinators      │
//! │  are what the app layer calls, and they never propagate an error.      │
//! │  No retry, no backoff - a failed refresh just means fallback data      │
//! │  until the next one.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - `RemoteConfig` + `RemoteClient` (reqwest wrapper)
//! - [`inventory`] - equipment fetch + seed fallback
//! - [`work_orders`] - work-order fetch + empty fallback
//! - [`seed`] - the static default equipment collection
//! - [`error`] - fetch error taxonomy

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod inventory;
pub mod seed;
pub mod work_orders;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{RemoteClient, RemoteConfig};
pub use error::{RemoteError, RemoteResult};
pub use inventory::inventory_or_seed;
pub use work_orders::work_orders_or_empty;

/// Path of the equipment inventory endpoint.
pub const INVENTORY_PATH: &str = "/api/inventory";

/// Path of the work-order list endpoint.
pub const WORK_ORDERS_PATH: &str = "/api/work-orders";
