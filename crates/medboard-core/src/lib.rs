//! # medboard-core: Pure Domain Logic for MedBoard
//!
//! This crate is the **heart** of the MedBoard dashboard. It contains the
//! domain types and every rule that can be expressed as a pure function:
//! input validation, derived read models, and the role-gated global search.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       MedBoard Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Dashboard UI Shell                          │   │
//! │  │    Sidebar ──► Search Overlay ──► Notification Panel ──► Inbox  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/dashboard (api/)                        │   │
//! │  │    login, refresh_equipment, global_search, mark_read, etc.    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ medboard-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  search   │  │   views   │  │ validation│  │   │
//! │  │   │ Equipment │  │ role-gated│  │  unread   │  │   rules   │  │   │
//! │  │   │ WorkOrder │  │ matching  │  │  counts   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Equipment, WorkOrder, User, Notification, etc.)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`views`] - Derived read models (unread counts, visible inbox)
//! - [`search`] - The global search engine
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, and clock access are FORBIDDEN here
//! 3. **Derived, Not Cached**: Counts and filtered lists are recomputed from
//!    the collections on every read, so they can never go stale
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod search;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use medboard_core::Equipment` instead of
// `use medboard_core::types::Equipment`

pub use error::{CoreError, ValidationError};
pub use search::{global_search, group_results, SearchGroup, SearchScope};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum query length (in characters) before the global search produces
/// results. Shorter queries yield an empty result set, not an error.
pub const SEARCH_MIN_QUERY_LEN: usize = 2;

/// Display label substituted when a work order references an equipment id
/// that no longer resolves in the equipment collection.
pub const UNKNOWN_EQUIPMENT_LABEL: &str = "unknown";

/// Maximum accepted search query length.
///
/// Queries are typed character-by-character by the overlay; anything longer
/// than this is a paste mistake, not a search.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
