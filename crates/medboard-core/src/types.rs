//! # Domain Types
//!
//! Core domain types used throughout MedBoard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Equipment     │   │   WorkOrder     │   │    Supplier     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  serial_number  │   │  equipment_id   │   │  name           │       │
//! │  │  location       │   │  description    │   │  contact_email  │       │
//! │  │  status         │   │  status, type   │   │  phone          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Notification   │   │     Email       │   │   AuditEntry    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  message, read  │   │  to, read       │   │  user_id        │       │
//! │  │  link           │   │  subject, body  │   │  action, detail │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  User + Role gate what the session can see; Theme is the only          │
//! │  enum persisted on its own.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization Contract
//! Every type here crosses the boundary to the browser shell, so structs are
//! `camelCase` on the wire (`serial_number` ⇄ `serialNumber`) and carry ts-rs
//! derives so the frontend gets generated TypeScript bindings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Role
// =============================================================================

/// A user's role, fixed for the lifetime of a session.
///
/// ## Why Roles Matter Here
/// Role is the single input to every visibility decision downstream:
/// which search categories a user may see and which views are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full administrative access, including the user directory.
    SuperAdmin,
    /// Administrative access without user management.
    SystemAdmin,
    /// Maintains equipment; works the work-order queue.
    BiomedicalEngineer,
    /// Oversees a hospital area; equipment visibility only.
    AreaHead,
    /// View-only access.
    ReadOnly,
}

impl Role {
    /// Whether this role may see work-order search results and views.
    pub fn can_view_work_orders(&self) -> bool {
        matches!(
            self,
            Role::SuperAdmin | Role::SystemAdmin | Role::BiomedicalEngineer
        )
    }

    /// Whether this role may search the user directory.
    ///
    /// Only super admins manage users, so only they see user results.
    pub fn can_view_user_directory(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "super-admin"),
            Role::SystemAdmin => write!(f, "system-admin"),
            Role::BiomedicalEngineer => write!(f, "biomedical-engineer"),
            Role::AreaHead => write!(f, "area-head"),
            Role::ReadOnly => write!(f, "read-only"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super-admin" => Ok(Role::SuperAdmin),
            "system-admin" => Ok(Role::SystemAdmin),
            "biomedical-engineer" => Ok(Role::BiomedicalEngineer),
            "area-head" => Ok(Role::AreaHead),
            "read-only" => Ok(Role::ReadOnly),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// An authenticated dashboard user.
///
/// Immutable once logged in for the session; role determines visibility
/// and authorization everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the top bar and audit trail.
    pub name: String,

    /// Email address; also a search field in the user directory.
    pub email: String,

    /// Role fixed for the session.
    pub role: Role,
}

// =============================================================================
// Equipment
// =============================================================================

/// Operational status of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    /// In service and available.
    #[default]
    Operational,
    /// Pulled for scheduled or corrective maintenance.
    UnderMaintenance,
    /// Decommissioned or awaiting disposal.
    OutOfService,
}

/// A piece of biomedical equipment tracked by the hospital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in lists and search results.
    pub name: String,

    /// Manufacturer serial number - business identifier and search field.
    pub serial_number: String,

    /// Physical location (ward, room, storage).
    pub location: String,

    /// Manufacturer, when known.
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Model designation, when known.
    #[serde(default)]
    pub model: Option<String>,

    /// Operational status.
    #[serde(default)]
    pub status: EquipmentStatus,

    /// When the device was last serviced.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub last_serviced_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Work Order
// =============================================================================

/// The lifecycle status of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    /// Logged but not yet picked up.
    #[default]
    Open,
    /// An engineer is working it.
    InProgress,
    /// Work finished and verified.
    Completed,
    /// Abandoned (duplicate, device retired, etc.).
    Cancelled,
}

/// The kind of work being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderType {
    /// Repair after a reported fault.
    #[default]
    Corrective,
    /// Scheduled preventive maintenance.
    Preventive,
    /// Periodic calibration.
    Calibration,
    /// Safety or acceptance inspection.
    Inspection,
}

/// A maintenance work order against one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    /// Unique identifier; also a search field.
    pub id: String,

    /// The equipment this order is for (foreign key into the
    /// equipment collection; may dangle if the device was removed).
    pub equipment_id: String,

    /// What needs doing; also a search field.
    pub description: String,

    /// Lifecycle status.
    #[serde(default)]
    pub status: WorkOrderStatus,

    /// Kind of work requested.
    #[serde(default)]
    pub order_type: WorkOrderType,

    /// When the order was raised.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A parts or service supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Unique identifier.
    pub id: String,

    /// Company name.
    pub name: String,

    /// Contact email, when known.
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Contact phone, when known.
    #[serde(default)]
    pub phone: Option<String>,
}

// =============================================================================
// Notification
// =============================================================================

/// A system notification shown in the notification panel.
///
/// Notifications are created outside this core (backend events, seed data);
/// the core only ever flips their read flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier.
    pub id: String,

    /// Message text shown in the panel.
    pub message: String,

    /// When the notification was raised; panel ordering key.
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,

    /// Whether the user has seen it.
    pub read: bool,

    /// Optional navigation target to jump to on click.
    #[serde(default)]
    pub link: Option<String>,
}

// =============================================================================
// Email
// =============================================================================

/// A message in the mocked email inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Unique identifier, assigned at send time.
    pub id: String,

    /// Sender user id.
    pub from: String,

    /// Recipient user id - visibility is gated on this matching the
    /// current user.
    pub to: String,

    /// Subject line (opaque to the core).
    pub subject: String,

    /// Body text (opaque to the core).
    pub body: String,

    /// When the email was sent, assigned at send time.
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,

    /// Whether the recipient has opened it.
    pub read: bool,
}

// =============================================================================
// Audit Entry
// =============================================================================

/// An immutable, user-attributed record of an action.
///
/// ## Invariants
/// - Entries are never mutated or removed by this core
/// - Ordering is newest-first by prepend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Unique identifier, assigned at record time.
    pub id: String,

    /// When the action happened.
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,

    /// Who did it.
    pub user_id: String,

    /// Short action label ("successful login", "equipment updated", ...).
    pub action: String,

    /// Optional free-text detail.
    #[serde(default)]
    pub detail: Option<String>,
}

// =============================================================================
// Theme
// =============================================================================

/// The dashboard color theme.
///
/// Persisted immediately on every change (write-through), so a reload
/// comes back in the theme the user left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

// =============================================================================
// Search Results
// =============================================================================

/// The category a search result belongs to.
///
/// Categories are role-gated independently: a user may see Equipment
/// results while being denied WorkOrder and User results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SearchCategory {
    Equipment,
    WorkOrder,
    User,
}

impl SearchCategory {
    /// Section heading used when grouping results for display.
    pub fn label(&self) -> &'static str {
        match self {
            SearchCategory::Equipment => "Equipment",
            SearchCategory::WorkOrder => "Work Orders",
            SearchCategory::User => "Users",
        }
    }

    /// Icon reference rendered next to results of this category.
    pub fn icon(&self) -> &'static str {
        match self {
            SearchCategory::Equipment => "monitor",
            SearchCategory::WorkOrder => "clipboard",
            SearchCategory::User => "user",
        }
    }
}

/// A single entry in the global search result list.
///
/// ## Derived, Never Stored
/// Results are recomputed on every query change and carry everything the
/// overlay needs to render and navigate; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Synthesized identifier, unique across categories
    /// (category-prefixed, e.g. `equipment-e1`).
    pub id: String,

    /// Category this result belongs to.
    pub category: SearchCategory,

    /// Primary display line.
    pub title: String,

    /// Secondary display line.
    pub subtitle: String,

    /// Navigation target selected results jump to.
    pub target: String,

    /// Icon reference for the result row.
    pub icon: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
