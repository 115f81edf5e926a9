//! # Shell Events
//!
//! The write-through notification channel from state mutations to the UI.
//!
//! ## Why A Trait
//! The core never talks to a window or a DOM. Instead, every mutation
//! reports "this slice of state changed" through [`ShellEventEmitter`],
//! and whichever shell hosts the dashboard (webview, desktop, test
//! harness) decides what re-renders. Same seam the sync engine would use
//! for connection status if this dashboard grows one.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  api::ui::toggle_sidebar(ctx)                                            │
//! │       │                                                                  │
//! │       ├── mutate UiState                                                 │
//! │       └── ctx.events.state_changed(StateTopic::Ui)                       │
//! │                         │                                                │
//! │                         ▼                                                │
//! │  Shell impl: emit("state:ui") ──► frontend re-reads the view it needs    │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```

/// Which slice of application state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTopic {
    /// Current user / just-logged-in flag.
    Session,
    /// Equipment collection.
    Equipment,
    /// Work-order collection.
    WorkOrders,
    /// Supplier collection.
    Suppliers,
    /// Notification list or panel flag.
    Notifications,
    /// Email inbox.
    Inbox,
    /// Sidebar / search overlay.
    Ui,
    /// Theme preference.
    Theme,
}

impl StateTopic {
    /// Stable event-name suffix for shells that multiplex one channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateTopic::Session => "session",
            StateTopic::Equipment => "equipment",
            StateTopic::WorkOrders => "work-orders",
            StateTopic::Suppliers => "suppliers",
            StateTopic::Notifications => "notifications",
            StateTopic::Inbox => "inbox",
            StateTopic::Ui => "ui",
            StateTopic::Theme => "theme",
        }
    }
}

/// Implemented by the hosting shell; called synchronously after mutations.
pub trait ShellEventEmitter: Send + Sync {
    /// A slice of state changed; the shell should re-read its views.
    fn state_changed(&self, topic: StateTopic);

    /// The user selected something that navigates (e.g. a search result).
    /// Fired before the originating surface closes.
    fn navigate(&self, target: &str);
}

/// Emitter that drops everything. Used when no shell is attached
/// (headless tests, warm-up, CLI experiments).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEmitter;

impl ShellEventEmitter for NullEmitter {
    fn state_changed(&self, _topic: StateTopic) {}

    fn navigate(&self, _target: &str) {}
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_names_are_stable() {
        assert_eq!(StateTopic::Session.as_str(), "session");
        assert_eq!(StateTopic::WorkOrders.as_str(), "work-orders");
        assert_eq!(StateTopic::Theme.as_str(), "theme");
    }
}
