//! # UI State
//!
//! The independent visibility flags plus the theme handle.
//!
//! ## No Cross-Flag Invariants
//! Sidebar, search overlay, and notification panel are free to coexist;
//! nothing here closes one because another opened. The only coupling in
//! this module is internal to the overlay: closing it resets the query,
//! so reopening always starts blank.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::Serialize;

use medboard_core::Theme;
use medboard_store::{StoreResult, ThemePreference};

/// Snapshot of the search overlay for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOverlay {
    /// Whether the overlay is shown.
    pub open: bool,

    /// Current query text.
    pub query: String,
}

#[derive(Debug, Default)]
struct OverlayState {
    open: bool,
    query: String,
}

/// Sidebar, search overlay, and theme.
pub struct UiState {
    sidebar_open: AtomicBool,
    overlay: Mutex<OverlayState>,
    theme: ThemePreference,
}

impl UiState {
    /// Creates UI state around the persisted theme preference.
    ///
    /// The sidebar starts open (it is the dashboard's main navigation);
    /// the overlay starts closed with an empty query.
    pub fn new(theme: ThemePreference) -> Self {
        UiState {
            sidebar_open: AtomicBool::new(true),
            overlay: Mutex::new(OverlayState::default()),
            theme,
        }
    }

    // -------------------------------------------------------------------------
    // Sidebar
    // -------------------------------------------------------------------------

    /// Whether the sidebar is shown.
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open.load(Ordering::SeqCst)
    }

    /// Flips the sidebar flag, returning the new value.
    pub fn toggle_sidebar(&self) -> bool {
        !self.sidebar_open.fetch_xor(true, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Search Overlay
    // -------------------------------------------------------------------------

    /// Snapshot of the overlay flag + query.
    pub fn search_overlay(&self) -> SearchOverlay {
        let overlay = self.overlay.lock().expect("Overlay mutex poisoned");
        SearchOverlay {
            open: overlay.open,
            query: overlay.query.clone(),
        }
    }

    /// Opens the overlay. Idempotent; an already-open overlay keeps its
    /// query.
    pub fn open_search(&self) {
        let mut overlay = self.overlay.lock().expect("Overlay mutex poisoned");
        overlay.open = true;
    }

    /// Closes the overlay and resets the query, so a reopen starts blank.
    /// Idempotent.
    pub fn close_search(&self) {
        let mut overlay = self.overlay.lock().expect("Overlay mutex poisoned");
        overlay.open = false;
        overlay.query.clear();
    }

    /// Replaces the query text.
    pub fn set_search_query(&self, query: &str) {
        let mut overlay = self.overlay.lock().expect("Overlay mutex poisoned");
        overlay.query = query.to_string();
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    /// The persisted theme.
    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    /// Sets and immediately persists the theme (write-through).
    pub fn set_theme(&self, theme: Theme) -> StoreResult<()> {
        self.theme.set(theme)
    }

    /// Flips and persists the theme, returning the new value.
    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let next = self.theme.current().toggled();
        self.theme.set(next)?;
        Ok(next)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use medboard_store::MemoryStore;
    use std::sync::Arc;

    fn ui_state() -> UiState {
        UiState::new(ThemePreference::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn test_sidebar_toggle() {
        let ui = ui_state();
        assert!(ui.is_sidebar_open());
        assert!(!ui.toggle_sidebar());
        assert!(ui.toggle_sidebar());
    }

    #[test]
    fn test_overlay_close_resets_query() {
        let ui = ui_state();

        ui.open_search();
        ui.set_search_query("pump");
        assert_eq!(
            ui.search_overlay(),
            SearchOverlay {
                open: true,
                query: "pump".to_string()
            }
        );

        ui.close_search();
        let overlay = ui.search_overlay();
        assert!(!overlay.open);
        assert!(overlay.query.is_empty());

        // Reopen starts blank
        ui.open_search();
        assert!(ui.search_overlay().query.is_empty());
    }

    #[test]
    fn test_open_search_is_idempotent() {
        let ui = ui_state();
        ui.open_search();
        ui.set_search_query("vent");
        ui.open_search();

        // Re-opening does not clobber the query mid-typing
        assert_eq!(ui.search_overlay().query, "vent");
    }

    #[test]
    fn test_theme_round_trip() {
        let ui = ui_state();
        assert_eq!(ui.current_theme(), Theme::Light);

        assert_eq!(ui.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(ui.toggle_theme().unwrap(), Theme::Light);
    }
}
