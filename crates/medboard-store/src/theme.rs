//! # Theme Preference
//!
//! The persisted light/dark preference.
//!
//! Write-through: every change hits the backend immediately, so there is
//! no flush step and no window where a crash loses the choice.

use std::sync::Arc;

use tracing::debug;

use medboard_core::Theme;

use crate::backend::StorageBackend;
use crate::error::StoreResult;
use crate::slot::DurableSlot;
use crate::THEME_KEY;

/// The persisted theme preference.
pub struct ThemePreference {
    slot: DurableSlot<Theme>,
}

impl ThemePreference {
    /// Creates the preference handle over the given backend, under
    /// [`THEME_KEY`](crate::THEME_KEY).
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        ThemePreference {
            slot: DurableSlot::new(backend, THEME_KEY),
        }
    }

    /// The persisted theme; [`Theme::Light`] when nothing (valid) is stored.
    pub fn current(&self) -> Theme {
        self.slot.load()
    }

    /// Persists a theme change immediately.
    pub fn set(&self, theme: Theme) -> StoreResult<()> {
        self.slot.store(&theme)?;
        debug!(%theme, "Theme preference persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let pref = ThemePreference::new(Arc::new(MemoryStore::new()));
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip_restores_original() {
        let pref = ThemePreference::new(Arc::new(MemoryStore::new()));
        let original = pref.current();

        pref.set(original.toggled()).unwrap();
        assert_eq!(pref.current(), Theme::Dark);

        pref.set(pref.current().toggled()).unwrap();
        assert_eq!(pref.current(), original);
    }

    #[test]
    fn test_corrupt_value_degrades_to_default() {
        let backend = Arc::new(MemoryStore::new());
        backend.write(THEME_KEY, "\"solarized\"").unwrap();

        let pref = ThemePreference::new(backend as Arc<dyn StorageBackend>);
        assert_eq!(pref.current(), Theme::Light);
    }
}
