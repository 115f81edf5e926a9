//! # UI API
//!
//! Sidebar visibility and theme control. The search overlay lives with
//! the search commands; the notification panel with messaging.

use tracing::debug;

use medboard_core::Theme;

use crate::error::ApiResult;
use crate::events::StateTopic;
use crate::AppContext;

/// Flips the sidebar, returning the new visibility.
pub fn toggle_sidebar(ctx: &AppContext) -> bool {
    let open = ctx.ui.toggle_sidebar();
    ctx.events.state_changed(StateTopic::Ui);
    open
}

/// Whether the sidebar is shown.
pub fn is_sidebar_open(ctx: &AppContext) -> bool {
    ctx.ui.is_sidebar_open()
}

/// The persisted theme.
pub fn current_theme(ctx: &AppContext) -> Theme {
    ctx.ui.current_theme()
}

/// Sets the theme; the preference is persisted before this returns
/// (write-through, not write-back).
pub fn set_theme(ctx: &AppContext, theme: Theme) -> ApiResult<()> {
    ctx.ui.set_theme(theme)?;
    debug!(%theme, "Theme changed");
    ctx.events.state_changed(StateTopic::Theme);
    Ok(())
}

/// Flips the theme, returning the new value. Persisted immediately.
pub fn toggle_theme(ctx: &AppContext) -> ApiResult<Theme> {
    let next = ctx.ui.toggle_theme()?;
    ctx.events.state_changed(StateTopic::Theme);
    Ok(next)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_toggle_round_trip() {
        let ctx = AppContext::in_memory().unwrap();

        assert!(is_sidebar_open(&ctx));
        assert!(!toggle_sidebar(&ctx));
        assert!(toggle_sidebar(&ctx));
    }

    #[test]
    fn test_theme_light_dark_light_restores_persisted_value() {
        let ctx = AppContext::in_memory().unwrap();
        let original = current_theme(&ctx);
        assert_eq!(original, Theme::Light);

        set_theme(&ctx, Theme::Dark).unwrap();
        assert_eq!(current_theme(&ctx), Theme::Dark);

        set_theme(&ctx, Theme::Light).unwrap();
        assert_eq!(current_theme(&ctx), original);
    }

    #[test]
    fn test_toggle_theme() {
        let ctx = AppContext::in_memory().unwrap();
        assert_eq!(toggle_theme(&ctx).unwrap(), Theme::Dark);
        assert_eq!(toggle_theme(&ctx).unwrap(), Theme::Light);
    }

    #[test]
    fn test_flags_coexist() {
        let ctx = AppContext::in_memory().unwrap();

        // Sidebar open, panel open, overlay open - nothing force-closes
        ctx.ui.open_search();
        ctx.notifications.open_panel();
        assert!(is_sidebar_open(&ctx));
        assert!(ctx.ui.search_overlay().open);
        assert!(ctx.notifications.is_panel_open());
    }
}
