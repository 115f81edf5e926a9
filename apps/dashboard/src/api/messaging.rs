//! # Messaging API
//!
//! Notifications and the mocked email inbox.
//!
//! Both lists share the same read-flag semantics: marking one entry read
//! flips exactly that entry (no-op when absent or already read); counts
//! are recomputed from the lists on every call, never cached.

use serde::Deserialize;

use medboard_core::{validation, views, Email, Notification};

use crate::api::{record_audit, require_user};
use crate::error::ApiResult;
use crate::events::StateTopic;
use crate::AppContext;

// =============================================================================
// Notifications
// =============================================================================

/// Notifications ordered for the panel: most recent first.
pub fn notification_panel(ctx: &AppContext) -> Vec<Notification> {
    views::notifications_for_panel(&ctx.notifications.snapshot())
}

/// Unread notification count.
pub fn unread_notifications(ctx: &AppContext) -> usize {
    ctx.notifications.unread_count()
}

/// Accepts an externally created notification into the list.
pub fn push_notification(ctx: &AppContext, notification: Notification) {
    ctx.notifications.push(notification);
    ctx.events.state_changed(StateTopic::Notifications);
}

/// Marks one notification read.
///
/// ## Returns
/// `false` when the id was absent or the entry was already read.
pub fn mark_notification_read(ctx: &AppContext, id: &str) -> bool {
    let changed = ctx.notifications.mark_one_read(id);
    if changed {
        ctx.events.state_changed(StateTopic::Notifications);
    }
    changed
}

/// Marks every notification read. Idempotent.
pub fn mark_all_notifications_read(ctx: &AppContext) {
    ctx.notifications.mark_all_read();
    ctx.events.state_changed(StateTopic::Notifications);
}

/// Flips the notification panel, returning the new visibility.
///
/// The panel coexists freely with the sidebar and the search overlay.
pub fn toggle_notification_panel(ctx: &AppContext) -> bool {
    let open = ctx.notifications.toggle_panel();
    ctx.events.state_changed(StateTopic::Notifications);
    open
}

// =============================================================================
// Email Inbox
// =============================================================================

/// Input for a new email.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmail {
    /// Recipient user id.
    pub to: String,

    /// Subject line.
    pub subject: String,

    /// Body text.
    pub body: String,
}

/// Sends an email from the current user.
///
/// Id and timestamp are assigned at creation; the read flag starts
/// false. The sender needs a session - the `from` field is always a
/// real user id.
pub fn send_email(ctx: &AppContext, draft: NewEmail) -> ApiResult<Email> {
    let user = require_user(ctx)?;

    validation::validate_id(&draft.to)?;
    validation::validate_email_subject(&draft.subject)?;

    let email = ctx
        .inbox
        .send(&user.id, &draft.to, &draft.subject, &draft.body);
    record_audit(ctx, &user.id, "email sent", Some(draft.to));
    ctx.events.state_changed(StateTopic::Inbox);

    Ok(email)
}

/// The current user's inbox: messages addressed to them, nothing else.
/// Empty when nobody is logged in.
pub fn inbox(ctx: &AppContext) -> Vec<Email> {
    views::visible_emails(&ctx.inbox.snapshot(), ctx.session.current_user().as_ref())
}

/// Unread count over the current user's visible inbox.
pub fn unread_emails(ctx: &AppContext) -> usize {
    views::unread_email_count(&ctx.inbox.snapshot(), ctx.session.current_user().as_ref())
}

/// Marks one of the current user's messages read.
///
/// ## Returns
/// `false` when the id was absent, addressed to someone else, or
/// already read.
pub fn mark_email_read(ctx: &AppContext, id: &str) -> ApiResult<bool> {
    let user = require_user(ctx)?;

    let changed = ctx.inbox.mark_read_for(id, &user.id);
    if changed {
        ctx.events.state_changed(StateTopic::Inbox);
    }

    Ok(changed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::session::{login, logout};
    use crate::directory::find_user;
    use chrono::Utc;

    async fn ctx_with_user(id: &str) -> AppContext {
        let ctx = AppContext::in_memory().unwrap();
        let user = find_user(&ctx.directory, id).unwrap().clone();
        login(&ctx, user).await.unwrap();
        ctx
    }

    fn notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            message: format!("Notification {}", id),
            timestamp: Utc::now(),
            read: false,
            link: None,
        }
    }

    #[tokio::test]
    async fn test_mark_all_read_twice_stays_at_zero() {
        let ctx = ctx_with_user("u2").await;
        push_notification(&ctx, notification("n1"));
        push_notification(&ctx, notification("n2"));
        assert_eq!(unread_notifications(&ctx), 2);

        mark_all_notifications_read(&ctx);
        assert_eq!(unread_notifications(&ctx), 0);

        mark_all_notifications_read(&ctx);
        assert_eq!(unread_notifications(&ctx), 0);
    }

    #[tokio::test]
    async fn test_mark_one_read_on_read_item_changes_nothing() {
        let ctx = ctx_with_user("u2").await;
        push_notification(&ctx, notification("n1"));

        assert!(mark_notification_read(&ctx, "n1"));
        let after_first = ctx.notifications.snapshot();

        assert!(!mark_notification_read(&ctx, "n1"));
        assert_eq!(ctx.notifications.snapshot(), after_first);
    }

    #[tokio::test]
    async fn test_email_visibility_across_sessions() {
        // u1 sends to u2: the sender's own inbox must not show it; after
        // u2 logs in it shows up unread and bumps the count by one.
        let ctx = ctx_with_user("u1").await;

        let before = unread_emails(&ctx);
        send_email(
            &ctx,
            NewEmail {
                to: "u2".to_string(),
                subject: "PM schedule".to_string(),
                body: "Ventilator VT-0433 due next week".to_string(),
            },
        )
        .unwrap();

        assert!(inbox(&ctx).is_empty());
        assert_eq!(unread_emails(&ctx), before);

        logout(&ctx).unwrap();
        assert!(inbox(&ctx).is_empty());

        let u2 = find_user(&ctx.directory, "u2").unwrap().clone();
        login(&ctx, u2).await.unwrap();

        let visible = inbox(&ctx);
        assert_eq!(visible.len(), 1);
        assert!(!visible[0].read);
        assert_eq!(visible[0].subject, "PM schedule");
        assert_eq!(unread_emails(&ctx), 1);
    }

    #[tokio::test]
    async fn test_send_email_requires_user() {
        let ctx = AppContext::in_memory().unwrap();
        let err = send_email(
            &ctx,
            NewEmail {
                to: "u2".to_string(),
                subject: "hello".to_string(),
                body: "body".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn test_mark_email_read_only_own_messages() {
        let ctx = ctx_with_user("u1").await;
        let email = send_email(
            &ctx,
            NewEmail {
                to: "u2".to_string(),
                subject: "for u2".to_string(),
                body: "body".to_string(),
            },
        )
        .unwrap();

        // u1 is not the recipient
        assert!(!mark_email_read(&ctx, &email.id).unwrap());

        logout(&ctx).unwrap();
        let u2 = find_user(&ctx.directory, "u2").unwrap().clone();
        login(&ctx, u2).await.unwrap();

        assert!(mark_email_read(&ctx, &email.id).unwrap());
        assert_eq!(unread_emails(&ctx), 0);
    }

    #[tokio::test]
    async fn test_panel_ordering_is_derived_on_read() {
        let ctx = ctx_with_user("u2").await;

        let mut older = notification("old");
        older.timestamp = Utc::now() - chrono::Duration::hours(2);
        let newer = notification("new");

        // Pushed out of chronological order on purpose
        push_notification(&ctx, newer);
        push_notification(&ctx, older);

        let panel = notification_panel(&ctx);
        assert_eq!(panel[0].id, "new");
        assert_eq!(panel[1].id, "old");
    }
}
