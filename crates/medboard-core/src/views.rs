//! # Derived Views
//!
//! Read models computed from the collections on demand.
//!
//! ## Recompute On Read, Never Cache
//! Unread counts and filtered inboxes are pure functions of the current
//! list state. Nothing here is stored, so nothing here can go stale:
//! the panel asks again, it gets the truth again.

use crate::types::{Email, Notification, User};

// =============================================================================
// Notification Views
// =============================================================================

/// Number of unread notifications.
pub fn unread_notification_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Notifications ordered for panel display: most recent first.
///
/// Ordering is computed here at query time; the underlying list keeps its
/// insertion order.
pub fn notifications_for_panel(notifications: &[Notification]) -> Vec<Notification> {
    let mut ordered: Vec<Notification> = notifications.to_vec();
    // sort_by on the reversed comparison keeps equal timestamps in their
    // original relative order (stable sort)
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    ordered
}

// =============================================================================
// Inbox Views
// =============================================================================

/// The emails the current user is allowed to see: exactly those addressed
/// to them. No user, no inbox.
pub fn visible_emails(emails: &[Email], current_user: Option<&User>) -> Vec<Email> {
    match current_user {
        Some(user) => emails.iter().filter(|e| e.to == user.id).cloned().collect(),
        None => Vec::new(),
    }
}

/// Number of unread emails in the current user's visible inbox.
pub fn unread_email_count(emails: &[Email], current_user: Option<&User>) -> usize {
    visible_emails(emails, current_user)
        .iter()
        .filter(|e| !e.read)
        .count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use chrono::{Duration, Utc};

    fn test_user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@hospital.test", id),
            role: Role::BiomedicalEngineer,
        }
    }

    fn test_notification(id: &str, read: bool, age_minutes: i64) -> Notification {
        Notification {
            id: id.to_string(),
            message: format!("Notification {}", id),
            timestamp: Utc::now() - Duration::minutes(age_minutes),
            read,
            link: None,
        }
    }

    fn test_email(id: &str, to: &str, read: bool) -> Email {
        Email {
            id: id.to_string(),
            from: "u0".to_string(),
            to: to.to_string(),
            subject: format!("Subject {}", id),
            body: "body".to_string(),
            timestamp: Utc::now(),
            read,
        }
    }

    #[test]
    fn test_unread_notification_count() {
        let notifications = vec![
            test_notification("n1", false, 1),
            test_notification("n2", true, 2),
            test_notification("n3", false, 3),
        ];
        assert_eq!(unread_notification_count(&notifications), 2);
        assert_eq!(unread_notification_count(&[]), 0);
    }

    #[test]
    fn test_panel_ordering_is_newest_first() {
        let notifications = vec![
            test_notification("old", false, 60),
            test_notification("newest", false, 1),
            test_notification("middle", false, 30),
        ];

        let ordered = notifications_for_panel(&notifications);
        let ids: Vec<&str> = ordered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle", "old"]);

        // Source list untouched
        assert_eq!(notifications[0].id, "old");
    }

    #[test]
    fn test_visible_emails_filters_by_recipient() {
        let emails = vec![
            test_email("m1", "u1", false),
            test_email("m2", "u2", false),
            test_email("m3", "u1", true),
        ];

        let u1 = test_user("u1");
        let visible = visible_emails(&emails, Some(&u1));
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|e| e.to == "u1"));
    }

    #[test]
    fn test_no_user_sees_empty_inbox() {
        let emails = vec![test_email("m1", "u1", false)];
        assert!(visible_emails(&emails, None).is_empty());
        assert_eq!(unread_email_count(&emails, None), 0);
    }

    #[test]
    fn test_unread_email_count_only_counts_own_inbox() {
        let emails = vec![
            test_email("m1", "u1", false),
            test_email("m2", "u2", false),
            test_email("m3", "u1", true),
        ];
        let u1 = test_user("u1");
        assert_eq!(unread_email_count(&emails, Some(&u1)), 1);
    }
}
