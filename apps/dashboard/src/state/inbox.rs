//! # Inbox State
//!
//! The mocked email inbox.
//!
//! The full list lives here; what a user *sees* is always the derived,
//! recipient-filtered view (`medboard_core::views::visible_emails`).
//! Read-flag transitions only apply to the current user's own messages.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use medboard_core::Email;

/// The email list behind the inbox views.
#[derive(Debug, Default)]
pub struct InboxState {
    items: Mutex<Vec<Email>>,
}

impl InboxState {
    /// Creates an empty inbox.
    pub fn new() -> Self {
        InboxState::default()
    }

    /// A cloned snapshot of every message, newest first.
    pub fn snapshot(&self) -> Vec<Email> {
        self.items.lock().expect("Inbox mutex poisoned").clone()
    }

    /// Creates and stores a new message.
    ///
    /// Id and timestamp are assigned here; the read flag starts false.
    pub fn send(&self, from: &str, to: &str, subject: &str, body: &str) -> Email {
        let email = Email {
            id: Uuid::new_v4().to_string(),
            from: from.to_string(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            timestamp: Utc::now(),
            read: false,
        };

        let mut items = self.items.lock().expect("Inbox mutex poisoned");
        items.insert(0, email.clone());
        email
    }

    /// Marks a message read, but only when it is addressed to `user_id`.
    ///
    /// ## Returns
    /// `false` when the id is absent, addressed to someone else, or
    /// already read (all no-ops).
    pub fn mark_read_for(&self, id: &str, user_id: &str) -> bool {
        let mut items = self.items.lock().expect("Inbox mutex poisoned");
        match items
            .iter_mut()
            .find(|e| e.id == id && e.to == user_id && !e.read)
        {
            Some(email) => {
                email.read = true;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_assigns_id_timestamp_and_unread() {
        let inbox = InboxState::new();
        let email = inbox.send("u1", "u2", "Filter change", "Pump e1 filter due");

        assert!(!email.id.is_empty());
        assert!(!email.read);
        assert_eq!(email.to, "u2");

        let another = inbox.send("u1", "u2", "Again", "body");
        assert_ne!(email.id, another.id);
    }

    #[test]
    fn test_send_prepends_newest_first() {
        let inbox = InboxState::new();
        inbox.send("u1", "u2", "first", "body");
        inbox.send("u1", "u2", "second", "body");

        assert_eq!(inbox.snapshot()[0].subject, "second");
    }

    #[test]
    fn test_mark_read_only_for_recipient() {
        let inbox = InboxState::new();
        let email = inbox.send("u1", "u2", "subject", "body");

        // The sender cannot mark the recipient's copy read
        assert!(!inbox.mark_read_for(&email.id, "u1"));

        assert!(inbox.mark_read_for(&email.id, "u2"));
        assert!(inbox.snapshot()[0].read);

        // Already read is a no-op
        assert!(!inbox.mark_read_for(&email.id, "u2"));
    }
}
