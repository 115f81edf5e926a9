//! # Session State
//!
//! Holds the current authenticated user (or none) and the transient
//! just-logged-in flag.
//!
//! ## Invariants
//! - Exactly one or zero current user at any time
//! - The user value is immutable for the session: a new login replaces
//!   it wholesale, nothing edits it in place
//! - `just_logged_in` is set by login and cleared by logout; collaborators
//!   (e.g. a welcome toast) read it, this core never interprets it

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use medboard_core::User;

/// The session's identity state.
#[derive(Debug, Default)]
pub struct SessionState {
    current: Mutex<Option<User>>,
    just_logged_in: AtomicBool,
}

impl SessionState {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current
            .lock()
            .expect("Session mutex poisoned")
            .clone()
    }

    /// Whether a user is present.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .lock()
            .expect("Session mutex poisoned")
            .is_some()
    }

    /// The transient welcome flag: true between login and logout.
    pub fn just_logged_in(&self) -> bool {
        self.just_logged_in.load(Ordering::SeqCst)
    }

    /// Installs `user` as the current user and raises the welcome flag.
    ///
    /// ## Returns
    /// `true` when this was a none→some transition - the signal the API
    /// layer uses to trigger exactly one refresh of each entity store.
    /// Replacing an existing user returns `false`.
    pub(crate) fn begin_session(&self, user: User) -> bool {
        let mut current = self.current.lock().expect("Session mutex poisoned");
        let was_empty = current.is_none();
        *current = Some(user);
        self.just_logged_in.store(true, Ordering::SeqCst);
        was_empty
    }

    /// Clears the current user and the welcome flag.
    ///
    /// ## Returns
    /// The user that was logged in, for audit attribution. `None` makes
    /// logout on an empty session a no-op.
    pub(crate) fn end_session(&self) -> Option<User> {
        let mut current = self.current.lock().expect("Session mutex poisoned");
        self.just_logged_in.store(false, Ordering::SeqCst);
        current.take()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
