//! # User Directory
//!
//! The fixed user directory the global search consults.
//!
//! This is deliberately NOT the live session user: search runs over the
//! hospital's known staff, whoever happens to be logged in. A real
//! deployment would load this from the user service; the dashboard ships
//! the fixed roster its backend mock uses.

use medboard_core::{Role, User};

/// Builds the fixed user directory.
pub fn default_directory() -> Vec<User> {
    vec![
        staff("u1", "Amara Diallo", "amara.diallo@stmarys.example", Role::SuperAdmin),
        staff("u2", "Jonas Weber", "jonas.weber@stmarys.example", Role::BiomedicalEngineer),
        staff("u3", "Leila Haddad", "leila.haddad@stmarys.example", Role::SystemAdmin),
        staff("u4", "Marcus Boone", "marcus.boone@stmarys.example", Role::AreaHead),
        staff("u5", "Ines Fortes", "ines.fortes@stmarys.example", Role::ReadOnly),
    ]
}

/// Looks a directory user up by id.
pub fn find_user<'a>(directory: &'a [User], id: &str) -> Option<&'a User> {
    directory.iter().find(|u| u.id == id)
}

fn staff(id: &str, name: &str, email: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
