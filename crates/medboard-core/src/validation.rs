//! # Validation Module
//!
//! Input validation utilities for MedBoard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Dashboard API (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: domain rule validation                               │
//! │                                                                         │
//! │  The backing REST service validates again on its side; this core       │
//! │  only ever reads from it, so two layers are enough here.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use medboard_core::validation::{validate_equipment_name, validate_serial_number};
//!
//! // Validate before applying an equipment update
//! validate_equipment_name("Infusion Pump").unwrap();
//! validate_serial_number("SN-12345").unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_SEARCH_QUERY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates an entity identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most 64 characters
///
/// Identifiers come from the backend ("e1", "WO-1042") or are generated
/// UUIDs, so no character-set restriction is imposed beyond non-empty.
pub fn validate_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an equipment display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use medboard_core::validation::validate_equipment_name;
///
/// assert!(validate_equipment_name("Infusion Pump").is_ok());
/// assert!(validate_equipment_name("").is_err());
/// ```
pub fn validate_equipment_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a manufacturer serial number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only letters, digits, hyphens, and underscores
///
/// ## Example
/// ```rust
/// use medboard_core::validation::validate_serial_number;
///
/// assert!(validate_serial_number("SN-12345").is_ok());
/// assert!(validate_serial_number("SN 12345").is_err());
/// ```
pub fn validate_serial_number(serial: &str) -> ValidationResult<()> {
    let serial = serial.trim();

    if serial.is_empty() {
        return Err(ValidationError::Required {
            field: "serialNumber".to_string(),
        });
    }

    if serial.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "serialNumber".to_string(),
            max: 50,
        });
    }

    if !serial
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "serialNumber".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a supplier name.
///
/// Same rules as equipment names: suppliers and devices share the
/// "non-empty, sane length" display-name contract.
pub fn validate_supplier_name(name: &str) -> ValidationResult<()> {
    validate_equipment_name(name)
}

/// Validates a work-order description.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 1000 characters
pub fn validate_work_order_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > 1000 {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: 1000,
        });
    }

    Ok(())
}

/// Validates an email subject line.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_email_subject(subject: &str) -> ValidationResult<()> {
    let subject = subject.trim();

    if subject.is_empty() {
        return Err(ValidationError::Required {
            field: "subject".to_string(),
        });
    }

    if subject.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "subject".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty or short (the search engine returns no results; that is
///   not an error)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("e1").is_ok());
        assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(validate_id("").is_err());
        assert!(validate_id("   ").is_err());
        assert!(validate_id(&"x".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_equipment_name() {
        assert!(validate_equipment_name("Infusion Pump").is_ok());
        assert!(validate_equipment_name("").is_err());
        assert!(validate_equipment_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_serial_number() {
        assert!(validate_serial_number("SN123").is_ok());
        assert!(validate_serial_number("SN-123_A").is_ok());

        assert!(validate_serial_number("").is_err());
        assert!(validate_serial_number("has space").is_err());
        assert!(validate_serial_number(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_work_order_description() {
        assert!(validate_work_order_description("Calibration due").is_ok());
        assert!(validate_work_order_description("").is_err());
        assert!(validate_work_order_description(&"x".repeat(2000)).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  pump  ").unwrap(), "pump");
        assert!(validate_search_query(&"q".repeat(200)).is_err());
    }
}
