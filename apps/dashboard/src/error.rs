//! # API Error Type
//!
//! Unified error type for the dashboard's in-process API.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MedBoard                               │
//! │                                                                         │
//! │  UI Shell                       Rust Core                               │
//! │  ────────                       ─────────                               │
//! │                                                                         │
//! │  api::work_orders::create_work_order(...)                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  API Function                                                    │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation failed? ── ValidationError ──────────┐               │  │
//! │  │         │                                        ▼               │  │
//! │  │  No user logged in? ── Unauthorized ──────────► ApiError ──────► │  │
//! │  │         │                                        ▲               │  │
//! │  │  Theme write failed? ─ StoreError (logged) ──────┘               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  NOTE: transient fetch failures never reach this type - the refresh    │
//! │  path degrades to fallback collections instead (see medboard-remote).  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The shell receives a machine-readable `code` plus a human-readable
//! `message`, the same shape on every failure.

use serde::Serialize;
use tracing::error;

use medboard_core::{CoreError, ValidationError};
use medboard_remote::RemoteError;
use medboard_store::StoreError;

/// API error returned from dashboard API functions.
///
/// ## Serialization
/// This is what the shell receives when a call fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "serialNumber is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The call requires a logged-in user
    Unauthorized,

    /// Durable storage failed
    StorageError,

    /// Remote endpoint failed in a non-recoverable way
    RemoteError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            // Unparseable role/theme strings are bad input too
            CoreError::UnknownRole(_) | CoreError::UnknownTheme(_) => {
                ApiError::validation(err.to_string())
            }
        }
    }
}

/// Converts storage errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the actual error but return a generic message
        error!("Storage operation failed: {}", err);
        ApiError::new(ErrorCode::StorageError, "Durable storage failed")
    }
}

/// Converts remote errors to API errors.
///
/// Only configuration mistakes land here; transient fetch failures are
/// recovered with fallback collections long before this conversion.
impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        error!("Remote operation failed: {}", err);
        ApiError::new(ErrorCode::RemoteError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for dashboard API functions.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================
