//! # Remote Error Types
//!
//! Error taxonomy for the two dashboard fetches.
//!
//! ## Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Remote Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Protocol     │  │    Configuration        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  Status         │  │  InvalidConfig          │ │
//! │  │  (refused,      │  │  (non-2xx)      │  │  (bad base URL,         │ │
//! │  │   timeout, dns) │  │  Decode         │  │   client build)         │ │
//! │  │                 │  │  (bad JSON)     │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Transport and Protocol errors are transient by design: the app        │
//! │  layer recovers with a fallback collection. Configuration errors       │
//! │  mean the operator got the wiring wrong.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Fetch failures for the dashboard endpoints.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The request never completed (refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The client itself could not be configured.
    #[error("Invalid remote configuration: {0}")]
    InvalidConfig(String),
}

impl RemoteError {
    /// Whether this failure should be recovered with a fallback
    /// collection rather than reported as a wiring mistake.
    ///
    /// Everything except configuration errors is transient here: the
    /// backing service being down or returning garbage is an expected
    /// condition the dashboard degrades through.
    pub fn is_transient(&self) -> bool {
        !matches!(self, RemoteError::InvalidConfig(_))
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else if err.is_builder() {
            RemoteError::InvalidConfig(err.to_string())
        } else {
            // connect, timeout, request, redirect - all transport-level
            RemoteError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(RemoteError::Status { status: 500 }.is_transient());
        assert!(RemoteError::Network("refused".into()).is_transient());
        assert!(RemoteError::Decode("bad json".into()).is_transient());
        assert!(!RemoteError::InvalidConfig("bad url".into()).is_transient());
    }

    #[test]
    fn test_status_message() {
        let err = RemoteError::Status { status: 503 };
        assert_eq!(err.to_string(), "Endpoint returned HTTP 503");
    }
}
