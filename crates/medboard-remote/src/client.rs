//! # Remote Client
//!
//! Configuration and the reqwest wrapper for the dashboard endpoints.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MEDBOARD_API_URL`, `MEDBOARD_API_TIMEOUT_SECS`)
//! 2. Builder setters
//! 3. Defaults (local backing service, 10 second timeout)
//!
//! No auth headers are attached at this layer: the surrounding session /
//! cookie mechanism is outside this core's scope.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RemoteError, RemoteResult};

// =============================================================================
// Configuration
// =============================================================================

/// Remote endpoint configuration.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use medboard_remote::RemoteConfig;
///
/// let config = RemoteConfig::new("http://127.0.0.1:4000")
///     .request_timeout(Duration::from_secs(5));
/// assert_eq!(config.endpoint("/api/inventory"), "http://127.0.0.1:4000/api/inventory");
/// ```
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backing REST service.
    pub base_url: String,

    /// Per-request timeout.
    /// Default: 10 seconds (a dashboard fetch, not a batch job)
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Creates a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MEDBOARD_API_URL`: Override the base URL
    /// - `MEDBOARD_API_TIMEOUT_SECS`: Override the request timeout
    pub fn from_env() -> Self {
        let mut config = RemoteConfig::default();

        if let Ok(url) = std::env::var("MEDBOARD_API_URL") {
            config.base_url = url;
        }

        if let Ok(secs) = std::env::var("MEDBOARD_API_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for RemoteConfig {
    /// Local development wiring: the backing service next door.
    fn default() -> Self {
        RemoteConfig::new("http://127.0.0.1:4000")
    }
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the dashboard's read-only endpoints.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    config: RemoteConfig,
    http: reqwest::Client,
}

impl RemoteClient {
    /// Builds a client from the given configuration.
    pub fn new(config: RemoteConfig) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RemoteError::InvalidConfig(e.to_string()))?;

        Ok(RemoteClient { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Fetches a JSON array of `T` from an endpoint path.
    ///
    /// ## Errors
    /// - Non-success status → [`RemoteError::Status`]
    /// - Transport failure → [`RemoteError::Network`]
    /// - Unexpected body → [`RemoteError::Decode`]
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> RemoteResult<Vec<T>> {
        let url = self.config.endpoint(path);
        debug!(%url, "Fetching collection");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let items = response.json::<Vec<T>>().await?;
        debug!(%url, count = items.len(), "Collection fetched");
        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_doubling_slashes() {
        let config = RemoteConfig::new("http://host:4000/");
        assert_eq!(
            config.endpoint("/api/inventory"),
            "http://host:4000/api/inventory"
        );
        assert_eq!(
            config.endpoint("api/inventory"),
            "http://host:4000/api/inventory"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = RemoteConfig::new("http://host").request_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_client_builds_with_defaults() {
        let client = RemoteClient::new(RemoteConfig::default());
        assert!(client.is_ok());
    }
}
