//! # Inventory Fetch
//!
//! GET `/api/inventory` plus the seed fallback.

use tracing::{info, warn};

use medboard_core::Equipment;

use crate::client::RemoteClient;
use crate::error::RemoteResult;
use crate::{seed, INVENTORY_PATH};

impl RemoteClient {
    /// Fetches the equipment inventory.
    ///
    /// Result-typed so tests can assert on the failure taxonomy; the app
    /// layer normally goes through [`inventory_or_seed`] instead.
    pub async fn fetch_inventory(&self) -> RemoteResult<Vec<Equipment>> {
        self.get_list(INVENTORY_PATH).await
    }
}

/// Fetches the inventory, falling back to the static seed collection on
/// any failure.
///
/// ## Failure Semantics
/// A refused connection, a non-success status, and an undecodable body
/// all land in the same place: the seed devices, a `warn!`, and no error
/// for the caller. The dashboard never blocks on this endpoint.
pub async fn inventory_or_seed(client: &RemoteClient) -> Vec<Equipment> {
    match client.fetch_inventory().await {
        Ok(items) => {
            info!(count = items.len(), "Inventory refreshed from endpoint");
            items
        }
        Err(e) => {
            let fallback = seed::default_equipment();
            warn!(
                error = %e,
                seeded = fallback.len(),
                "Inventory fetch failed, using seed collection"
            );
            fallback
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RemoteConfig;
    use crate::error::RemoteError;
    use std::time::Duration;

    /// A client pointed at a port nothing listens on.
    fn unreachable_client() -> RemoteClient {
        let config =
            RemoteConfig::new("http://127.0.0.1:1").request_timeout(Duration::from_secs(2));
        RemoteClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_inventory_reports_network_error() {
        let client = unreachable_client();
        let result = client.fetch_inventory().await;
        assert!(matches!(result, Err(RemoteError::Network(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_to_seed() {
        let client = unreachable_client();
        let inventory = inventory_or_seed(&client).await;

        // The seed collection, not an empty one
        assert_eq!(inventory, seed::default_equipment());
        assert!(!inventory.is_empty());
    }
}
