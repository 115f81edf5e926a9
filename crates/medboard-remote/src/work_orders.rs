//! # Work Order Fetch
//!
//! GET `/api/work-orders` plus the empty fallback.
//!
//! Unlike the inventory there is no seed here: a work-order queue with
//! made-up entries would invite someone to "complete" them, so a failed
//! fetch shows an empty queue until the next refresh.

use tracing::{info, warn};

use medboard_core::WorkOrder;

use crate::client::RemoteClient;
use crate::error::RemoteResult;
use crate::WORK_ORDERS_PATH;

impl RemoteClient {
    /// Fetches the work-order list.
    ///
    /// Result-typed so tests can assert on the failure taxonomy; the app
    /// layer normally goes through [`work_orders_or_empty`] instead.
    pub async fn fetch_work_orders(&self) -> RemoteResult<Vec<WorkOrder>> {
        self.get_list(WORK_ORDERS_PATH).await
    }
}

/// Fetches the work-order list, falling back to an empty collection on
/// any failure.
pub async fn work_orders_or_empty(client: &RemoteClient) -> Vec<WorkOrder> {
    match client.fetch_work_orders().await {
        Ok(items) => {
            info!(count = items.len(), "Work orders refreshed from endpoint");
            items
        }
        Err(e) => {
            warn!(error = %e, "Work-order fetch failed, using empty collection");
            Vec::new()
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

    fn unreachable_client() -> RemoteClient {
        let config =
            RemoteConfig::new("http://127.0.0.1:1").request_timeout(Duration::from_secs(2));
        RemoteClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_work_orders_reports_network_error() {
        let client = unreachable_client();
        let result = client.fetch_work_orders().await;
        assert!(matches!(result, Err(RemoteError::Network(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back_to_empty() {
        let client = unreachable_client();
        let orders = work_orders_or_empty(&client).await;
        assert!(orders.is_empty());
    }
}
