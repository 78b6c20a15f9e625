//! Offline node connector

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ConnectorError;
use crate::ports::NodeConnector;

/// Schemes accepted for node endpoints.
const ENDPOINT_SCHEMES: [&str; 2] = ["ws://", "wss://"];

/// Connector that records the selected endpoint without opening a socket.
///
/// Used when the chain client lives outside the process (or is not running
/// at all); the sidebar state still behaves as if the link were up.
#[derive(Debug, Default)]
pub struct OfflineConnector {
    endpoint: RwLock<Option<String>>,
}

impl OfflineConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint of the last successful `connect`, until `disconnect`.
    pub async fn endpoint(&self) -> Option<String> {
        self.endpoint.read().await.clone()
    }
}

#[async_trait]
impl NodeConnector for OfflineConnector {
    async fn connect(&self, endpoint: &str) -> Result<(), ConnectorError> {
        let has_host = ENDPOINT_SCHEMES
            .iter()
            .find_map(|scheme| endpoint.strip_prefix(scheme))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConnectorError::InvalidEndpoint(endpoint.to_string()));
        }

        *self.endpoint.write().await = Some(endpoint.to_string());
        info!(endpoint, "Endpoint selected (offline)");
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        if let Some(endpoint) = self.endpoint.write().await.take() {
            info!(endpoint = %endpoint, "Endpoint released (offline)");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_records_endpoint() {
        let connector = OfflineConnector::new();
        connector.connect("ws://127.0.0.1:9944").await.unwrap();
        assert_eq!(
            connector.endpoint().await.as_deref(),
            Some("ws://127.0.0.1:9944")
        );

        connector.disconnect().await.unwrap();
        assert_eq!(connector.endpoint().await, None);
    }

    #[tokio::test]
    async fn test_rejects_non_websocket_endpoint() {
        let connector = OfflineConnector::new();
        for endpoint in ["http://127.0.0.1:9933", "127.0.0.1:9944", "ws://", ""] {
            let result = connector.connect(endpoint).await;
            assert!(
                matches!(result, Err(ConnectorError::InvalidEndpoint(_))),
                "expected {:?} to be rejected",
                endpoint
            );
        }
        assert_eq!(connector.endpoint().await, None);
    }
}
