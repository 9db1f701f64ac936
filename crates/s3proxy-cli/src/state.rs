//! Application state

use crate::access_log::{AccessLog, TracingAccessLog};
use crate::config::ProxyConfig;
use s3proxy_store::{ObjectStore, S3Config, S3ObjectStore};
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Proxy configuration
    pub config: ProxyConfig,
    /// Object store every request reads from
    pub store: Arc<dyn ObjectStore>,
    /// Access log sink
    pub access_log: Arc<dyn AccessLog>,
}

impl AppState {
    /// Create state backed by S3, logging access lines through `tracing`
    pub fn new(config: ProxyConfig) -> Self {
        let mut s3_config = S3Config::new(config.region.clone());
        if let Some(endpoint) = &config.endpoint_url {
            info!("Using custom S3 endpoint {}", endpoint);
            s3_config = s3_config.with_endpoint(endpoint.clone());
        }

        Self::with_backends(
            config,
            Arc::new(S3ObjectStore::new(s3_config)),
            Arc::new(TracingAccessLog),
        )
    }

    /// Create state with explicit store and access log
    pub fn with_backends(
        config: ProxyConfig,
        store: Arc<dyn ObjectStore>,
        access_log: Arc<dyn AccessLog>,
    ) -> Self {
        Self {
            config,
            store,
            access_log,
        }
    }
}
