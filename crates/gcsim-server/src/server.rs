use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use gcsim_store::{BucketStore, InMemoryBucketStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Storage emulator server.
pub struct GcsimServer {
    config: ServerConfig,
    store: Arc<dyn BucketStore>,
}

impl GcsimServer {
    /// Create a server over a fresh in-memory store holding the configured
    /// initial buckets.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store: Arc<dyn BucketStore> = Arc::new(InMemoryBucketStore::new());
        for bucket in &config.initial_buckets {
            store.create_bucket(bucket)?;
        }
        Ok(Self::with_store(config, store))
    }

    /// Create a server over an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn BucketStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn BucketStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store)))
            .layer(DefaultBodyLimit::max(self.config.max_upload_size))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("gcsim server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
