//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router from the relay route table and store routes
//! - Wire up middleware (timeout, body limit, request ID, tracing)
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::request::RequestIdLayer;
use crate::relay::handler::relay_router;
use crate::store::handlers::store_router;
use crate::store::{DashboardStore, MemoryStore};
use crate::upstream::{AsanaClient, Forwarder, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<dyn Forwarder>,
    pub store: Arc<dyn DashboardStore>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a server with the real upstream client and in-memory store.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        let client = AsanaClient::new(&config.upstream)?;
        let state = AppState {
            forwarder: Arc::new(client),
            store: Arc::new(MemoryStore::new(config.store.clone())),
        };
        Ok(Self::with_state(config, state))
    }

    /// Create a server around externally supplied state.
    pub fn with_state(config: RelayConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        relay_router()
            .merge(store_router())
            .route("/api/health", get(health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_size))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the shutdown signal fires, then drains gracefully.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Liveness probe for the frontend's connectivity check.
/// Answered locally; no upstream call is made.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
