//! Asana Dashboard Relay
//!
//! A thin backend relay that fronts the Asana REST API for a dashboard
//! frontend, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │                    RELAY                      │
//!                        │                                               │
//!     Browser Request    │  ┌─────────┐    ┌─────────────┐               │
//!     ───────────────────┼─▶│  http   │───▶│ relay route │               │
//!                        │  │ server  │    │    table    │               │
//!                        │  └─────────┘    └──────┬──────┘               │
//!                        │                        │                      │
//!                        │        ┌───────────────┼──────────┐           │
//!                        │        ▼               ▼          │           │
//!                        │  ┌───────────┐  ┌────────────┐    │           │
//!     Browser Response   │  │ dashboard │  │  upstream  │    │           │
//!     ◀──────────────────┼──│   store   │  │ forwarder  │◀───┼─── Asana API
//!                        │  └───────────┘  └────────────┘    │           │
//!                        │                                               │
//!                        │  ┌─────────────────────────────────────────┐  │
//!                        │  │          Cross-Cutting Concerns         │  │
//!                        │  │  ┌────────┐ ┌─────────────┐ ┌────────┐  │  │
//!                        │  │  │ config │ │observability│ │lifecycle│ │  │
//!                        │  │  └────────┘ └─────────────┘ └────────┘  │  │
//!                        │  └─────────────────────────────────────────┘  │
//!                        └───────────────────────────────────────────────┘
//! ```
//!
//! The relay holds the bearer credential server-side, validates and trims
//! inbound parameters, forwards each accepted request as exactly one
//! upstream call, and returns upstream JSON unchanged.

use std::path::Path;

use tokio::net::TcpListener;

use asana_relay::config::loader::load_config;
use asana_relay::observability::{logging, metrics};
use asana_relay::{HttpServer, RelayConfig, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration file is the only positional argument; defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => RelayConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "asana-relay starting");

    let token_present = std::env::var(&config.upstream.token_env)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false);
    if !token_present {
        tracing::warn!(
            env_var = %config.upstream.token_env,
            "bearer credential not set; every upstream call will be rejected"
        );
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            trigger.trigger();
        }
    });

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
