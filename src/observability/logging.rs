//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - RUST_LOG wins over the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// Call once at process start; later calls are ignored.
pub fn init_logging(config: &ObservabilityConfig) {
    let default_filter = format!("asana_relay={},tower_http=info", config.log_level);

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
