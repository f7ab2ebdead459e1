//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file (optional)
//!     → schema.rs (serde deserialization, defaults)
//!     → validation.rs (semantic checks, all errors collected)
//!     → accepted RelayConfig, read-only for the process lifetime
//! ```
//!
//! The bearer credential deliberately never lands in the config value;
//! only the name of the environment variable holding it does. The
//! upstream client reads the variable once per call.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, RelayConfig, StoreConfig, TimeoutConfig, UpstreamConfig,
};
