//! Upstream API client subsystem.
//!
//! # Data Flow
//! ```text
//! relay handler builds UpstreamCall descriptor
//!     → client.rs (inject bearer credential, wrap body in data envelope)
//!     → upstream API over HTTPS
//!     → client.rs (parse JSON, normalize non-2xx into UpstreamError)
//!     → relay handler returns the envelope unchanged
//! ```

pub mod client;
pub mod descriptor;
pub mod error;

pub use client::AsanaClient;
pub use descriptor::{Forwarder, UpstreamCall};
pub use error::UpstreamError;
