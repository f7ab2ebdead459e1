//! Local relay endpoint set.
//!
//! One parameterized route table drives every `/api/...` endpoint that
//! fronts the upstream API: each entry names the local path and method,
//! and a builder function that validates the inbound request and produces
//! the single [`crate::upstream::UpstreamCall`] it maps to. A generic
//! handler in `handler.rs` does the rest; there are no per-route
//! handler functions.

pub mod handler;
pub mod routes;
pub mod schema;
pub mod validate;

pub use handler::relay_router;
pub use routes::{RelayRequest, RouteSpec, ROUTES};
pub use validate::ValidationError;
