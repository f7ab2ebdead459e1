//! Outbound call descriptors and the forwarder seam.

use async_trait::async_trait;
use axum::http::Method;
use serde_json::Value;

use crate::upstream::error::UpstreamError;

/// Describes one outbound upstream call.
///
/// Constructed per inbound request, used exactly once, and discarded;
/// it has no identity beyond the single call. The path is relative to
/// the configured base URL and always starts with `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamCall {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
}

impl UpstreamCall {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            path: path.into(),
            method: Method::POST,
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            path: path.into(),
            method: Method::PUT,
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::DELETE,
            body: None,
        }
    }

    /// True for methods that change upstream state.
    pub fn is_mutating(&self) -> bool {
        self.method != Method::GET
    }
}

/// Seam between route handlers and the upstream API.
///
/// Handlers hold an `Arc<dyn Forwarder>`, so tests can substitute a mock
/// and assert on call counts and descriptors.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Perform one upstream call and normalize its outcome.
    ///
    /// On 2xx returns the parsed JSON envelope unchanged. On non-2xx or
    /// transport failure returns an [`UpstreamError`].
    async fn forward(&self, call: UpstreamCall) -> Result<Value, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_set_method_and_body() {
        let call = UpstreamCall::get("/users/me");
        assert_eq!(call.method, Method::GET);
        assert!(call.body.is_none());
        assert!(!call.is_mutating());

        let call = UpstreamCall::post("/projects", json!({"name": "Demo"}));
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.body, Some(json!({"name": "Demo"})));
        assert!(call.is_mutating());

        let call = UpstreamCall::delete("/tasks/42");
        assert_eq!(call.method, Method::DELETE);
        assert!(call.body.is_none());
        assert!(call.is_mutating());
    }
}
