//! Upstream API client with credential injection and error normalization.
//!
//! # Responsibilities
//! - Build the outbound request from an [`UpstreamCall`] descriptor
//! - Inject the bearer credential from the process environment
//! - Wrap mutating bodies in the upstream `{"data": ...}` envelope
//! - Return parsed JSON on 2xx, a normalized [`UpstreamError`] otherwise
//!
//! # Design Decisions
//! - The credential env var is read on every call; there is no cached
//!   token to invalidate
//! - An absent credential still sends the request (upstream answers with
//!   its own auth error)
//! - GET never carries a body, whatever the descriptor says
//! - A non-JSON 2xx response is a fatal error for that call

use async_trait::async_trait;
use axum::http::Method;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::descriptor::{Forwarder, UpstreamCall};
use crate::upstream::error::UpstreamError;

/// HTTP client for the upstream project-management API.
#[derive(Clone)]
pub struct AsanaClient {
    http: reqwest::Client,
    base_url: String,
    token_env: String,
}

impl AsanaClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token_env: config.token_env.clone(),
        })
    }

    /// Read the bearer credential from the process environment.
    ///
    /// Read per call, never cached. Empty when the variable is unset;
    /// the request is sent anyway.
    fn bearer_token(&self) -> String {
        std::env::var(&self.token_env).unwrap_or_default()
    }
}

#[async_trait]
impl Forwarder for AsanaClient {
    async fn forward(&self, call: UpstreamCall) -> Result<Value, UpstreamError> {
        debug_assert!(call.path.starts_with('/'), "upstream paths are rooted");

        let url = format!("{}{}", self.base_url, call.path);
        let has_body = call.body.is_some() && call.method != Method::GET;

        tracing::debug!(
            method = %call.method,
            path = %call.path,
            has_body,
            "Forwarding upstream call"
        );

        let mut request = self
            .http
            .request(call.method.clone(), url)
            .header(ACCEPT, "application/json")
            .bearer_auth(self.bearer_token());

        if call.method != Method::GET {
            if let Some(body) = &call.body {
                // Upstream wire contract: mutating payloads ride under a
                // "data" key. Sets Content-Type: application/json.
                request = request.json(&serde_json::json!({ "data": body }));
            }
        }

        let response = request.send().await?;
        let status = response.status();

        tracing::debug!(
            method = %call.method,
            path = %call.path,
            status = status.as_u16(),
            "Upstream responded"
        );
        metrics::record_upstream_call(&call.method, status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                path = %call.path,
                status = status.as_u16(),
                body = %body,
                "Upstream call failed"
            );
            return Err(UpstreamError::api(status.as_u16(), body));
        }

        // No silent fallback: a 2xx that is not JSON fails the call.
        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}

impl std::fmt::Debug for AsanaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsanaClient")
            .field("base_url", &self.base_url)
            .field("token_env", &self.token_env)
            .finish()
    }
}
