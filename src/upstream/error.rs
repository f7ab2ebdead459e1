//! Upstream error normalization.

use thiserror::Error;

/// Error raised by the upstream forwarder.
///
/// The `Api` variant keeps the original status code and raw body so the
/// route boundary can log them; only the `Display` string propagates to
/// the caller.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream responded with a non-2xx status.
    #[error("Upstream API Error: {status} - {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    /// Network failure, timeout, or malformed upstream response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    /// Build an `Api` error from a non-2xx response body.
    ///
    /// The detail is the first message in the upstream `errors` array;
    /// anything unparseable falls back to "Unknown error".
    pub fn api(status: u16, body: String) -> Self {
        let message = first_error_message(&body).unwrap_or_else(|| "Unknown error".to_string());
        Self::Api {
            status,
            message,
            body,
        }
    }

    /// Original upstream status code, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

fn first_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("errors")?.get(0)?.get("message")?.as_str()?;
    Some(message.to_string())
}
