//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, caps > 0)
//! - Check addresses and URLs actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "upstream.base_url").
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            "not a valid socket address",
        ));
    }
    if config.listener.max_body_size == 0 {
        errors.push(ValidationError::new(
            "listener.max_body_size",
            "must be greater than zero",
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if config.upstream.base_url.ends_with('/') {
                errors.push(ValidationError::new(
                    "upstream.base_url",
                    "must not end with a slash; target paths carry the leading slash",
                ));
            }
        }
        Ok(_) => errors.push(ValidationError::new(
            "upstream.base_url",
            "scheme must be http or https",
        )),
        Err(_) => errors.push(ValidationError::new(
            "upstream.base_url",
            "not a valid URL",
        )),
    }
    if config.upstream.token_env.trim().is_empty() {
        errors.push(ValidationError::new(
            "upstream.token_env",
            "must name an environment variable",
        ));
    }
    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "upstream.timeout_secs",
            "must be greater than zero",
        ));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "upstream.connect_timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than zero",
        ));
    } else if config.timeouts.request_secs <= config.upstream.timeout_secs {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must exceed upstream.timeout_secs",
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            "not a valid socket address",
        ));
    }

    if config.store.max_themes == 0 {
        errors.push(ValidationError::new(
            "store.max_themes",
            "must be greater than zero",
        ));
    }
    if config.store.max_notifications == 0 {
        errors.push(ValidationError::new(
            "store.max_notifications",
            "must be greater than zero",
        ));
    }
    if config.store.max_activity_entries == 0 {
        errors.push(ValidationError::new(
            "store.max_activity_entries",
            "must be greater than zero",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.upstream.base_url = "ftp://example.com".to_string();
        config.upstream.timeout_secs = 0;
        config.store.max_themes = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"listener.bind_address"));
        assert!(fields.contains(&"upstream.base_url"));
        assert!(fields.contains(&"upstream.timeout_secs"));
        assert!(fields.contains(&"store.max_themes"));
    }

    #[test]
    fn rejects_trailing_slash_on_base_url() {
        let mut config = RelayConfig::default();
        config.upstream.base_url = "https://app.asana.com/api/1.0/".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "upstream.base_url");
    }

    #[test]
    fn local_timeout_must_exceed_upstream_timeout() {
        let mut config = RelayConfig::default();
        config.timeouts.request_secs = config.upstream.timeout_secs;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "timeouts.request_secs");
    }
}
