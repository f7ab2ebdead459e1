//! Boundary validation helpers.
//!
//! Canonical policy for every route: top-level string fields are trimmed
//! before forwarding, required fields must be non-empty after trimming,
//! and optional fields that trim to empty are dropped rather than
//! forwarded. No field is silently defaulted.

use thiserror::Error;

/// A request rejected before any upstream call is made.
///
/// The message is the exact string returned to the caller as
/// `{"error": <message>}` with local status 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Require a non-empty string after trimming.
pub fn require_trimmed(value: Option<&str>, message: &str) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::new(message)),
    }
}

/// Trim an optional string, dropping it entirely when empty.
pub fn optional_trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_surrounding_whitespace() {
        assert_eq!(
            require_trimmed(Some("  Demo  "), "Project name is required").unwrap(),
            "Demo"
        );
    }

    #[test]
    fn require_rejects_missing_and_blank() {
        let err = require_trimmed(None, "Project name is required").unwrap_err();
        assert_eq!(err.to_string(), "Project name is required");

        let err = require_trimmed(Some("   "), "Project name is required").unwrap_err();
        assert_eq!(err.to_string(), "Project name is required");
    }

    #[test]
    fn optional_drops_blank_values() {
        assert_eq!(optional_trimmed(Some(" notes ")), Some("notes".to_string()));
        assert_eq!(optional_trimmed(Some("   ")), None);
        assert_eq!(optional_trimmed(None), None);
    }
}
