//! Dashboard record types.

use serde::{Deserialize, Serialize};

/// A saved dashboard color theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub background: String,
    pub accent: String,
    pub created_at_ms: u64,
}

/// Validated input for a new theme.
#[derive(Debug, Clone)]
pub struct ThemeDraft {
    pub name: String,
    pub primary: String,
    pub background: String,
    pub accent: String,
}

/// Severity of a dashboard notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A dashboard notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at_ms: u64,
}

/// Validated input for a new notification.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub message: String,
    pub kind: NotificationKind,
}

/// One entry of the activity log.
///
/// Appended by the relay after each successful mutating upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub detail: String,
    pub created_at_ms: u64,
}

/// Input for a new activity entry.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub action: String,
    pub detail: String,
}
