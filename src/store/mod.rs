//! Dashboard store subsystem.
//!
//! Themes, notifications, and the activity log are purely local dashboard
//! state; the upstream API never sees them. Handlers depend on the
//! [`DashboardStore`] trait, so a persistent implementation can replace
//! [`MemoryStore`] without touching route logic.

use async_trait::async_trait;

pub mod handlers;
pub mod memory;
pub mod types;

pub use memory::MemoryStore;
pub use types::{
    ActivityDraft, ActivityEntry, Notification, NotificationDraft, NotificationKind, Theme,
    ThemeDraft,
};

/// Storage capability for local dashboard records.
///
/// Listings return newest-first. Each collection keeps only the most
/// recent N records; the cap belongs to the implementation.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn list_themes(&self) -> Vec<Theme>;
    async fn add_theme(&self, draft: ThemeDraft) -> Theme;
    async fn remove_theme(&self, id: &str) -> bool;

    async fn list_notifications(&self) -> Vec<Notification>;
    async fn add_notification(&self, draft: NotificationDraft) -> Notification;
    async fn remove_notification(&self, id: &str) -> bool;

    async fn list_activity(&self) -> Vec<ActivityEntry>;
    async fn record_activity(&self, draft: ActivityDraft) -> ActivityEntry;
}
