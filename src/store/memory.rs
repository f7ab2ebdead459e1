//! In-memory dashboard store.
//!
//! # Design Decisions
//! - One RwLock per collection; every mutation goes through a single
//!   write guard, so concurrent requests never race on the lists
//! - Newest records sit at the front; truncation keeps the most recent N
//! - Identities are server-generated UUID v4 strings

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::store::types::{
    ActivityDraft, ActivityEntry, Notification, NotificationDraft, Theme, ThemeDraft,
};
use crate::store::DashboardStore;

/// Process-local store with per-collection retention caps.
pub struct MemoryStore {
    caps: StoreConfig,
    themes: RwLock<VecDeque<Theme>>,
    notifications: RwLock<VecDeque<Notification>>,
    activity: RwLock<VecDeque<ActivityEntry>>,
}

impl MemoryStore {
    pub fn new(caps: StoreConfig) -> Self {
        Self {
            caps,
            themes: RwLock::new(VecDeque::new()),
            notifications: RwLock::new(VecDeque::new()),
            activity: RwLock::new(VecDeque::new()),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn push_capped<T>(list: &mut VecDeque<T>, record: T, cap: usize) {
    list.push_front(record);
    list.truncate(cap);
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn list_themes(&self) -> Vec<Theme> {
        self.themes.read().await.iter().cloned().collect()
    }

    async fn add_theme(&self, draft: ThemeDraft) -> Theme {
        let theme = Theme {
            id: new_id(),
            name: draft.name,
            primary: draft.primary,
            background: draft.background,
            accent: draft.accent,
            created_at_ms: now_ms(),
        };
        let mut themes = self.themes.write().await;
        push_capped(&mut themes, theme.clone(), self.caps.max_themes);
        theme
    }

    async fn remove_theme(&self, id: &str) -> bool {
        let mut themes = self.themes.write().await;
        let before = themes.len();
        themes.retain(|t| t.id != id);
        themes.len() != before
    }

    async fn list_notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.iter().cloned().collect()
    }

    async fn add_notification(&self, draft: NotificationDraft) -> Notification {
        let notification = Notification {
            id: new_id(),
            message: draft.message,
            kind: draft.kind,
            created_at_ms: now_ms(),
        };
        let mut notifications = self.notifications.write().await;
        push_capped(
            &mut notifications,
            notification.clone(),
            self.caps.max_notifications,
        );
        notification
    }

    async fn remove_notification(&self, id: &str) -> bool {
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        notifications.len() != before
    }

    async fn list_activity(&self) -> Vec<ActivityEntry> {
        self.activity.read().await.iter().cloned().collect()
    }

    async fn record_activity(&self, draft: ActivityDraft) -> ActivityEntry {
        let entry = ActivityEntry {
            id: new_id(),
            action: draft.action,
            detail: draft.detail,
            created_at_ms: now_ms(),
        };
        let mut activity = self.activity.write().await;
        push_capped(&mut activity, entry.clone(), self.caps.max_activity_entries);
        entry
    }
}
