//! Local routes for dashboard records.
//!
//! These endpoints never touch the upstream API; they read and mutate
//! the injected [`DashboardStore`](crate::store::DashboardStore).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::relay::validate::require_trimmed;
use crate::store::types::{NotificationDraft, NotificationKind, Theme, ThemeDraft};

/// Colors applied when a theme is created without them.
const DEFAULT_PRIMARY: &str = "#6366f1";
const DEFAULT_BACKGROUND: &str = "#0f172a";
const DEFAULT_ACCENT: &str = "#f59e0b";

/// Body of `POST /api/themes`.
#[derive(Debug, Deserialize)]
pub struct CreateThemeRequest {
    pub name: Option<String>,
    pub primary: Option<String>,
    pub background: Option<String>,
    pub accent: Option<String>,
}

/// Body of `POST /api/notifications`.
#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub kind: NotificationKind,
}

/// Build the router for the store-backed endpoints.
pub fn store_router() -> Router<AppState> {
    Router::new()
        .route("/api/themes", get(list_themes).post(create_theme))
        .route("/api/themes/{id}", delete(remove_theme))
        .route(
            "/api/notifications",
            get(list_notifications).post(create_notification),
        )
        .route("/api/notifications/{id}", delete(remove_notification))
        .route("/api/activity", get(list_activity))
}

async fn list_themes(State(state): State<AppState>) -> Json<Vec<Theme>> {
    Json(state.store.list_themes().await)
}

async fn create_theme(
    State(state): State<AppState>,
    Json(request): Json<CreateThemeRequest>,
) -> Response {
    let name = match require_trimmed(request.name.as_deref(), "Theme name is required") {
        Ok(name) => name,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let draft = ThemeDraft {
        name,
        primary: color_or_default(request.primary, DEFAULT_PRIMARY),
        background: color_or_default(request.background, DEFAULT_BACKGROUND),
        accent: color_or_default(request.accent, DEFAULT_ACCENT),
    };

    let theme = state.store.add_theme(draft).await;
    (StatusCode::CREATED, Json(theme)).into_response()
}

async fn remove_theme(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if state.store.remove_theme(&id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(StatusCode::NOT_FOUND, "Theme not found")
    }
}

async fn list_notifications(State(state): State<AppState>) -> Response {
    Json(state.store.list_notifications().await).into_response()
}

async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> Response {
    let message = match require_trimmed(request.message.as_deref(), "Message is required") {
        Ok(message) => message,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let notification = state
        .store
        .add_notification(NotificationDraft {
            message,
            kind: request.kind,
        })
        .await;
    (StatusCode::CREATED, Json(notification)).into_response()
}

async fn remove_notification(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if state.store.remove_notification(&id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(StatusCode::NOT_FOUND, "Notification not found")
    }
}

async fn list_activity(State(state): State<AppState>) -> Response {
    Json(state.store.list_activity().await).into_response()
}

fn color_or_default(value: Option<String>, fallback: &str) -> String {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
