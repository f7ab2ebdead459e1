//! Request schemas for mutating relay routes.
//!
//! Every field is optional at the serde layer so presence checks produce
//! the route's own error message instead of a deserializer error; the
//! builders in `routes.rs` enforce which fields are actually required.

use serde::Deserialize;

/// Body of `POST /api/projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub workspace: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub name: Option<String>,
    pub project: Option<String>,
    pub notes: Option<String>,
    pub due_on: Option<String>,
}

/// Body of `PUT /api/tasks/{task_gid}`.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: Option<bool>,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub due_on: Option<String>,
}
