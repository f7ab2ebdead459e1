//! The relay route table.
//!
//! # Responsibilities
//! - Declare every local route as data: name, method, path, builder
//! - Validate and trim inbound parameters per route
//! - Build the upstream path by template substitution
//!
//! # Design Decisions
//! - Builders are plain functions over the extracted request parts, so
//!   they unit-test without a server
//! - Validation failures carry the exact caller-facing message and
//!   guarantee zero upstream calls

use std::collections::HashMap;

use axum::http::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::relay::schema::{CreateProjectRequest, CreateTaskRequest, UpdateTaskRequest};
use crate::relay::validate::{optional_trimmed, require_trimmed, ValidationError};
use crate::upstream::UpstreamCall;

/// Fields requested on project listings.
const PROJECT_OPT_FIELDS: &str = "name,notes,color,archived,created_at,modified_at";

/// Fields requested on task listings.
const TASK_OPT_FIELDS: &str = "name,notes,completed,assignee.name,due_on";

/// Fields requested on workspace member listings.
const USER_OPT_FIELDS: &str = "name,email,photo";

/// The extracted parts of one inbound relay request.
#[derive(Debug, Default)]
pub struct RelayRequest {
    pub path_params: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

impl RelayRequest {
    /// A query parameter, trimmed; `None` when absent or blank.
    pub fn query_trimmed(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// A path segment captured by the router.
    pub fn path_param(&self, name: &str) -> Result<&str, ValidationError> {
        self.path_params
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ValidationError::new(format!("Missing path parameter: {name}")))
    }

    /// Deserialize the JSON body into a route schema.
    ///
    /// A missing body behaves like `{}` so required-field checks produce
    /// the route's own message rather than a generic one.
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        let value = self
            .body
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new()));
        serde_json::from_value(value).map_err(|_| ValidationError::new("Invalid request body"))
    }
}

/// Builder from an inbound request to the one upstream call it maps to.
pub type BuildUpstreamCall = fn(&RelayRequest) -> Result<UpstreamCall, ValidationError>;

/// One entry of the relay route table.
pub struct RouteSpec {
    /// Route identifier for logging/metrics.
    pub name: &'static str,

    /// Local method.
    pub method: Method,

    /// Local path in axum syntax (e.g. "/api/tasks/{task_gid}").
    pub path: &'static str,

    /// Validates the request and builds the upstream call.
    pub build: BuildUpstreamCall,
}

/// The complete local endpoint set fronting the upstream API.
pub static ROUTES: &[RouteSpec] = &[
    RouteSpec {
        name: "current_user",
        method: Method::GET,
        path: "/api/users/me",
        build: current_user,
    },
    RouteSpec {
        name: "list_workspaces",
        method: Method::GET,
        path: "/api/workspaces",
        build: list_workspaces,
    },
    RouteSpec {
        name: "workspace_users",
        method: Method::GET,
        path: "/api/workspaces/{workspace_gid}/users",
        build: workspace_users,
    },
    RouteSpec {
        name: "list_projects",
        method: Method::GET,
        path: "/api/projects",
        build: list_projects,
    },
    RouteSpec {
        name: "create_project",
        method: Method::POST,
        path: "/api/projects",
        build: create_project,
    },
    RouteSpec {
        name: "list_tasks",
        method: Method::GET,
        path: "/api/tasks",
        build: list_tasks,
    },
    RouteSpec {
        name: "create_task",
        method: Method::POST,
        path: "/api/tasks",
        build: create_task,
    },
    RouteSpec {
        name: "update_task",
        method: Method::PUT,
        path: "/api/tasks/{task_gid}",
        build: update_task,
    },
    RouteSpec {
        name: "delete_task",
        method: Method::DELETE,
        path: "/api/tasks/{task_gid}",
        build: delete_task,
    },
];

fn current_user(_req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    Ok(UpstreamCall::get("/users/me"))
}

fn list_workspaces(_req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    Ok(UpstreamCall::get("/workspaces"))
}

fn workspace_users(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let workspace = req.path_param("workspace_gid")?;
    Ok(UpstreamCall::get(format!(
        "/workspaces/{workspace}/users?opt_fields={USER_OPT_FIELDS}"
    )))
}

fn list_projects(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let workspace = req
        .query_trimmed("workspace")
        .ok_or_else(|| ValidationError::new("Workspace is required"))?;
    Ok(UpstreamCall::get(format!(
        "/projects?workspace={workspace}&opt_fields={PROJECT_OPT_FIELDS}"
    )))
}

fn create_project(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let body: CreateProjectRequest = req.body_as()?;
    let name = require_trimmed(body.name.as_deref(), "Project name is required")?;
    let workspace = require_trimmed(body.workspace.as_deref(), "Workspace is required")?;

    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::String(name));
    fields.insert("workspace".to_string(), Value::String(workspace));
    if let Some(notes) = optional_trimmed(body.notes.as_deref()) {
        fields.insert("notes".to_string(), Value::String(notes));
    }
    if let Some(color) = optional_trimmed(body.color.as_deref()) {
        fields.insert("color".to_string(), Value::String(color));
    }

    Ok(UpstreamCall::post("/projects", Value::Object(fields)))
}

fn list_tasks(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let project = req
        .query_trimmed("project")
        .ok_or_else(|| ValidationError::new("Project is required"))?;
    Ok(UpstreamCall::get(format!(
        "/tasks?project={project}&opt_fields={TASK_OPT_FIELDS}"
    )))
}

fn create_task(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let body: CreateTaskRequest = req.body_as()?;
    let name = require_trimmed(body.name.as_deref(), "Task name is required")?;
    let project = require_trimmed(body.project.as_deref(), "Project is required")?;

    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::String(name));
    fields.insert(
        "projects".to_string(),
        Value::Array(vec![Value::String(project)]),
    );
    if let Some(notes) = optional_trimmed(body.notes.as_deref()) {
        fields.insert("notes".to_string(), Value::String(notes));
    }
    if let Some(due_on) = optional_trimmed(body.due_on.as_deref()) {
        fields.insert("due_on".to_string(), Value::String(due_on));
    }

    Ok(UpstreamCall::post("/tasks", Value::Object(fields)))
}

fn update_task(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let task = req.path_param("task_gid")?.to_string();
    let body: UpdateTaskRequest = req.body_as()?;

    let mut fields = Map::new();
    if let Some(completed) = body.completed {
        fields.insert("completed".to_string(), Value::Bool(completed));
    }
    if let Some(name) = optional_trimmed(body.name.as_deref()) {
        fields.insert("name".to_string(), Value::String(name));
    }
    if let Some(notes) = optional_trimmed(body.notes.as_deref()) {
        fields.insert("notes".to_string(), Value::String(notes));
    }
    if let Some(due_on) = optional_trimmed(body.due_on.as_deref()) {
        fields.insert("due_on".to_string(), Value::String(due_on));
    }

    Ok(UpstreamCall::put(
        format!("/tasks/{task}"),
        Value::Object(fields),
    ))
}

fn delete_task(req: &RelayRequest) -> Result<UpstreamCall, ValidationError> {
    let task = req.path_param("task_gid")?;
    Ok(UpstreamCall::delete(format!("/tasks/{task}")))
}
