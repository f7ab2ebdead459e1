//! Generic relay handler.
//!
//! # Responsibilities
//! - Register every [`RouteSpec`] on an axum router
//! - Extract path/query/body parts into a [`RelayRequest`]
//! - Run the route's builder and dispatch the upstream call
//! - Convert every outcome to the local JSON contract
//!
//! Local contract: builder success + forwarder success → 200 with the
//! upstream envelope unchanged; validation failure → 400 with
//! `{"error": <message>}` and zero upstream calls; forwarder failure →
//! 500 with `{"error": <message>}`. Nothing crashes the process.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{on, MethodFilter},
    Json, Router,
};
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::routes::{RelayRequest, RouteSpec, ROUTES};
use crate::store::types::ActivityDraft;
use crate::upstream::UpstreamError;

/// Build the axum router for the full relay route table.
pub fn relay_router() -> Router<AppState> {
    let mut router = Router::new();
    for route in ROUTES {
        let filter = MethodFilter::try_from(route.method.clone())
            .expect("route table uses standard methods");
        router = router.route(
            route.path,
            on(
                filter,
                move |State(state): State<AppState>,
                      Path(path_params): Path<HashMap<String, String>>,
                      Query(query): Query<HashMap<String, String>>,
                      body: Bytes| async move {
                    dispatch(route, state, path_params, query, body).await
                },
            ),
        );
    }
    router
}

async fn dispatch(
    route: &'static RouteSpec,
    state: AppState,
    path_params: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Bytes,
) -> Response {
    let start = Instant::now();

    let body = match parse_body(&body) {
        Ok(body) => body,
        Err(response) => {
            metrics::record_relay_request(route.name, &route.method, 400, start);
            return response;
        }
    };

    let request = RelayRequest {
        path_params,
        query,
        body,
    };

    let call = match (route.build)(&request) {
        Ok(call) => call,
        Err(err) => {
            tracing::debug!(route = route.name, error = %err, "Request rejected");
            metrics::record_relay_request(route.name, &route.method, 400, start);
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let mutating = call.is_mutating();
    let upstream_path = call.path.clone();

    match state.forwarder.forward(call).await {
        Ok(payload) => {
            if mutating {
                state
                    .store
                    .record_activity(ActivityDraft {
                        action: route.name.to_string(),
                        detail: upstream_path,
                    })
                    .await;
            }
            metrics::record_relay_request(route.name, &route.method, 200, start);
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            match &err {
                UpstreamError::Api { status, body, .. } => tracing::warn!(
                    route = route.name,
                    status = *status,
                    body = %body,
                    "Upstream error"
                ),
                UpstreamError::Transport(e) => tracing::warn!(
                    route = route.name,
                    error = %e,
                    "Upstream transport failure"
                ),
            }
            metrics::record_relay_request(route.name, &route.method, 500, start);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn parse_body(bytes: &Bytes) -> Result<Option<Value>, Response> {
    if bytes.is_empty() {
        return Ok(None);
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(error_response(StatusCode::BAD_REQUEST, "Invalid JSON body")),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
