//! Forwarder contract tests against a recording mock upstream.

use asana_relay::config::UpstreamConfig;
use asana_relay::upstream::{AsanaClient, Forwarder, UpstreamCall, UpstreamError};
use axum::http::Method;
use serde_json::json;

mod common;
use common::MockUpstream;

fn client_for(upstream: &MockUpstream, token_env: &str) -> AsanaClient {
    let config = UpstreamConfig {
        base_url: upstream.base_url(),
        token_env: token_env.to_string(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    AsanaClient::new(&config).unwrap()
}

#[tokio::test]
async fn mutating_body_rides_the_data_envelope() {
    std::env::set_var("RELAY_TEST_TOKEN_ENVELOPE", "token-a");
    let upstream = MockUpstream::start(|_| (200, r#"{"data":{}}"#.to_string())).await;
    let client = client_for(&upstream, "RELAY_TEST_TOKEN_ENVELOPE");

    client
        .forward(UpstreamCall::post("/projects", json!({"a": 1})))
        .await
        .unwrap();

    let received = upstream.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, "POST");
    assert_eq!(received[0].path, "/projects");
    // envelope must hold byte-for-byte
    assert_eq!(received[0].body, r#"{"data":{"a":1}}"#);
    assert_eq!(received[0].header("authorization"), Some("Bearer token-a"));
    assert_eq!(received[0].header("accept"), Some("application/json"));
    assert_eq!(
        received[0].header("content-type"),
        Some("application/json")
    );
}

#[tokio::test]
async fn get_sends_no_body_even_when_descriptor_has_one() {
    std::env::set_var("RELAY_TEST_TOKEN_GET", "token-b");
    let upstream = MockUpstream::start(|_| (200, r#"{"data":{}}"#.to_string())).await;
    let client = client_for(&upstream, "RELAY_TEST_TOKEN_GET");

    let call = UpstreamCall {
        path: "/users/me".to_string(),
        method: Method::GET,
        body: Some(json!({"ignored": true})),
    };
    client.forward(call).await.unwrap();

    let received = upstream.received();
    assert_eq!(received[0].method, "GET");
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn non_2xx_yields_normalized_error() {
    std::env::set_var("RELAY_TEST_TOKEN_404", "token-c");
    let upstream = MockUpstream::start(|_| {
        (404, r#"{"errors":[{"message":"not found"}]}"#.to_string())
    })
    .await;
    let client = client_for(&upstream, "RELAY_TEST_TOKEN_404");

    let err = client
        .forward(UpstreamCall::get("/projects/999"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Upstream API Error: 404 - not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_unknown_error() {
    std::env::set_var("RELAY_TEST_TOKEN_500", "token-d");
    let upstream = MockUpstream::start(|_| (500, "<html>gateway</html>".to_string())).await;
    let client = client_for(&upstream, "RELAY_TEST_TOKEN_500");

    let err = client
        .forward(UpstreamCall::get("/workspaces"))
        .await
        .unwrap_err();

    assert!(err.to_string().ends_with("Unknown error"));
}

#[tokio::test]
async fn non_json_success_is_fatal() {
    std::env::set_var("RELAY_TEST_TOKEN_HTML", "token-e");
    let upstream = MockUpstream::start(|_| (200, "<html>login page</html>".to_string())).await;
    let client = client_for(&upstream, "RELAY_TEST_TOKEN_HTML");

    let err = client
        .forward(UpstreamCall::get("/users/me"))
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Transport(_)));
}

#[tokio::test]
async fn missing_credential_still_sends_the_request() {
    // deliberately never set
    let upstream = MockUpstream::start(|_| {
        (401, r#"{"errors":[{"message":"Not Authorized"}]}"#.to_string())
    })
    .await;
    let client = client_for(&upstream, "RELAY_TEST_TOKEN_NEVER_SET");

    let err = client
        .forward(UpstreamCall::get("/users/me"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Upstream API Error: 401 - Not Authorized"
    );
    // the call still went out, with an empty bearer credential
    assert_eq!(upstream.request_count(), 1);
    let received = upstream.received();
    assert_eq!(received[0].header("authorization"), Some("Bearer"));
}
