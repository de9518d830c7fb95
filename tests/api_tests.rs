//! Integration tests for aircall-rs against a local mock server.
//!
//! Run with: cargo test --test api_tests
//!
//! Set `RUST_LOG=aircall_rs=debug` to see the dispatch log.

use std::sync::Once;
use std::time::{Duration, Instant};

use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aircall_rs::models::{CreateUpdateTag, NewUserCall};
use aircall_rs::prelude::*;
use aircall_rs::{DecodeTarget, Method};

static INIT: Once = Once::new();

const RETRY_DELAY: Duration = Duration::from_millis(50);

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Client pointed at the mock server, with a short retry pause.
fn client_for(server: &MockServer) -> AircallClient {
    init_logging();

    let config = ClientConfig::default()
        .with_base_url(format!("{}/v1/", server.uri()))
        .with_retry(RetryConfig::default().with_delay(RETRY_DELAY));

    AircallClient::with_config(config).expect("client")
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or_default()
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Item {
    id: i64,
}

// =============================================================================
// Dispatcher
// =============================================================================

#[tokio::test]
async fn test_server_error_is_retried_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items/1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/items/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut item = Item::default();

    let started = Instant::now();
    let response = client
        .get("items/1", None, Some(DecodeTarget::Json(&mut item)))
        .await
        .expect("second attempt succeeds");

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(item, Item { id: 1 });
    assert_eq!(request_count(&server).await, 2);
    assert!(started.elapsed() >= RETRY_DELAY);
}

#[tokio::test]
async fn test_transport_error_is_retried_and_surfaced() {
    init_logging();

    // Bind then drop a listener so nothing accepts on the port.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("local port")
        .port();

    let config = ClientConfig::default()
        .with_base_url(format!("http://127.0.0.1:{port}/v1/"))
        .with_retry(RetryConfig::default().with_delay(RETRY_DELAY));
    let client = AircallClient::with_config(config).expect("client");

    let started = Instant::now();
    let err = client
        .get::<Item>("items/1", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)), "got {err:?}");
    assert!(err.is_retryable());
    assert!(err.status().is_none());
    assert!(started.elapsed() >= RETRY_DELAY);
}

#[tokio::test]
async fn test_persistent_server_error_surfaces_last_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items/1"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "Service Unavailable"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut item = Item::default();

    let err = client
        .get("items/1", None, Some(DecodeTarget::Json(&mut item)))
        .await
        .unwrap_err();

    assert!(err.is_server_error());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    assert!(err.to_string().contains("503 Service Unavailable"));
    assert_eq!(request_count(&server).await, 2);
    assert_eq!(item, Item::default());
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items/1"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "bad request", "success": false})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get::<Item>("items/1", None, None)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("GET "));
    assert!(message.contains("400"));
    assert!(message.contains("bad request"));
    assert!(err.is_client_error());
    assert!(!err.is_retryable());
    assert_eq!(err.api_response().and_then(|e| e.success), Some(false));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_error_message_includes_troubleshoot_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/calls/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Not found",
            "troubleshoot": "Check the call id",
            "message": "Call not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.calls().get(9).await.unwrap_err();

    assert!(err
        .to_string()
        .ends_with("/v1/calls/9: 404 Not found [Check the call id] [Call not found]"));
}

#[tokio::test]
async fn test_undecodable_error_body_still_fails() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/tags/3"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>Forbidden</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.tags().delete(3).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
    assert!(err.to_string().starts_with("DELETE "));
}

#[tokio::test]
async fn test_empty_success_body_keeps_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/items/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut item = Item::default();

    client
        .get("items/1", None, Some(DecodeTarget::Json(&mut item)))
        .await
        .expect("empty body is success");

    assert_eq!(item, Item::default());
}

#[tokio::test]
async fn test_raw_target_receives_body_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/company"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"company\": {}}  "))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = client
        .new_request(Method::GET, "company", None, None::<&()>)
        .expect("request");

    let mut raw = Vec::new();
    client
        .execute(request, Some(DecodeTarget::raw(&mut raw)))
        .await
        .expect("raw decode");

    assert_eq!(raw, b"{\"company\": {}}  ");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_bearer_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/company"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "company": {"name": "Acme", "users_count": 4, "numbers_count": 2}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.authenticate("tok123");

    let company = client.company().get().await.expect("company");
    assert_eq!(company.name.as_deref(), Some("Acme"));
    assert_eq!(company.users_count, Some(4));
}

#[tokio::test]
async fn test_basic_credentials_header() {
    let server = MockServer::start().await;

    // base64("id:secret")
    Mock::given(method("GET"))
        .and(path("/v1/integrations/me"))
        .and(header("Authorization", "Basic aWQ6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "integration": {"name": "CRM", "active": true}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.authenticate_basic("id", "secret");

    let integration = client.integration().get().await.expect("integration");
    assert_eq!(integration.active, Some(true));
}

// =============================================================================
// Resource services
// =============================================================================

#[tokio::test]
async fn test_list_calls_sends_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/calls"))
        .and(query_param("order", "desc"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "20"))
        .and(query_param("fetch_contact", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"count": 1, "total": 1, "current_page": 1, "per_page": 20, "next_page_link": null},
            "calls": [{"id": 812, "direction": "inbound"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = ListCallsQuery::new()
        .order("desc")
        .paginate(1, 20)
        .fetch_contact(true);

    let calls = client.calls().list(Some(&query)).await.expect("calls");
    assert_eq!(calls.calls.len(), 1);
    assert_eq!(calls.calls[0].id, Some(812));
    assert_eq!(calls.meta.as_ref().and_then(|m| m.total), Some(1));
}

#[tokio::test]
async fn test_call_comment_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/calls/812/comments"))
        .and(body_json(json!({"content": "Called back"})))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.calls().comment(812, "Called back").await.expect("comment");
    assert_eq!(response.status.as_u16(), 201);
}

#[tokio::test]
async fn test_archive_call_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/calls/812/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "call": {"id": 812, "archived": true}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let call = client.calls().archive(812).await.expect("archive");
    assert_eq!(call.archived, Some(true));
}

#[tokio::test]
async fn test_dial_number_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/users/456/dial"))
        .and(body_json(json!({"number_id": 123, "to": "+33612345678"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .users()
        .dial_number(456, &NewUserCall::new(123, "+33612345678"))
        .await
        .expect("dial");
}

#[tokio::test]
async fn test_team_add_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/teams/7/users/456"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "team": {"id": 7, "name": "Support", "users": [{"id": 456}]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let team = client.teams().add_user(7, 456).await.expect("add user");

    assert_eq!(team.name.as_deref(), Some("Support"));
    assert_eq!(team.users.len(), 1);
}

#[tokio::test]
async fn test_update_tag() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/tags/3"))
        .and(body_json(json!({"name": "VIP", "color": "#00B388"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": {"id": 3, "name": "VIP", "color": "#00B388"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tag = client
        .tags()
        .update(3, &CreateUpdateTag::new("VIP", "#00B388"))
        .await
        .expect("update tag");

    assert_eq!(tag.id, Some(3));
}

#[tokio::test]
async fn test_enable_integration_with_install() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/integrations/enable"))
        .and(query_param("install", "true"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.integration().enable(true).await.expect("enable");
}

#[tokio::test]
async fn test_conversation_intelligence_summary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/calls/812/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": {"id": 1, "call_id": 812, "content": "Customer asked for a refund."}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let summary = client
        .conversation_intelligence()
        .summary(812)
        .await
        .expect("summary");

    assert_eq!(summary.content.as_deref(), Some("Customer asked for a refund."));
}

#[tokio::test]
async fn test_list_stream_follows_next_page_link() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"current_page": 1, "per_page": 2, "next_page_link": "https://api.aircall.io/v1/users?page=2&per_page=2"},
            "users": [{"id": 1}, {"id": 2}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"current_page": 2, "per_page": 2, "next_page_link": null},
            "users": [{"id": 3}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = ListUsersQuery::new().paginate(1, 2);

    let ids: Vec<Option<i64>> = client
        .users()
        .list_stream(Some(&query))
        .map(|user| user.expect("user").id)
        .collect()
        .await;

    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(request_count(&server).await, 2);
}

// =============================================================================
// Webhooks
// =============================================================================

#[test]
fn test_webhook_resource_check() {
    let event = InboundWebhook::from_slice(
        br#"{"resource":"call","event":"call.ended","timestamp":1585001000,"token":"t","data":{"id":812}}"#,
    )
    .expect("envelope");

    assert_eq!(event.call().expect("call").id, Some(812));
    assert!(matches!(
        event.user(),
        Err(Error::ResourceMismatch { expected: "user", .. })
    ));
}
