//! Integration tests for the API client request layer

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jibu_client::{ApiClient, ClientError, RequestOptions};
use jibu_core::{CredentialStore, MemoryCredentialStore, SessionListener};
use jibu_shared::ApiConfig;

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    data: String,
}

struct CountingListener {
    fired: AtomicUsize,
}

impl CountingListener {
    fn new() -> Self {
        Self {
            fired: AtomicUsize::new(0),
        }
    }

    fn count(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl SessionListener for CountingListener {
    fn on_session_expired(&self) {
        self.fired.fetch_add(1, Ordering::SeqCst);
    }
}

fn client(server: &MockServer, store: Arc<MemoryCredentialStore>) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()), store).expect("client construction")
}

#[tokio::test]
async fn successful_request_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-endpoint"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": "test"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let result: Payload = client.get("test-endpoint").await.expect("request");
    assert_eq!(result.data, "test");
}

#[tokio::test]
async fn request_sends_bearer_token_when_stored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_token("test-token"));
    let client = client(&server, store);
    let result: Payload = client.get("secure").await.expect("request");
    assert_eq!(result.data, "ok");
}

#[tokio::test]
async fn request_omits_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": "ok"})))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let _: Payload = client.get("open").await.expect("request");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn non_2xx_response_is_normalized_into_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-endpoint"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "message": "Error message",
            "code": "ERROR_CODE"
        })))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let err = client
        .get::<Payload>("test-endpoint")
        .await
        .expect_err("must fail");

    let api_error = err.as_api_error().expect("structured error");
    assert_eq!(api_error.message, "Error message");
    assert_eq!(api_error.code, "ERROR_CODE");
    assert_eq!(api_error.status, 400);
    assert!(api_error.details.is_none());
}

#[tokio::test]
async fn error_fields_fall_back_when_body_omits_them() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let err = client.get::<Payload>("broken").await.expect_err("must fail");

    let api_error = err.as_api_error().expect("structured error");
    assert_eq!(api_error.message, "An error occurred");
    assert_eq!(api_error.code, "UNKNOWN_ERROR");
    assert_eq!(api_error.status, 500);
}

#[tokio::test]
async fn unauthorized_clears_token_and_notifies_listener_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secure"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Unauthorized"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_token("stale-token"));
    let listener = Arc::new(CountingListener::new());
    let client = client(&server, store.clone());
    client.add_session_listener(listener.clone());

    let err = client.get::<Payload>("secure").await.expect_err("must fail");

    assert!(matches!(err, ClientError::Unauthorized));
    assert!(store.get().is_none());
    assert_eq!(listener.count(), 1);
}

#[tokio::test]
async fn unauthorized_handling_ignores_unparseable_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secure"))
        .respond_with(ResponseTemplate::new(401).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_token("stale-token"));
    let client = client(&server, store.clone());

    let err = client.get::<Payload>("secure").await.expect_err("must fail");
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(store.get().is_none());
}

#[tokio::test]
async fn non_json_success_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let err = client.get::<Payload>("html").await.expect_err("must fail");
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn form_request_posts_url_encoded_fields_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/test-endpoint"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("key1=value1&key2=value2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let fields = [("key1", "value1"), ("key2", "value2")];
    let result: Payload = client
        .post_form("test-endpoint", &fields)
        .await
        .expect("request");
    assert_eq!(result.data, "ok");
}

#[tokio::test]
async fn form_request_method_can_be_overridden() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/form-put"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemoryCredentialStore::new()));
    let fields = [("key", "value")];
    let options = RequestOptions::new().with_method(reqwest::Method::PUT);
    let result: Payload = client
        .request_form("form-put", &fields, options)
        .await
        .expect("request");
    assert_eq!(result.data, "ok");
}

#[tokio::test]
async fn transport_failure_is_reported_not_retried() {
    // Point at a server that is already gone. Wiremock pools its servers, so
    // a dropped MockServer's port stays bound; reserve a fresh port from the
    // OS and release it to get an address nothing is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let uri = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let store = Arc::new(MemoryCredentialStore::new());
    let client = ApiClient::new(ApiConfig::new(uri), store).expect("client construction");

    let err = client.get::<Payload>("down").await.expect_err("must fail");
    assert!(matches!(err, ClientError::Transport(_)));
}
