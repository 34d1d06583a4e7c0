//! Unit tests for the request layer.

use super::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn requests_for(server: &MockServer) -> HttpRequests {
    HttpRequests::new(Config::new(server.uri()).unwrap()).unwrap()
}

// ============================================================================
// Query Helper Tests
// ============================================================================

#[test]
fn test_with_query_appends_params() {
    let query = crate::types::DocumentsQuery {
        offset: None,
        limit: Some(3),
        attributes_to_retrieve: None,
    };

    let path = with_query("indexes/movies/documents", &query).unwrap();
    assert_eq!(path, "indexes/movies/documents?limit=3");
}

#[test]
fn test_with_query_empty_leaves_path() {
    let query = crate::types::DocumentsQuery::default();

    let path = with_query("indexes/movies/documents", &query).unwrap();
    assert_eq!(path, "indexes/movies/documents");
}

// ============================================================================
// Response Handling Tests
// ============================================================================

#[tokio::test]
async fn test_get_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pkgVersion": "0.9.0" })))
        .expect(1)
        .mount(&server)
        .await;

    let value: Value = requests_for(&server).get("version").await.unwrap();

    assert_eq!(value["pkgVersion"], "0.9.0");
}

#[tokio::test]
async fn test_empty_body_decodes_as_unit() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/movies"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result: Result<(), Error> = requests_for(&server).delete("indexes/movies").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_body_decodes_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value: Option<Value> = requests_for(&server).get("health").await.unwrap();

    assert!(value.is_none());
}

#[tokio::test]
async fn test_non_success_yields_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keys"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let err = requests_for(&server)
        .get::<Value>("keys")
        .await
        .unwrap_err();

    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Invalid API key");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_yields_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = requests_for(&server)
        .get::<Value>("stats")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_connection_failure_yields_transport_error() {
    // Port 9 (discard) is not expected to be listening.
    let requests = HttpRequests::new(Config::new("http://127.0.0.1:9").unwrap()).unwrap();

    let err = requests.get::<Value>("health").await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

// ============================================================================
// Status-Only Tests
// ============================================================================

#[tokio::test]
async fn test_get_empty_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let result = requests_for(&server).get_empty("health").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_put_empty_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/health"))
        .and(body_json(json!({ "health": true })))
        .respond_with(ResponseTemplate::new(202).set_body_string("accepted"))
        .expect(1)
        .mount(&server)
        .await;

    let body = crate::types::HealthUpdate { health: true };
    let result = requests_for(&server).put_empty("health", Some(&body)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_empty_non_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/movies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let err = requests_for(&server)
        .delete_empty("indexes/movies")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http { status: 500, ref body } if body == "internal"));
}

// ============================================================================
// Request Building Tests
// ============================================================================

#[tokio::test]
async fn test_put_serializes_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/health"))
        .and(body_json(json!({ "health": false })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let body = crate::types::HealthUpdate { health: false };
    let result: Result<(), Error> = requests_for(&server).put("health", Some(&body)).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_api_key_header_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keys"))
        .and(header("X-Meili-API-Key", "masterKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new(server.uri()).unwrap().with_api_key("masterKey");
    let requests = HttpRequests::new(config).unwrap();
    let keys: Vec<Value> = requests.get("keys").await.unwrap();

    assert!(keys.is_empty());
}

#[tokio::test]
async fn test_api_key_header_absent_without_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let requests = requests_for(&server);
    let _: Value = requests.get("version").await.unwrap();
    let _: Value = requests.get("sys-info").await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    for request in received {
        assert!(!request.headers.contains_key("x-meili-api-key"));
    }
}
