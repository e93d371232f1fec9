//! Tests for the HTTP module

use super::middleware::{after_receive, before_send, upstream_error_message, ResponseContext};
use super::*;
use crate::auth::Credentials;
use crate::error::Error;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(Credentials::new(server.uri(), "test-token")).unwrap()
}

// ============================================================================
// Query params
// ============================================================================

#[test]
fn test_query_params_override_keeps_position() {
    let mut params = QueryParams::listing_defaults();
    params.set("sort", "updatedAt:desc");
    params.set("populate", "*");

    assert_eq!(
        params.as_slice(),
        &[
            ("pagination[pageSize]".to_string(), "100".to_string()),
            ("sort".to_string(), "updatedAt:desc".to_string()),
            ("populate".to_string(), "*".to_string()),
        ]
    );
}

#[test]
fn test_query_params_parse_raw() {
    let params =
        QueryParams::parse_raw("populate[author]=*&filters[status][$eq]=published").unwrap();
    assert_eq!(params.get("populate[author]"), Some("*"));
    assert_eq!(params.get("filters[status][$eq]"), Some("published"));
}

#[test]
fn test_query_params_parse_raw_decodes_and_strips_question_mark() {
    let params = QueryParams::parse_raw("?filters%5Btitle%5D%5B%24eq%5D=Hello+World").unwrap();
    assert_eq!(params.get("filters[title][$eq]"), Some("Hello World"));
}

#[test]
fn test_query_params_parse_raw_key_without_value() {
    let params = QueryParams::parse_raw("populate[transaction]").unwrap();
    assert_eq!(params.get("populate[transaction]"), Some(""));
}

#[test]
fn test_query_params_parse_raw_last_duplicate_wins() {
    let params = QueryParams::parse_raw("sort=title:asc&sort=id:desc").unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("sort"), Some("id:desc"));
}

#[test]
fn test_query_params_merge() {
    let mut params = QueryParams::listing_defaults();
    params.merge(QueryParams::new().with("pagination[pageSize]", "5"));
    assert_eq!(params.get("pagination[pageSize]"), Some("5"));
    assert_eq!(params.get("sort"), Some("createdAt:desc"));
}

#[test]
fn test_query_params_to_json() {
    let params = QueryParams::new().with("sort", "id:asc");
    assert_eq!(params.to_json(), json!({"sort": "id:asc"}));
}

// ============================================================================
// Middleware
// ============================================================================

#[test]
fn test_before_send_injects_bearer_and_keeps_other_headers() {
    let mut headers = HeaderMap::new();
    headers.insert("x-request-id", HeaderValue::from_static("abc"));

    before_send(&mut headers, &Credentials::new("https://cms.example.com", "tok")).unwrap();

    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get("x-request-id").unwrap(), "abc");
}

#[test]
fn test_before_send_without_token_leaves_headers_alone() {
    let mut headers = HeaderMap::new();
    before_send(&mut headers, &Credentials::new("https://cms.example.com", "")).unwrap();
    assert!(headers.is_empty());
}

#[test_case(401, "AuthenticationError" ; "unauthorized")]
#[test_case(403, "AuthenticationError" ; "forbidden")]
#[test_case(404, "InvalidResponseError" ; "not found")]
#[test_case(500, "InvalidResponseError" ; "internal error")]
#[test_case(503, "InvalidResponseError" ; "unavailable")]
fn test_after_receive_classifies(status: u16, kind: &str) {
    let params = QueryParams::new();
    let ctx = ResponseContext {
        url: "https://cms.example.com/api/articles",
        params: &params,
        body: "",
    };
    let err = after_receive(StatusCode::from_u16(status).unwrap(), &ctx).unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.status(), Some(status));
    assert!(err.to_string().contains("https://cms.example.com/api/articles"));
}

#[test_case(200 ; "ok")]
#[test_case(201 ; "created")]
#[test_case(400 ; "bad request")]
#[test_case(429 ; "too many requests")]
fn test_after_receive_passes_unclassified(status: u16) {
    let params = QueryParams::new();
    let ctx = ResponseContext {
        url: "https://cms.example.com/api/articles",
        params: &params,
        body: "",
    };
    assert!(after_receive(StatusCode::from_u16(status).unwrap(), &ctx).is_ok());
}

#[test]
fn test_failure_message_uses_upstream_error_then_fallback() {
    let params = QueryParams::new().with("sort", "id:asc");
    let ctx = ResponseContext {
        url: "https://cms.example.com/api/articles",
        params: &params,
        body: r#"{"data":null,"error":{"status":403,"message":"Forbidden"}}"#,
    };
    let err = after_receive(StatusCode::FORBIDDEN, &ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "URL: https://cms.example.com/api/articles\nParams: {\"sort\":\"id:asc\"}\nError: Forbidden"
    );

    let ctx = ResponseContext { body: "", ..ctx };
    let err = after_receive(StatusCode::UNAUTHORIZED, &ctx).unwrap_err();
    assert!(err
        .to_string()
        .ends_with("Error: Your API token is invalid or has expired. Please check your Strapi API token."));
}

#[test]
fn test_upstream_error_message() {
    assert_eq!(
        upstream_error_message(r#"{"error":{"message":"Invalid key"}}"#),
        Some("Invalid key".to_string())
    );
    assert_eq!(upstream_error_message("<html>"), None);
    assert_eq!(upstream_error_message(r#"{"error":{}}"#), None);
}

// ============================================================================
// Client
// ============================================================================

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_request_sends_auth_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("sort", "createdAt:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body: serde_json::Value = client
        .get_json("/api/articles", QueryParams::new().with("sort", "createdAt:desc"))
        .await
        .unwrap();

    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_request_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(body_json(json!({"data": {"title": "T"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 1}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .request(
            Method::POST,
            "/api/articles",
            RequestConfig::new().json(json!({"data": {"title": "T"}})),
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_request_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(header("X-Tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().header("X-Tenant", "acme").build();
    let client =
        HttpClient::with_config(Credentials::new(mock_server.uri(), "test-token"), config).unwrap();
    client
        .request(Method::GET, "/api/articles", RequestConfig::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_404_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": {"status": 404, "name": "NotFoundError", "message": "Not Found"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(Method::GET, "/api/missing", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidResponse { status: 404, .. }));
    assert!(err
        .to_string()
        .contains(&format!("{}/api/missing", mock_server.uri())));
    assert!(err.to_string().contains("Error: Not Found"));
}

#[tokio::test]
async fn test_request_unclassified_status_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "data": null,
            "error": {"status": 400, "name": "ValidationError", "message": "title must be defined"}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(Method::POST, "/api/articles", RequestConfig::new().json(json!({"data": {}})))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Upstream { status: 400, .. }));
    assert!(err.to_string().contains("title must be defined"));
}

#[tokio::test]
async fn test_request_json_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/api/articles", QueryParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "ParseError");
}

#[tokio::test]
async fn test_request_base_url_without_scheme() {
    let client = HttpClient::new(Credentials::new("cms.example.com", "test-token")).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/api/articles", QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
}
