//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: host bundle → Connector::perform → Strapi
//! REST calls → flattened JSON records

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use strapi_connector::{Bundle, Connector, ConnectorConfig, Credentials};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bundle(server: &MockServer, input: Value) -> Bundle {
    Bundle::new(
        Credentials::new(server.uri(), "test-token"),
        input.as_object().cloned().unwrap(),
    )
}

fn content_types_body() -> Value {
    json!({
        "data": [
            {
                "uid": "admin::permission",
                "plugin": "admin",
                "apiID": "permission",
                "schema": {
                    "kind": "collectionType",
                    "displayName": "Permission",
                    "pluralName": "permissions",
                    "visible": false,
                    "attributes": {}
                }
            },
            {
                "uid": "plugin::users-permissions.user",
                "plugin": "users-permissions",
                "apiID": "user",
                "schema": {
                    "kind": "collectionType",
                    "displayName": "User",
                    "pluralName": "users",
                    "visible": true,
                    "attributes": {"username": {"type": "string"}}
                }
            },
            {
                "uid": "api::article.article",
                "apiID": "article",
                "schema": {
                    "kind": "collectionType",
                    "displayName": "Article",
                    "pluralName": "articles",
                    "visible": true,
                    "attributes": {
                        "title": {"type": "string", "required": true},
                        "views": {"type": "integer"},
                        "body": {"type": "richtext"}
                    }
                }
            },
            {
                "uid": "api::homepage.homepage",
                "apiID": "homepage",
                "schema": {
                    "kind": "singleType",
                    "displayName": "Homepage",
                    "pluralName": "homepages",
                    "visible": true,
                    "attributes": {}
                }
            }
        ]
    })
}

async fn mount_content_types(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/content-type-builder/content-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_types_body()))
        .mount(server)
        .await;
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_auth_probe_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/content-type-builder/content-types"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_types_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let connector = Connector::new();
    let body = connector
        .test_auth(&bundle(&mock_server, json!({})))
        .await
        .unwrap();

    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_auth_probe_rejected_token() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"status": 401, "name": "UnauthorizedError", "message": "Missing or invalid credentials"}
        })))
        .mount(&mock_server)
        .await;

    let err = Connector::new()
        .test_auth(&bundle(&mock_server, json!({})))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "AuthenticationError");
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Missing or invalid credentials"));
}

#[tokio::test]
async fn test_auth_invalid_base_url_makes_no_request() {
    let bundle = Bundle::new(
        Credentials::new("cms.example.com", "token"),
        serde_json::Map::new(),
    );

    let err = Connector::new().test_auth(&bundle).await.unwrap_err();
    assert_eq!(err.kind(), "ValidationError");
}

// ============================================================================
// Content-Type Dropdown
// ============================================================================

#[tokio::test]
async fn test_content_types_keeps_only_api_collection_types() {
    let mock_server = MockServer::start().await;
    mount_content_types(&mock_server).await;

    let options = Connector::new()
        .perform("content_types", &bundle(&mock_server, json!({})))
        .await
        .unwrap();

    assert_eq!(options, json!([{"id": "articles", "label": "Article"}]));
}

#[tokio::test]
async fn test_content_type_schema_resource() {
    let mock_server = MockServer::start().await;
    mount_content_types(&mock_server).await;

    let detail = Connector::new()
        .perform(
            "content_type_schema",
            &bundle(&mock_server, json!({"contentType": "articles"})),
        )
        .await
        .unwrap();

    assert_eq!(detail["uid"], "api::article.article");
    assert_eq!(detail["kind"], "collectionType");
    let body = detail["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "body")
        .unwrap();
    assert_eq!(body["outputType"], "string");
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_entry_posts_data_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/article"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"data": {"title": "T", "description": "D"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 1,
                "attributes": {
                    "title": "T",
                    "description": "D",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "updatedAt": "2024-01-01T00:00:00.000Z",
                    "publishedAt": "2024-01-01T00:00:00.000Z"
                }
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = Connector::new()
        .perform(
            "create_entry",
            &bundle(
                &mock_server,
                json!({"contentType": "article", "fields": "{\"title\":\"T\",\"description\":\"D\"}"}),
            ),
        )
        .await
        .unwrap();

    assert_eq!(
        record,
        json!({
            "id": 1,
            "title": "T",
            "description": "D",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "publishedAt": "2024-01-01T00:00:00.000Z"
        })
    );
}

#[tokio::test]
async fn test_create_entry_advanced_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_content_types(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 3, "title": "Hello", "views": 5}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = Connector::new()
        .perform(
            "create_entry_advanced",
            &bundle(
                &mock_server,
                json!({"contentType": "articles", "title": "Hello", "views": "5", "published": "false"}),
            ),
        )
        .await
        .unwrap();

    assert_eq!(record["id"], 3);
    assert_eq!(record["views"], 5);

    let requests = mock_server.received_requests().await.unwrap();
    let post = requests.iter().find(|r| r.method.as_str() == "POST").unwrap();
    let body: Value = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(
        body,
        json!({"data": {"title": "Hello", "views": 5, "publishedAt": null}})
    );
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_find_entry_query_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[title][$containsi]", "hello"))
        .and(query_param("filters[description][$containsi]", "hello"))
        .and(query_param("pagination[pageSize]", "10"))
        .and(query_param("sort", "title:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "attributes": {"title": "hello world"}},
                {"id": 2, "attributes": {"title": "Hello again", "description": "second"}}
            ],
            "meta": {"pagination": {"page": 1, "pageSize": 10, "pageCount": 1, "total": 2}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = Connector::new()
        .perform(
            "find_entry",
            &bundle(
                &mock_server,
                json!({"contentType": "articles", "query": "hello", "params": "sort=title:asc"}),
            ),
        )
        .await
        .unwrap();

    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["description"], "second");
}

// ============================================================================
// Triggers
// ============================================================================

#[tokio::test]
async fn test_new_entry_trigger_returns_string_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("sort", "createdAt:desc"))
        .and(query_param("pagination[pageSize]", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 42, "attributes": {"title": "Newest", "createdAt": "2024-05-01T00:00:00.000Z"}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = Connector::new()
        .perform("new_entry", &bundle(&mock_server, json!({"contentType": "articles"})))
        .await
        .unwrap();

    assert_eq!(records[0]["id"], "42");
    assert_eq!(records[0]["createdAt"], "2024-05-01T00:00:00.000Z");
}

// ============================================================================
// Failure Classification
// ============================================================================

#[tokio::test]
async fn test_not_found_carries_request_url() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": {"status": 404, "name": "NotFoundError", "message": "Not Found"}
        })))
        .mount(&mock_server)
        .await;

    let err = Connector::new()
        .perform(
            "find_entry",
            &bundle(&mock_server, json!({"contentType": "articles"})),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "InvalidResponseError");
    let message = err.to_string();
    assert!(message.contains(&format!("{}/api/articles", mock_server.uri())));
    assert!(message.contains("Error: Not Found"));
}

#[tokio::test]
async fn test_unauthorized_on_every_entry_operation() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let connector = Connector::new();
    let cases = [
        ("new_entry", json!({"contentType": "articles"})),
        ("updated_entry", json!({"contentType": "articles"})),
        ("find_entry", json!({"contentType": "articles"})),
        ("create_entry", json!({"contentType": "articles", "fields": "{}"})),
        ("create_entry_advanced", json!({"contentType": "articles"})),
        ("content_types", json!({})),
    ];

    for (key, input) in cases {
        let err = connector
            .perform(key, &bundle(&mock_server, input))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "AuthenticationError", "{key}");
        assert!(err.to_string().contains("API token is invalid"), "{key}");
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = Connector::new()
        .perform("new_entry", &bundle(&mock_server, json!({"contentType": "articles"})))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "InvalidResponseError");
    assert!(err.to_string().contains("Strapi server error"));
}

#[tokio::test]
async fn test_unclassified_status_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"status": 400, "name": "ValidationError", "message": "title must be unique"}
        })))
        .mount(&mock_server)
        .await;

    let err = Connector::new()
        .perform(
            "create_entry",
            &bundle(&mock_server, json!({"contentType": "articles", "fields": "{\"title\":\"dup\"}"})),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UpstreamError");
    assert_eq!(err.status(), Some(400));
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_configured_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/content-type-builder/content-types"))
        .and(header("X-Tenant", "acme"))
        .and(header("User-Agent", "my-zap/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ConnectorConfig::from_yaml_str(
        "http:\n  user_agent: my-zap/2.0\n  headers:\n    X-Tenant: acme\n",
    )
    .unwrap();

    let options = Connector::with_config(config)
        .perform("content_types", &bundle(&mock_server, json!({})))
        .await
        .unwrap();
    assert_eq!(options, json!([]));
}
