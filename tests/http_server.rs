//! End-to-end tests through the axum host adapter.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower::ServiceExt;
use waypost::config::ServerConfig;
use waypost::dispatch::{Dispatcher, DomainError, HandlerError, ResponseEnvelope};
use waypost::http::HttpServer;
use waypost::routing::RouteTable;

#[derive(Debug, Serialize, Deserialize)]
struct Item {
    name: String,
    #[serde(with = "waypost::codec::timestamp")]
    created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize)]
struct StoredItem {
    id: u64,
    name: String,
    #[serde(with = "waypost::codec::timestamp")]
    created_at: DateTime<FixedOffset>,
}

/// Build the application under test.
fn test_app() -> axum::Router {
    let mut table = RouteTable::new();

    table
        .get("/test.html", |_params| {
            Ok(ResponseEnvelope::with_payload("just a test"))
        })
        .unwrap();

    table
        .post("/items", |item: Option<Item>, _params| {
            let item = item.ok_or_else(|| HandlerError::internal("missing body"))?;
            Ok(ResponseEnvelope::with_payload(StoredItem {
                id: 1,
                name: item.name,
                created_at: item.created_at,
            }))
        })
        .unwrap();

    table
        .get(
            "/users/:id",
            |params| -> Result<ResponseEnvelope<()>, HandlerError> {
                let _id = params.get("id").unwrap_or_default();
                Err(DomainError::new(404)
                    .with_payload(json!({"error": "not found"}))
                    .into())
            },
        )
        .unwrap();

    let dispatcher = Arc::new(Dispatcher::new(table));
    HttpServer::new(ServerConfig::default(), dispatcher).router()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_static_string_route() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/test.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_bytes(response).await, br#""just a test""#);
}

#[tokio::test]
async fn test_post_item_created() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"a","created_at":"2026-08-07T09:30:12.345+0000"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        json!({"id": 1, "name": "a", "created_at": "2026-08-07T09:30:12.345+0000"})
    );
}

#[tokio::test]
async fn test_domain_error_surfaces_as_json() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/users/9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({"error": "not found"}));
}

#[tokio::test]
async fn test_malformed_body_is_plain_text_500() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/items")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("failed to decode request body"));
}

#[tokio::test]
async fn test_unmatched_request_gets_host_default() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nowhere")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, b"No matching route found");
}

#[tokio::test]
async fn test_trailing_slash_is_a_different_path() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/test.html/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Falls through to the host default; the route table never matched.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, b"No matching route found");
}
