//! Integration tests for the buttons API.
//!
//! Tests drive the real router in-process with `tower::ServiceExt::oneshot`
//! over the in-memory repository; no server or database is needed.
//!
//! ```bash
//! cargo test -p buttons-integration-tests
//! ```

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use buttons_api::AppState;
use buttons_core::InMemoryButtonRepository;

/// A router over a fresh in-memory store.
#[must_use]
pub fn test_app() -> Router {
    buttons_api::app(AppState::new(Arc::new(InMemoryButtonRepository::new())))
}

/// Send one request and return the status and parsed JSON body.
///
/// An empty body parses as `Value::Null`.
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not JSON.
#[allow(clippy::unwrap_used)]
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Create a button and return its `data` object.
///
/// # Panics
///
/// Panics if creation does not answer 201.
pub async fn create(app: &Router, name: &str, button_type: &str, actor: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/buttons",
        Some(serde_json::json!({
            "name": name,
            "type": button_type,
            "createdBy": actor,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create {name}: {body}");
    body["data"].clone()
}

/// A fresh actor ID as a string.
#[must_use]
pub fn actor() -> String {
    uuid::Uuid::new_v4().to_string()
}
