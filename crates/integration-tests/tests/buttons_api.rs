//! End-to-end tests for the button endpoints.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use serde_json::json;

use buttons_integration_tests::{actor, create, send, test_app};

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_button() {
    let app = test_app();
    let creator = actor();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({
            "name": "Submit",
            "description": "Sends the form",
            "type": "PRIMARY",
            "createdBy": creator,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Button created successfully");
    assert_eq!(body["data"]["name"], "Submit");
    assert_eq!(body["data"]["type"], "PRIMARY");
    assert_eq!(body["data"]["status"], "ACTIVE");
    assert_eq!(body["data"]["createdBy"], creator);
    assert_eq!(body["data"]["message"], "Button created successfully");
    assert!(body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_create_defaults_type() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({ "name": "Plain", "createdBy": actor() })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], "DEFAULT");
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/buttons", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({ "name": "   ", "createdBy": actor() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Button name cannot be blank");
}

#[tokio::test]
async fn test_create_rejects_long_name_and_description() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({ "name": "x".repeat(101), "createdBy": actor() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({ "name": "Long", "description": "d".repeat(501), "createdBy": actor() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_duplicate_name() {
    let app = test_app();
    create(&app, "Submit", "PRIMARY", &actor()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({ "name": "Submit", "createdBy": actor() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Button with name 'Submit' already exists");
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/buttons",
        Some(json!({ "name": "Bad", "type": "GHOST", "createdBy": actor() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_get_button() {
    let app = test_app();
    let created = create(&app, "Submit", "PRIMARY", &actor()).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/buttons/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Submit");
}

#[tokio::test]
async fn test_get_missing_button() {
    let app = test_app();
    let missing = uuid::Uuid::new_v4();

    let (status, body) = send(&app, Method::GET, &format!("/api/buttons/{missing}"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert!(body["path"].is_null());
}

#[tokio::test]
async fn test_get_with_malformed_id() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/buttons/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_and_active() {
    let app = test_app();
    let who = actor();
    create(&app, "Submit", "PRIMARY", &who).await;
    let cancel = create(&app, "Cancel", "DANGER", &who).await;
    let id = cancel["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/buttons/{id}/status"),
        Some(json!({ "status": "INACTIVE", "updatedBy": who })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, all) = send(&app, Method::GET, "/api/buttons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let (status, active) = send(&app, Method::GET, "/api/buttons/active", None).await;
    assert_eq!(status, StatusCode::OK);
    let active = active["data"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "Submit");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_button() {
    let app = test_app();
    let created = create(&app, "Submit", "PRIMARY", &actor()).await;
    let id = created["id"].as_str().unwrap();
    let editor = actor();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/buttons/{id}"),
        Some(json!({
            "name": "Send",
            "description": "Sends it",
            "type": "SUCCESS",
            "updatedBy": editor,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Button updated successfully");
    assert_eq!(body["data"]["name"], "Send");
    assert_eq!(body["data"]["type"], "SUCCESS");
    assert_eq!(body["data"]["updatedBy"], editor);
    assert_eq!(body["data"]["message"], "Button updated successfully");

    let (_, fetched) = send(&app, Method::GET, &format!("/api/buttons/{id}"), None).await;
    assert_eq!(fetched["data"]["createdBy"], created["createdBy"]);
    assert_eq!(fetched["data"]["description"], "Sends it");
}

#[tokio::test]
async fn test_update_to_taken_name() {
    let app = test_app();
    let who = actor();
    create(&app, "Submit", "PRIMARY", &who).await;
    let other = create(&app, "Cancel", "DANGER", &who).await;
    let id = other["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/buttons/{id}"),
        Some(json!({ "name": "Submit", "updatedBy": who })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_button() {
    let app = test_app();
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/buttons/{missing}"),
        Some(json!({ "name": "Send", "updatedBy": actor() })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Status and delete
// =============================================================================

#[tokio::test]
async fn test_change_status_rejects_unknown_value() {
    let app = test_app();
    let created = create(&app, "Submit", "PRIMARY", &actor()).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/buttons/{id}/status"),
        Some(json!({ "status": "ARCHIVED", "updatedBy": actor() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_button() {
    let app = test_app();
    let created = create(&app, "Submit", "PRIMARY", &actor()).await;
    let id = created["id"].as_str().unwrap();
    let deleter = actor();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/buttons/{id}"),
        Some(json!({ "updatedBy": deleter })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["deletedBy"], deleter);
    assert_eq!(body["data"]["message"], "Button deleted successfully");
    assert!(body["data"]["deletedAt"].is_string());

    // Soft delete keeps the record readable
    let (status, body) = send(&app, Method::GET, &format!("/api/buttons/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "DELETED");
    assert_eq!(body["data"]["isDeleted"], true);
    assert_eq!(body["data"]["isActive"], false);

    // Activating a deleted button does not make it active again
    let (_, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/buttons/{id}/status"),
        Some(json!({ "status": "ACTIVE", "updatedBy": deleter })),
    )
    .await;
    assert_eq!(body["data"]["isActive"], false);
    assert_eq!(body["data"]["status"], "DELETED");
    assert!(body["data"]["deletedAt"].is_string());

    let (_, active) = send(&app, Method::GET, "/api/buttons/active", None).await;
    assert!(active["data"].as_array().unwrap().is_empty());
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search() {
    let app = test_app();
    let who = actor();
    for (name, kind) in [
        ("Submit", "PRIMARY"),
        ("Submit Draft", "SECONDARY"),
        ("Cancel", "DANGER"),
        ("Resubmit", "PRIMARY"),
    ] {
        create(&app, name, kind, &who).await;
    }

    let (status, body) = send(&app, Method::GET, "/api/buttons/search?name=submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalElements"], 3);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/buttons/search?type=PRIMARY&page=0&size=1",
        None,
    )
    .await;
    let data = &body["data"];
    assert_eq!(data["totalElements"], 2);
    assert_eq!(data["totalPages"], 2);
    assert_eq!(data["size"], 1);
    assert_eq!(data["first"], true);
    assert_eq!(data["last"], false);
    assert_eq!(data["empty"], false);
    assert_eq!(data["content"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_rejects_bad_size() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/buttons/search?size=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/buttons/search?size=101", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/buttons/search?page=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
