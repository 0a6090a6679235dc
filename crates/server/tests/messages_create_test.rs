mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

fn setup() -> TestServer {
    TestServer::new(common::create_test_app()).unwrap()
}

#[tokio::test]
async fn create_message_returns_stored_record() {
    let server = setup();

    let res = server
        .post("/api/chats/messages")
        .json(&json!({ "chatId": 5, "userOneId": 1, "userTwoId": 2, "text": "hey" }))
        .await;

    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body["chatId"], 5);
    assert_eq!(body["userOneId"], 1);
    assert_eq!(body["userTwoId"], 2);
    assert_eq!(body["text"], "hey");

    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn create_message_stamps_matching_timestamps() {
    let server = setup();

    let body = common::create_message(&server, json!({ "chatId": 5, "text": "t" })).await;

    let created_at = body["createdAt"].as_str().unwrap();
    let updated_at = body["updatedAt"].as_str().unwrap();
    assert_eq!(created_at, updated_at);
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn create_message_overrides_client_timestamps() {
    let server = setup();

    let body = common::create_message(
        &server,
        json!({
            "chatId": 5,
            "text": "t",
            "createdAt": "1999-12-31T23:59:59+00:00",
            "updatedAt": "1999-12-31T23:59:59+00:00"
        }),
    )
    .await;

    assert_ne!(body["createdAt"], "1999-12-31T23:59:59+00:00");
    assert_ne!(body["updatedAt"], "1999-12-31T23:59:59+00:00");
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn create_message_keeps_unknown_fields() {
    let server = setup();

    let body = common::create_message(
        &server,
        json!({ "chatId": 9, "text": "t", "priority": 3, "tags": ["a", "b"] }),
    )
    .await;

    assert_eq!(body["priority"], 3);
    assert_eq!(body["tags"], json!(["a", "b"]));

    // They survive storage, not just the echo.
    let res = server.get("/api/chats/9").await;
    let stored: serde_json::Value = res.json();
    assert_eq!(stored[0]["priority"], 3);
    assert_eq!(stored[0]["tags"], json!(["a", "b"]));
}

#[tokio::test]
async fn create_message_assigns_its_own_id() {
    let server = setup();

    let body = common::create_message(
        &server,
        json!({ "chatId": 6, "text": "t", "id": "spoofed", "_id": "also spoofed" }),
    )
    .await;

    let id = body["id"].as_str().unwrap();
    assert_ne!(id, "spoofed");
    assert_eq!(id.len(), 24);
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn create_message_accepts_empty_draft() {
    let server = setup();

    let body = common::create_message(&server, json!({})).await;

    assert!(body["id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
    assert!(body.get("chatId").is_none());
}

#[tokio::test]
async fn create_message_mistyped_field_stores_nothing() {
    let server = setup();

    let res = server
        .post("/api/chats/messages")
        .json(&json!({ "chatId": 11, "text": 42 }))
        .await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text(), "Failed to create message");

    // The rejected draft must not land.
    let res = server.get("/api/chats/11").await;
    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body, json!([]));

    // The chat stays usable for well-formed drafts.
    common::create_message(&server, json!({ "chatId": 11, "text": "ok" })).await;

    let res = server.get("/api/chats/11").await;
    res.assert_status_ok();
    let body: serde_json::Value = res.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["text"], "ok");
}
