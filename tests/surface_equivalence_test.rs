//! The REST surface and the `/neuro-dock` tool protocol must be
//! operation-equivalent: the same logical call through either produces
//! indistinguishable stored state.

mod helpers;

use axum::http::StatusCode;
use helpers::{get, post, test_router};
use serde_json::json;

#[tokio::test]
async fn memory_created_via_protocol_is_readable_via_rest() {
    let app = test_router();

    let (status, created) = post(
        &app,
        "/neuro-dock/memory",
        json!({"content": "deploy staging", "type": "decision", "source": "agent"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().expect("id is a JSON string");

    let (status, fetched) = get(&app, &format!("/api/memories/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn memory_created_via_rest_is_visible_to_protocol_context() {
    let app = test_router();

    let (status, created) = post(
        &app,
        "/api/memories",
        json!({"content": "rotate the signing keys"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, context) = post(
        &app,
        "/neuro-dock/context",
        json!({"query": "signing keys", "max_memories": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let memories = context["memories"].as_array().unwrap();
    assert_eq!(memories.len(), 1);
    assert_eq!(memories[0]["id"], created["id"]);
    assert_eq!(memories[0]["content"], "rotate the signing keys");
}

#[tokio::test]
async fn task_created_via_protocol_matches_rest_created_shape() {
    let app = test_router();

    let (status, via_protocol) = post(
        &app,
        "/neuro-dock/task",
        json!({"title": "ship release", "priority": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, via_rest) = post(
        &app,
        "/api/tasks",
        json!({"title": "ship release", "priority": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Same defaults applied on both paths; only store-assigned fields differ
    for field in ["title", "description", "priority", "status", "project_id"] {
        assert_eq!(via_protocol[field], via_rest[field], "field {field} diverged");
    }
}

#[tokio::test]
async fn protocol_context_scenario_matches_engine_contract() {
    let app = test_router();

    for content in ["deploy staging", "fix login bug", "deploy staging again"] {
        let (status, _) = post(&app, "/neuro-dock/memory", json!({"content": content})).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, context) = post(
        &app,
        "/neuro-dock/context",
        json!({"query": "deploy", "max_memories": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let memories = context["memories"].as_array().unwrap();
    assert_eq!(memories.len(), 2);
    assert_eq!(memories[0]["content"], "deploy staging again");
    assert_eq!(memories[1]["content"], "deploy staging");
}

#[tokio::test]
async fn editor_context_boosts_file_matches_without_changing_plain_path() {
    let app = test_router();

    // Older note references the file, newer one does not.
    let (_, file_note) = post(
        &app,
        "/neuro-dock/memory",
        json!({"content": "token refresh lives in src/auth/login.rs"}),
    )
    .await;
    std::thread::sleep(std::time::Duration::from_millis(2));
    let (_, plain_note) = post(
        &app,
        "/neuro-dock/memory",
        json!({"content": "general release notes"}),
    )
    .await;

    // Plain path with an empty query: recency alone ranks the newer note first
    let (status, plain) = post(
        &app,
        "/neuro-dock/context",
        json!({"query": "", "max_memories": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain["memories"][0]["id"], plain_note["id"]);

    // Editor path with the matching file: the boost flips the order
    let (status, boosted) = post(
        &app,
        "/neuro-dock/editor-context",
        json!({
            "query": "",
            "max_memories": 2,
            "editor_state": {"file": "src/auth/login.rs", "cursor": 12, "open_files": []}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(boosted["memories"][0]["id"], file_note["id"]);
}

#[tokio::test]
async fn protocol_zero_bound_is_400() {
    let app = test_router();
    let (status, body) = post(
        &app,
        "/neuro-dock/context",
        json!({"query": "anything", "max_memories": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn protocol_unknown_payload_field_is_400() {
    let app = test_router();
    let (status, body) = post(
        &app,
        "/neuro-dock/memory",
        json!({"content": "x", "tags": ["deploy"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn protocol_tools_and_config_report_registry_state() {
    let app = test_router();

    let (status, tools) = get(&app, "/neuro-dock/tools").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tools.as_array().unwrap().len(), 4);

    let (status, config) = get(&app, "/neuro-dock/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["tool_count"], 4);
    assert_eq!(config["schema_version"], "1.0");
    assert_eq!(config["capabilities"]["editor_context"], true);

    // The two discovery endpoints list the same catalog
    let (_, api_tools) = get(&app, "/api/tools").await;
    assert_eq!(tools, api_tools);
}
