#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use neurodock::config::NeuroDockConfig;
use neurodock::db;
use neurodock::gateway::{self, AppState};
use neurodock::store::memories;
use neurodock::store::types::{Memory, MemoryType};
use rusqlite::Connection;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    db::open_memory_database().unwrap()
}

/// Build an app state over a fresh in-memory database and default config.
pub fn test_state() -> AppState {
    let conn = test_db();
    AppState::new(
        Arc::new(Mutex::new(conn)),
        Arc::new(NeuroDockConfig::default()),
    )
}

/// Full router over a fresh in-memory database.
pub fn test_router() -> Router {
    gateway::router(test_state())
}

/// Insert a memory directly via the store. Returns the stored record.
///
/// Sleeps briefly first so consecutive inserts get distinct creation
/// timestamps and ordering assertions are exact.
pub fn insert_memory(conn: &Connection, content: &str, memory_type: MemoryType) -> Memory {
    std::thread::sleep(std::time::Duration::from_millis(2));
    memories::create(conn, content, memory_type, "test").unwrap()
}

/// Drive the router with a single request and decode the JSON response.
pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    request(app, "GET", path, None).await
}

pub async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", path, Some(body)).await
}

pub async fn put(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PUT", path, Some(body)).await
}

pub async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    request(app, "DELETE", path, None).await
}
