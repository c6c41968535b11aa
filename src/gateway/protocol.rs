//! Tool-protocol handlers (`/neuro-dock/...`).
//!
//! The POST endpoints dispatch through [`ToolRegistry::invoke`] rather than
//! calling the operations directly, so every request is validated against the
//! tool's declared input schema — the same path an AI client takes after
//! discovering the tools.

use axum::extract::State;
use axum::response::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::db::with_conn;
use crate::gateway::error::ApiError;
use crate::gateway::AppState;
use crate::tools::{RegistryConfig, ToolDescriptor, ToolRegistry};

async fn invoke(state: AppState, name: &'static str, payload: Value) -> Result<Json<Value>, ApiError> {
    let registry: Arc<ToolRegistry> = Arc::clone(&state.registry);
    let config = Arc::clone(&state.config);
    let result = with_conn(&state.db, move |conn| {
        registry.invoke(conn, &config, name, payload)
    })
    .await?;
    Ok(Json(result))
}

pub async fn create_memory(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    invoke(state, "add_memory", payload).await
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    invoke(state, "add_task", payload).await
}

pub async fn context(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    invoke(state, "get_context", payload).await
}

pub async fn editor_context(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    invoke(state, "get_editor_context", payload).await
}

pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.registry.list().to_vec())
}

pub async fn config(State(state): State<AppState>) -> Json<RegistryConfig> {
    Json(state.registry.config())
}
