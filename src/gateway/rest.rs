//! REST resource handlers (`/api/...`).
//!
//! Pure adapters: decode the payload, call the shared store/context operation,
//! encode the result. Request bodies are decoded through [`tools::parse_params`]
//! so malformed payloads map to 400 exactly like tool-protocol invocations.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::with_conn;
use crate::gateway::error::ApiError;
use crate::gateway::AppState;
use crate::store::tasks::TaskPatch;
use crate::store::types::{Memory, Project, Task};
use crate::store::{memories, projects, tasks};
use crate::tools::add_memory::{self, AddMemoryParams};
use crate::tools::add_task::{self, AddTaskParams};
use crate::tools::{parse_params, ToolDescriptor};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "OK"}))
}

pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.registry.list().to_vec())
}

// ── Memories ──────────────────────────────────────────────────────────────────

pub async fn create_memory(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Memory>, ApiError> {
    let params: AddMemoryParams = parse_params(payload)?;
    let memory = with_conn(&state.db, move |conn| add_memory::run(conn, params)).await?;
    tracing::info!(id = %memory.id, "memory created");
    Ok(Json(memory))
}

pub async fn list_memories(State(state): State<AppState>) -> Result<Json<Vec<Memory>>, ApiError> {
    let all = with_conn(&state.db, |conn| memories::list(conn)).await?;
    Ok(Json(all))
}

pub async fn get_memory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Memory>, ApiError> {
    let memory = with_conn(&state.db, move |conn| memories::get(conn, &id)).await?;
    Ok(Json(memory))
}

pub async fn delete_memory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = id.clone();
    with_conn(&state.db, move |conn| memories::delete(conn, &id)).await?;
    tracing::info!(id = %deleted, "memory deleted");
    Ok(Json(json!({"deleted": true, "id": deleted})))
}

// ── Tasks ─────────────────────────────────────────────────────────────────────

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Task>, ApiError> {
    let params: AddTaskParams = parse_params(payload)?;
    let task = with_conn(&state.db, move |conn| add_task::run(conn, params)).await?;
    tracing::info!(id = %task.id, "task created");
    Ok(Json(task))
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let all = with_conn(&state.db, |conn| tasks::list(conn)).await?;
    Ok(Json(all))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = with_conn(&state.db, move |conn| tasks::get(conn, &id)).await?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Task>, ApiError> {
    let patch: TaskPatch = parse_params(payload)?;
    let task = with_conn(&state.db, move |conn| tasks::update(conn, &id, &patch)).await?;
    tracing::info!(id = %task.id, "task updated");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = id.clone();
    with_conn(&state.db, move |conn| tasks::delete(conn, &id)).await?;
    tracing::info!(id = %deleted, "task deleted");
    Ok(Json(json!({"deleted": true, "id": deleted})))
}

// ── Projects ──────────────────────────────────────────────────────────────────

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Project>, ApiError> {
    let request: CreateProjectRequest = parse_params(payload)?;
    let project = with_conn(&state.db, move |conn| {
        projects::create(conn, &request.name, request.description.as_deref().unwrap_or(""))
    })
    .await?;
    tracing::info!(id = %project.id, "project created");
    Ok(Json(project))
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let all = with_conn(&state.db, |conn| projects::list(conn)).await?;
    Ok(Json(all))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = with_conn(&state.db, move |conn| projects::get(conn, &id)).await?;
    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Project>, ApiError> {
    let patch: crate::store::projects::ProjectPatch = parse_params(payload)?;
    let project = with_conn(&state.db, move |conn| projects::update(conn, &id, &patch)).await?;
    tracing::info!(id = %project.id, "project updated");
    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = id.clone();
    with_conn(&state.db, move |conn| projects::delete(conn, &id)).await?;
    tracing::info!(id = %deleted, "project deleted");
    Ok(Json(json!({"deleted": true, "id": deleted})))
}
