//! Request gateway: axum routing for the REST and tool-protocol surfaces.
//!
//! Both surfaces translate into the same store/context/registry operations —
//! the gateway carries no business logic of its own. Status conventions:
//! success 200, validation 400, missing entity or tool 404, anything
//! unexpected 500 with an opaque body.

pub mod error;
pub mod protocol;
pub mod rest;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::config::NeuroDockConfig;
use crate::db::Db;
use crate::tools::ToolRegistry;

/// Shared per-request state: the database handle, loaded configuration, and
/// the immutable tool registry built at bootstrap.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Arc<NeuroDockConfig>,
    pub registry: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(db: Db, config: Arc<NeuroDockConfig>) -> Self {
        Self {
            db,
            config,
            registry: Arc::new(ToolRegistry::new()),
        }
    }
}

/// Build the full HTTP surface: liveness, REST resources, and the
/// `/neuro-dock` tool protocol.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(rest::health))
        .route("/api/tools", get(rest::list_tools))
        .route("/api/memories", get(rest::list_memories).post(rest::create_memory))
        .route(
            "/api/memories/{id}",
            get(rest::get_memory).delete(rest::delete_memory),
        )
        .route("/api/tasks", get(rest::list_tasks).post(rest::create_task))
        .route(
            "/api/tasks/{id}",
            get(rest::get_task).put(rest::update_task).delete(rest::delete_task),
        )
        .route("/api/projects", get(rest::list_projects).post(rest::create_project))
        .route(
            "/api/projects/{id}",
            get(rest::get_project)
                .put(rest::update_project)
                .delete(rest::delete_project),
        )
        .route("/neuro-dock/memory", post(protocol::create_memory))
        .route("/neuro-dock/task", post(protocol::create_task))
        .route("/neuro-dock/context", post(protocol::context))
        .route("/neuro-dock/editor-context", post(protocol::editor_context))
        .route("/neuro-dock/tools", get(protocol::list_tools))
        .route("/neuro-dock/config", get(protocol::config))
        .with_state(state)
}
