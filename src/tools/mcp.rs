//! MCP handler exposing the registry's tools over stdio.
//!
//! Each tool delegates to the same shared operation the HTTP surfaces call,
//! so an MCP client and a REST client produce indistinguishable stored state.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use std::sync::Arc;

use crate::config::NeuroDockConfig;
use crate::db::{self, Db};
use crate::tools::add_memory::{self, AddMemoryParams};
use crate::tools::add_task::{self, AddTaskParams};
use crate::tools::get_context::{self, GetContextParams, GetEditorContextParams};

/// The NeuroDock MCP tool handler. Holds shared state (db connection, config)
/// and exposes all MCP tools via the `#[tool_router]` macro.
#[derive(Clone)]
pub struct NeuroDockTools {
    tool_router: ToolRouter<Self>,
    db: Db,
    config: Arc<NeuroDockConfig>,
}

#[tool_router]
impl NeuroDockTools {
    pub fn new(db: Db, config: Arc<NeuroDockConfig>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            db,
            config,
        }
    }

    /// Store a new memory record.
    #[tool(description = "Store a new memory. Types: normal (notes), reference (docs/code pointers), insight (learned conclusions), decision (recorded decisions).")]
    async fn add_memory(
        &self,
        Parameters(params): Parameters<AddMemoryParams>,
    ) -> Result<String, String> {
        tracing::info!(content_len = params.content.len(), "add_memory called");

        let memory = db::with_conn(&self.db, move |conn| add_memory::run(conn, params))
            .await
            .map_err(|e| e.to_string())?;

        tracing::info!(id = %memory.id, "memory stored");
        serde_json::to_string(&memory).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Create a new task record.
    #[tool(description = "Create a task with a title, optional description, 1-5 priority (1 = most urgent), and optional project reference.")]
    async fn add_task(
        &self,
        Parameters(params): Parameters<AddTaskParams>,
    ) -> Result<String, String> {
        tracing::info!(title = %params.title, "add_task called");

        let task = db::with_conn(&self.db, move |conn| add_task::run(conn, params))
            .await
            .map_err(|e| e.to_string())?;

        tracing::info!(id = %task.id, "task created");
        serde_json::to_string(&task).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Rank stored memories against a query.
    #[tool(description = "Return the stored memories most relevant to a free-text query, best first.")]
    async fn get_context(
        &self,
        Parameters(params): Parameters<GetContextParams>,
    ) -> Result<String, String> {
        tracing::info!(query = %params.query, "get_context called");

        let config = Arc::clone(&self.config);
        let result = db::with_conn(&self.db, move |conn| {
            get_context::run(conn, &config.ranking, params)
        })
        .await
        .map_err(|e| e.to_string())?;

        serde_json::to_string(&result).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Rank stored memories against a query plus editor state.
    #[tool(description = "Return the stored memories most relevant to a query and the caller's editor state (current file, open files).")]
    async fn get_editor_context(
        &self,
        Parameters(params): Parameters<GetEditorContextParams>,
    ) -> Result<String, String> {
        tracing::info!(query = %params.query, file = %params.editor_state.file, "get_editor_context called");

        let config = Arc::clone(&self.config);
        let result = db::with_conn(&self.db, move |conn| {
            get_context::run_editor(conn, &config.ranking, params)
        })
        .await
        .map_err(|e| e.to_string())?;

        serde_json::to_string(&result).map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for NeuroDockTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "NeuroDock is a cognitive assistant backend. Use add_memory to save memories, \
                 add_task to record work items, and get_context to retrieve relevant memories."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
