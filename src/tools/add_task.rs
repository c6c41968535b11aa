use rusqlite::Connection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::tasks;
use crate::store::types::{Task, TaskStatus};

/// Priority assigned when the caller does not provide one (middle of the 1–5 scale).
pub const DEFAULT_PRIORITY: i64 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AddTaskParams {
    #[schemars(description = "Short imperative title of the task")]
    pub title: String,

    #[schemars(description = "Longer free-form description. Defaults to empty.")]
    #[serde(default)]
    pub description: Option<String>,

    #[schemars(description = "Urgency on the 1-5 scale, 1 = most urgent. Defaults to 3.")]
    #[serde(default)]
    pub priority: Option<i64>,

    #[schemars(description = "Optional id of the project this task belongs to. Not checked for existence.")]
    #[serde(default)]
    pub project_id: Option<String>,

    #[schemars(description = "Lifecycle state: 'open', 'in_progress', or 'done'. Defaults to 'open'.")]
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Shared implementation behind `POST /api/tasks`, `POST /neuro-dock/task`,
/// and the `add_task` MCP tool.
pub fn run(conn: &Connection, params: AddTaskParams) -> Result<Task> {
    tasks::create(
        conn,
        &params.title,
        params.description.as_deref().unwrap_or(""),
        params.priority.unwrap_or(DEFAULT_PRIORITY),
        params.project_id.as_deref(),
        params.status.unwrap_or_default(),
    )
}
