use rusqlite::Connection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::RankingConfig;
use crate::context::{self, EditorState, ScoredMemory};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetContextParams {
    #[schemars(description = "Free-text query to rank memories against. May be empty, which ranks by recency and type alone.")]
    #[serde(default)]
    pub query: String,

    #[schemars(description = "Maximum number of memories to return. Must be positive. Defaults to the configured bound.")]
    #[serde(default)]
    pub max_memories: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetEditorContextParams {
    #[schemars(description = "Free-text query to rank memories against. May be empty.")]
    #[serde(default)]
    pub query: String,

    #[schemars(description = "Maximum number of memories to return. Must be positive. Defaults to the configured bound.")]
    #[serde(default)]
    pub max_memories: Option<i64>,

    #[schemars(description = "Editor state: current file, cursor line, and open files. Memories referencing the same files are boosted.")]
    pub editor_state: EditorState,
}

/// Ranked context response returned by both context tools.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ContextResult {
    /// Memories in rank order, best first, at most `max_memories` of them.
    pub memories: Vec<ScoredMemory>,
    /// Number of memories returned.
    pub total: usize,
}

/// Shared implementation behind `POST /neuro-dock/context` and the
/// `get_context` MCP tool — the plain-query path, no editor boosts.
pub fn run(conn: &Connection, ranking: &RankingConfig, params: GetContextParams) -> Result<ContextResult> {
    let max = params.max_memories.unwrap_or(ranking.default_max_memories);
    let memories = context::resolve_context(conn, &params.query, max, None, ranking)?;
    Ok(ContextResult {
        total: memories.len(),
        memories,
    })
}

/// Shared implementation behind `POST /neuro-dock/editor-context` and the
/// `get_editor_context` MCP tool.
pub fn run_editor(
    conn: &Connection,
    ranking: &RankingConfig,
    params: GetEditorContextParams,
) -> Result<ContextResult> {
    let max = params.max_memories.unwrap_or(ranking.default_max_memories);
    let memories =
        context::resolve_context(conn, &params.query, max, Some(&params.editor_state), ranking)?;
    Ok(ContextResult {
        total: memories.len(),
        memories,
    })
}
