use rusqlite::Connection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::memories;
use crate::store::types::{Memory, MemoryType};

/// Source recorded when the caller does not name one.
pub const DEFAULT_SOURCE: &str = "unknown";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AddMemoryParams {
    #[schemars(description = "The natural language content of the memory")]
    pub content: String,

    #[schemars(
        description = "Memory type: 'normal' (notes), 'reference' (pointers to docs/code), 'insight' (learned conclusions), 'decision' (recorded decisions). Defaults to 'normal'."
    )]
    #[serde(default)]
    pub r#type: Option<MemoryType>,

    #[schemars(description = "Provenance of the memory, e.g. a client name. Defaults to 'unknown'.")]
    #[serde(default)]
    pub source: Option<String>,
}

/// Shared implementation behind `POST /api/memories`, `POST /neuro-dock/memory`,
/// and the `add_memory` MCP tool.
pub fn run(conn: &Connection, params: AddMemoryParams) -> Result<Memory> {
    let memory_type = params.r#type.unwrap_or_default();
    let source = params.source.as_deref().unwrap_or(DEFAULT_SOURCE);
    memories::create(conn, &params.content, memory_type, source)
}
