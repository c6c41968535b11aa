//! Tool registry: the catalog of callable operations exposed for discovery.
//!
//! Built once at process start and shared by reference afterwards — nothing
//! mutates it during request handling, so the hot read path needs no
//! synchronization. Every handler delegates to the same store/context
//! operations the REST surface uses; no tool carries logic of its own.

pub mod add_memory;
pub mod add_task;
pub mod get_context;
pub mod mcp;

use rusqlite::Connection;
use schemars::{schema_for, Schema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::NeuroDockConfig;
use crate::error::{Error, Result};
use crate::store::types::{Memory, Task};

use add_memory::AddMemoryParams;
use add_task::AddTaskParams;
use get_context::{ContextResult, GetContextParams, GetEditorContextParams};

/// Version of the tool-protocol schema reported by `get_config`.
pub const PROTOCOL_VERSION: &str = "1.0";

/// A registered tool: name, human description, and JSON Schemas for its
/// input payload and output value.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Schema,
    pub output_schema: Schema,
}

/// Registry configuration snapshot returned by `GET /neuro-dock/config`.
#[derive(Debug, Serialize)]
pub struct RegistryConfig {
    pub tool_count: usize,
    pub schema_version: &'static str,
    pub capabilities: Capabilities,
}

#[derive(Debug, Serialize)]
pub struct Capabilities {
    pub memories: bool,
    pub tasks: bool,
    pub context: bool,
    pub editor_context: bool,
}

/// The immutable tool catalog. Construct once during bootstrap.
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let tools = vec![
            ToolDescriptor {
                name: "add_memory",
                description: "Store a new memory. Types: normal (notes), reference (docs/code pointers), insight (learned conclusions), decision (recorded decisions).",
                input_schema: schema_for!(AddMemoryParams),
                output_schema: schema_for!(Memory),
            },
            ToolDescriptor {
                name: "add_task",
                description: "Create a task with a title, optional description, 1-5 priority, and optional project reference.",
                input_schema: schema_for!(AddTaskParams),
                output_schema: schema_for!(Task),
            },
            ToolDescriptor {
                name: "get_context",
                description: "Rank stored memories against a free-text query and return the most relevant ones.",
                input_schema: schema_for!(GetContextParams),
                output_schema: schema_for!(ContextResult),
            },
            ToolDescriptor {
                name: "get_editor_context",
                description: "Rank stored memories against a query plus editor state (current file, open files); memories referencing those files are boosted.",
                input_schema: schema_for!(GetEditorContextParams),
                output_schema: schema_for!(ContextResult),
            },
        ];
        Self { tools }
    }

    /// All registered tools in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Registry state snapshot for the config endpoint.
    pub fn config(&self) -> RegistryConfig {
        RegistryConfig {
            tool_count: self.tools.len(),
            schema_version: PROTOCOL_VERSION,
            capabilities: Capabilities {
                memories: true,
                tasks: true,
                context: true,
                editor_context: true,
            },
        }
    }

    /// Invoke a tool by name with a JSON payload.
    ///
    /// Unregistered names fail with `UnknownTool`; payloads that do not satisfy
    /// the tool's input schema fail with `Validation`. Handlers delegate to the
    /// same operations the REST surface calls.
    pub fn invoke(
        &self,
        conn: &Connection,
        config: &NeuroDockConfig,
        name: &str,
        payload: Value,
    ) -> Result<Value> {
        if !self.tools.iter().any(|t| t.name == name) {
            return Err(Error::UnknownTool(name.to_string()));
        }

        match name {
            "add_memory" => to_value(add_memory::run(conn, parse_params(payload)?)?),
            "add_task" => to_value(add_task::run(conn, parse_params(payload)?)?),
            "get_context" => {
                to_value(get_context::run(conn, &config.ranking, parse_params(payload)?)?)
            }
            "get_editor_context" => {
                to_value(get_context::run_editor(conn, &config.ranking, parse_params(payload)?)?)
            }
            _ => unreachable!("registered tool without a handler: {name}"),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a JSON payload against a tool's typed parameter struct.
///
/// Unknown fields, wrong types, and missing required fields all surface as
/// validation errors rather than internal ones.
pub fn parse_params<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| Error::validation("payload", e.to_string()))
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Internal(anyhow::Error::new(e)))
}
