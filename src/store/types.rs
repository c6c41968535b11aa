//! Record type definitions for the three entity kinds.
//!
//! Defines [`MemoryType`], [`Memory`], [`Task`], [`TaskStatus`], and
//! [`Project`], matching the `memories`, `tasks`, and `projects` table schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Valid task priority range: 1 is most urgent, 5 is least.
pub const PRIORITY_MIN: i64 = 1;
pub const PRIORITY_MAX: i64 = 5;

/// The four memory categories, each carrying a configurable ranking weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    /// Plain notes and observations — no ranking bonus.
    Normal,
    /// Pointers to docs, links, code locations.
    Reference,
    /// Learned conclusions worth resurfacing.
    Insight,
    /// Recorded decisions and their outcomes — highest default weight.
    Decision,
}

impl MemoryType {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reference => "reference",
            Self::Insight => "insight",
            Self::Decision => "decision",
        }
    }
}

impl Default for MemoryType {
    fn default() -> Self {
        Self::Normal
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "reference" => Ok(Self::Reference),
            "insight" => Ok(Self::Insight),
            "decision" => Ok(Self::Decision),
            _ => Err(format!("unknown memory type: {s}")),
        }
    }
}

/// A memory record, matching the `memories` table schema.
///
/// Immutable once created except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Memory {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    /// The full text content of the memory.
    pub content: String,
    /// Memory category.
    #[serde(rename = "type")]
    pub memory_type: MemoryType,
    /// Provenance of the memory (e.g. a client name).
    pub source: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Task lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(format!("unknown task status: {s}")),
        }
    }
}

/// A task record, matching the `tasks` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Task {
    /// UUID v7 primary key.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Urgency on the 1–5 scale, 1 = most urgent.
    pub priority: i64,
    /// Optional project reference. Never checked for existence at write time;
    /// may dangle after the project is deleted.
    pub project_id: Option<String>,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A project record, matching the `projects` table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    /// UUID v7 primary key.
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}
