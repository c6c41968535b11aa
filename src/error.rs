//! Error taxonomy shared by the store, context engine, registry, and gateway.
//!
//! Four kinds: [`Error::Validation`] (caller must correct and retry),
//! [`Error::NotFound`] and [`Error::UnknownTool`] (referenced entity or tool
//! absent), and [`Error::Internal`] (unexpected fault, logged and surfaced
//! opaquely). Nothing in the core retries automatically.

use thiserror::Error;

/// The entity kinds the record store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Memory,
    Task,
    Project,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Task => "task",
            Self::Project => "project",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed, missing, or out-of-range input. Carries the offending field.
    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// A referenced entity does not exist in its kind's namespace.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A tool invocation named a tool that was never registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Unexpected internal fault. Detail is logged, never surfaced to callers.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Shorthand for a missing entity.
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

// Raw storage errors are wrapped so they never reach a caller verbatim.
impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Self::Internal(anyhow::Error::new(e))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
