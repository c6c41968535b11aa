//! Cognitive assistant backend — memories, tasks, projects, and a deterministic
//! context engine, served over REST and MCP.
//!
//! NeuroDock stores discrete memory records alongside task and project records,
//! and answers context queries by ranking the stored memories against a
//! free-text query (optionally enriched with editor state). Memories come in
//! four types, each carrying a configurable ranking weight:
//!
//! | Type | Purpose | Default weight |
//! |------|---------|----------------|
//! | **Normal** | Plain notes and observations | 0.00 |
//! | **Reference** | Pointers to docs, links, code locations | 0.05 |
//! | **Insight** | Learned conclusions worth resurfacing | 0.10 |
//! | **Decision** | Recorded decisions and their outcomes | 0.15 |
//!
//! # Architecture
//!
//! - **Storage**: SQLite in WAL mode, one connection behind a mutex, store
//!   calls routed through `spawn_blocking`
//! - **Ranking**: lexical term overlap + creation-rank recency + type weights,
//!   fully configuration-driven and clock-free so orderings are reproducible
//! - **Transport**: axum HTTP (REST plus the `/neuro-dock` tool protocol) or
//!   MCP over stdio
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization, schema, and migrations
//! - [`store`] — Record store: memory, task, and project CRUD
//! - [`context`] — The context engine: scoring and ranking of memories
//! - [`tools`] — Tool registry, typed tool parameters, and the MCP handler
//! - [`gateway`] — axum routing for the REST and tool-protocol surfaces

pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod gateway;
pub mod server;
pub mod store;
pub mod tools;

pub use error::Error;
