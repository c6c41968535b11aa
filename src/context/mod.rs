//! The context engine: selects and ranks the stored memories most relevant to
//! a free-text query, optionally boosted by editor state.
//!
//! Scoring is deterministic and clock-free. Each candidate gets
//!
//! ```text
//! score = lexical_weight * overlap(query, content)
//!       + recency_weight * creation_rank          (newest = 1.0)
//!       + type_weight                             (per-type, from config)
//!       + editor boosts                           (only when editor state given)
//! ```
//!
//! followed by a total order: score descending, then `created_at` descending,
//! then `id` ascending. Ties never fall through to hash-iteration order, so
//! repeated calls over an unchanged store return identical sequences. All
//! coefficients live in [`RankingConfig`] so tests can pin them and assert
//! exact orderings.
//!
//! The engine is read-only: it consumes [`store::memories::list`] and never
//! mutates the store.

use rusqlite::Connection;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::RankingConfig;
use crate::error::{Error, Result};
use crate::store::memories;
use crate::store::types::{Memory, MemoryType};

/// Editor context supplied alongside a query by IDE-embedded clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EditorState {
    /// Path of the file currently being edited.
    pub file: String,
    /// Cursor line in that file. Accepted on the wire but not scored — the
    /// engine has no access to file contents.
    #[serde(default)]
    pub cursor: Option<u64>,
    /// Other files open in the editor.
    #[serde(default)]
    pub open_files: Vec<String>,
}

/// A memory together with the relevance score it was ranked by.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ScoredMemory {
    #[serde(flatten)]
    pub memory: Memory,
    pub score: f64,
}

/// Rank all stored memories against `query` and return the top `max_memories`.
///
/// `max_memories <= 0` is a validation error. Fewer candidates than the bound
/// returns them all. An empty query is permitted: the lexical component is
/// zero for every candidate and ranking falls back to recency and type weight.
pub fn resolve_context(
    conn: &Connection,
    query: &str,
    max_memories: i64,
    editor_state: Option<&EditorState>,
    ranking: &RankingConfig,
) -> Result<Vec<ScoredMemory>> {
    if max_memories <= 0 {
        return Err(Error::validation(
            "max_memories",
            format!("must be a positive integer, got {max_memories}"),
        ));
    }

    let candidates = memories::list(conn)?;
    Ok(rank(candidates, query, max_memories as usize, editor_state, ranking))
}

/// Pure ranking over an already-fetched candidate list, in creation order.
pub fn rank(
    candidates: Vec<Memory>,
    query: &str,
    max_memories: usize,
    editor_state: Option<&EditorState>,
    ranking: &RankingConfig,
) -> Vec<ScoredMemory> {
    let query_terms = tokenize(query);
    let editor_terms = editor_state.map(editor_topic_terms);
    let total = candidates.len();

    let mut scored: Vec<ScoredMemory> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, memory)| {
            let score = score_memory(&memory, index, total, &query_terms, editor_state, editor_terms.as_ref(), ranking);
            ScoredMemory { memory, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.memory.created_at.cmp(&a.memory.created_at))
            .then_with(|| a.memory.id.cmp(&b.memory.id))
    });
    scored.truncate(max_memories);
    scored
}

fn score_memory(
    memory: &Memory,
    creation_index: usize,
    total: usize,
    query_terms: &BTreeSet<String>,
    editor_state: Option<&EditorState>,
    editor_terms: Option<&BTreeSet<String>>,
    ranking: &RankingConfig,
) -> f64 {
    let content_terms = tokenize(&memory.content);

    let mut score = ranking.lexical_weight * overlap(query_terms, &content_terms);
    score += ranking.recency_weight * creation_rank(creation_index, total);
    score += type_weight(ranking, memory.memory_type);

    if let Some(editor) = editor_state {
        if !editor.file.is_empty() && memory.content.contains(&editor.file) {
            score += ranking.editor_file_boost;
        }
        if let Some(terms) = editor_terms {
            score += ranking.editor_topic_boost * overlap(terms, &content_terms);
        }
    }

    score
}

/// Fraction of query terms present in the content's term set.
/// Empty query contributes zero to every candidate equally.
fn overlap(query_terms: &BTreeSet<String>, content_terms: &BTreeSet<String>) -> f64 {
    if query_terms.is_empty() {
        return 0.0;
    }
    let matched = query_terms.intersection(content_terms).count();
    matched as f64 / query_terms.len() as f64
}

/// Position in creation order normalized to [0, 1], newest = 1.
///
/// Clock-free recency: more recent memories score at least as high as
/// otherwise-equal older ones, and the value never drifts between calls.
fn creation_rank(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    index as f64 / (total - 1) as f64
}

fn type_weight(ranking: &RankingConfig, memory_type: MemoryType) -> f64 {
    let weights = &ranking.type_weights;
    match memory_type {
        MemoryType::Normal => weights.normal,
        MemoryType::Reference => weights.reference,
        MemoryType::Insight => weights.insight,
        MemoryType::Decision => weights.decision,
    }
}

/// Lowercased alphanumeric terms, deduplicated.
fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Terms drawn from the file names the editor has open — the "topic" of the
/// caller's current working set.
fn editor_topic_terms(editor: &EditorState) -> BTreeSet<String> {
    std::iter::once(editor.file.as_str())
        .chain(editor.open_files.iter().map(String::as_str))
        .filter_map(|path| Path::new(path).file_stem().and_then(|s| s.to_str()))
        .flat_map(|stem| tokenize(stem))
        .collect()
}
