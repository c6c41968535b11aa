//! Memory CRUD. Memories are immutable once created — there is no update path,
//! only create, read, list, and hard delete.

use rusqlite::{params, Connection};

use crate::error::{EntityKind, Error, Result};
use crate::store::types::{Memory, MemoryType};

/// Validate, assign id + timestamp, insert, and return the stored memory.
pub fn create(
    conn: &Connection,
    content: &str,
    memory_type: MemoryType,
    source: &str,
) -> Result<Memory> {
    if content.trim().is_empty() {
        return Err(Error::validation("content", "must not be empty"));
    }

    let memory = Memory {
        id: super::new_id(),
        content: content.to_string(),
        memory_type,
        source: source.to_string(),
        created_at: super::now(),
    };

    conn.execute(
        "INSERT INTO memories (id, content, type, source, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            memory.id,
            memory.content,
            memory.memory_type.as_str(),
            memory.source,
            memory.created_at,
        ],
    )?;

    Ok(memory)
}

/// Fetch a single memory by id.
pub fn get(conn: &Connection, id: &str) -> Result<Memory> {
    conn.query_row(
        "SELECT id, content, type, source, created_at FROM memories WHERE id = ?1",
        params![id],
        map_memory,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Error::not_found(EntityKind::Memory, id),
        other => other.into(),
    })
}

/// All memories in creation order.
pub fn list(conn: &Connection) -> Result<Vec<Memory>> {
    let mut stmt = conn.prepare(
        "SELECT id, content, type, source, created_at FROM memories ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt
        .query_map([], map_memory)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Hard delete. Deleting an absent (or already-deleted) id is `NotFound`.
pub fn delete(conn: &Connection, id: &str) -> Result<()> {
    let rows = conn.execute("DELETE FROM memories WHERE id = ?1", params![id])?;
    if rows == 0 {
        return Err(Error::not_found(EntityKind::Memory, id));
    }
    Ok(())
}

fn map_memory(row: &rusqlite::Row<'_>) -> rusqlite::Result<Memory> {
    let type_str: String = row.get(2)?;
    let memory_type: MemoryType = type_str.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, e.into())
    })?;
    Ok(Memory {
        id: row.get(0)?,
        content: row.get(1)?,
        memory_type,
        source: row.get(3)?,
        created_at: row.get(4)?,
    })
}
