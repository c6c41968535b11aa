//! Task CRUD. Tasks may reference a project by id; the reference is never
//! checked at write time and survives project deletion (it resolves to
//! "project not found" thereafter).

use rusqlite::{params, Connection};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{EntityKind, Error, Result};
use crate::store::types::{Task, TaskStatus, PRIORITY_MAX, PRIORITY_MIN};

/// Partial update payload. Unknown fields on the wire are a validation error.
#[derive(Debug, Default, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub project_id: Option<String>,
    pub status: Option<TaskStatus>,
}

fn validate_priority(priority: i64) -> Result<()> {
    if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
        return Err(Error::validation(
            "priority",
            format!("must be between {PRIORITY_MIN} and {PRIORITY_MAX}, got {priority}"),
        ));
    }
    Ok(())
}

/// Validate, assign id + timestamps, insert, and return the stored task.
pub fn create(
    conn: &Connection,
    title: &str,
    description: &str,
    priority: i64,
    project_id: Option<&str>,
    status: TaskStatus,
) -> Result<Task> {
    if title.trim().is_empty() {
        return Err(Error::validation("title", "must not be empty"));
    }
    validate_priority(priority)?;

    let now = super::now();
    let task = Task {
        id: super::new_id(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        project_id: project_id.map(str::to_string),
        status,
        created_at: now.clone(),
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO tasks (id, title, description, priority, project_id, status, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            task.id,
            task.title,
            task.description,
            task.priority,
            task.project_id,
            task.status.as_str(),
            task.created_at,
            task.updated_at,
        ],
    )?;

    Ok(task)
}

/// Fetch a single task by id.
pub fn get(conn: &Connection, id: &str) -> Result<Task> {
    conn.query_row(
        "SELECT id, title, description, priority, project_id, status, created_at, updated_at \
         FROM tasks WHERE id = ?1",
        params![id],
        map_task,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Error::not_found(EntityKind::Task, id),
        other => other.into(),
    })
}

/// All tasks in creation order.
pub fn list(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, priority, project_id, status, created_at, updated_at \
         FROM tasks ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt
        .query_map([], map_task)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Merge the provided fields into an existing task and bump `updated_at`.
pub fn update(conn: &Connection, id: &str, patch: &TaskPatch) -> Result<Task> {
    let mut task = get(conn, id)?;

    if let Some(ref title) = patch.title {
        if title.trim().is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        task.title = title.clone();
    }
    if let Some(ref description) = patch.description {
        task.description = description.clone();
    }
    if let Some(priority) = patch.priority {
        validate_priority(priority)?;
        task.priority = priority;
    }
    if let Some(ref project_id) = patch.project_id {
        task.project_id = Some(project_id.clone());
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    task.updated_at = super::now();

    conn.execute(
        "UPDATE tasks SET title = ?1, description = ?2, priority = ?3, project_id = ?4, \
         status = ?5, updated_at = ?6 WHERE id = ?7",
        params![
            task.title,
            task.description,
            task.priority,
            task.project_id,
            task.status.as_str(),
            task.updated_at,
            task.id,
        ],
    )?;

    Ok(task)
}

/// Hard delete. Deleting an absent id is `NotFound`.
pub fn delete(conn: &Connection, id: &str) -> Result<()> {
    let rows = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    if rows == 0 {
        return Err(Error::not_found(EntityKind::Task, id));
    }
    Ok(())
}

fn map_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let status_str: String = row.get(5)?;
    let status: TaskStatus = status_str.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, e.into())
    })?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: row.get(3)?,
        project_id: row.get(4)?,
        status,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
