//! Project CRUD. Deleting a project never cascades to its tasks.

use rusqlite::{params, Connection};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{EntityKind, Error, Result};
use crate::store::types::Project;

/// Partial update payload. Unknown fields on the wire are a validation error.
#[derive(Debug, Default, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validate, assign id + timestamps, insert, and return the stored project.
pub fn create(conn: &Connection, name: &str, description: &str) -> Result<Project> {
    if name.trim().is_empty() {
        return Err(Error::validation("name", "must not be empty"));
    }

    let now = super::now();
    let project = Project {
        id: super::new_id(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: now.clone(),
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO projects (id, name, description, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            project.id,
            project.name,
            project.description,
            project.created_at,
            project.updated_at,
        ],
    )?;

    Ok(project)
}

/// Fetch a single project by id.
pub fn get(conn: &Connection, id: &str) -> Result<Project> {
    conn.query_row(
        "SELECT id, name, description, created_at, updated_at FROM projects WHERE id = ?1",
        params![id],
        map_project,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => Error::not_found(EntityKind::Project, id),
        other => other.into(),
    })
}

/// All projects in creation order.
pub fn list(conn: &Connection) -> Result<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, created_at, updated_at \
         FROM projects ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt
        .query_map([], map_project)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Merge the provided fields into an existing project and bump `updated_at`.
pub fn update(conn: &Connection, id: &str, patch: &ProjectPatch) -> Result<Project> {
    let mut project = get(conn, id)?;

    if let Some(ref name) = patch.name {
        if name.trim().is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        project.name = name.clone();
    }
    if let Some(ref description) = patch.description {
        project.description = description.clone();
    }
    project.updated_at = super::now();

    conn.execute(
        "UPDATE projects SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
        params![project.name, project.description, project.updated_at, project.id],
    )?;

    Ok(project)
}

/// Hard delete. Referencing tasks keep their (now dangling) project_id.
pub fn delete(conn: &Connection, id: &str) -> Result<()> {
    let rows = conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
    if rows == 0 {
        return Err(Error::not_found(EntityKind::Project, id));
    }
    Ok(())
}

fn map_project(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
