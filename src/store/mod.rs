//! Record store: create/get/list/update/delete for the three entity kinds.
//!
//! Each entity module owns the SQL for its kind. Ids are UUID v7 (assigned
//! here, never by callers) and timestamps are RFC 3339 UTC with fixed-width
//! microseconds so string comparison matches chronological order.

pub mod memories;
pub mod projects;
pub mod tasks;
pub mod types;

use chrono::{SecondsFormat, Utc};

/// Current UTC timestamp, RFC 3339 with microsecond precision.
///
/// Fixed width keeps `ORDER BY created_at` and lexicographic comparison in
/// agreement, which the context engine's tie-break relies on.
pub(crate) fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Fresh UUID v7 id — time-sortable, unique for the store's lifetime.
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
