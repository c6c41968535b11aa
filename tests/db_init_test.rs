use neurodock::db;
use neurodock::store::memories;
use neurodock::store::types::MemoryType;

#[test]
fn open_database_creates_file_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("neurodock.db");

    let conn = db::open_database(&path).unwrap();
    assert!(path.exists(), "database file should be created");

    // Verify all tables exist
    let tables: Vec<String> = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert!(tables.contains(&"memories".to_string()), "memories table missing");
    assert!(tables.contains(&"tasks".to_string()), "tasks table missing");
    assert!(tables.contains(&"projects".to_string()), "projects table missing");
    assert!(tables.contains(&"schema_meta".to_string()), "schema_meta table missing");

    // Verify schema version is at the current migration target
    assert_eq!(
        db::migrations::get_schema_version(&conn).unwrap(),
        db::migrations::CURRENT_SCHEMA_VERSION
    );

    // WAL mode is enabled
    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
}

#[test]
fn reopening_preserves_stored_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neurodock.db");

    let id = {
        let conn = db::open_database(&path).unwrap();
        memories::create(&conn, "persisted across reopen", MemoryType::Insight, "test")
            .unwrap()
            .id
    };

    let conn = db::open_database(&path).unwrap();
    let fetched = memories::get(&conn, &id).unwrap();
    assert_eq!(fetched.content, "persisted across reopen");
    assert_eq!(fetched.memory_type, MemoryType::Insight);
}

#[test]
fn open_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neurodock.db");

    db::open_database(&path).unwrap();
    db::open_database(&path).unwrap(); // second open runs schema + migrations again
}
