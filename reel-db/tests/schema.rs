use reel_db::schema::{initialize_schema, CURRENT_VERSION};
use reel_db::{open_database, open_memory, MovieStore, SchemaError};
use rusqlite::Connection;
use tempfile::TempDir;

fn recorded_versions(conn: &Connection) -> Vec<i32> {
    let mut stmt = conn
        .prepare("SELECT version FROM schema_version ORDER BY version")
        .unwrap();
    let versions = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<i32>, _>>()
        .unwrap();
    versions
}

#[test]
fn fresh_database_is_stamped() {
    let conn = open_memory().unwrap();
    assert_eq!(recorded_versions(&conn), vec![CURRENT_VERSION]);
}

#[test]
fn initializing_twice_changes_nothing() {
    let conn = open_memory().unwrap();
    initialize_schema(&conn).unwrap();
    initialize_schema(&conn).unwrap();
    assert_eq!(recorded_versions(&conn), vec![CURRENT_VERSION]);
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_memory().unwrap();
    let enabled: bool = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .unwrap();
    assert!(enabled);
}

#[test]
fn profile_and_movie_tables_exist() {
    let conn = open_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    for table in ["movies", "profiles", "schema_version"] {
        assert!(tables.iter().any(|t| t == table), "missing table {table}");
    }
}

#[test]
fn on_disk_database_uses_wal() {
    let tmp = TempDir::new().unwrap();
    let conn = open_database(&tmp.path().join("reel.db")).unwrap();
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
}

#[test]
fn reopen_on_disk_keeps_data() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("reel.db");

    {
        let store = MovieStore::open(&path).unwrap();
        store.create_profile("Alice").unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
    }

    let store = MovieStore::open(&path).unwrap();
    let profiles = store.list_profiles().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "Alice");
    assert_eq!(recorded_versions(store.connection()), vec![CURRENT_VERSION]);
}

#[test]
fn newer_schema_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reel.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
    }
}
