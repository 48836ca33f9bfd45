//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database was written by a newer version: expected schema {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Schema version written by this build.
pub const CURRENT_VERSION: i32 = 1;

/// Ensure every table and index exists and the version is recorded.
///
/// Safe to run on every start. A database stamped with a newer version is
/// refused rather than touched.
pub fn initialize_schema(conn: &Connection) -> Result<(), SchemaError> {
    let found = stored_version(conn)?;
    if found > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found,
        });
    }

    conn.execute_batch(SCHEMA_SQL)?;
    if found < CURRENT_VERSION {
        log::debug!("Stamping schema version {} (was {})", CURRENT_VERSION, found);
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION],
        )?;
    }
    Ok(())
}

/// Open the movie database at `path`, creating the file, its parent
/// directories and the schema as needed.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    log::debug!("Opening movie database at {}", path.display());
    let conn = Connection::open(path)?;
    let mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    log::debug!("Journal mode: {}", mode);
    conn.pragma_update(None, "foreign_keys", true)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

/// Fresh in-memory database with the full schema.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.pragma_update(None, "foreign_keys", true)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

/// Highest recorded version; 0 for a database without the version table.
fn stored_version(conn: &Connection) -> Result<i32, SchemaError> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'")?;
    if !stmt.exists([])? {
        return Ok(0);
    }

    let version = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i32>>(0)
    })?;
    Ok(version.unwrap_or(0))
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version    INTEGER NOT NULL,
    stamped_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- User profiles, each owning an independent collection
CREATE TABLE IF NOT EXISTS profiles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Movies, unique per profile by exact title
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    profile_id INTEGER NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    poster TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(profile_id, title)
);
CREATE INDEX IF NOT EXISTS idx_movies_profile ON movies(profile_id);
"#;
