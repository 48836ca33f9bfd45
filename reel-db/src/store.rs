//! Owned database handle.

use std::path::{Path, PathBuf};

use reel_catalog::{MovieRecord, Profile, ProfileId, Snapshot};
use rusqlite::Connection;

use crate::operations::{self, StoreError};
use crate::queries::{self, StoreStats};
use crate::schema::{self, SchemaError};

/// The movie database: one SQLite connection plus the path it was opened from.
///
/// Construct one explicitly and pass it by reference to whatever needs it.
pub struct MovieStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl MovieStore {
    /// Open (creating if needed) the database at `path` and ensure the schema.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        let conn = schema::open_database(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a fresh in-memory database.
    pub fn open_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
        })
    }

    /// Ensure all tables exist. Already done by the constructors; calling it
    /// again is harmless.
    pub fn initialize_schema(&self) -> Result<(), SchemaError> {
        schema::initialize_schema(&self.conn)
    }

    /// On-disk location, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        queries::list_profiles(&self.conn)
    }

    pub fn create_profile(&self, name: &str) -> Result<ProfileId, StoreError> {
        operations::create_profile(&self.conn, name)
    }

    pub fn resolve_profile_id(&self, name: &str) -> Result<Option<ProfileId>, StoreError> {
        queries::resolve_profile_id(&self.conn, name)
    }

    pub fn delete_profile(&self, id: ProfileId) -> Result<(), StoreError> {
        operations::delete_profile(&self.conn, id)
    }

    pub fn list_movies(&self, owner: ProfileId) -> Result<Snapshot, StoreError> {
        queries::list_movies(&self.conn, owner)
    }

    pub fn movie_count(&self, owner: ProfileId) -> Result<i64, StoreError> {
        queries::movie_count(&self.conn, owner)
    }

    pub fn insert_movie(&self, owner: ProfileId, movie: &MovieRecord) -> Result<(), StoreError> {
        operations::insert_movie(&self.conn, owner, movie)
    }

    pub fn delete_movie(&self, owner: ProfileId, title: &str) -> Result<(), StoreError> {
        operations::delete_movie(&self.conn, owner, title)
    }

    pub fn update_movie_rating(
        &self,
        owner: ProfileId,
        title: &str,
        rating: f64,
    ) -> Result<(), StoreError> {
        operations::update_movie_rating(&self.conn, owner, title, rating)
    }

    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        queries::store_stats(&self.conn)
    }
}
