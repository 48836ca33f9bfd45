//! Write operations for profiles and movies.
//!
//! Every mutation runs in its own transaction. Titles and profile names are
//! matched exactly here; case-insensitive handling lives in the collection
//! service above this crate.

use reel_catalog::{MovieRecord, ProfileId};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::queries::find_profile_id;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Profile '{name}' already exists")]
    DuplicateProfile { name: String },
    #[error("Movie '{title}' already exists")]
    DuplicateMovie { title: String },
    #[error("Not found: {0}")]
    NotFound(MissingEntity),
    #[error("Profile name must not be empty")]
    EmptyName,
    /// The database contradicted an operation that just succeeded.
    #[error("Store invariant violated: {0}")]
    Invariant(String),
}

/// The row a [`StoreError::NotFound`] refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingEntity {
    Profile(ProfileId),
    /// Exact title that matched no row of the owner.
    Movie(String),
}

impl std::fmt::Display for MissingEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile(id) => write!(f, "profile #{id}"),
            Self::Movie(title) => write!(f, "movie '{title}'"),
        }
    }
}

impl StoreError {
    /// True for missing rows and constraint conflicts, which a caller can fix
    /// by asking the user again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateProfile { .. }
                | Self::DuplicateMovie { .. }
                | Self::NotFound(_)
                | Self::EmptyName
        )
    }
}

// ── Profile Operations ──────────────────────────────────────────────────────

/// Create a profile and return its id.
///
/// The id is read back by name after the insert rather than taken from the
/// insert itself.
pub fn create_profile(conn: &Connection, name: &str) -> Result<ProfileId, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }

    let tx = conn.unchecked_transaction()?;
    match tx.execute("INSERT INTO profiles (name) VALUES (?1)", params![name]) {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(StoreError::DuplicateProfile {
                name: name.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    }

    let id = find_profile_id(&tx, name)?.ok_or_else(|| {
        StoreError::Invariant(format!("profile '{name}' missing right after insert"))
    })?;
    tx.commit()?;

    log::debug!("Created profile '{}' with id {}", name, id);
    Ok(id)
}

/// Delete a profile and, through the foreign key, every movie it owns.
pub fn delete_profile(conn: &Connection, id: ProfileId) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute("DELETE FROM profiles WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(StoreError::NotFound(MissingEntity::Profile(id)));
    }
    tx.commit()?;
    Ok(())
}

// ── Movie Operations ────────────────────────────────────────────────────────

/// Insert a movie for `owner`.
///
/// Fails with [`StoreError::DuplicateMovie`] if the owner already has a movie
/// with exactly this title, and [`StoreError::NotFound`] if the owner does
/// not exist.
pub fn insert_movie(
    conn: &Connection,
    owner: ProfileId,
    movie: &MovieRecord,
) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    let result = tx.execute(
        "INSERT INTO movies (profile_id, title, year, rating, poster)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![owner, movie.title, movie.year, movie.rating, movie.poster],
    );
    match result {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(StoreError::DuplicateMovie {
                title: movie.title.clone(),
            });
        }
        Err(e) if is_foreign_key_violation(&e) => {
            return Err(StoreError::NotFound(MissingEntity::Profile(owner)));
        }
        Err(e) => return Err(e.into()),
    }
    tx.commit()?;
    Ok(())
}

/// Delete the movie titled exactly `title` from `owner`'s collection.
pub fn delete_movie(conn: &Connection, owner: ProfileId, title: &str) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        "DELETE FROM movies WHERE profile_id = ?1 AND title = ?2",
        params![owner, title],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound(MissingEntity::Movie(title.to_string())));
    }
    tx.commit()?;
    Ok(())
}

/// Set the rating of the movie titled exactly `title`.
pub fn update_movie_rating(
    conn: &Connection,
    owner: ProfileId,
    title: &str,
    rating: f64,
) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    let changed = tx.execute(
        "UPDATE movies SET rating = ?3, updated_at = datetime('now')
         WHERE profile_id = ?1 AND title = ?2",
        params![owner, title, rating],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound(MissingEntity::Movie(title.to_string())));
    }
    tx.commit()?;
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn constraint_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            Some(e.extended_code)
        }
        _ => None,
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        constraint_code(err),
        Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
    )
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    constraint_code(err) == Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
