//! Read queries for the movie database.

use reel_catalog::{MovieRecord, Profile, ProfileId, Snapshot};
use rusqlite::{params, Connection};

use crate::operations::StoreError;

// ── Profile Queries ─────────────────────────────────────────────────────────

/// List all profiles, sorted by name.
pub fn list_profiles(conn: &Connection) -> Result<Vec<Profile>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM profiles ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Profile {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a profile id by name (exact match).
pub fn resolve_profile_id(conn: &Connection, name: &str) -> Result<Option<ProfileId>, StoreError> {
    find_profile_id(conn, name)
}

pub(crate) fn find_profile_id(
    conn: &Connection,
    name: &str,
) -> Result<Option<ProfileId>, StoreError> {
    let mut stmt = conn.prepare("SELECT id FROM profiles WHERE name = ?1 LIMIT 1")?;
    let result = stmt.query_row(params![name], |row| row.get::<_, ProfileId>(0));
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Movie Queries ───────────────────────────────────────────────────────────

/// Read a full snapshot of `owner`'s collection, in insertion order.
pub fn list_movies(conn: &Connection, owner: ProfileId) -> Result<Snapshot, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT title, year, rating, poster
         FROM movies WHERE profile_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![owner], |row| {
        Ok(MovieRecord {
            title: row.get(0)?,
            year: row.get(1)?,
            rating: row.get(2)?,
            poster: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Snapshot, _>>().map_err(Into::into)
}

/// Number of movies `owner` has.
pub fn movie_count(conn: &Connection, owner: ProfileId) -> Result<i64, StoreError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM movies WHERE profile_id = ?1",
        params![owner],
        |r| r.get(0),
    )?;
    Ok(count)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall database statistics.
pub fn store_stats(conn: &Connection) -> Result<StoreStats, StoreError> {
    let profiles: i64 = conn.query_row("SELECT COUNT(*) FROM profiles", [], |r| r.get(0))?;
    let movies: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
    let with_poster: i64 = conn.query_row(
        "SELECT COUNT(*) FROM movies WHERE poster != ''",
        [],
        |r| r.get(0),
    )?;

    Ok(StoreStats {
        profiles,
        movies,
        movies_with_poster: with_poster,
    })
}

/// Summary statistics for the whole database.
#[derive(Debug)]
pub struct StoreStats {
    pub profiles: i64,
    pub movies: i64,
    pub movies_with_poster: i64,
}
