//! Data model types for the movie catalog.
//!
//! These types represent what the store persists: user profiles and the
//! movies each profile owns, plus the [`Snapshot`] container handed out on
//! every read.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ── Profile ─────────────────────────────────────────────────────────────────

/// Row id of a profile, assigned by the store.
pub type ProfileId = i64;

/// A named user scope owning an independent movie collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// A single movie in a profile's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    /// Poster URL; empty when none is known.
    #[serde(default)]
    pub poster: String,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: String::new(),
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster.into();
        self
    }

    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty()
    }
}

/// Normalize a title for case-insensitive comparison: trim, then lowercase.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

// ── Snapshot ────────────────────────────────────────────────────────────────

/// A point-in-time mapping from title to movie record.
///
/// Titles are unique under exact comparison. Iteration follows the order in
/// which records were inserted (the store supplies them in row order).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    movies: Vec<MovieRecord>,
    /// Exact title to position in `movies`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing (in place) any record with the exact same title.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, movie: MovieRecord) -> Option<MovieRecord> {
        match self.index.get(&movie.title) {
            Some(&pos) => Some(std::mem::replace(&mut self.movies[pos], movie)),
            None => {
                self.index.insert(movie.title.clone(), self.movies.len());
                self.movies.push(movie);
                None
            }
        }
    }

    /// Exact-title lookup.
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.index.get(title).map(|&pos| &self.movies[pos])
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// Map a user-typed title to the stored title, ignoring case and
    /// surrounding whitespace.
    ///
    /// The first match in iteration order wins. The store only guarantees
    /// exact-title uniqueness, so two titles differing only by case can
    /// coexist if inserted around the collection service.
    pub fn resolve_title(&self, query: &str) -> Option<&str> {
        let wanted = normalize_title(query);
        self.movies
            .iter()
            .find(|m| normalize_title(&m.title) == wanted)
            .map(|m| m.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    pub fn ratings(&self) -> impl Iterator<Item = f64> + '_ {
        self.movies.iter().map(|m| m.rating)
    }

    pub fn as_slice(&self) -> &[MovieRecord] {
        &self.movies
    }
}

impl FromIterator<MovieRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut snapshot = Snapshot {
            movies: Vec::with_capacity(iter.size_hint().0),
            index: HashMap::with_capacity(iter.size_hint().0),
        };
        for movie in iter {
            snapshot.insert(movie);
        }
        snapshot
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl IntoIterator for Snapshot {
    type Item = MovieRecord;
    type IntoIter = std::vec::IntoIter<MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}
