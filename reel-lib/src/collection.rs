//! Case-insensitive collection operations over the exact-match store.
//!
//! The store only enforces exact `(owner, title)` uniqueness. Everything a
//! user types goes through [`Collection`], which resolves titles ignoring
//! case and surrounding whitespace before touching the store.

use reel_catalog::{MovieRecord, Profile, ProfileId, Snapshot};
use reel_db::MovieStore;
use reel_omdb::MetadataSource;

use crate::error::CollectionError;

/// A selection made from the profile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChoice {
    /// 1-based position in [`Collection::profiles`].
    Existing(usize),
    /// Create a new profile with this name.
    Create(String),
}

/// Movie collection service bound to one store.
pub struct Collection<'a> {
    store: &'a MovieStore,
}

impl<'a> Collection<'a> {
    pub fn new(store: &'a MovieStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a MovieStore {
        self.store
    }

    // ── Profiles ────────────────────────────────────────────────────────────

    /// All profiles, sorted by name. Menu positions index into this list.
    pub fn profiles(&self) -> Result<Vec<Profile>, CollectionError> {
        Ok(self.store.list_profiles()?)
    }

    /// Apply a profile-menu choice.
    pub fn select_or_create_profile(
        &self,
        choice: ProfileChoice,
    ) -> Result<Profile, CollectionError> {
        match choice {
            ProfileChoice::Existing(index) => {
                let mut profiles = self.profiles()?;
                if index == 0 || index > profiles.len() {
                    return Err(CollectionError::invalid_choice(format!(
                        "{index} is not between 1 and {}",
                        profiles.len()
                    )));
                }
                Ok(profiles.swap_remove(index - 1))
            }
            ProfileChoice::Create(name) => self.create_profile(&name),
        }
    }

    /// Create a profile named `name` (trimmed).
    pub fn create_profile(&self, name: &str) -> Result<Profile, CollectionError> {
        let name = name.trim();
        let id = self.store.create_profile(name)?;
        log::debug!("Profile '{}' created", name);
        Ok(Profile {
            id,
            name: name.to_string(),
        })
    }

    /// Look up a profile by exact (trimmed) name.
    pub fn find_profile(&self, name: &str) -> Result<Option<Profile>, CollectionError> {
        let name = name.trim();
        Ok(self.store.resolve_profile_id(name)?.map(|id| Profile {
            id,
            name: name.to_string(),
        }))
    }

    /// Look up a profile by name, creating it if missing.
    pub fn find_or_create_profile(&self, name: &str) -> Result<Profile, CollectionError> {
        match self.find_profile(name)? {
            Some(profile) => Ok(profile),
            None => self.create_profile(name),
        }
    }

    /// Delete a profile and all its movies.
    pub fn delete_profile(&self, name: &str) -> Result<Profile, CollectionError> {
        let profile = self
            .find_profile(name)?
            .ok_or_else(|| CollectionError::ProfileNotFound {
                name: name.trim().to_string(),
            })?;
        self.store.delete_profile(profile.id)?;
        log::debug!("Profile '{}' deleted", profile.name);
        Ok(profile)
    }

    // ── Movies ──────────────────────────────────────────────────────────────

    /// Fresh read of `owner`'s movies.
    pub fn snapshot(&self, owner: ProfileId) -> Result<Snapshot, CollectionError> {
        Ok(self.store.list_movies(owner)?)
    }

    pub fn movie_count(&self, owner: ProfileId) -> Result<i64, CollectionError> {
        Ok(self.store.movie_count(owner)?)
    }

    /// Map a typed title to the stored one, ignoring case and surrounding
    /// whitespace. The first match in snapshot order wins.
    pub fn resolve_title_case_insensitive<'s>(
        snapshot: &'s Snapshot,
        query: &str,
    ) -> Option<&'s str> {
        snapshot.resolve_title(query)
    }

    /// Fail with [`CollectionError::DuplicateMovie`] if `title` already
    /// matches a stored title.
    pub fn ensure_title_available(
        &self,
        owner: ProfileId,
        title: &str,
    ) -> Result<(), CollectionError> {
        let snapshot = self.snapshot(owner)?;
        match Self::resolve_title_case_insensitive(&snapshot, title) {
            Some(existing) => Err(CollectionError::DuplicateMovie {
                existing: existing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Add a movie unless a case-insensitive match is already stored.
    ///
    /// The duplicate check and the insert are separate statements, so a
    /// second writer could slip a differently-cased title in between. Only
    /// exact duplicates are caught by the store itself.
    pub fn add_movie(
        &self,
        owner: ProfileId,
        mut movie: MovieRecord,
    ) -> Result<MovieRecord, CollectionError> {
        movie.title = validate_title(&movie.title)?.to_string();
        validate_rating(movie.rating)?;

        self.ensure_title_available(owner, &movie.title)?;
        self.store.insert_movie(owner, &movie)?;
        log::debug!("Added '{}' ({}) to profile {}", movie.title, movie.year, owner);
        Ok(movie)
    }

    /// Look `title` up through `source` and add the result.
    ///
    /// The typed title is checked before the lookup, and the canonical title
    /// returned by the source is checked again on insert.
    pub fn add_from_metadata(
        &self,
        owner: ProfileId,
        title: &str,
        source: &dyn MetadataSource,
    ) -> Result<MovieRecord, CollectionError> {
        let title = validate_title(title)?;
        self.ensure_title_available(owner, title)?;
        let movie = source.fetch(title)?;
        self.add_movie(owner, movie)
    }

    /// Delete the movie matching `query`. Returns the stored title.
    pub fn delete_movie(&self, owner: ProfileId, query: &str) -> Result<String, CollectionError> {
        let title = self.resolve_stored_title(owner, query)?;
        self.store.delete_movie(owner, &title)?;
        log::debug!("Deleted '{}' from profile {}", title, owner);
        Ok(title)
    }

    /// Set the rating of the movie matching `query`. Returns the stored title.
    pub fn update_rating(
        &self,
        owner: ProfileId,
        query: &str,
        rating: f64,
    ) -> Result<String, CollectionError> {
        validate_rating(rating)?;
        let title = self.resolve_stored_title(owner, query)?;
        self.store.update_movie_rating(owner, &title, rating)?;
        log::debug!("Rated '{}' {} for profile {}", title, rating, owner);
        Ok(title)
    }

    fn resolve_stored_title(&self, owner: ProfileId, query: &str) -> Result<String, CollectionError> {
        let snapshot = self.snapshot(owner)?;
        Self::resolve_title_case_insensitive(&snapshot, query)
            .map(str::to_string)
            .ok_or_else(|| CollectionError::MovieNotFound {
                query: query.trim().to_string(),
            })
    }
}

/// Trimmed title, or `InvalidInput` if nothing is left.
pub fn validate_title(title: &str) -> Result<&str, CollectionError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CollectionError::invalid_input("title must not be empty"));
    }
    Ok(trimmed)
}

/// Ratings must be finite numbers.
pub fn validate_rating(rating: f64) -> Result<f64, CollectionError> {
    if !rating.is_finite() {
        return Err(CollectionError::invalid_input(format!(
            "rating must be a number, got {rating}"
        )));
    }
    Ok(rating)
}

/// Parse a typed rating, e.g. `"8.5"`.
pub fn parse_rating(input: &str) -> Result<f64, CollectionError> {
    let rating = input
        .trim()
        .parse::<f64>()
        .map_err(|_| CollectionError::invalid_input(format!("'{}' is not a rating", input.trim())))?;
    validate_rating(rating)
}

/// Parse a typed release year, e.g. `"1999"`.
pub fn parse_year(input: &str) -> Result<i32, CollectionError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| CollectionError::invalid_input(format!("'{}' is not a year", input.trim())))
}
