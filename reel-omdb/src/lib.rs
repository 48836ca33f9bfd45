//! OMDb metadata lookup.
//!
//! Resolves a typed title to a [`MovieRecord`] (canonical title, year, IMDb
//! rating, poster URL) through the OMDb HTTP API.

pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use client::OmdbClient;
pub use credentials::{ApiKey, KeySource, API_KEY_ENV};
pub use error::MetadataError;
pub use types::OmdbResponse;

use reel_catalog::MovieRecord;

/// Anything that can turn a title into movie metadata.
///
/// Implemented by [`OmdbClient`]; tests substitute canned sources.
pub trait MetadataSource {
    fn fetch(&self, title: &str) -> Result<MovieRecord, MetadataError>;
}
