//! Collection service and shared settings for reel.
//!
//! [`Collection`] layers case-insensitive title handling and profile
//! selection over the exact-match primitives of [`reel_db::MovieStore`].
//! Both the one-shot CLI commands and the interactive menu go through it.

pub mod collection;
pub mod error;
pub mod settings;

pub use collection::{
    parse_rating, parse_year, validate_rating, validate_title, Collection, ProfileChoice,
};
pub use error::CollectionError;
pub use settings::Settings;

pub use reel_catalog as catalog;
pub use reel_db::MovieStore;
