//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, exact-match CRUD primitives scoped by profile,
//! and the [`MovieStore`] handle that owns the connection
//! (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    create_profile, delete_movie, delete_profile, insert_movie, update_movie_rating, MissingEntity,
    StoreError,
};
pub use queries::{
    list_movies, list_profiles, movie_count, resolve_profile_id, store_stats, StoreStats,
};
pub use schema::{initialize_schema, open_database, open_memory, SchemaError};
pub use store::MovieStore;
