//! Movie catalog data model and derived read-only views.
//!
//! This crate defines the records a profile owns and the pure computations
//! run over a [`Snapshot`] (search, ordering, statistics, histogram data)
//! without any database dependencies. `reel-db` produces snapshots and
//! `reel-lib` hands them to these views.

pub mod histogram;
pub mod search;
pub mod similarity;
pub mod sort;
pub mod stats;
pub mod types;

pub use histogram::{histogram_buckets, Histogram, BUCKET_COUNT};
pub use search::{search, SearchOutcome, MAX_SUGGESTIONS, SUGGESTION_CUTOFF};
pub use similarity::similarity_ratio;
pub use sort::{random_movie, sort_by_rating_desc};
pub use stats::{compute_statistics, Statistics};
pub use types::*;
