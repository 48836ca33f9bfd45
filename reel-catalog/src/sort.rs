//! Ordering and selection over a snapshot.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{MovieRecord, Snapshot};

/// Movies ordered by rating, highest first. Equal ratings keep snapshot order.
pub fn sort_by_rating_desc(snapshot: &Snapshot) -> Vec<&MovieRecord> {
    let mut movies: Vec<&MovieRecord> = snapshot.iter().collect();
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    movies
}

/// Pick one movie uniformly at random.
pub fn random_movie<'a, R: Rng + ?Sized>(
    snapshot: &'a Snapshot,
    rng: &mut R,
) -> Option<&'a MovieRecord> {
    snapshot.as_slice().choose(rng)
}
