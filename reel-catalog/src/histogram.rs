//! Rating histogram data.
//!
//! Only the bucket counts live here; drawing them is left to the export crate.

use crate::types::Snapshot;

/// Number of equal-width buckets in a [`Histogram`].
pub const BUCKET_COUNT: usize = 10;

/// Bucketed rating counts over `[lower, upper]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lower: f64,
    pub upper: f64,
    pub counts: [usize; BUCKET_COUNT],
}

impl Histogram {
    pub fn bucket_width(&self) -> f64 {
        (self.upper - self.lower) / BUCKET_COUNT as f64
    }

    /// `(start, end)` bounds of bucket `index`.
    pub fn bucket_bounds(&self, index: usize) -> (f64, f64) {
        let width = self.bucket_width();
        let start = self.lower + width * index as f64;
        let end = if index + 1 == BUCKET_COUNT {
            self.upper
        } else {
            start + width
        };
        (start, end)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn tallest(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Split ratings into [`BUCKET_COUNT`] equal-width buckets spanning the
/// lowest to the highest rating. The last bucket includes its upper edge.
///
/// When every rating is equal the range is widened by 0.5 on each side, which
/// puts them all in the middle bucket. Returns `None` for an empty snapshot.
pub fn histogram_buckets(snapshot: &Snapshot) -> Option<Histogram> {
    let mut ratings = snapshot.ratings();
    let first = ratings.next()?;
    let (min, max) = ratings.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r)));

    let (lower, upper) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (upper - lower) / BUCKET_COUNT as f64;

    let mut counts = [0usize; BUCKET_COUNT];
    for rating in snapshot.ratings() {
        let index = ((rating - lower) / width) as usize;
        counts[index.min(BUCKET_COUNT - 1)] += 1;
    }

    Some(Histogram {
        lower,
        upper,
        counts,
    })
}
