//! Aggregate rating statistics.

use crate::types::Snapshot;

/// Rating statistics for a non-empty collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
    /// Every title rated `max`, in snapshot order.
    pub best_titles: Vec<String>,
    /// Every title rated `min`, in snapshot order.
    pub worst_titles: Vec<String>,
}

/// Compute statistics over a snapshot. Returns `None` when it is empty.
pub fn compute_statistics(snapshot: &Snapshot) -> Option<Statistics> {
    if snapshot.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = snapshot.ratings().collect();
    ratings.sort_by(f64::total_cmp);

    let count = ratings.len();
    let mean = ratings.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
    } else {
        ratings[count / 2]
    };
    let min = ratings[0];
    let max = ratings[count - 1];

    let titles_rated = |value: f64| -> Vec<String> {
        snapshot
            .iter()
            .filter(|m| m.rating == value)
            .map(|m| m.title.clone())
            .collect()
    };

    Some(Statistics {
        mean,
        median,
        max,
        min,
        best_titles: titles_rated(max),
        worst_titles: titles_rated(min),
    })
}
