//! Title search with fuzzy "did you mean" suggestions.

use crate::similarity::similarity_ratio;
use crate::types::{normalize_title, MovieRecord, Snapshot};

/// Maximum number of suggestions returned when nothing matches.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity (0.0–1.0) for a title to be suggested.
pub const SUGGESTION_CUTOFF: f64 = 0.6;

/// Result of [`search`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Titles containing the query, in snapshot order.
    Matches(Vec<&'a MovieRecord>),
    /// No title contains the query; closest titles, best first (may be empty).
    Suggestions(Vec<&'a str>),
}

impl SearchOutcome<'_> {
    pub fn is_match(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }
}

/// Find movies whose normalized title contains the normalized query.
///
/// When nothing contains the query, rank every stored title by similarity to
/// the trimmed query and return up to [`MAX_SUGGESTIONS`] scoring at least
/// [`SUGGESTION_CUTOFF`]. Scoring is case-sensitive. Equal scores are ordered
/// by title, descending.
pub fn search<'a>(snapshot: &'a Snapshot, query: &str) -> SearchOutcome<'a> {
    let needle = normalize_title(query);

    let matches: Vec<&MovieRecord> = snapshot
        .iter()
        .filter(|m| normalize_title(&m.title).contains(&needle))
        .collect();
    if !matches.is_empty() {
        return SearchOutcome::Matches(matches);
    }

    SearchOutcome::Suggestions(suggestions(snapshot, query.trim()))
}

fn suggestions<'a>(snapshot: &'a Snapshot, query: &str) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &str)> = snapshot
        .titles()
        .map(|title| (similarity_ratio(title, query), title))
        .filter(|(score, _)| *score >= SUGGESTION_CUTOFF)
        .collect();

    scored.sort_by(|(score_a, title_a), (score_b, title_b)| {
        score_b.total_cmp(score_a).then_with(|| title_b.cmp(title_a))
    });
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(_, title)| title).collect()
}
