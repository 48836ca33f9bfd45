use rand::rngs::StdRng;
use rand::SeedableRng;
use reel_catalog::*;

fn snapshot_of(entries: &[(&str, f64)]) -> Snapshot {
    entries
        .iter()
        .map(|(title, rating)| MovieRecord::new(*title, 2000, *rating))
        .collect()
}

fn library() -> Snapshot {
    snapshot_of(&[
        ("Inception", 8.8),
        ("Interstellar", 8.6),
        ("The Matrix", 8.7),
        ("The Matrix Reloaded", 7.2),
        ("Memento", 8.4),
    ])
}

// ── Search ──────────────────────────────────────────────────────────────────

#[test]
fn search_substring_is_case_insensitive() {
    let snapshot = library();
    match search(&snapshot, "  MATRIX ") {
        SearchOutcome::Matches(found) => {
            let titles: Vec<&str> = found.iter().map(|m| m.title.as_str()).collect();
            assert_eq!(titles, vec!["The Matrix", "The Matrix Reloaded"]);
        }
        other => panic!("expected matches, got {:?}", other),
    }
}

#[test]
fn search_suggests_close_titles() {
    let snapshot = library();
    assert_eq!(
        search(&snapshot, "inceptoin"),
        SearchOutcome::Suggestions(vec!["Inception"])
    );
}

#[test]
fn suggestions_are_ranked_best_first() {
    let snapshot = library();
    assert_eq!(
        search(&snapshot, "the matrx"),
        SearchOutcome::Suggestions(vec!["The Matrix"])
    );
    assert_eq!(
        search(&snapshot, "The Matrx"),
        SearchOutcome::Suggestions(vec!["The Matrix", "The Matrix Reloaded"])
    );
}

#[test]
fn suggestions_score_titles_case_sensitively() {
    let snapshot = library();
    assert_eq!(search(&snapshot, "THE MATRX"), SearchOutcome::Suggestions(vec![]));
    assert_eq!(
        search(&snapshot, "  the matrx  "),
        SearchOutcome::Suggestions(vec!["The Matrix"])
    );
}

#[test]
fn suggestions_below_cutoff_are_dropped() {
    let snapshot = library();
    assert_eq!(search(&snapshot, "zzz"), SearchOutcome::Suggestions(vec![]));
}

#[test]
fn suggestion_ties_order_by_title_descending() {
    let snapshot = snapshot_of(&[("abcx", 5.0), ("abcy", 6.0)]);
    assert_eq!(
        search(&snapshot, "abcz"),
        SearchOutcome::Suggestions(vec!["abcy", "abcx"])
    );
}

#[test]
fn suggestions_are_capped() {
    let snapshot = snapshot_of(&[
        ("movie a", 1.0),
        ("movie b", 1.0),
        ("movie c", 1.0),
        ("movie d", 1.0),
        ("movie e", 1.0),
        ("movie f", 1.0),
        ("movie g", 1.0),
    ]);
    match search(&snapshot, "movie z") {
        SearchOutcome::Suggestions(titles) => {
            assert_eq!(titles.len(), MAX_SUGGESTIONS);
            assert_eq!(titles[0], "movie g");
        }
        other => panic!("expected suggestions, got {:?}", other),
    }
}

#[test]
fn search_empty_snapshot() {
    let snapshot = Snapshot::new();
    assert!(!search(&snapshot, "anything").is_match());
}

// ── Sorting ─────────────────────────────────────────────────────────────────

#[test]
fn sort_is_descending_and_stable() {
    let snapshot = snapshot_of(&[("X", 5.0), ("Y", 9.0), ("Z", 9.0)]);
    let titles: Vec<&str> = sort_by_rating_desc(&snapshot)
        .into_iter()
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Y", "Z", "X"]);
}

#[test]
fn sort_empty_snapshot() {
    assert!(sort_by_rating_desc(&Snapshot::new()).is_empty());
}

// ── Statistics ──────────────────────────────────────────────────────────────

#[test]
fn statistics_with_tied_best() {
    let snapshot = snapshot_of(&[("A", 8.0), ("B", 9.0), ("C", 9.0)]);
    let stats = compute_statistics(&snapshot).unwrap();
    assert!((stats.mean - 8.67).abs() < 0.01);
    assert_eq!(stats.median, 9.0);
    assert_eq!(stats.max, 9.0);
    assert_eq!(stats.min, 8.0);
    assert_eq!(stats.best_titles, vec!["B", "C"]);
    assert_eq!(stats.worst_titles, vec!["A"]);
}

#[test]
fn statistics_even_count_median_averages_middle() {
    let snapshot = snapshot_of(&[("A", 4.0), ("B", 9.0), ("C", 6.0), ("D", 7.0)]);
    let stats = compute_statistics(&snapshot).unwrap();
    assert_eq!(stats.median, 6.5);
    assert_eq!(stats.mean, 6.5);
}

#[test]
fn statistics_single_movie_is_best_and_worst() {
    let snapshot = snapshot_of(&[("Solo", 7.5)]);
    let stats = compute_statistics(&snapshot).unwrap();
    assert_eq!(stats.best_titles, vec!["Solo"]);
    assert_eq!(stats.worst_titles, vec!["Solo"]);
}

#[test]
fn statistics_empty_is_none() {
    assert_eq!(compute_statistics(&Snapshot::new()), None);
}

// ── Histogram ───────────────────────────────────────────────────────────────

#[test]
fn histogram_spans_min_to_max() {
    let snapshot = snapshot_of(&[
        ("a", 0.0),
        ("b", 2.5),
        ("c", 7.0),
        ("d", 7.5),
        ("e", 10.0),
    ]);
    let hist = histogram_buckets(&snapshot).unwrap();
    assert_eq!(hist.lower, 0.0);
    assert_eq!(hist.upper, 10.0);
    assert_eq!(hist.counts, [1, 0, 1, 0, 0, 0, 0, 2, 0, 1]);
    assert_eq!(hist.total(), 5);
    assert_eq!(hist.tallest(), 2);
    assert_eq!(hist.bucket_bounds(9), (9.0, 10.0));
}

#[test]
fn histogram_of_equal_ratings_uses_middle_bucket() {
    let snapshot = snapshot_of(&[("a", 7.0), ("b", 7.0)]);
    let hist = histogram_buckets(&snapshot).unwrap();
    assert_eq!(hist.lower, 6.5);
    assert_eq!(hist.upper, 7.5);
    assert_eq!(hist.counts[5], 2);
    assert_eq!(hist.total(), 2);
}

#[test]
fn histogram_empty_is_none() {
    assert_eq!(histogram_buckets(&Snapshot::new()), None);
}

// ── Random ──────────────────────────────────────────────────────────────────

#[test]
fn random_movie_comes_from_snapshot() {
    let snapshot = library();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let picked = random_movie(&snapshot, &mut rng).unwrap();
        assert!(snapshot.contains_title(&picked.title));
    }
}

#[test]
fn random_movie_empty_is_none() {
    let mut rng = StdRng::seed_from_u64(7);
    assert!(random_movie(&Snapshot::new(), &mut rng).is_none());
}
