use reel_catalog::*;

fn sample() -> Snapshot {
    [
        MovieRecord::new("Inception", 2010, 8.8).with_poster("https://example.com/inception.jpg"),
        MovieRecord::new("Memento", 2000, 8.4),
        MovieRecord::new("The Prestige", 2006, 8.5),
    ]
    .into_iter()
    .collect()
}

#[test]
fn iteration_follows_insertion_order() {
    let snapshot = sample();
    let titles: Vec<&str> = snapshot.titles().collect();
    assert_eq!(titles, vec!["Inception", "Memento", "The Prestige"]);
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn insert_replaces_exact_title_in_place() {
    let mut snapshot = sample();
    let old = snapshot.insert(MovieRecord::new("Memento", 2000, 9.0));
    assert_eq!(old.map(|m| m.rating), Some(8.4));
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.titles().nth(1), Some("Memento"));
    assert_eq!(snapshot.get("Memento").unwrap().rating, 9.0);
}

#[test]
fn get_is_exact_match() {
    let snapshot = sample();
    assert!(snapshot.get("Inception").is_some());
    assert!(snapshot.get("inception").is_none());
    assert!(snapshot.get("Inception ").is_none());
}

#[test]
fn resolve_title_ignores_case_and_whitespace() {
    let snapshot = sample();
    assert_eq!(snapshot.resolve_title("INCEPTION "), Some("Inception"));
    assert_eq!(snapshot.resolve_title("  the prestige"), Some("The Prestige"));
    assert_eq!(snapshot.resolve_title("Tenet"), None);
}

#[test]
fn resolve_title_returns_first_of_case_variants() {
    let snapshot: Snapshot = [
        MovieRecord::new("Alien", 1979, 8.5),
        MovieRecord::new("ALIEN", 1979, 7.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.resolve_title("alien"), Some("Alien"));
}

#[test]
fn normalize_title_trims_and_lowercases() {
    assert_eq!(normalize_title("  The Matrix\t"), "the matrix");
    assert_eq!(normalize_title(""), "");
}

#[test]
fn poster_presence() {
    let snapshot = sample();
    assert!(snapshot.get("Inception").unwrap().has_poster());
    assert!(!snapshot.get("Memento").unwrap().has_poster());
}

#[test]
fn large_snapshot_keeps_order_and_lookups() {
    let mut snapshot: Snapshot = (0..10_000)
        .map(|i| MovieRecord::new(format!("Movie {i:05}"), 2000, (i % 10) as f64))
        .collect();
    assert_eq!(snapshot.len(), 10_000);
    assert_eq!(snapshot.titles().next(), Some("Movie 00000"));
    assert_eq!(snapshot.titles().last(), Some("Movie 09999"));
    assert_eq!(snapshot.get("Movie 04321").map(|m| m.rating), Some(1.0));

    snapshot.insert(MovieRecord::new("Movie 04321", 2001, 9.5));
    assert_eq!(snapshot.len(), 10_000);
    assert_eq!(snapshot.as_slice()[4321].rating, 9.5);
    assert_eq!(snapshot.get("Movie 04321").map(|m| m.year), Some(2001));
    assert!(snapshot.get("movie 04321").is_none());
}
