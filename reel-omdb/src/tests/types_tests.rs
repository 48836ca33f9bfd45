use super::*;

fn parse(json: &str) -> OmdbResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_successful_lookup() {
    let resp = parse(
        r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8",
            "Poster":"https://m.media-amazon.com/images/inception.jpg","Response":"True"}"#,
    );
    let movie = resp.into_movie("inception").unwrap();
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, 2010);
    assert_eq!(movie.rating, 8.8);
    assert_eq!(movie.poster, "https://m.media-amazon.com/images/inception.jpg");
}

#[test]
fn test_not_found_response() {
    let resp = parse(r#"{"Response":"False","Error":"Movie not found!"}"#);
    match resp.into_movie("nope") {
        Err(MetadataError::NotFound(msg)) => assert_eq!(msg, "Movie not found!"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_response_field_is_not_found() {
    let resp = parse(r#"{"Title":"Inception"}"#);
    assert!(matches!(
        resp.into_movie("Inception"),
        Err(MetadataError::NotFound(_))
    ));
}

#[test]
fn test_series_year_range_uses_first_year() {
    let resp = parse(
        r#"{"Title":"Sherlock","Year":"2010–2017","imdbRating":"9.1","Poster":"N/A","Response":"True"}"#,
    );
    let movie = resp.into_movie("sherlock").unwrap();
    assert_eq!(movie.year, 2010);
    assert_eq!(movie.poster, "");
}

#[test]
fn test_unrated_is_not_found() {
    let resp = parse(
        r#"{"Title":"Obscure","Year":"2021","imdbRating":"N/A","Response":"True"}"#,
    );
    assert!(matches!(
        resp.into_movie("obscure"),
        Err(MetadataError::NotFound(_))
    ));
}

#[test]
fn test_bad_year_is_not_found() {
    let resp = parse(r#"{"Title":"Odd","Year":"N/A","imdbRating":"5.0","Response":"True"}"#);
    assert!(matches!(resp.into_movie("odd"), Err(MetadataError::NotFound(_))));
}

#[test]
fn test_empty_title_falls_back_to_request() {
    let resp = parse(r#"{"Title":"  ","Year":"1999","imdbRating":"8.7","Response":"True"}"#);
    let movie = resp.into_movie(" The Matrix ").unwrap();
    assert_eq!(movie.title, "The Matrix");
}

#[test]
fn test_poster_none_is_cleared() {
    assert_eq!(clean_poster("None"), "");
    assert_eq!(clean_poster(" https://x/y.jpg "), "https://x/y.jpg");
}

#[test]
fn test_manual_entry_policy() {
    assert!(MetadataError::Unreachable("timeout".into()).allows_manual_entry());
    assert!(MetadataError::Config("no key".into()).allows_manual_entry());
    assert!(!MetadataError::NotFound("x".into()).allows_manual_entry());
}
