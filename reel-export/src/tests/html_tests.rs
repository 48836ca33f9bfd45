use super::*;
use reel_catalog::MovieRecord;

const TEMPLATE: &str = "<title>__TEMPLATE_TITLE__</title><ul>__TEMPLATE_MOVIE_GRID__</ul>";

fn sample() -> Snapshot {
    [
        MovieRecord::new("Heat", 1995, 8.3),
        MovieRecord::new("Alien", 1979, 8.5).with_poster("https://img/alien.jpg"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    assert_eq!(escape_html("Schindler's List"), "Schindler&#x27;s List");
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("alice").unwrap(), "alice.html");
    assert_eq!(output_file_name("alice.html").unwrap(), "alice.html");
    assert_eq!(output_file_name(" Bob ").unwrap(), "Bob.html");
    assert_eq!(output_file_name("Dr. Who").unwrap(), "Dr. Who.html");
}

#[test]
fn test_output_name_must_stay_in_static_dir() {
    for name in ["../x", "a/b", "..\\x", "/etc/passwd", "..", ".", "   "] {
        assert!(
            matches!(output_file_name(name), Err(ExportError::InvalidName { .. })),
            "accepted {name:?}"
        );
    }
}

#[test]
fn test_export_rejects_escaping_name() {
    let root = tempfile::tempdir().unwrap();
    let static_dir = root.path().join("static");
    std::fs::create_dir(&static_dir).unwrap();
    std::fs::write(static_dir.join(TEMPLATE_FILE), TEMPLATE).unwrap();

    let err = export_site(&sample(), "x", "../escaped", &static_dir).unwrap_err();
    assert!(matches!(err, ExportError::InvalidName { ref name } if name == "../escaped"));
    assert!(!root.path().join("escaped.html").exists());
}

#[test]
fn test_default_app_title() {
    assert_eq!(default_app_title("Alice"), "Alice's Movie App");
}

#[test]
fn test_card_with_poster() {
    let card = movie_card(&MovieRecord::new("Alien", 1979, 8.5).with_poster("https://img/a.jpg?x=1&y=2"));
    assert!(card.starts_with("<li>"));
    assert!(card.ends_with("</li>"));
    assert!(card.contains(
        "<img class=\"movie-poster\" src=\"https://img/a.jpg?x=1&amp;y=2\" alt=\"Alien poster\" />"
    ));
    assert!(card.contains("<div class=\"movie-title\">Alien</div>"));
    assert!(card.contains("<div class=\"movie-year\">1979</div>"));
}

#[test]
fn test_card_without_poster() {
    let card = movie_card(&MovieRecord::new("Heat", 1995, 8.3));
    assert!(card.contains("No poster</div>"));
    assert!(!card.contains("<img"));
}

#[test]
fn test_render_page_orders_by_rating() {
    let page = render_page(TEMPLATE, &sample(), "Alice's <Movies>");
    assert!(page.starts_with("<title>Alice&#x27;s &lt;Movies&gt;</title><ul><li>"));
    let alien = page.find("Alien").unwrap();
    let heat = page.find("Heat").unwrap();
    assert!(alien < heat);
    assert!(!page.contains(TITLE_PLACEHOLDER));
    assert!(!page.contains(GRID_PLACEHOLDER));
}

#[test]
fn test_render_empty_collection() {
    let page = render_page(TEMPLATE, &Snapshot::new(), "Empty");
    assert_eq!(page, "<title>Empty</title><ul></ul>");
}

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(TEMPLATE_FILE), TEMPLATE).unwrap();

    let path = export_site(&sample(), "Alice's Movie App", "alice", dir.path()).unwrap();
    assert_eq!(path, dir.path().join("alice.html"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_page(TEMPLATE, &sample(), "Alice's Movie App"));
}

#[test]
fn test_export_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let err = export_site(&sample(), "x", "alice", dir.path()).unwrap_err();
    match err {
        ExportError::TemplateMissing { path } => assert_eq!(path, template_path(dir.path())),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!dir.path().join("alice.html").exists());
}
