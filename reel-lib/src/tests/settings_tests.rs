use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings::load_from(&tmp.path().join("absent.toml"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_parse_all_sections() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[omdb]
api_key = "abc123"

[storage]
database = "/srv/reel.db"

[export]
static_dir = "site"

[profile]
default_user = "Alice"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.omdb.api_key.as_deref(), Some("abc123"));
    assert_eq!(settings.storage.database, Some(PathBuf::from("/srv/reel.db")));
    assert_eq!(settings.static_dir(None), PathBuf::from("site"));
    assert_eq!(settings.user(None).as_deref(), Some("Alice"));
}

#[test]
fn test_database_path_priority() {
    let mut settings = Settings::default();
    settings.storage.database = Some(PathBuf::from("from-file.db"));

    assert_eq!(
        settings.database_path_with(Some("cli.db".into()), Some("env.db".into())),
        PathBuf::from("cli.db")
    );
    assert_eq!(
        settings.database_path_with(None, Some("env.db".into())),
        PathBuf::from("env.db")
    );
    assert_eq!(
        settings.database_path_with(None, None),
        PathBuf::from("from-file.db")
    );
    assert_eq!(
        Settings::default().database_path_with(None, None),
        default_database_path()
    );
}

#[test]
fn test_static_dir_default() {
    assert_eq!(
        Settings::default().static_dir(None),
        PathBuf::from(DEFAULT_STATIC_DIR)
    );
    assert_eq!(
        Settings::default().static_dir(Some("out".into())),
        PathBuf::from("out")
    );
}

#[test]
fn test_blank_user_is_ignored() {
    assert_eq!(Settings::default().user(Some("   ".into())), None);
    assert_eq!(
        Settings::default().user(Some(" Bob ".into())).as_deref(),
        Some("Bob")
    );
}

#[test]
fn test_save_value_preserves_other_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cfg").join("settings.toml");

    save_value_at(&path, "omdb", "api_key", Some("k1")).unwrap();
    save_value_at(&path, "profile", "default_user", Some("Alice")).unwrap();
    save_value_at(&path, "omdb", "api_key", Some("k2")).unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.omdb.api_key.as_deref(), Some("k2"));
    assert_eq!(settings.profile.default_user.as_deref(), Some("Alice"));

    save_value_at(&path, "omdb", "api_key", None).unwrap();
    let settings = Settings::load_from(&path);
    assert_eq!(settings.omdb.api_key, None);
    assert_eq!(settings.profile.default_user.as_deref(), Some("Alice"));
    assert!(!path.with_extension("toml.tmp").exists());
}
