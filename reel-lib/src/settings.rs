//! Shared application settings (database path, API key, export directory).
//!
//! The settings file is always `~/.config/reel/settings.toml`. Paths resolve
//! through a priority chain: command-line flag, environment variable,
//! settings file, built-in default.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the database location.
pub const DATABASE_ENV: &str = "REEL_DB";

/// Default directory for the export template and generated pages.
pub const DEFAULT_STATIC_DIR: &str = "_static";

/// Canonical path to the settings file: `~/.config/reel/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("reel").join("settings.toml")
}

/// Default database location: `<data dir>/reel/reel.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("reel").join("reel.db")
}

/// Parsed `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub omdb: OmdbSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub profile: ProfileSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OmdbSettings {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub default_user: Option<String>,
}

impl Settings {
    /// Load from [`settings_path`]. A missing or unreadable file yields defaults.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from an explicit path. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve the database path.
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `REEL_DB` environment variable
    /// 3. `storage.database` in `settings.toml`
    /// 4. [`default_database_path`]
    pub fn database_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        self.database_path_with(cli_override, std::env::var_os(DATABASE_ENV).map(PathBuf::from))
    }

    /// Same as [`Settings::database_path`], with the environment value passed in.
    pub fn database_path_with(
        &self,
        cli_override: Option<PathBuf>,
        from_env: Option<PathBuf>,
    ) -> PathBuf {
        cli_override
            .or(from_env)
            .or_else(|| self.storage.database.clone())
            .unwrap_or_else(default_database_path)
    }

    /// Resolve the export directory: CLI override, settings file, then `./_static`.
    pub fn static_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.export.static_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
    }

    /// Resolve the active user name: CLI override, then `profile.default_user`.
    pub fn user(&self, cli_override: Option<String>) -> Option<String> {
        cli_override
            .or_else(|| self.profile.default_user.clone())
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
    }
}

/// Save (or clear) `[table] key = value` in `settings.toml`.
pub fn save_value(table: &str, key: &str, value: Option<&str>) -> io::Result<PathBuf> {
    let path = settings_path();
    save_value_at(&path, table, key, value)?;
    Ok(path)
}

/// Save (or clear) a single value in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated fields are preserved.
pub fn save_value_at(
    settings: &Path,
    table: &str,
    key: &str,
    value: Option<&str>,
) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let root = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let section = root
        .entry(table)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section = section
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{table}] is not a table")))?;

    match value {
        Some(v) => {
            section.insert(key.to_string(), toml::Value::String(v.to_string()));
        }
        None => {
            section.remove(key);
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
