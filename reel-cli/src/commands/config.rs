use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reel_lib::settings::{self, DATABASE_ENV};
use reel_omdb::{ApiKey, KeySource, API_KEY_ENV};

use super::AppContext;
use crate::CliError;
use crate::display::ok_mark;

/// Show current settings and where each value comes from.
pub(crate) fn run_config_show(ctx: &AppContext) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "reel Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let from_env = std::env::var(API_KEY_ENV).ok();
    let from_config = ctx.settings.omdb.api_key.as_deref();
    let key = ApiKey::resolve_with(from_env.as_deref(), from_config).ok();
    let key_source = key
        .as_ref()
        .map(|k| k.source().clone())
        .unwrap_or(KeySource::Missing);
    show_field("api_key", key.map(|k| k.masked()), &key_source.to_string());

    let db_source = if ctx.db_override.is_some() {
        "--db".to_string()
    } else if std::env::var_os(DATABASE_ENV).is_some() {
        format!("env ${DATABASE_ENV}")
    } else if ctx.settings.storage.database.is_some() {
        "config file".to_string()
    } else {
        "default".to_string()
    };
    show_field(
        "database",
        Some(ctx.database_path().display().to_string()),
        &db_source,
    );

    let static_source = if ctx.settings.export.static_dir.is_some() {
        "config file"
    } else {
        "default"
    };
    show_field(
        "static_dir",
        Some(ctx.settings.static_dir(None).display().to_string()),
        static_source,
    );

    let user_source = if ctx.user.is_some() {
        "--user"
    } else if ctx.settings.profile.default_user.is_some() {
        "config file"
    } else {
        "not set"
    };
    show_field(
        "default_user",
        ctx.settings.user(ctx.user.clone()),
        user_source,
    );
}

fn show_field(name: &str, value: Option<String>, source: &str) {
    let source = format!("({source})");
    match value {
        Some(v) => log::info!(
            "  {} {} {}",
            format!("{name}:").if_supports_color(Stdout, |t| t.cyan()),
            v,
            source.if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  {} {} {}",
            format!("{name}:").if_supports_color(Stdout, |t| t.cyan()),
            "not set".if_supports_color(Stdout, |t| t.yellow()),
            source.if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set_key(key: &str) -> Result<(), CliError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::config("API key must not be empty"));
    }
    let path = settings::save_value("omdb", "api_key", Some(key))?;
    log::info!(
        "{} OMDb API key {} saved to {}",
        ok_mark(),
        ApiKey::new(key, KeySource::ConfigFile).masked(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if std::env::var_os(API_KEY_ENV).is_some() {
        log::warn!("${} is set and takes precedence over the settings file", API_KEY_ENV);
    }
    Ok(())
}

pub(crate) fn run_config_clear_key() -> Result<(), CliError> {
    let path = settings::save_value("omdb", "api_key", None)?;
    log::info!("{} OMDb API key removed from {}", ok_mark(), path.display());
    Ok(())
}

pub(crate) fn run_config_set_user(name: &str) -> Result<(), CliError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::config("Profile name must not be empty"));
    }
    let path = settings::save_value("profile", "default_user", Some(name))?;
    log::info!(
        "{} Default profile set to '{}' in {}",
        ok_mark(),
        name,
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
