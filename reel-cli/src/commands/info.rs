use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::AppContext;
use crate::CliError;

/// Show where the database lives and what it holds.
pub(crate) fn run_info(ctx: &AppContext) -> Result<(), CliError> {
    let path = ctx.database_path();
    if !path.exists() {
        log::warn!("No database found at {}", path.display());
        log::info!("Run 'reel' or 'reel users create <NAME>' to create one.");
        return Ok(());
    }

    let store = ctx.open_store()?;
    let stats = store
        .stats()
        .map_err(reel_lib::CollectionError::from)?;

    log::info!("{}", "Movie Database".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Database: {}",
        path.display().if_supports_color(Stdout, |t| t.cyan())
    );
    crate::log_blank();
    log::info!("  Profiles:      {:>8}", stats.profiles);
    log::info!("  Movies:        {:>8}", stats.movies);
    log::info!("  With poster:   {:>8}", stats.movies_with_poster);
    Ok(())
}
