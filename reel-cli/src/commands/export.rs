use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reel_catalog::histogram_buckets;
use reel_lib::Collection;

use super::AppContext;
use crate::CliError;
use crate::display::{histogram_lines, ok_mark};

pub(crate) fn run_export(
    ctx: &AppContext,
    name: Option<String>,
    title: Option<String>,
    static_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    let static_dir = ctx.settings.static_dir(static_dir);
    let name = name.unwrap_or_else(|| profile.name.clone());
    let title = title.unwrap_or_else(|| reel_export::default_app_title(&profile.name));

    let path = reel_export::export_site(&snapshot, &title, &name, &static_dir)?;
    log::info!(
        "{} Website with {} movies written to {}",
        ok_mark(),
        snapshot.len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

pub(crate) fn run_histogram(ctx: &AppContext, output: &Path) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    let path = reel_export::write_histogram(&snapshot, output)?;

    if let Some(histogram) = histogram_buckets(&snapshot) {
        for line in histogram_lines(&histogram) {
            log::info!("{}", line);
        }
    }
    log::info!(
        "{} Histogram saved to {}",
        ok_mark(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
