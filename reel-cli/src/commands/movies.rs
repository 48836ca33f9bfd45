use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reel_catalog::MovieRecord;
use reel_lib::{Collection, CollectionError};

use super::AppContext;
use crate::CliError;
use crate::display::{format_rating, movie_line, ok_mark};
use crate::source::{metadata_source, WithSpinner};

/// Details given on the command line instead of an OMDb lookup.
pub(crate) struct ManualEntry {
    pub year: i32,
    pub rating: f64,
    pub poster: Option<String>,
}

pub(crate) fn run_list(ctx: &AppContext, json: bool) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    if json {
        let out = serde_json::to_string_pretty(&snapshot)?;
        println!("{out}");
        return Ok(());
    }

    if snapshot.is_empty() {
        log::info!(
            "{}, your collection is empty. Add some movies with 'reel add <TITLE>'.",
            profile.name
        );
        return Ok(());
    }

    log::info!(
        "{} {}",
        format!("{} movies total", snapshot.len()).if_supports_color(Stdout, |t| t.bold()),
        format!("({})", profile.name).if_supports_color(Stdout, |t| t.dimmed()),
    );
    for movie in &snapshot {
        log::info!("  {}", movie_line(movie));
    }
    Ok(())
}

pub(crate) fn run_add(
    ctx: &AppContext,
    title: &str,
    manual: Option<ManualEntry>,
) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, true)?;

    let added = match manual {
        Some(entry) => {
            let movie = MovieRecord::new(title, entry.year, entry.rating)
                .with_poster(entry.poster.unwrap_or_default());
            collection.add_movie(profile.id, movie)?
        }
        None => {
            let source = metadata_source(&ctx.settings);
            let source = WithSpinner::new(source.as_ref(), ctx.quiet);
            match collection.add_from_metadata(profile.id, title, &source) {
                Ok(movie) => movie,
                Err(CollectionError::Metadata(e)) if e.allows_manual_entry() => {
                    log::warn!("{}", e);
                    log::info!(
                        "Add it by hand with: reel add \"{}\" --offline --year <YEAR> --rating <RATING>",
                        title.trim()
                    );
                    return Err(CollectionError::Metadata(e).into());
                }
                Err(e) => return Err(e.into()),
            }
        }
    };

    log::info!(
        "{} Added {} ({}) rated {}{}",
        ok_mark(),
        added.title.if_supports_color(Stdout, |t| t.bold()),
        added.year,
        format_rating(added.rating),
        if added.has_poster() { "" } else { ", no poster" },
    );
    Ok(())
}

pub(crate) fn run_delete(ctx: &AppContext, query: &str) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;

    let title = collection.delete_movie(profile.id, query)?;
    log::info!("{} Deleted '{}'", ok_mark(), title);
    Ok(())
}

pub(crate) fn run_update(ctx: &AppContext, query: &str, rating: f64) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;

    let title = collection.update_rating(profile.id, query, rating)?;
    let snapshot = collection.snapshot(profile.id)?;
    match snapshot.get(&title) {
        Some(movie) => log::info!("{} Updated {}", ok_mark(), movie_line(movie)),
        None => log::info!("{} Updated '{}'", ok_mark(), title),
    }
    Ok(())
}
