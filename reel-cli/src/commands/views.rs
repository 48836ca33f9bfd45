use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reel_catalog::{compute_statistics, random_movie, search, sort_by_rating_desc, SearchOutcome};
use reel_lib::Collection;

use super::AppContext;
use crate::CliError;
use crate::display::{movie_line, statistics_lines};

pub(crate) fn run_stats(ctx: &AppContext) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    let Some(stats) = compute_statistics(&snapshot) else {
        log::info!("{}, there are no movies in your collection.", profile.name);
        return Ok(());
    };

    log::info!(
        "{}",
        format!("Rating statistics for {} ({} movies)", profile.name, snapshot.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for line in statistics_lines(&stats) {
        log::info!("  {}", line);
    }
    Ok(())
}

pub(crate) fn run_random(ctx: &AppContext) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    match random_movie(&snapshot, &mut rand::thread_rng()) {
        Some(movie) => log::info!("{}", movie_line(movie)),
        None => log::info!("There are no movies in the collection."),
    }
    Ok(())
}

pub(crate) fn run_search(ctx: &AppContext, query: &str) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    match search(&snapshot, query) {
        SearchOutcome::Matches(movies) => {
            for movie in movies {
                log::info!("{}", movie_line(movie));
            }
        }
        SearchOutcome::Suggestions(titles) if titles.is_empty() => {
            log::warn!("No movie matches '{}'", query.trim());
        }
        SearchOutcome::Suggestions(titles) => {
            log::warn!("No movie matches '{}'", query.trim());
            log::info!("Did you mean:");
            for title in titles {
                log::info!("  {}", title.if_supports_color(Stdout, |t| t.cyan()));
            }
        }
    }
    Ok(())
}

pub(crate) fn run_sorted(ctx: &AppContext) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profile = ctx.profile(&collection, false)?;
    let snapshot = collection.snapshot(profile.id)?;

    if snapshot.is_empty() {
        log::info!("There are no movies in the collection.");
        return Ok(());
    }
    for (rank, movie) in sort_by_rating_desc(&snapshot).into_iter().enumerate() {
        log::info!("{:>3}. {}", rank + 1, movie_line(movie));
    }
    Ok(())
}
