use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reel_lib::Collection;

use super::AppContext;
use crate::CliError;
use crate::display::ok_mark;

/// List profiles with their movie counts.
pub(crate) fn run_users_list(ctx: &AppContext) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let collection = Collection::new(&store);
    let profiles = collection.profiles()?;

    if profiles.is_empty() {
        log::info!("No profiles yet.");
        log::info!("Run 'reel users create <NAME>' or start 'reel' to create one.");
        return Ok(());
    }

    let active = ctx.settings.user(ctx.user.clone());
    log::info!("{}", "Profiles".if_supports_color(Stdout, |t| t.bold()));
    for profile in profiles {
        let count = collection.movie_count(profile.id)?;
        let marker = if active.as_deref() == Some(profile.name.as_str()) {
            "*"
        } else {
            " "
        };
        log::info!(
            "{} {} {}",
            marker,
            profile.name.if_supports_color(Stdout, |t| t.cyan()),
            format!("({count} movies)").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

pub(crate) fn run_users_create(ctx: &AppContext, name: &str) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let profile = Collection::new(&store).create_profile(name)?;
    log::info!("{} Profile '{}' created", ok_mark(), profile.name);
    Ok(())
}

pub(crate) fn run_users_delete(ctx: &AppContext, name: &str) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let profile = Collection::new(&store).delete_profile(name)?;
    log::info!(
        "{} Profile '{}' and its movies deleted",
        ok_mark(),
        profile.name
    );
    Ok(())
}
