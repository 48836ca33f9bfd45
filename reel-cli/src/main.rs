//! reel CLI
//!
//! Command-line interface for a personal movie catalog.

mod cli_types;
mod commands;
mod display;
mod error;
mod interactive;
mod prompt;
mod source;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rand::SeedableRng;
use rand::rngs::StdRng;

use reel_lib::{Collection, Settings};

use cli_types::{Cli, Commands, ConfigAction, UsersAction};
use commands::AppContext;
use commands::movies::ManualEntry;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let ctx = AppContext {
        settings: Settings::load(),
        db_override: cli.db,
        user: cli.user,
        quiet: cli.quiet,
    };

    if let Err(e) = run(&ctx, cli.command) {
        log::error!("{} {}", display::fail_mark(), e);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, command: Option<Commands>) -> Result<(), CliError> {
    match command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(ctx),
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::run_users_list(ctx),
            UsersAction::Create { name } => commands::users::run_users_create(ctx, &name),
            UsersAction::Delete { name } => commands::users::run_users_delete(ctx, &name),
        },
        Commands::List { json } => commands::movies::run_list(ctx, json),
        Commands::Add {
            title,
            offline,
            year,
            rating,
            poster,
        } => {
            let manual = match (offline, year, rating) {
                (false, _, _) => None,
                (true, Some(year), Some(rating)) => Some(ManualEntry {
                    year,
                    rating,
                    poster,
                }),
                (true, _, _) => {
                    return Err(CliError::config("--offline needs --year and --rating"));
                }
            };
            commands::movies::run_add(ctx, &title, manual)
        }
        Commands::Delete { title } => commands::movies::run_delete(ctx, &title),
        Commands::Update { title, rating } => commands::movies::run_update(ctx, &title, rating),
        Commands::Stats => commands::views::run_stats(ctx),
        Commands::Random => commands::views::run_random(ctx),
        Commands::Search { query } => commands::views::run_search(ctx, &query),
        Commands::Sorted => commands::views::run_sorted(ctx),
        Commands::Export {
            name,
            title,
            static_dir,
        } => commands::export::run_export(ctx, name, title, static_dir),
        Commands::Histogram { output } => commands::export::run_histogram(ctx, &output),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(ctx);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetKey { key } => commands::config::run_config_set_key(&key),
            ConfigAction::ClearKey => commands::config::run_config_clear_key(),
            ConfigAction::SetUser { name } => commands::config::run_config_set_user(&name),
        },
        Commands::Info => commands::info::run_info(ctx),
    }
}

/// Interactive menu on stdin/stdout.
fn run_shell(ctx: &AppContext) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let source = source::metadata_source(&ctx.settings);
    let source = source::WithSpinner::new(source.as_ref(), ctx.quiet);
    let user = ctx.settings.user(ctx.user.clone());

    let stdin = std::io::stdin();
    let prompt = prompt::Prompt::new(stdin.lock(), std::io::stdout());
    let mut session = interactive::Session::new(
        Collection::new(&store),
        &source,
        prompt,
        ctx.settings.static_dir(None),
        StdRng::from_entropy(),
    );
    session.run(user.as_deref())
}

/// Route `log` output to stdout as bare messages.
///
/// `--verbose` adds timestamps and level tags and enables debug output;
/// `--quiet` keeps only warnings and errors. `RUST_LOG` overrides both.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("reel", level);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now()
                    .format("%H:%M:%S%.3f")
                    .if_supports_color(Stdout, |t| t.dimmed()),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.parse_default_env();
    builder.init();
}

/// Empty line through the logger, so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
