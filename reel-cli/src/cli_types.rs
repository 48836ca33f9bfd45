//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Keep a personal movie catalog", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides REEL_DB and settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Profile to act on (overrides profile.default_user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start the interactive menu
    Shell,

    /// Manage profiles
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// List the profile's movies
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a movie, looking its details up on OMDb
    Add {
        /// Title to look up
        title: String,

        /// Skip the lookup and store the given details
        #[arg(long, requires_all = ["year", "rating"])]
        offline: bool,

        /// Release year (with --offline)
        #[arg(long)]
        year: Option<i32>,

        /// Rating (with --offline)
        #[arg(long)]
        rating: Option<f64>,

        /// Poster URL (with --offline)
        #[arg(long)]
        poster: Option<String>,
    },

    /// Delete a movie (title matched ignoring case)
    Delete {
        title: String,
    },

    /// Change a movie's rating
    Update {
        title: String,
        rating: f64,
    },

    /// Show rating statistics
    Stats,

    /// Pick a random movie
    Random,

    /// Search titles, suggesting close matches when nothing contains the query
    Search {
        query: String,
    },

    /// List movies by rating, highest first
    Sorted,

    /// Generate a static HTML page from the template
    Export {
        /// Output file name without extension (default: profile name)
        #[arg(long)]
        name: Option<String>,

        /// Page title (default: "<profile>'s Movie App")
        #[arg(long)]
        title: Option<String>,

        /// Directory holding index_template.html (default: ./_static)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Save a PNG histogram of ratings
    Histogram {
        /// Output image path (.png added when missing)
        output: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show database location and totals
    Info,
}

#[derive(Subcommand)]
pub(crate) enum UsersAction {
    /// List profiles with their movie counts
    List,

    /// Create a profile
    Create {
        name: String,
    },

    /// Delete a profile and all of its movies
    Delete {
        name: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Store the OMDb API key in the settings file
    SetKey {
        key: String,
    },

    /// Remove the OMDb API key from the settings file
    ClearKey,

    /// Set the profile used when --user is not given
    SetUser {
        name: String,
    },
}
