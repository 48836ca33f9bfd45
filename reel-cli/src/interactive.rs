//! Interactive menu loop.
//!
//! Recoverable errors are printed and the menu (or the current question) is
//! shown again. Only storage failures and closed input end the session.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use reel_catalog::{
    compute_statistics, random_movie, search, sort_by_rating_desc, MovieRecord, Profile,
    SearchOutcome,
};
use reel_lib::{Collection, CollectionError, ProfileChoice};
use reel_omdb::MetadataSource;

use crate::display::{movie_line, ok_mark, statistics_lines};
use crate::error::CliError;
use crate::prompt::Prompt;

/// Entries of the main menu, numbered as shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    Sorted,
    Export,
    SwitchUser,
    Histogram,
}

impl MenuChoice {
    const ALL: [MenuChoice; 12] = [
        MenuChoice::Exit,
        MenuChoice::List,
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Update,
        MenuChoice::Stats,
        MenuChoice::Random,
        MenuChoice::Search,
        MenuChoice::Sorted,
        MenuChoice::Export,
        MenuChoice::SwitchUser,
        MenuChoice::Histogram,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::List => "List movies",
            MenuChoice::Add => "Add movie",
            MenuChoice::Delete => "Delete movie",
            MenuChoice::Update => "Update movie",
            MenuChoice::Stats => "Stats",
            MenuChoice::Random => "Random movie",
            MenuChoice::Search => "Search movie",
            MenuChoice::Sorted => "Movies sorted by rating",
            MenuChoice::Export => "Generate website",
            MenuChoice::SwitchUser => "Switch user",
            MenuChoice::Histogram => "Rating histogram",
        }
    }

    fn from_input(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index).copied()
    }
}

/// One interactive session over a collection.
pub(crate) struct Session<'a, R, W> {
    collection: Collection<'a>,
    source: &'a dyn MetadataSource,
    prompt: Prompt<R, W>,
    static_dir: PathBuf,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(
        collection: Collection<'a>,
        source: &'a dyn MetadataSource,
        prompt: Prompt<R, W>,
        static_dir: PathBuf,
        rng: StdRng,
    ) -> Self {
        Self {
            collection,
            source,
            prompt,
            static_dir,
            rng,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// With `user` set, that profile is used (created if missing) instead of
    /// asking.
    pub(crate) fn run(&mut self, user: Option<&str>) -> Result<(), CliError> {
        match self.run_inner(user) {
            Err(CliError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.prompt.say("")?;
                self.prompt.say("Bye!")?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_inner(&mut self, user: Option<&str>) -> Result<(), CliError> {
        self.prompt.say("***** Movie Database *****")?;

        let mut profile = match user {
            Some(name) => {
                let profile = self.collection.find_or_create_profile(name)?;
                self.prompt.say(format!("Welcome, {}!", profile.name))?;
                profile
            }
            None => self.choose_profile()?,
        };

        loop {
            self.print_menu()?;
            let choice = self.ask_choice()?;
            self.prompt.say("")?;

            let result = match choice {
                MenuChoice::Exit => {
                    self.prompt.say("Bye!")?;
                    return Ok(());
                }
                MenuChoice::SwitchUser => self.choose_profile().map(|p| profile = p),
                other => self.dispatch(other, &profile),
            };

            match result {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => self.prompt.complain(&e)?,
                Err(e) => return Err(e),
            }
            self.prompt.say("")?;
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.prompt.say("Menu:")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            self.prompt.say(format!("{i}. {}", choice.label()))?;
        }
        Ok(())
    }

    fn ask_choice(&mut self) -> io::Result<MenuChoice> {
        let question = format!("Choose (0-{}): ", MenuChoice::ALL.len() - 1);
        loop {
            if let Some(choice) = MenuChoice::from_input(&self.prompt.line(&question)?) {
                return Ok(choice);
            }
            self.prompt.complain("Invalid choice. Please try again.")?;
        }
    }

    fn dispatch(&mut self, choice: MenuChoice, profile: &Profile) -> Result<(), CliError> {
        match choice {
            MenuChoice::List => self.list(profile),
            MenuChoice::Add => self.add(profile),
            MenuChoice::Delete => self.delete(profile),
            MenuChoice::Update => self.update(profile),
            MenuChoice::Stats => self.stats(profile),
            MenuChoice::Random => self.random(profile),
            MenuChoice::Search => self.search(profile),
            MenuChoice::Sorted => self.sorted(profile),
            MenuChoice::Export => self.export(profile),
            MenuChoice::Histogram => self.histogram(profile),
            MenuChoice::Exit | MenuChoice::SwitchUser => Ok(()),
        }
    }

    // ── Profiles ────────────────────────────────────────────────────────────

    fn choose_profile(&mut self) -> Result<Profile, CliError> {
        loop {
            let profiles = self.collection.profiles()?;
            self.prompt.say("Select a user:")?;
            for (i, p) in profiles.iter().enumerate() {
                self.prompt.say(format!("{}. {}", i + 1, p.name))?;
            }
            let create_index = profiles.len() + 1;
            self.prompt.say(format!("{create_index}. Create new user"))?;

            let index: usize = self.prompt.parsed("Enter choice: ")?;
            let choice = if index == create_index {
                ProfileChoice::Create(self.prompt.non_empty("New user name: ")?)
            } else {
                ProfileChoice::Existing(index)
            };
            let creating = matches!(choice, ProfileChoice::Create(_));

            match self.collection.select_or_create_profile(choice) {
                Ok(profile) if creating => {
                    self.prompt.say(format!("Profile '{}' created.", profile.name))?;
                    return Ok(profile);
                }
                Ok(profile) => {
                    self.prompt.say(format!("Welcome back, {}!", profile.name))?;
                    return Ok(profile);
                }
                Err(e) if e.is_recoverable() => {
                    self.prompt.complain(format!("{e}. Please try again."))?
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    // ── Movies ──────────────────────────────────────────────────────────────

    fn list(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        if snapshot.is_empty() {
            self.prompt.say(format!(
                "{}, your collection is empty. Add some movies!",
                profile.name
            ))?;
            return Ok(());
        }
        self.prompt.say(format!("{} movies total", snapshot.len()))?;
        for movie in &snapshot {
            self.prompt.say(movie_line(movie))?;
        }
        Ok(())
    }

    fn add(&mut self, profile: &Profile) -> Result<(), CliError> {
        let title = self.prompt.non_empty("Movie title: ")?;

        match self
            .collection
            .add_from_metadata(profile.id, &title, self.source)
        {
            Ok(movie) => {
                self.prompt
                    .say(format!("{} '{}' added.", ok_mark(), movie.title))?;
                Ok(())
            }
            Err(CollectionError::Metadata(e)) if e.allows_manual_entry() => {
                self.prompt
                    .complain(format!("{e}. Enter the details manually."))?;
                let year: i32 = self.prompt.parsed("Release year: ")?;
                let rating = self.prompt.rating("Rating (1-10): ")?;
                let movie = self
                    .collection
                    .add_movie(profile.id, MovieRecord::new(title, year, rating))?;
                self.prompt
                    .say(format!("{} '{}' added manually.", ok_mark(), movie.title))?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, profile: &Profile) -> Result<(), CliError> {
        if self.collection.snapshot(profile.id)?.is_empty() {
            self.prompt.say("There are no movies to delete.")?;
            return Ok(());
        }
        loop {
            let query = self.prompt.non_empty("Movie title: ")?;
            match self.collection.delete_movie(profile.id, &query) {
                Ok(title) => {
                    self.prompt.say(format!("'{title}' deleted."))?;
                    return Ok(());
                }
                Err(e @ CollectionError::MovieNotFound { .. }) => {
                    self.prompt.complain(format!("{e}. Please try again."))?
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn update(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        if snapshot.is_empty() {
            self.prompt.say("There are no movies to update.")?;
            return Ok(());
        }
        let title = loop {
            let query = self.prompt.non_empty("Movie title: ")?;
            match Collection::resolve_title_case_insensitive(&snapshot, &query) {
                Some(title) => break title.to_string(),
                None => self
                    .prompt
                    .complain(format!("Movie '{query}' not found. Please try again."))?,
            }
        };

        let rating = self.prompt.rating("New rating: ")?;
        let title = self.collection.update_rating(profile.id, &title, rating)?;
        self.prompt.say(format!("'{title}' updated."))?;
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    fn stats(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        match compute_statistics(&snapshot) {
            Some(stats) => {
                for line in statistics_lines(&stats) {
                    self.prompt.say(line)?;
                }
            }
            None => self
                .prompt
                .say(format!("{}, there are no movies in your collection.", profile.name))?,
        }
        Ok(())
    }

    fn random(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        match random_movie(&snapshot, &mut self.rng) {
            Some(movie) => self.prompt.say(movie_line(movie))?,
            None => self.prompt.say("There are no movies in the collection.")?,
        }
        Ok(())
    }

    fn search(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        let query = self.prompt.non_empty("Search for: ")?;

        match search(&snapshot, &query) {
            SearchOutcome::Matches(movies) => {
                for movie in movies {
                    self.prompt.say(movie_line(movie))?;
                }
            }
            SearchOutcome::Suggestions(titles) => {
                self.prompt.say("Movie not found.")?;
                if !titles.is_empty() {
                    self.prompt.say("Did you mean:")?;
                    for title in titles {
                        self.prompt.say(format!("  {title}"))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn sorted(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        if snapshot.is_empty() {
            self.prompt.say("There are no movies in the collection.")?;
            return Ok(());
        }
        for movie in sort_by_rating_desc(&snapshot) {
            self.prompt.say(movie_line(movie))?;
        }
        Ok(())
    }

    fn export(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        let path = reel_export::export_site(
            &snapshot,
            &reel_export::default_app_title(&profile.name),
            &profile.name,
            &self.static_dir,
        )?;
        self.prompt
            .say(format!("{} Website generated: {}", ok_mark(), path.display()))?;
        Ok(())
    }

    fn histogram(&mut self, profile: &Profile) -> Result<(), CliError> {
        let snapshot = self.collection.snapshot(profile.id)?;
        if snapshot.is_empty() {
            self.prompt.say("There are no movies in the collection.")?;
            return Ok(());
        }
        let file = self.prompt.non_empty("File name for the histogram: ")?;
        let path = reel_export::write_histogram(&snapshot, Path::new(&file))?;
        self.prompt
            .say(format!("{} Histogram saved to {}", ok_mark(), path.display()))?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.prompt.into_output()
    }
}

#[cfg(test)]
#[path = "tests/interactive_tests.rs"]
mod tests;
