pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod info;
pub(crate) mod movies;
pub(crate) mod users;
pub(crate) mod views;

use std::path::PathBuf;

use reel_catalog::Profile;
use reel_lib::{Collection, CollectionError, MovieStore, Settings};

use crate::CliError;

/// Everything a one-shot command needs from the command line and settings.
pub(crate) struct AppContext {
    pub settings: Settings,
    pub db_override: Option<PathBuf>,
    pub user: Option<String>,
    pub quiet: bool,
}

impl AppContext {
    pub(crate) fn database_path(&self) -> PathBuf {
        self.settings.database_path(self.db_override.clone())
    }

    pub(crate) fn open_store(&self) -> Result<MovieStore, CliError> {
        let path = self.database_path();
        log::debug!("Opening database {}", path.display());
        Ok(MovieStore::open(&path)?)
    }

    /// Active profile name from `--user` or `profile.default_user`.
    pub(crate) fn user_name(&self) -> Result<String, CliError> {
        self.settings.user(self.user.clone()).ok_or_else(|| {
            CliError::config(
                "No profile selected. Pass --user <NAME> or run 'reel config set-user <NAME>'",
            )
        })
    }

    /// Resolve the active profile. Missing profiles are created only when
    /// `create` is set.
    pub(crate) fn profile(
        &self,
        collection: &Collection<'_>,
        create: bool,
    ) -> Result<Profile, CliError> {
        let name = self.user_name()?;
        if create {
            return Ok(collection.find_or_create_profile(&name)?);
        }
        collection
            .find_profile(&name)?
            .ok_or_else(|| CollectionError::ProfileNotFound { name }.into())
    }
}
