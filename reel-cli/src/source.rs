//! Metadata source used by the add flows.

use reel_catalog::MovieRecord;
use reel_lib::Settings;
use reel_omdb::{ApiKey, MetadataError, MetadataSource, OmdbClient};

use crate::spinner::Spinner;

/// Stand-in when no client could be built. Every lookup fails with the
/// stored configuration error, which sends the caller to manual entry.
struct Unconfigured(String);

impl MetadataSource for Unconfigured {
    fn fetch(&self, _title: &str) -> Result<MovieRecord, MetadataError> {
        Err(MetadataError::Config(self.0.clone()))
    }
}

/// Build the OMDb client from the environment and settings file.
pub(crate) fn metadata_source(settings: &Settings) -> Box<dyn MetadataSource> {
    let client = ApiKey::resolve(settings.omdb.api_key.as_deref()).and_then(|key| {
        log::debug!("Using OMDb key from {}", key.source());
        OmdbClient::new(key)
    });
    match client {
        Ok(client) => Box::new(client),
        Err(e) => {
            log::debug!("OMDb lookups disabled: {}", e);
            let reason = match e {
                MetadataError::Config(msg) => msg,
                other => other.to_string(),
            };
            Box::new(Unconfigured(reason))
        }
    }
}

/// Wraps a source with a spinner for the duration of each lookup.
pub(crate) struct WithSpinner<'a> {
    inner: &'a dyn MetadataSource,
    quiet: bool,
}

impl<'a> WithSpinner<'a> {
    pub(crate) fn new(inner: &'a dyn MetadataSource, quiet: bool) -> Self {
        Self { inner, quiet }
    }
}

impl MetadataSource for WithSpinner<'_> {
    fn fetch(&self, title: &str) -> Result<MovieRecord, MetadataError> {
        let _spinner = Spinner::start(format!("Looking up '{title}' on OMDb..."), self.quiet);
        self.inner.fetch(title)
    }
}
