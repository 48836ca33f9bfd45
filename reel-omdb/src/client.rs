use std::time::Duration;

use reel_catalog::MovieRecord;

use crate::credentials::ApiKey;
use crate::error::MetadataError;
use crate::types::OmdbResponse;
use crate::MetadataSource;

const BASE_URL: &str = "https://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the OMDb API.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    api_key: ApiKey,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: ApiKey) -> Result<Self, MetadataError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint (a proxy or a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up a movie by title.
    ///
    /// Transport failures, HTTP error statuses and unparsable bodies are
    /// [`MetadataError::Unreachable`]; an answer without a usable movie is
    /// [`MetadataError::NotFound`].
    pub fn fetch_movie(&self, title: &str) -> Result<MovieRecord, MetadataError> {
        log::debug!("OMDb lookup for '{}'", title);

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.value()), ("t", title)])
            .send()?
            .error_for_status()?;

        let text = resp.text()?;
        let parsed: OmdbResponse = serde_json::from_str(&text).map_err(|e| {
            MetadataError::Unreachable(format!(
                "Failed to parse OMDb response: {e}. Response: {}",
                text.chars().take(200).collect::<String>()
            ))
        })?;

        let movie = parsed.into_movie(title)?;
        log::debug!("OMDb resolved '{}' to '{}' ({})", title, movie.title, movie.year);
        Ok(movie)
    }
}

impl MetadataSource for OmdbClient {
    fn fetch(&self, title: &str) -> Result<MovieRecord, MetadataError> {
        self.fetch_movie(title)
    }
}
