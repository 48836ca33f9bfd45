use reel_catalog::MovieRecord;
use serde::Deserialize;

use crate::error::MetadataError;

/// Response body of a title lookup (`?t=<title>`).
///
/// OMDb sends every value as a string and uses `"N/A"` for unknown fields.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbResponse {
    /// `"True"` on success, `"False"` otherwise.
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Release year, or a range such as `"2010–2014"` for series.
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl OmdbResponse {
    pub fn is_success(&self) -> bool {
        self.response.as_deref() == Some("True")
    }

    /// Convert into a movie record.
    ///
    /// `requested` is used when OMDb returns an empty title. A missing year or
    /// rating counts as not found, since the record can't be stored without it.
    pub fn into_movie(self, requested: &str) -> Result<MovieRecord, MetadataError> {
        if !self.is_success() {
            let reason = self
                .error
                .unwrap_or_else(|| "no result for the requested title".to_string());
            return Err(MetadataError::NotFound(reason));
        }

        let title = self.title.as_deref().map(str::trim).unwrap_or_default();
        let title = if title.is_empty() { requested.trim() } else { title };

        let year = parse_year(self.year.as_deref().unwrap_or_default()).ok_or_else(|| {
            MetadataError::NotFound(format!("invalid year for '{title}'"))
        })?;
        let rating = parse_rating(self.imdb_rating.as_deref().unwrap_or_default())
            .ok_or_else(|| MetadataError::NotFound(format!("no valid rating for '{title}'")))?;

        Ok(MovieRecord::new(title, year, rating).with_poster(clean_poster(
            self.poster.as_deref().unwrap_or_default(),
        )))
    }
}

/// Leading four characters as a year: `"2010–2014"` becomes 2010.
fn parse_year(raw: &str) -> Option<i32> {
    let leading: String = raw.trim().chars().take(4).collect();
    leading.parse().ok()
}

fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

fn clean_poster(raw: &str) -> String {
    match raw.trim() {
        "N/A" | "None" => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
