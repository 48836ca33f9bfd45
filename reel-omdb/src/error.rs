/// Errors that can occur while fetching movie metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// OMDb answered, but has no usable entry for the title.
    #[error("Movie not found on OMDb: {0}")]
    NotFound(String),

    /// OMDb could not be reached or sent something unreadable.
    #[error("OMDb is unreachable: {0}")]
    Unreachable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MetadataError {
    /// True when the caller should fall back to entering the data by hand.
    pub fn allows_manual_entry(&self) -> bool {
        matches!(self, Self::Unreachable(_) | Self::Config(_))
    }
}

impl From<reqwest::Error> for MetadataError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unreachable(e.to_string())
    }
}
