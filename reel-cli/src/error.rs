use reel_db::SchemaError;
use reel_export::ExportError;
use reel_lib::CollectionError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened
    #[error("Database error: {0}")]
    Database(#[from] SchemaError),

    /// Collection operation failed
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Export or histogram failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the interactive menu can report this and carry on.
    pub(crate) fn is_recoverable(&self) -> bool {
        match self {
            Self::Collection(e) => e.is_recoverable(),
            Self::Export(_) | Self::Config(_) => true,
            Self::Io(_) | Self::Database(_) | Self::Json(_) => false,
        }
    }
}
