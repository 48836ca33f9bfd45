use reel_catalog::ProfileId;
use reel_db::{MissingEntity, StoreError};
use reel_omdb::MetadataError;
use thiserror::Error;

/// Errors surfaced by the collection service.
///
/// Everything except a storage failure is recoverable: the caller reports it
/// and asks the user again.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A profile with exactly this name exists
    #[error("Profile '{name}' already exists")]
    DuplicateProfile { name: String },

    /// No profile with this name
    #[error("Profile '{name}' not found")]
    ProfileNotFound { name: String },

    /// The profile id no longer has a row, e.g. deleted by another session
    #[error("Profile #{id} no longer exists")]
    UnknownProfileId { id: ProfileId },

    /// A movie matching the title (ignoring case) is already stored
    #[error("'{existing}' is already in the collection")]
    DuplicateMovie { existing: String },

    /// No stored title matches the query
    #[error("Movie '{query}' not found")]
    MovieNotFound { query: String },

    /// Menu selection out of range
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Blank title/name or unusable rating
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Metadata lookup failed
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Database failure or broken invariant
    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl CollectionError {
    pub fn invalid_choice(msg: impl Into<String>) -> Self {
        Self::InvalidChoice(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// False only for database failures and broken store invariants.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Store(e) => e.is_recoverable(),
            _ => true,
        }
    }
}

impl From<StoreError> for CollectionError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateProfile { name } => Self::DuplicateProfile { name },
            StoreError::DuplicateMovie { title } => Self::DuplicateMovie { existing: title },
            StoreError::NotFound(MissingEntity::Movie(title)) => {
                Self::MovieNotFound { query: title }
            }
            StoreError::NotFound(MissingEntity::Profile(id)) => Self::UnknownProfileId { id },
            StoreError::EmptyName => Self::invalid_input("name must not be empty"),
            other => Self::Store(other),
        }
    }
}
