use std::path::PathBuf;

/// Errors that can occur while exporting a collection.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Template not found: {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Invalid output name '{name}': use a plain file name")]
    InvalidName { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No movies to export")]
    EmptyCollection,
}
