//! Output artifacts built from a movie collection: a static HTML page
//! rendered from a template, and a PNG rating histogram.

pub mod error;
pub mod histogram;
pub mod html;

pub use error::ExportError;
pub use histogram::{render_histogram, write_histogram};
pub use html::{
    default_app_title, export_site, movie_card, render_page, template_path, GRID_PLACEHOLDER,
    TEMPLATE_FILE, TITLE_PLACEHOLDER,
};
