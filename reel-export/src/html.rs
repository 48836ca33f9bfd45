use std::fs;
use std::path::{Path, PathBuf};

use reel_catalog::{sort_by_rating_desc, MovieRecord, Snapshot};

use crate::ExportError;

/// Template file name inside the static directory.
pub const TEMPLATE_FILE: &str = "index_template.html";

/// Replaced with the escaped page title.
pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";

/// Replaced with the `<li>` movie cards.
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

pub fn template_path(static_dir: &Path) -> PathBuf {
    static_dir.join(TEMPLATE_FILE)
}

/// Page title used when none is given, e.g. `"Alice's Movie App"`.
pub fn default_app_title(profile_name: &str) -> String {
    format!("{profile_name}'s Movie App")
}

/// Render `snapshot` into `static_dir/<output_name>.html` using the template
/// in the same directory. Returns the written path.
pub fn export_site(
    snapshot: &Snapshot,
    app_title: &str,
    output_name: &str,
    static_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let file_name = output_file_name(output_name)?;
    let template_path = template_path(static_dir);
    if !template_path.is_file() {
        return Err(ExportError::TemplateMissing {
            path: template_path,
        });
    }
    let template = fs::read_to_string(&template_path)?;

    let output_path = static_dir.join(file_name);
    fs::write(&output_path, render_page(&template, snapshot, app_title))?;

    log::debug!(
        "Exported {} movies to {}",
        snapshot.len(),
        output_path.display()
    );
    Ok(output_path)
}

/// Substitute the title and the movie grid (highest rating first) into
/// `template`.
pub fn render_page(template: &str, snapshot: &Snapshot, app_title: &str) -> String {
    let grid = sort_by_rating_desc(snapshot)
        .into_iter()
        .map(movie_card)
        .collect::<Vec<_>>()
        .join("\n");

    template
        .replace(TITLE_PLACEHOLDER, &escape_html(app_title))
        .replace(GRID_PLACEHOLDER, &grid)
}

/// One `<li>` card: poster (or a placeholder), title and year.
pub fn movie_card(movie: &MovieRecord) -> String {
    let title = escape_html(&movie.title);

    let poster = if movie.has_poster() {
        format!(
            "<img class=\"movie-poster\" src=\"{}\" alt=\"{} poster\" />",
            escape_html(&movie.poster),
            title
        )
    } else {
        "<div class=\"movie-poster\" style=\"display:flex;align-items:center;justify-content:center;\">No poster</div>"
            .to_string()
    };

    let mut card = String::new();
    card.push_str("<li>\n");
    card.push_str("  <div class=\"movie\">\n");
    card.push_str(&format!("    {poster}\n"));
    card.push_str(&format!("    <div class=\"movie-title\">{title}</div>\n"));
    card.push_str(&format!("    <div class=\"movie-year\">{}</div>\n", movie.year));
    card.push_str("  </div>\n");
    card.push_str("</li>");
    card
}

/// `alice` and `alice.html` both become `alice.html`.
///
/// The name must be a single path component so the page lands inside the
/// static directory.
fn output_file_name(name: &str) -> Result<String, ExportError> {
    let name = name.trim();
    let single_component = !name.contains(['/', '\\'])
        && Path::new(name).file_name().is_some_and(|f| f == name);
    if !single_component {
        return Err(ExportError::InvalidName {
            name: name.to_string(),
        });
    }

    if name.to_ascii_lowercase().ends_with(".html") {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}.html"))
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
