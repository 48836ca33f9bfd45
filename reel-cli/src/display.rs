//! Line formatting shared by the one-shot commands and the interactive menu.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reel_catalog::{Histogram, MovieRecord, Statistics, BUCKET_COUNT};

/// `Title (year): rating`
pub(crate) fn movie_line(movie: &MovieRecord) -> String {
    format!(
        "{} ({}): {}",
        movie.title.if_supports_color(Stdout, |t| t.bold()),
        movie.year,
        format_rating(movie.rating).if_supports_color(Stdout, |t| t.cyan()),
    )
}

pub(crate) fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Statistics block, one line per entry.
pub(crate) fn statistics_lines(stats: &Statistics) -> Vec<String> {
    let mut lines = vec![
        format!("Average rating: {:.2}", stats.mean),
        format!("Median rating:  {:.2}", stats.median),
        format!("Best ({}):", format_rating(stats.max)),
    ];
    lines.extend(stats.best_titles.iter().map(|t| format!("  - {t}")));
    lines.push(format!("Worst ({}):", format_rating(stats.min)));
    lines.extend(stats.worst_titles.iter().map(|t| format!("  - {t}")));
    lines
}

/// Text rendering of the buckets, e.g. `  7.0 - 7.2 | ##  2`.
pub(crate) fn histogram_lines(histogram: &Histogram) -> Vec<String> {
    const BAR_WIDTH: usize = 30;
    let tallest = histogram.tallest().max(1);
    (0..BUCKET_COUNT)
        .map(|i| {
            let (start, end) = histogram.bucket_bounds(i);
            let count = histogram.counts[i];
            let bar = "#".repeat(count * BAR_WIDTH / tallest);
            format!("  {start:>5.2} - {end:>5.2} | {bar} {count}")
        })
        .collect()
}

/// Colored check mark for success lines.
pub(crate) fn ok_mark() -> String {
    "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
}

/// Colored cross for failure lines.
pub(crate) fn fail_mark() -> String {
    "\u{2718}".if_supports_color(Stdout, |t| t.red()).to_string()
}
