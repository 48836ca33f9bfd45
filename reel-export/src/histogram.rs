use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use reel_catalog::{histogram_buckets, Histogram, Snapshot, BUCKET_COUNT};

use crate::ExportError;

pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 400;
const MARGIN: u32 = 40;
const BAR_GAP: u32 = 4;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([60, 60, 60]);
const BAR: Rgb<u8> = Rgb([70, 130, 180]);

/// Draw one bar per bucket, heights scaled so the tallest bucket fills the
/// plot area.
pub fn render_histogram(histogram: &Histogram) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    let plot_w = CANVAS_WIDTH - 2 * MARGIN;
    let plot_h = CANVAS_HEIGHT - 2 * MARGIN;
    let baseline = CANVAS_HEIGHT - MARGIN;
    let slot_w = plot_w / BUCKET_COUNT as u32;
    let tallest = histogram.tallest();

    if tallest > 0 {
        for (i, &count) in histogram.counts.iter().enumerate() {
            let bar_h = (count as u64 * plot_h as u64 / tallest as u64) as u32;
            let x0 = MARGIN + slot_w * i as u32 + BAR_GAP / 2;
            let x1 = x0 + slot_w - BAR_GAP;
            fill_rect(&mut canvas, x0, baseline - bar_h, x1, baseline, BAR);
        }
    }

    // Axes
    fill_rect(&mut canvas, MARGIN, baseline, CANVAS_WIDTH - MARGIN, baseline + 1, AXIS);
    fill_rect(&mut canvas, MARGIN - 1, MARGIN, MARGIN, baseline + 1, AXIS);

    canvas
}

/// Render the rating histogram of `snapshot` to a PNG at `path`.
///
/// A `.png` extension is added when `path` has none. Returns the written path.
pub fn write_histogram(snapshot: &Snapshot, path: &Path) -> Result<PathBuf, ExportError> {
    let histogram = histogram_buckets(snapshot).ok_or(ExportError::EmptyCollection)?;

    let path = if path.extension().is_none() {
        path.with_extension("png")
    } else {
        path.to_path_buf()
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    render_histogram(&histogram).save(&path)?;
    log::debug!(
        "Histogram of {} ratings over [{:.1}, {:.1}] saved to {}",
        histogram.total(),
        histogram.lower,
        histogram.upper,
        path.display()
    );
    Ok(path)
}

/// Fill `[x0, x1) x [y0, y1)`, clipped to the canvas.
fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
#[path = "tests/histogram_tests.rs"]
mod tests;
