//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;
use tri_pixelate::{Raster, Rgba};
use trixel::rendering::read_png;

/// Assert the file is a PNG and decode it
pub fn assert_png_file(path: &Path) -> Raster {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output file {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG signature in {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    read_png(path).expect("Output PNG should decode")
}

/// Assert raster dimensions
pub fn assert_size(raster: &Raster, width: usize, height: usize) {
    assert_eq!(
        (raster.width(), raster.height()),
        (width, height),
        "Unexpected raster size"
    );
}

/// Assert every pixel in the column range satisfies `pred`
pub fn assert_columns(
    raster: &Raster,
    columns: std::ops::Range<usize>,
    pred: impl Fn(Rgba) -> bool,
) {
    for y in 0..raster.height() {
        for x in columns.clone() {
            let px = raster.at(x, y);
            assert!(pred(px), "Unexpected pixel {px:?} at ({x}, {y})");
        }
    }
}
