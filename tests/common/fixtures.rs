//! Test fixtures: source images and config files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tri_pixelate::{Raster, Rgba};
use trixel::rendering::write_png;

pub const RED: Rgba = Rgba::opaque(255, 0, 0);
pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);

/// A config file with two presets; `mosaic` is the default.
pub const SAMPLE_CONFIG: &str = r#"
default_preset: mosaic
presets:
  mosaic:
    tile: "4x4"
    triangle: both
    layout: fitted
    aliased: false
    threads: 2
  coarse:
    tile: 5
    layout: cropped
"#;

/// Scratch directory that is removed when dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `raster` as a PNG inside the workspace and return its path.
    pub fn png(&self, name: &str, raster: &Raster) -> PathBuf {
        let path = self.path(name);
        write_png(raster, &path).expect("Failed to write fixture PNG");
        path
    }

    /// Write a config file inside the workspace and return its path.
    pub fn config(&self, yaml: &str) -> PathBuf {
        let path = self.path("trixel.yaml");
        std::fs::write(&path, yaml).expect("Failed to write fixture config");
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Left part red, the last `green_columns` columns green.
pub fn split_image(width: usize, height: usize, green_columns: usize) -> Raster {
    let mut raster = Raster::filled(width, height, RED);
    for y in 0..height {
        for x in width - green_columns..width {
            raster.set(x, y, GREEN);
        }
    }
    raster
}

/// Deterministic colorful test image.
pub fn gradient_image(width: usize, height: usize) -> Raster {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Rgba::new((x * 9) as u8, (y * 13) as u8, ((x + y) * 3) as u8, 255)
        })
        .collect();
    Raster::from_pixels(width, height, pixels).expect("pixel count matches size")
}
