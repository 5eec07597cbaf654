//! Transform options and the parallel orchestrator.

use std::time::Instant;

use rayon::prelude::*;

use crate::color::{ColorOps, Rgba};
use crate::geometry::TileDimension;
use crate::raster::Raster;
use crate::tile::{process_tile, QuadrantBuckets, TileSettings, TriangleMode};
use crate::tiling::{partition, LayoutMode, TileGrid};

use super::error::PixelateError;

/// Configuration of one pixelation transform.
///
/// # Defaults
///
/// - Triangle mode: [`TriangleMode::Both`]
/// - Layout: [`LayoutMode::Cropped`]
/// - Aliased: `false` (diagonal pixels are blended)
/// - Threads: `None` (rayon's global pool)
///
/// # Example
///
/// ```
/// use tri_pixelate::{LayoutMode, PixelateOptions, TileDimension, TriangleMode};
///
/// let options = PixelateOptions::new(TileDimension::square(16).unwrap())
///     .triangle_mode(TriangleMode::Right)
///     .layout(LayoutMode::Fitted)
///     .threads(Some(2));
/// assert_eq!(options.threads, Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelateOptions {
    /// Geometry of every triangle pair.
    pub tile: TileDimension,
    /// Orientation policy.
    pub triangle_mode: TriangleMode,
    /// Handling of the right/bottom remainder.
    pub layout: LayoutMode,
    /// Paint diagonal pixels with one triangle color instead of a blend.
    pub aliased: bool,
    /// Degree of parallelism. `None` uses the global rayon pool, sized to the
    /// available hardware parallelism; `Some(n)` builds a dedicated pool of
    /// `n` threads for the call.
    pub threads: Option<usize>,
}

impl PixelateOptions {
    pub fn new(tile: TileDimension) -> Self {
        Self {
            tile,
            triangle_mode: TriangleMode::default(),
            layout: LayoutMode::default(),
            aliased: false,
            threads: None,
        }
    }

    #[inline]
    pub fn triangle_mode(mut self, mode: TriangleMode) -> Self {
        self.triangle_mode = mode;
        self
    }

    #[inline]
    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    #[inline]
    pub fn aliased(mut self, aliased: bool) -> Self {
        self.aliased = aliased;
        self
    }

    #[inline]
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

/// Pixelate `source` into flat-colored triangle pairs.
///
/// Configuration is validated up front. The destination raster is then split
/// into one exclusive view per tile and every tile is sampled, classified and
/// rendered as an independent rayon task. The call returns once all tiles are
/// done. Output depends only on the inputs, never on the thread count.
///
/// # Example
///
/// ```
/// use tri_pixelate::{pixelate, MeanColor, PixelateOptions, Raster, Rgba, TileDimension};
///
/// let source = Raster::filled(8, 8, Rgba::WHITE);
/// let options = PixelateOptions::new(TileDimension::square(4).unwrap());
/// let out = pixelate(&source, &options, &MeanColor).unwrap();
/// assert_eq!(out, source);
/// ```
pub fn pixelate(
    source: &Raster,
    options: &PixelateOptions,
    ops: &dyn ColorOps,
) -> Result<Raster, PixelateError> {
    let threads = match options.threads {
        Some(0) => return Err(PixelateError::InvalidThreadCount),
        threads => threads,
    };

    let grid = partition(source.bounds(), options.tile, options.layout)?;
    let settings = TileSettings {
        dim: options.tile,
        mode: options.triangle_mode,
        aliased: options.aliased,
    };

    match threads {
        None => Ok(run_tiles(source, &grid, options.layout, settings, ops)),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            Ok(pool.install(|| run_tiles(source, &grid, options.layout, settings, ops)))
        }
    }
}

fn run_tiles(
    source: &Raster,
    grid: &TileGrid,
    layout: LayoutMode,
    settings: TileSettings,
    ops: &dyn ColorOps,
) -> Raster {
    let extent = grid.extent();
    let started = Instant::now();
    tracing::debug!(
        tiles = grid.len(),
        width = extent.width,
        height = extent.height,
        tile_width = settings.dim.width(),
        tile_height = settings.dim.height(),
        layout = layout.name(),
        mode = settings.mode.name(),
        aliased = settings.aliased,
        threads = rayon::current_num_threads(),
        "Pixelating"
    );

    // edge tiles never exceed the image, whatever the nominal tile size
    let largest = grid.largest_tile();
    let mut dest = Raster::filled(extent.width, extent.height, Rgba::TRANSPARENT);
    dest.tile_views_mut(grid).into_par_iter().for_each_init(
        || QuadrantBuckets::with_capacity(largest),
        |buckets, mut view| {
            let orientation = process_tile(source, &mut view, settings, ops, buckets);
            tracing::trace!(rect = ?view.rect(), ?orientation, "Tile rendered");
        },
    );

    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Pixelation complete"
    );
    dest
}
