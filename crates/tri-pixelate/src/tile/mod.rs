//! Per-tile pipeline: sample → select → render.
//!
//! Each stage is a free function so it can be tested on its own;
//! [`process_tile`] composes them for the orchestrator.

mod render;
mod sample;
mod select;

pub use render::{render, TrianglePair};
pub use sample::{sample, QuadrantAverages, QuadrantBuckets};
pub use select::{select_orientation, Orientation, TriangleMode};

use crate::color::ColorOps;
use crate::geometry::TileDimension;
use crate::raster::{Raster, TileViewMut};

/// Settings shared by every tile of one transform.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TileSettings {
    /// Nominal tile size; edge tiles of fitted/stretched grids differ.
    pub dim: TileDimension,
    pub mode: TriangleMode,
    pub aliased: bool,
}

/// Run the full tile pipeline for one view and return the chosen orientation.
///
/// The triangle geometry follows the view's own rectangle, so shrunk or
/// widened edge tiles get a triangle pair of their own proportions.
pub(crate) fn process_tile(
    source: &Raster,
    view: &mut TileViewMut<'_>,
    settings: TileSettings,
    ops: &dyn ColorOps,
    buckets: &mut QuadrantBuckets,
) -> Orientation {
    let rect = view.rect();
    let dim = TileDimension::of_rect(rect);
    let averages = sample(source, rect, dim, ops, buckets);
    let orientation = select_orientation(&averages, settings.mode, ops);
    render(view, dim, orientation, &averages, settings.aliased, ops);
    orientation
}
