//! Quadrant sampling and reduction.

use crate::color::{ColorOps, Rgba};
use crate::geometry::{classify_offset, Quadrant, TileDimension};
use crate::raster::Raster;
use crate::tiling::{Bounds, TileRect};

/// Per-quadrant sample buffers for one tile.
///
/// Workers keep one instance and reuse it across tiles; [`sample`] clears it
/// before every scan.
#[derive(Debug, Default)]
pub struct QuadrantBuckets {
    buckets: [Vec<Rgba>; 4],
}

impl QuadrantBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size every bucket for tiles of at most `tile` pixels.
    pub fn with_capacity(tile: Bounds) -> Self {
        // each wedge holds roughly a quarter of the tile
        let cap = tile.area().div_ceil(4);
        Self {
            buckets: std::array::from_fn(|_| Vec::with_capacity(cap)),
        }
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }

    pub fn push(&mut self, quadrant: Quadrant, color: Rgba) {
        self.buckets[quadrant.index()].push(color);
    }

    pub fn get(&self, quadrant: Quadrant) -> &[Rgba] {
        &self.buckets[quadrant.index()]
    }
}

/// The four reduced quadrant colors of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantAverages {
    pub top: Rgba,
    pub right: Rgba,
    pub bottom: Rgba,
    pub left: Rgba,
}

impl QuadrantAverages {
    /// All four quadrants set to one color.
    pub fn uniform(color: Rgba) -> Self {
        Self {
            top: color,
            right: color,
            bottom: color,
            left: color,
        }
    }
}

/// Sample `rect` of `source`, bucket its pixels by quadrant and reduce each
/// bucket with `ops`.
///
/// Offsets are measured from the rectangle's top-left corner and classified
/// against `dim`, even when an edge rectangle is smaller than `dim`. Pixels
/// on a diagonal are skipped. Empty buckets reduce to whatever
/// [`ColorOps::average`] returns for no input.
pub fn sample(
    source: &Raster,
    rect: TileRect,
    dim: TileDimension,
    ops: &dyn ColorOps,
    buckets: &mut QuadrantBuckets,
) -> QuadrantAverages {
    buckets.clear();
    let ratio = dim.ratio();

    for dy in 0..rect.height() {
        for dx in 0..rect.width() {
            if let Some(quadrant) = classify_offset(dim.offset(dx, dy), ratio) {
                buckets.push(quadrant, source.at(rect.min_x + dx, rect.min_y + dy));
            }
        }
    }

    QuadrantAverages {
        top: ops.average(buckets.get(Quadrant::Top)),
        right: ops.average(buckets.get(Quadrant::Right)),
        bottom: ops.average(buckets.get(Quadrant::Bottom)),
        left: ops.average(buckets.get(Quadrant::Left)),
    }
}
