//! Partitioning of image bounds into tiles.
//!
//! A [`TileGrid`] is built from a list of column spans and a list of row
//! spans; every rectangle is a (column, row) pair. The spans are contiguous,
//! start at 0 and end at the output extent, which makes the tiles pairwise
//! disjoint and collectively exhaustive by construction.

use crate::api::PixelateError;
use crate::geometry::TileDimension;

/// Width and height of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Axis-aligned tile bounds. `max_x` and `max_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl TileRect {
    #[inline]
    pub fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.max_y - self.min_y
    }
}

/// How tiles are laid out when the image size is not a tile multiple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Whole tiles only. The right/bottom remainder is dropped, so the
    /// output is a multiple of the tile size.
    #[default]
    Cropped,
    /// Every source pixel is kept. An extra column/row of tiles, shrunk to
    /// the remainder, covers the right/bottom edge.
    Fitted,
    /// Every source pixel is kept. The last whole column/row of tiles is
    /// widened/heightened to absorb the remainder.
    Stretched,
}

impl LayoutMode {
    /// Stable lowercase name, as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Cropped => "cropped",
            LayoutMode::Fitted => "fitted",
            LayoutMode::Stretched => "stretched",
        }
    }
}

/// The tiles of one transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    columns: Vec<(usize, usize)>,
    rows: Vec<(usize, usize)>,
}

impl TileGrid {
    /// Output size covered by the grid.
    pub fn extent(&self) -> Bounds {
        let end = |spans: &[(usize, usize)]| spans.last().map_or(0, |&(_, end)| end);
        Bounds::new(end(&self.columns), end(&self.rows))
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(min_x, max_x)` of every tile column, left to right.
    #[inline]
    pub fn column_spans(&self) -> &[(usize, usize)] {
        &self.columns
    }

    /// `(min_y, max_y)` of every tile row, top to bottom.
    #[inline]
    pub fn row_spans(&self) -> &[(usize, usize)] {
        &self.rows
    }

    /// Size of the largest tile in the grid.
    ///
    /// Never larger than the extent, even when the nominal tile is.
    pub fn largest_tile(&self) -> Bounds {
        let widest = |spans: &[(usize, usize)]| {
            spans.iter().map(|&(start, end)| end - start).max().unwrap_or(0)
        };
        Bounds::new(widest(&self.columns), widest(&self.rows))
    }

    /// Tile rectangles in row-major order.
    pub fn rects(&self) -> impl Iterator<Item = TileRect> + '_ {
        self.rows.iter().flat_map(move |&(y0, y1)| {
            self.columns
                .iter()
                .map(move |&(x0, x1)| TileRect::new(x0, y0, x1, y1))
        })
    }
}

/// Split `bounds` into tiles of `dim` under `layout`.
///
/// Fails on zero-area bounds, and on a [`LayoutMode::Cropped`] layout where
/// not even one whole tile fits.
///
/// # Example
///
/// ```
/// use tri_pixelate::{partition, Bounds, LayoutMode, TileDimension};
///
/// let dim = TileDimension::square(4).unwrap();
/// let bounds = Bounds::new(10, 8);
///
/// let cropped = partition(bounds, dim, LayoutMode::Cropped).unwrap();
/// assert_eq!(cropped.extent(), Bounds::new(8, 8));
/// assert_eq!(cropped.len(), 4);
///
/// let fitted = partition(bounds, dim, LayoutMode::Fitted).unwrap();
/// assert_eq!(fitted.extent(), bounds);
/// assert_eq!(fitted.len(), 6);
/// ```
pub fn partition(
    bounds: Bounds,
    dim: TileDimension,
    layout: LayoutMode,
) -> Result<TileGrid, PixelateError> {
    if bounds.area() == 0 {
        return Err(PixelateError::EmptyBounds {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let grid = TileGrid {
        columns: spans(bounds.width, dim.width(), layout),
        rows: spans(bounds.height, dim.height(), layout),
    };

    if grid.is_empty() {
        return Err(PixelateError::EmptyExtent {
            width: bounds.width,
            height: bounds.height,
            tile_width: dim.width(),
            tile_height: dim.height(),
        });
    }

    Ok(grid)
}

/// Spans along one axis of length `len` with tile size `size`.
fn spans(len: usize, size: usize, layout: LayoutMode) -> Vec<(usize, usize)> {
    let whole = len / size;
    let mut spans: Vec<(usize, usize)> = (0..whole).map(|i| (i * size, (i + 1) * size)).collect();

    let covered = whole * size;
    if covered < len {
        match layout {
            LayoutMode::Cropped => {}
            LayoutMode::Fitted => spans.push((covered, len)),
            LayoutMode::Stretched => match spans.last_mut() {
                Some(last) => last.1 = len,
                // smaller than one tile: a single shrunk span
                None => spans.push((0, len)),
            },
        }
    }

    spans
}
