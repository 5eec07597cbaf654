//! Exclusive write view over one tile of a raster.

use crate::color::Rgba;
use crate::tiling::TileRect;

/// Mutable access to exactly the pixels of one tile.
///
/// Holds one `&mut` row segment per tile row, borrowed from the parent
/// [`Raster`](super::Raster) by [`Raster::tile_views_mut`](super::Raster::tile_views_mut).
/// Coordinates are tile-local: `(0, 0)` is the tile's top-left pixel.
#[derive(Debug)]
pub struct TileViewMut<'a> {
    rect: TileRect,
    rows: Vec<&'a mut [Rgba]>,
}

impl<'a> TileViewMut<'a> {
    pub(crate) fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self {
            rect: TileRect::new(min_x, min_y, max_x, max_y),
            rows: Vec::with_capacity(max_y - min_y),
        }
    }

    pub(crate) fn push_row(&mut self, row: &'a mut [Rgba]) {
        debug_assert_eq!(row.len(), self.rect.width());
        self.rows.push(row);
    }

    /// The tile's rectangle in raster coordinates.
    #[inline]
    pub fn rect(&self) -> TileRect {
        self.rect
    }

    #[inline]
    pub fn get(&self, dx: usize, dy: usize) -> Rgba {
        self.rows[dy][dx]
    }

    #[inline]
    pub fn set(&mut self, dx: usize, dy: usize, color: Rgba) {
        self.rows[dy][dx] = color;
    }
}
