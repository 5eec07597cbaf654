//! Owned RGBA raster.

use crate::api::PixelateError;
use crate::color::Rgba;
use crate::tiling::{Bounds, TileGrid};

use super::view::TileViewMut;

/// A row-major grid of [`Rgba`] pixels.
///
/// # Example
///
/// ```
/// use tri_pixelate::{Raster, Rgba};
///
/// let mut raster = Raster::filled(3, 2, Rgba::BLACK);
/// raster.set(2, 1, Rgba::WHITE);
///
/// assert_eq!(raster.at(2, 1), Rgba::WHITE);
/// assert_eq!(raster.to_rgba8().len(), 3 * 2 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Create a raster with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Create a raster from pixels in row-major order.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Rgba>,
    ) -> Result<Self, PixelateError> {
        if pixels.len() != width * height {
            return Err(PixelateError::BufferSize {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster from interleaved RGBA8 bytes.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, PixelateError> {
        if bytes.len() != width * height * 4 {
            return Err(PixelateError::BufferSize {
                expected: width * height * 4,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Interleaved RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// Split the raster into one exclusive view per tile of `grid`.
    ///
    /// Views are returned in the same row-major order as
    /// [`TileGrid::rects`]. Each view borrows only its own row segments, so
    /// the views can be handed to different threads and written without
    /// synchronisation.
    ///
    /// # Panics
    ///
    /// Panics if the grid extent does not match the raster size.
    pub fn tile_views_mut(&mut self, grid: &TileGrid) -> Vec<TileViewMut<'_>> {
        let extent = grid.extent();
        assert_eq!(
            (extent.width, extent.height),
            (self.width, self.height),
            "tile grid extent must match raster size"
        );

        let width = self.width;
        let mut views: Vec<TileViewMut<'_>> = Vec::with_capacity(grid.len());
        let mut rest: &mut [Rgba] = &mut self.pixels;

        for &(y0, y1) in grid.row_spans() {
            let (band, tail) = std::mem::take(&mut rest).split_at_mut((y1 - y0) * width);
            rest = tail;

            let first = views.len();
            views.extend(
                grid.column_spans()
                    .iter()
                    .map(|&(x0, x1)| TileViewMut::new(x0, y0, x1, y1)),
            );

            for mut row in band.chunks_mut(width) {
                for (view, &(x0, x1)) in views[first..].iter_mut().zip(grid.column_spans()) {
                    let (segment, tail) = std::mem::take(&mut row).split_at_mut(x1 - x0);
                    view.push_row(segment);
                    row = tail;
                }
            }
        }

        views
    }
}
