//! Tile geometry: dimensions, centre-shifted offsets and quadrant classification.
//!
//! Each tile is divided by its two diagonals, the lines `y = ratio * x` and
//! `y = -ratio * x` through the tile centre, into four triangular wedges.
//! Offsets use the same integer centre shift for classification and
//! rendering, so the sampling grid and painting grid line up exactly.

use crate::api::PixelateError;
use crate::tiling::TileRect;

/// Width and height of a tile in pixels. Both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileDimension {
    width: usize,
    height: usize,
}

impl TileDimension {
    /// Create a tile dimension, rejecting zero width or height.
    ///
    /// # Example
    /// ```
    /// use tri_pixelate::TileDimension;
    /// assert!(TileDimension::new(8, 4).is_ok());
    /// assert!(TileDimension::new(0, 4).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, PixelateError> {
        if width == 0 || height == 0 {
            return Err(PixelateError::InvalidTileDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Geometry of a non-empty tile rectangle.
    pub(crate) fn of_rect(rect: TileRect) -> Self {
        debug_assert!(rect.width() > 0 && rect.height() > 0);
        Self {
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Create a square tile dimension.
    pub fn square(size: usize) -> Result<Self, PixelateError> {
        Self::new(size, size)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Slope of the tile diagonals, `height / width`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// Shift a pixel offset within the tile to the tile's centre.
    #[inline]
    pub fn offset(&self, dx: usize, dy: usize) -> Offset {
        let xo = dx as i64 - (self.width / 2) as i64;
        let yo = dy as i64 - (self.height / 2) as i64;
        Offset {
            xo: xo as f64,
            yo: yo as f64,
        }
    }
}

/// A pixel position relative to the (integer) tile centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub xo: f64,
    pub yo: f64,
}

/// One of the four triangular wedges of a tile.
///
/// Names follow a y-up reading of the half-plane inequalities: `Top` is the
/// wedge with the largest `yo`, which lies towards the bottom row of the
/// raster since raster rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Top,
    Right,
    Bottom,
    Left,
}

impl Quadrant {
    /// All quadrants in bucket order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Top,
        Quadrant::Right,
        Quadrant::Bottom,
        Quadrant::Left,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Quadrant::Top => 0,
            Quadrant::Right => 1,
            Quadrant::Bottom => 2,
            Quadrant::Left => 3,
        }
    }
}

/// Classify a pixel at offset `(dx, dy)` from the tile's top-left corner.
///
/// Returns `None` for pixels lying exactly on either diagonal. Those pixels
/// belong to no bucket; the renderer resolves them.
///
/// # Example
/// ```
/// use tri_pixelate::{classify, Quadrant, TileDimension};
///
/// let dim = TileDimension::square(4).unwrap();
/// assert_eq!(classify(2, 3, dim), Some(Quadrant::Top));
/// assert_eq!(classify(2, 0, dim), Some(Quadrant::Bottom));
/// assert_eq!(classify(2, 2, dim), None); // centre
/// ```
pub fn classify(dx: usize, dy: usize, dim: TileDimension) -> Option<Quadrant> {
    classify_offset(dim.offset(dx, dy), dim.ratio())
}

#[inline]
pub(crate) fn classify_offset(offset: Offset, ratio: f64) -> Option<Quadrant> {
    let Offset { xo, yo } = offset;
    let rising = ratio * xo;
    let falling = ratio * -xo;

    if yo > rising && yo > falling {
        Some(Quadrant::Top)
    } else if yo < rising && yo > falling {
        Some(Quadrant::Right)
    } else if yo < rising && yo < falling {
        Some(Quadrant::Bottom)
    } else if yo > rising && yo < falling {
        Some(Quadrant::Left)
    } else {
        None
    }
}
