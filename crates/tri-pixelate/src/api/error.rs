//! Error type for the tri-pixelate public API.

use thiserror::Error;

/// Configuration and input errors.
///
/// Every variant is detected before any tile work is dispatched: once a
/// transform starts it runs to completion.
#[derive(Debug, Error)]
pub enum PixelateError {
    /// Tile width or height is zero
    #[error("invalid tile dimension {width}x{height}: width and height must be positive")]
    InvalidTileDimension { width: usize, height: usize },

    /// Source raster has zero area
    #[error("image bounds {width}x{height} have zero area")]
    EmptyBounds { width: usize, height: usize },

    /// Cropped layout where no whole tile fits
    #[error("no whole {tile_width}x{tile_height} tile fits in a {width}x{height} image")]
    EmptyExtent {
        width: usize,
        height: usize,
        tile_width: usize,
        tile_height: usize,
    },

    /// Pixel buffer length does not match the declared dimensions
    #[error("pixel buffer has {actual} elements, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// `threads` was set to zero
    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    /// Dedicated worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
