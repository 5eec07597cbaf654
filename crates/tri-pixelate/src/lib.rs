//! tri-pixelate: low-poly triangle pixelation
//!
//! Replaces every rectangular tile of a raster with one or two flat-colored
//! right-angle triangles.
//!
//! # Quick Start
//!
//! ```
//! use tri_pixelate::{LayoutMode, Pixelator, Raster, Rgba, TileDimension};
//!
//! let source = Raster::filled(32, 20, Rgba::opaque(40, 120, 200));
//! let pixelator = Pixelator::new(TileDimension::new(8, 8).unwrap())
//!     .layout(LayoutMode::Fitted);
//!
//! let out = pixelator.pixelate(&source).unwrap();
//! assert_eq!((out.width(), out.height()), (32, 20));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source Raster
//!     |
//!     v
//! partition()            (TileGrid: Cropped | Fitted | Stretched)
//!     |
//!     v
//! Raster::tile_views_mut (one exclusive TileViewMut per tile)
//!     |
//!     +--- rayon, one task per tile ------------------------+
//!     |   sample()              bucket pixels by wedge,     |
//!     |                         reduce with ColorOps       |
//!     |   select_orientation()  slash or backslash          |
//!     |   render()              fill the two triangles      |
//!     +-----------------------------------------------------+
//!     |
//!     v
//! destination Raster
//! ```
//!
//! # Tile Geometry
//!
//! A tile of width `w` and height `h` is cut by the lines `y = r*x` and
//! `y = -r*x` (`r = h / w`) through its integer centre `(w/2, h/2)`. The
//! four wedges are sampled separately. Their averages decide whether the
//! tile is split along `/` ([`Orientation::Slash`]) or `\`
//! ([`Orientation::Backslash`]): under [`TriangleMode::Both`], slash is
//! chosen only when the top wedge is strictly closer to the right wedge than
//! to the left one.
//!
//! Pixels exactly on a diagonal are never sampled. When not aliased they
//! are painted with the average of the two triangle colors.
//!
//! # Parallelism
//!
//! Tiles never share a destination pixel, so [`Raster::tile_views_mut`]
//! hands every tile its own `&mut` row segments and workers write without
//! locks. The degree of parallelism is an explicit option
//! ([`PixelateOptions::threads`]); output is identical for any value.
//!
//! # Color Operations
//!
//! All color arithmetic goes through the [`ColorOps`] trait. [`MeanColor`]
//! is the default: per-channel mean (alpha included) and sum of absolute
//! channel differences, with [`Rgba::TRANSPARENT`] as the average of no
//! colors.

pub mod api;
pub mod color;
pub mod geometry;
pub mod raster;
pub mod tile;
pub mod tiling;

#[cfg(test)]
mod domain_tests;

pub use api::{pixelate, PixelateError, PixelateOptions, Pixelator};
pub use color::{ColorOps, MeanColor, Rgba};
pub use geometry::{classify, Offset, Quadrant, TileDimension};
pub use raster::{Raster, TileViewMut};
pub use tile::{
    render, sample, select_orientation, Orientation, QuadrantAverages, QuadrantBuckets,
    TriangleMode, TrianglePair,
};
pub use tiling::{partition, Bounds, LayoutMode, TileGrid, TileRect};
