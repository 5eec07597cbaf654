//! Raster storage and per-tile write views.

mod buffer;
mod view;

pub use buffer::Raster;
pub use view::TileViewMut;
