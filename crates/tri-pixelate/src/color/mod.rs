//! Color type and the color capabilities consumed by the pipeline
//!
//! - [`Rgba`]: the 8-bit straight-alpha pixel stored in every raster.
//! - [`ColorOps`]: averaging and closeness, supplied by the caller.
//! - [`MeanColor`]: the default component-mean implementation.

mod ops;
mod rgba;

pub use ops::{ColorOps, MeanColor};
pub use rgba::Rgba;
