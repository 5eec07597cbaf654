//! Public API for the tri-pixelate crate.
//!
//! This module provides the [`pixelate()`] orchestrator, its
//! [`PixelateOptions`], the [`Pixelator`] builder and the
//! [`PixelateError`] error type.

mod builder;
mod error;
mod pixelate;

pub use builder::Pixelator;
pub use error::PixelateError;
pub use pixelate::{pixelate, PixelateOptions};
