//! Pixelator builder -- the ergonomic entry point for the crate.
//!
//! [`Pixelator`] wraps [`pixelate()`](super::pixelate) with fluent
//! configuration and an owned [`ColorOps`] implementation.

use crate::color::{ColorOps, MeanColor};
use crate::geometry::TileDimension;
use crate::raster::Raster;
use crate::tile::TriangleMode;
use crate::tiling::LayoutMode;

use super::error::PixelateError;
use super::pixelate::{pixelate, PixelateOptions};

/// High-level pixelation builder.
///
/// - Constructor requires a [`TileDimension`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`pixelate()`](Self::pixelate) takes `&self`, so one builder can
///   process many images
///
/// # Example
///
/// ```
/// use tri_pixelate::{LayoutMode, Pixelator, Raster, Rgba, TileDimension, TriangleMode};
///
/// let pixelator = Pixelator::new(TileDimension::new(4, 2).unwrap())
///     .triangle_mode(TriangleMode::Left)
///     .layout(LayoutMode::Fitted)
///     .aliased(true);
///
/// let source = Raster::filled(10, 5, Rgba::BLACK);
/// let out = pixelator.pixelate(&source).unwrap();
///
/// assert_eq!(out.width(), 10);
/// assert_eq!(out.height(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Pixelator<C = MeanColor> {
    options: PixelateOptions,
    ops: C,
}

impl Pixelator<MeanColor> {
    /// Create a pixelator using component-mean color operations.
    pub fn new(tile: TileDimension) -> Self {
        Self {
            options: PixelateOptions::new(tile),
            ops: MeanColor,
        }
    }
}

impl<C: ColorOps> Pixelator<C> {
    /// Create a pixelator from complete options.
    pub fn with_options(options: PixelateOptions, ops: C) -> Self {
        Self { options, ops }
    }

    /// Replace the color averaging/closeness implementation.
    pub fn color_ops<D: ColorOps>(self, ops: D) -> Pixelator<D> {
        Pixelator {
            options: self.options,
            ops,
        }
    }

    #[inline]
    pub fn triangle_mode(mut self, mode: TriangleMode) -> Self {
        self.options = self.options.triangle_mode(mode);
        self
    }

    #[inline]
    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.options = self.options.layout(layout);
        self
    }

    #[inline]
    pub fn aliased(mut self, aliased: bool) -> Self {
        self.options = self.options.aliased(aliased);
        self
    }

    /// Run on a dedicated pool of `threads` workers.
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.options = self.options.threads(Some(threads));
        self
    }

    #[inline]
    pub fn options(&self) -> &PixelateOptions {
        &self.options
    }

    /// Pixelate one raster.
    pub fn pixelate(&self, source: &Raster) -> Result<Raster, PixelateError> {
        pixelate(source, &self.options, &self.ops)
    }
}
