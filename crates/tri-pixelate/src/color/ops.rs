//! Color averaging and closeness capabilities.
//!
//! The pixelation pipeline never does color arithmetic itself. It reduces
//! quadrant samples and merges triangle colors through a [`ColorOps`]
//! implementation, and compares quadrant averages through the same trait.

use super::rgba::Rgba;

/// Averaging and closeness operations consumed by the tile pipeline.
///
/// Implementations are shared across worker threads and must be `Sync`.
pub trait ColorOps: Sync {
    /// Reduce a sequence of colors to one representative color.
    ///
    /// Must accept an empty slice and return a defined color for it. Empty
    /// input is common: thin tiles leave whole quadrants unsampled.
    fn average(&self, colors: &[Rgba]) -> Rgba;

    /// Symmetric distance between two colors. Lower means more similar.
    fn closeness(&self, a: Rgba, b: Rgba) -> f64;
}

/// Component-wise arithmetic mean over R, G, B and A.
///
/// - `average` rounds each channel mean to the nearest integer and returns
///   [`Rgba::TRANSPARENT`] for an empty slice.
/// - `closeness` is the sum of absolute per-channel differences, so two
///   identical colors are at distance `0.0` and black vs. white (both
///   opaque) is `765.0`.
///
/// # Example
///
/// ```
/// use tri_pixelate::{ColorOps, MeanColor, Rgba};
///
/// let grey = MeanColor.average(&[Rgba::BLACK, Rgba::WHITE]);
/// assert_eq!(grey, Rgba::new(128, 128, 128, 255));
/// assert_eq!(MeanColor.average(&[]), Rgba::TRANSPARENT);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanColor;

impl ColorOps for MeanColor {
    fn average(&self, colors: &[Rgba]) -> Rgba {
        if colors.is_empty() {
            return Rgba::TRANSPARENT;
        }

        let mut sum = [0u64; 4];
        for c in colors {
            sum[0] += c.r as u64;
            sum[1] += c.g as u64;
            sum[2] += c.b as u64;
            sum[3] += c.a as u64;
        }

        let n = colors.len() as u64;
        let mean = |s: u64| ((s + n / 2) / n) as u8;
        Rgba::new(mean(sum[0]), mean(sum[1]), mean(sum[2]), mean(sum[3]))
    }

    fn closeness(&self, a: Rgba, b: Rgba) -> f64 {
        let d = |x: u8, y: u8| x.abs_diff(y) as u32;
        (d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b) + d(a.a, b.a)) as f64
    }
}
