//! Two-triangle tile rendering.

use crate::color::{ColorOps, Rgba};
use crate::geometry::TileDimension;
use crate::raster::TileViewMut;

use super::sample::QuadrantAverages;
use super::select::Orientation;

/// The two flat colors of a rendered tile plus their boundary blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrianglePair {
    /// Color of the half holding pixels above the comparison line
    /// (`yo > ratio * xo` for slash, `yo >= ratio * -xo` for backslash).
    pub upper: Rgba,
    /// Color of the opposite half.
    pub lower: Rgba,
    /// Average of `upper` and `lower`, painted on the diagonal when not aliased.
    pub middle: Rgba,
}

impl TrianglePair {
    /// Merge quadrant averages into the two triangle colors of `orientation`.
    pub fn merge(
        averages: &QuadrantAverages,
        orientation: Orientation,
        ops: &dyn ColorOps,
    ) -> Self {
        let (upper, lower) = match orientation {
            Orientation::Slash => (
                ops.average(&[averages.top, averages.right]),
                ops.average(&[averages.bottom, averages.left]),
            ),
            Orientation::Backslash => (
                ops.average(&[averages.top, averages.left]),
                ops.average(&[averages.bottom, averages.right]),
            ),
        };
        Self {
            upper,
            lower,
            middle: ops.average(&[upper, lower]),
        }
    }
}

/// Fill every pixel of `view` with its triangle color.
///
/// With `aliased == false` pixels exactly on the diagonal get the blended
/// middle color. With `aliased == true` they fall to one side: the
/// bottom-left half for slash, the top-left half for backslash.
///
/// Slash tests `yo > ratio * xo` while backslash tests `yo < ratio * -xo`.
/// The opposite senses keep diagonals of neighbouring tiles with different
/// orientations on the same pixel grid.
pub fn render(
    view: &mut TileViewMut<'_>,
    dim: TileDimension,
    orientation: Orientation,
    averages: &QuadrantAverages,
    aliased: bool,
    ops: &dyn ColorOps,
) {
    let pair = TrianglePair::merge(averages, orientation, ops);
    let ratio = dim.ratio();
    let rect = view.rect();

    for dy in 0..rect.height() {
        for dx in 0..rect.width() {
            let o = dim.offset(dx, dy);
            let color = match orientation {
                Orientation::Slash => {
                    let line = ratio * o.xo;
                    if o.yo > line {
                        pair.upper
                    } else if o.yo == line && !aliased {
                        pair.middle
                    } else {
                        pair.lower
                    }
                }
                Orientation::Backslash => {
                    let line = ratio * -o.xo;
                    if o.yo < line {
                        pair.lower
                    } else if o.yo == line && !aliased {
                        pair.middle
                    } else {
                        pair.upper
                    }
                }
            };
            view.set(dx, dy, color);
        }
    }
}
