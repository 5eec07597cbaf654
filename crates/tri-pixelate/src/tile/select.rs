//! Triangle orientation selection.

use crate::color::ColorOps;

use super::sample::QuadrantAverages;

/// Which diagonal splits a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Split along `/`: top+right merged against bottom+left.
    Slash,
    /// Split along `\`: top+left merged against bottom+right.
    Backslash,
}

/// Global triangle selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleMode {
    /// Pick the orientation per tile from its quadrant colors.
    #[default]
    Both,
    /// Always [`Orientation::Backslash`].
    Left,
    /// Always [`Orientation::Slash`].
    Right,
}

impl TriangleMode {
    /// Stable lowercase name, as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            TriangleMode::Both => "both",
            TriangleMode::Left => "left",
            TriangleMode::Right => "right",
        }
    }
}

/// Decide the orientation of one tile.
///
/// Under [`TriangleMode::Both`] the tile is split along `/` only when top is
/// strictly closer to right than to left. Equal scores fall through to
/// `\`, so symmetric tiles always come out as [`Orientation::Backslash`].
///
/// # Example
///
/// ```
/// use tri_pixelate::{select_orientation, MeanColor, Orientation, QuadrantAverages, Rgba, TriangleMode};
///
/// let flat = QuadrantAverages::uniform(Rgba::WHITE);
/// assert_eq!(
///     select_orientation(&flat, TriangleMode::Both, &MeanColor),
///     Orientation::Backslash
/// );
/// ```
pub fn select_orientation(
    averages: &QuadrantAverages,
    mode: TriangleMode,
    ops: &dyn ColorOps,
) -> Orientation {
    match mode {
        TriangleMode::Left => Orientation::Backslash,
        TriangleMode::Right => Orientation::Slash,
        TriangleMode::Both => {
            let top_right = ops.closeness(averages.top, averages.right);
            let top_left = ops.closeness(averages.top, averages.left);
            if top_right < top_left {
                Orientation::Slash
            } else {
                Orientation::Backslash
            }
        }
    }
}
