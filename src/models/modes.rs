//! Config/CLI spellings of the pixelation modes.

use clap::ValueEnum;
use serde::Deserialize;
use tri_pixelate::{LayoutMode, TriangleMode};

/// Which triangle split to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TriangleChoice {
    /// Pick slash or backslash per tile
    #[default]
    Both,
    /// Always split along `\`
    Left,
    /// Always split along `/`
    Right,
}

impl From<TriangleChoice> for TriangleMode {
    fn from(choice: TriangleChoice) -> Self {
        match choice {
            TriangleChoice::Both => TriangleMode::Both,
            TriangleChoice::Left => TriangleMode::Left,
            TriangleChoice::Right => TriangleMode::Right,
        }
    }
}

/// How the tile grid treats the remainder strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutChoice {
    /// Drop the partial tiles at the right/bottom edges
    #[default]
    Cropped,
    /// Keep the source size; edge tiles shrink to fit
    Fitted,
    /// Keep the source size; edge tiles widen to absorb the remainder
    Stretched,
}

impl From<LayoutChoice> for LayoutMode {
    fn from(choice: LayoutChoice) -> Self {
        match choice {
            LayoutChoice::Cropped => LayoutMode::Cropped,
            LayoutChoice::Fitted => LayoutMode::Fitted,
            LayoutChoice::Stretched => LayoutMode::Stretched,
        }
    }
}
