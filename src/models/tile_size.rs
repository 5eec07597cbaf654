use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use tri_pixelate::TileDimension;

use crate::error::ConfigError;

/// Tile size as written on the command line or in config files.
///
/// Accepts `"WxH"` (e.g. `"24x16"`) or a single `"N"` for a square tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize(TileDimension);

impl TileSize {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        TileDimension::new(width, height)
            .map(Self)
            .map_err(|_| ConfigError::InvalidTileSize(format!("{width}x{height}")))
    }

    pub fn dimension(&self) -> TileDimension {
        self.0
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self(TileDimension::square(16).expect("16x16 is a valid tile dimension"))
    }
}

impl FromStr for TileSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidTileSize(s.to_string());
        let trimmed = s.trim();
        let (w, h) = match trimmed.split_once(['x', 'X']) {
            Some((w, h)) => (w.trim(), h.trim()),
            None => (trimmed, trimmed),
        };
        let width: usize = w.parse().map_err(|_| invalid())?;
        let height: usize = h.parse().map_err(|_| invalid())?;
        TileDimension::new(width, height)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0.width(), self.0.height())
    }
}

impl<'de> Deserialize<'de> for TileSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `tile: 24` and `tile: "24x16"` are both accepted
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Square(usize),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Square(n) => TileSize::new(n, n),
            Raw::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
