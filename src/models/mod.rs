pub mod config;
pub mod modes;
pub mod tile_size;

pub use config::{AppConfig, PresetConfig};
pub use modes::{LayoutChoice, TriangleChoice};
pub use tile_size::TileSize;
