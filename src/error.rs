use std::path::PathBuf;
use thiserror::Error;
use tri_pixelate::PixelateError;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG format: {color:?} at {depth:?}")]
    UnsupportedFormat {
        color: png::ColorType,
        depth: png::BitDepth,
    },

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("Invalid image: {0}")]
    Image(#[from] PixelateError),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid tile size '{0}': expected WxH or N with positive values")]
    InvalidTileSize(String),
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Pixelation error: {0}")]
    Pixelate(#[from] PixelateError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
