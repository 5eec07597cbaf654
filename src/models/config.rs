use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::{LayoutChoice, TileSize, TriangleChoice};
use crate::error::ConfigError;

/// Name of the built-in preset.
pub const BUILTIN_PRESET: &str = "default";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "trixel.yaml";

/// Application configuration loaded from trixel.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Preset used when none is named on the command line
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Named pixelation presets
    #[serde(default)]
    pub presets: BTreeMap<String, PresetConfig>,
}

fn default_preset() -> String {
    BUILTIN_PRESET.to_string()
}

/// One named set of pixelation options. Unset fields fall through to the
/// next source (see [`PresetConfig::or`]).
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PresetConfig {
    pub tile: Option<TileSize>,
    pub triangle: Option<TriangleChoice>,
    pub layout: Option<LayoutChoice>,
    pub aliased: Option<bool>,
    pub threads: Option<usize>,
}

impl PresetConfig {
    /// The built-in preset: 16x16, both, cropped, blended diagonals.
    pub fn builtin() -> Self {
        Self {
            tile: Some(TileSize::default()),
            triangle: Some(TriangleChoice::Both),
            layout: Some(LayoutChoice::Cropped),
            aliased: Some(false),
            threads: None,
        }
    }

    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: &PresetConfig) -> Self {
        Self {
            tile: self.tile.or(fallback.tile),
            triangle: self.triangle.or(fallback.triangle),
            layout: self.layout.or(fallback.layout),
            aliased: self.aliased.or(fallback.aliased),
            threads: self.threads.or(fallback.threads),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from an explicitly requested file.
    ///
    /// Unlike [`AppConfig::load_or_default`], a missing or malformed file is
    /// an error.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            presets = config.presets.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load the explicitly given file, or the default file with fallback.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE))),
        }
    }

    /// Look up a preset by name, or the configured default preset.
    ///
    /// The built-in preset is always available under its name unless the
    /// config file redefines it.
    pub fn preset(&self, name: Option<&str>) -> Result<PresetConfig, ConfigError> {
        let name = name.unwrap_or(self.default_preset.as_str());
        match self.presets.get(name) {
            Some(preset) => Ok(preset.clone()),
            None if name == BUILTIN_PRESET => Ok(PresetConfig::builtin()),
            None => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }

    /// Preset names in display order, including the built-in one.
    pub fn preset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        if !self.presets.contains_key(BUILTIN_PRESET) {
            names.insert(0, BUILTIN_PRESET);
        }
        names
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert(BUILTIN_PRESET.to_string(), PresetConfig::builtin());

        Self {
            default_preset: BUILTIN_PRESET.to_string(),
            presets,
        }
    }
}
