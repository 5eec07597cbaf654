//! One read → pixelate → write run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tri_pixelate::{LayoutMode, MeanColor, PixelateOptions, Pixelator, Raster, TriangleMode};

use crate::error::JobError;
use crate::models::{PresetConfig, TileSize};
use crate::rendering::{read_png, write_png};

/// Fully resolved options for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSettings {
    pub tile: TileSize,
    pub triangle: TriangleMode,
    pub layout: LayoutMode,
    pub aliased: bool,
    pub threads: Option<usize>,
}

impl JobSettings {
    /// Resolve settings: `overrides` (command line) win over `preset`, which
    /// wins over the built-in preset.
    pub fn resolve(overrides: PresetConfig, preset: &PresetConfig) -> Self {
        let merged = overrides.or(preset).or(&PresetConfig::builtin());
        Self {
            tile: merged.tile.unwrap_or_default(),
            triangle: merged.triangle.unwrap_or_default().into(),
            layout: merged.layout.unwrap_or_default().into(),
            aliased: merged.aliased.unwrap_or(false),
            threads: merged.threads,
        }
    }

    pub fn options(&self) -> PixelateOptions {
        PixelateOptions::new(self.tile.dimension())
            .triangle_mode(self.triangle)
            .layout(self.layout)
            .aliased(self.aliased)
            .threads(self.threads)
    }
}

impl Default for JobSettings {
    fn default() -> Self {
        Self::resolve(PresetConfig::default(), &PresetConfig::builtin())
    }
}

/// Input and output sizes of a finished job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobReport {
    pub input_size: (usize, usize),
    pub output_size: (usize, usize),
}

/// Pixelate one PNG file into another.
#[derive(Debug, Clone)]
pub struct PixelateJob {
    input: PathBuf,
    output: PathBuf,
    settings: JobSettings,
}

impl PixelateJob {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        settings: JobSettings,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            settings,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn settings(&self) -> &JobSettings {
        &self.settings
    }

    /// Pixelate an already decoded image with this job's settings.
    pub fn pixelate(&self, source: &Raster) -> Result<Raster, JobError> {
        Ok(Pixelator::with_options(self.settings.options(), MeanColor).pixelate(source)?)
    }

    /// Read the input, pixelate it and write the output.
    pub fn run(&self) -> Result<JobReport, JobError> {
        let start = Instant::now();
        let source = read_png(&self.input)?;
        tracing::info!(
            input = %self.input.display(),
            width = source.width(),
            height = source.height(),
            tile = %self.settings.tile,
            triangle = self.settings.triangle.name(),
            layout = self.settings.layout.name(),
            aliased = self.settings.aliased,
            "Pixelating image"
        );

        let result = self.pixelate(&source)?;
        write_png(&result, &self.output)?;

        tracing::info!(
            output = %self.output.display(),
            width = result.width(),
            height = result.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Wrote pixelated image"
        );

        Ok(JobReport {
            input_size: (source.width(), source.height()),
            output_size: (result.width(), result.height()),
        })
    }
}
