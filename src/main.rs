use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trixel::models::{AppConfig, LayoutChoice, PresetConfig, TileSize, TriangleChoice};
use trixel::services::{JobSettings, PixelateJob};

#[derive(Parser)]
#[command(name = "trixel")]
#[command(about = "Trixel - low-poly triangle pixelation for PNG images")]
struct Cli {
    /// Log debug output from the pixelation pipeline
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pixelate a PNG into flat-colored triangle pairs
    Pixelate {
        /// Input PNG file path
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Tile size as WxH (e.g. "24x16") or N for a square tile
        #[arg(short, long)]
        size: Option<TileSize>,

        /// Triangle split policy
        #[arg(short, long, value_enum)]
        triangle: Option<TriangleChoice>,

        /// How the remainder strip at the right/bottom edges is handled
        #[arg(short, long, value_enum)]
        layout: Option<LayoutChoice>,

        /// Paint diagonal pixels with one triangle color instead of a blend
        #[arg(short, long)]
        aliased: bool,

        /// Blend diagonal pixels even if the preset sets `aliased: true`
        #[arg(long, conflicts_with = "aliased")]
        no_aliased: bool,

        /// Worker threads (defaults to available parallelism)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Preset from the config file
        #[arg(short, long)]
        preset: Option<String>,

        /// Config file (defaults to ./trixel.yaml)
        #[arg(short, long, env = "TRIXEL_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List the presets available in the config file
    Presets {
        /// Config file (defaults to ./trixel.yaml)
        #[arg(short, long, env = "TRIXEL_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pixelate {
            input,
            output,
            size,
            triangle,
            layout,
            aliased,
            no_aliased,
            threads,
            preset,
            config,
        } => {
            let overrides = PresetConfig {
                tile: size,
                triangle,
                layout,
                aliased: flag_override(aliased, no_aliased),
                threads,
            };
            run_pixelate_command(input, output, overrides, preset, config)
        }
        Commands::Presets { config } => run_presets_command(config),
    }
}

/// `Some` only when one of an on/off flag pair was given.
fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "trixel=debug,tri_pixelate=debug"
    } else {
        "trixel=info,tri_pixelate=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Pixelate one file (CLI flags > preset > built-in defaults)
fn run_pixelate_command(
    input: PathBuf,
    output: PathBuf,
    overrides: PresetConfig,
    preset: Option<String>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let app_config = AppConfig::load(config.as_deref()).context("Failed to load config")?;
    let preset = app_config
        .preset(preset.as_deref())
        .context("Failed to select preset")?;
    let settings = JobSettings::resolve(overrides, &preset);

    let job = PixelateJob::new(input, output, settings);
    let report = job
        .run()
        .with_context(|| format!("Failed to pixelate {}", job.input().display()))?;

    println!(
        "Wrote {} ({}x{} from {}x{})",
        job.output().display(),
        report.output_size.0,
        report.output_size.1,
        report.input_size.0,
        report.input_size.1
    );
    Ok(())
}

/// Print every preset with its resolved settings
fn run_presets_command(config: Option<PathBuf>) -> anyhow::Result<()> {
    let app_config = AppConfig::load(config.as_deref()).context("Failed to load config")?;

    for name in app_config.preset_names() {
        let preset = app_config.preset(Some(name))?;
        let settings = JobSettings::resolve(PresetConfig::default(), &preset);
        let marker = if name == app_config.default_preset {
            "*"
        } else {
            " "
        };
        let threads = settings
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string());
        println!(
            "{marker} {name:<16} tile={} triangle={} layout={} aliased={} threads={threads}",
            settings.tile,
            settings.triangle.name(),
            settings.layout.name(),
            settings.aliased,
        );
    }
    Ok(())
}
