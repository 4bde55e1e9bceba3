use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// How much the renderer reports on stderr. `info` adds parse totals and
/// render timing, `debug` adds one line per parsed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "raycast")]
#[command(about = "Render a scene file with flat-shaded raycasting")]
pub struct Args {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Scene description file
    pub input: PathBuf,

    /// Output image path; the extension picks the format (.ppm, .png, ...)
    pub output: PathBuf,

    /// JSON render settings (background, color_scale, parallel)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Background color as r,g,b in scene color units
    #[arg(long, value_parser = parse_color)]
    pub background: Option<[f64; 3]>,

    /// Render on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Diagnostics to print; RUST_LOG still applies per module
    #[arg(long, value_enum, default_value_t = Verbosity::Warn)]
    pub log_level: Verbosity,
}

/// Parse `r,g,b` into three channels.
fn parse_color(value: &str) -> Result<[f64; 3], String> {
    let channels: Vec<f64> = value
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid color '{}': {}", value, e))?;

    channels
        .try_into()
        .map_err(|_| format!("color '{}' must have exactly 3 channels", value))
}
