//! Render settings loaded from an optional JSON file.
//!
//! ```json
//! { "background": [0, 0, 0.2], "color_scale": 255, "parallel": true }
//! ```
//!
//! Every field is optional. Command line flags override the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use raycast_renderer::{Color, RenderConfig};
use serde::Deserialize;

use crate::cli::Args;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color written where no object is hit
    pub background: [f64; 3],
    /// Multiplier from scene color units to 8-bit channels
    pub color_scale: f64,
    /// Render rows in parallel
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            color_scale: 255.0,
            parallel: true,
        }
    }
}

impl Config {
    /// Load settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(background) = args.background {
            self.background = background;
        }
        if args.sequential {
            self.parallel = false;
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            background: Color::from_array(self.background),
            parallel: self.parallel,
        }
    }
}
