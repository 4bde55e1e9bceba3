use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use raycast_core::load_scene;
use raycast_renderer::render;

mod cli;
mod config;
mod output;

use cli::Args;
use config::Config;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(args: &Args) -> Result<()> {
    if !args.input.is_file() {
        bail!("input file {} does not exist", args.input.display());
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_args(args);

    let scene = load_scene(&args.input)
        .with_context(|| format!("reading scene {}", args.input.display()))?;

    log::info!(
        "Rendering {}x{} from {}",
        args.width,
        args.height,
        args.input.display()
    );
    let image = render(&scene, args.width, args.height, &config.render_config())?;

    output::save_image(&image, &args.output, config.color_scale)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level.level_filter());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One diagnostic line, no output file
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
