use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, SceneDescription};
use glint_renderer::{render, RenderConfig, RenderControl, Scene};
use log::info;
use std::time::{Duration, Instant};

mod cli;
mod output;

use cli::{Args, Preset};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    info!("Starting glint");
    let start = Instant::now();

    let mut desc = load_description(&args)?;
    args.apply_overrides(&mut desc);

    let scene = Scene::from_description(&desc).context("Invalid scene configuration")?;
    let config = RenderConfig::from(&desc.render);
    let control = match args.timeout_secs {
        Some(secs) => RenderControl::with_timeout(Duration::from_secs(secs)),
        None => RenderControl::new(),
    };

    let image = render(&scene, &config, &control).context("Render failed")?;

    let format = output::save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(
        "Saved {} as {:?} ({:.2?} total)",
        args.output.display(),
        format,
        start.elapsed()
    );

    Ok(())
}

/// Scene file if one was given, otherwise a preset.
fn load_description(args: &Args) -> Result<SceneDescription> {
    if let Some(path) = &args.scene {
        return load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()));
    }

    let preset = args.preset.unwrap_or(Preset::Random);
    info!("Using {:?} preset", preset);
    Ok(preset.description(args.seed.unwrap_or(0)))
}
