//! Render a single frame of the diorama to a PNG without opening a window.
//!
//! Usage: `render_png [settings.json] [output.png]`

use anyhow::{Context, Result};
use dio_core::{load_environment, RenderSettings};
use dio_renderer::{render, render_parallel};
use dio_viewer::diorama;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => RenderSettings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => RenderSettings::default(),
    };
    settings.validate()?;
    let output = args.next().unwrap_or_else(|| "render.png".to_string());

    let environment = load_environment(settings.skybox.as_deref());
    let scene = diorama::build(settings.light, environment);

    let start = Instant::now();
    let frame = if settings.parallel {
        render_parallel(&settings.camera, &scene, settings.width, settings.height)
    } else {
        render(&settings.camera, &scene, settings.width, settings.height)
    };
    log::info!(
        "Rendered {}x{} in {:.2?}",
        settings.width,
        settings.height,
        start.elapsed()
    );

    frame
        .save_png(&output)
        .with_context(|| format!("Failed to write {}", output))?;
    log::info!("Wrote {}", output);

    Ok(())
}
