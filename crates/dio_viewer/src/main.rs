use anyhow::{Context, Result};
use dio_core::{load_environment, RenderSettings};
use dio_math::Camera;
use dio_renderer::{render, render_parallel, FrameStats, SceneContext};
use dio_viewer::{diorama, CameraCommand};
use minifb::{KeyRepeat, Window, WindowOptions};
use std::time::Instant;

/// Application state
struct App {
    window: Window,
    settings: RenderSettings,
    camera: Camera,
    scene: SceneContext,
    stats: FrameStats,
}

impl App {
    fn new(settings: RenderSettings) -> Result<Self> {
        let environment = load_environment(settings.skybox.as_deref());
        let scene = diorama::build(settings.light, environment);
        log::info!("Scene ready: {} primitives", scene.len());

        let window = Window::new(
            "Diorama",
            settings.width as usize,
            settings.height as usize,
            WindowOptions::default(),
        )
        .context("Failed to create window")?;

        Ok(Self {
            window,
            camera: settings.camera,
            settings,
            scene,
            stats: FrameStats::new(),
        })
    }

    /// Apply pending key presses. Returns false when asked to quit.
    fn handle_input(&mut self) -> bool {
        for key in self.window.get_keys_pressed(KeyRepeat::Yes) {
            if let Some(command) = CameraCommand::from_key(key, &self.settings) {
                if !command.apply(&mut self.camera) {
                    log::info!("Quit requested");
                    return false;
                }
            }
        }
        true
    }

    fn run(&mut self) -> Result<()> {
        let (width, height) = (self.settings.width, self.settings.height);

        while self.window.is_open() {
            if !self.handle_input() {
                break;
            }

            let start = Instant::now();
            let frame = if self.settings.parallel {
                render_parallel(&self.camera, &self.scene, width, height)
            } else {
                render(&self.camera, &self.scene, width, height)
            };

            self.window
                .update_with_buffer(&frame.to_argb_u32(), width as usize, height as usize)
                .context("Failed to present frame")?;

            self.stats.record(start.elapsed());
        }

        log::info!("Rendered {} frames", self.stats.total_frames());
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Diorama Viewer");

    let settings = match std::env::args().nth(1) {
        Some(path) => RenderSettings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => RenderSettings::default(),
    };
    settings.validate()?;

    let mut app = App::new(settings)?;
    app.run()
}
