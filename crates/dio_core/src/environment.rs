//! Background color for rays that leave the scene.

use std::f32::consts::PI;
use std::path::Path;

use dio_math::Vec3;

use crate::material::Color;
use crate::texture::{load_texture, Texture};

/// Maps the direction of a ray that hit nothing to a background color.
pub trait Environment: Send + Sync {
    fn color(&self, direction: Vec3) -> Color;
}

/// Equirectangular environment map.
pub struct Skybox {
    texture: Texture,
}

impl Skybox {
    pub fn new(texture: Texture) -> Self {
        Self { texture }
    }

    /// Load the panorama image at `path`.
    pub fn load(path: impl AsRef<Path>) -> crate::TextureResult<Self> {
        Ok(Self::new(load_texture(path)?))
    }

    /// Texture coordinates for a direction: u wraps around +Y starting at
    /// -X, v = 1 looks straight up. A zero direction maps to the horizon.
    pub fn direction_to_uv(direction: Vec3) -> (f32, f32) {
        let d = direction.normalize_or_zero();
        let u = 0.5 + d.z.atan2(d.x) / (2.0 * PI);
        let v = 0.5 + d.y.clamp(-1.0, 1.0).asin() / PI;
        (u, v)
    }
}

impl Environment for Skybox {
    fn color(&self, direction: Vec3) -> Color {
        let (u, v) = Self::direction_to_uv(direction);
        self.texture.sample(u, v)
    }
}

/// White-to-blue vertical gradient, used when no skybox image is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkyGradient;

impl Environment for SkyGradient {
    fn color(&self, direction: Vec3) -> Color {
        let unit_direction = direction.normalize_or_zero();
        let a = 0.5 * (unit_direction.y + 1.0);
        let white = Color::new(1.0, 1.0, 1.0);
        let blue = Color::new(0.5, 0.7, 1.0);
        white * (1.0 - a) + blue * a
    }
}

/// Constant background.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor(pub Color);

impl Environment for SolidColor {
    fn color(&self, _direction: Vec3) -> Color {
        self.0
    }
}

/// Build the environment for a frame: the skybox at `path` when it loads,
/// otherwise the sky gradient.
pub fn load_environment(path: Option<&str>) -> Box<dyn Environment> {
    let Some(path) = path else {
        log::info!("No skybox configured, using sky gradient");
        return Box::new(SkyGradient);
    };

    match Skybox::load(path) {
        Ok(skybox) => {
            log::info!("Loaded skybox {}", path);
            Box::new(skybox)
        }
        Err(e) => {
            log::warn!("Skybox unavailable ({}), using sky gradient", e);
            Box::new(SkyGradient)
        }
    }
}
