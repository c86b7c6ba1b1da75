//! Render settings loaded from a JSON file.
//!
//! Every field has a default, so a settings file only needs the values it
//! changes:
//!
//! ```json
//! { "width": 640, "height": 400, "light": { "intensity": 2.0 } }
//! ```

use std::path::Path;

use dio_math::{Camera, WORLD_UP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::Light;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the viewer needs before the first frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Shard rows across worker threads
    pub parallel: bool,

    /// Initial camera
    pub camera: Camera,

    /// The scene's single point light
    pub light: Light,

    /// Equirectangular skybox image; the sky gradient is used when absent
    pub skybox: Option<String>,

    /// Distance moved per zoom key press
    pub move_step: f32,

    /// Degrees orbited per rotate key press
    pub rotate_step_degrees: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 480,
            height: 320,
            parallel: true,
            camera: Camera::default(),
            light: Light::default(),
            skybox: Some("textures/skybox.jpg".to_string()),
            move_step: 1.0,
            rotate_step_degrees: 1.0,
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no frame can be rendered with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "frame size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let Some(forward) = (self.camera.target - self.camera.position).try_normalize() else {
            return Err(ConfigError::Invalid(
                "camera position and target coincide".to_string(),
            ));
        };
        // The view basis is built from cross(forward, up)
        if forward.cross(WORLD_UP).length() < 1e-4 {
            return Err(ConfigError::Invalid(
                "camera looks straight along the world up axis".to_string(),
            ));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
