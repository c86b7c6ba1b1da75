//! Diorama Core - scene description shared by the renderer and viewer.
//!
//! This crate provides:
//!
//! - **Surface and light types**: `Material`, `Light`, `Color`
//! - **Environment samplers**: `Skybox`, `SkyGradient`, `SolidColor`
//! - **Configuration**: `RenderSettings` loaded from JSON
//!
//! # Example
//!
//! ```ignore
//! use dio_core::{RenderSettings, load_environment};
//!
//! let settings = RenderSettings::load("diorama.json")?;
//! let environment = load_environment(settings.skybox.as_deref());
//! ```

pub mod environment;
pub mod light;
pub mod material;
pub mod settings;
pub mod texture;

// Re-export commonly used types
pub use environment::{load_environment, Environment, SkyGradient, Skybox, SolidColor};
pub use light::Light;
pub use material::{color_to_rgba, rgb8, Color, Material};
pub use settings::{ConfigError, ConfigResult, RenderSettings};
pub use texture::{load_texture, Texture, TextureError, TextureResult};
