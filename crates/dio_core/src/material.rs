//! Surface description for the Phong + reflect/refract shading model.

use dio_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB, 1.0 == full 8-bit channel)
pub type Color = Vec3;

/// Build a color from 8-bit channels.
pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32, g as f32, b as f32) / 255.0
}

/// Convert a color to 8-bit RGBA, clamping each channel.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

/// Immutable optical response of a surface.
///
/// The shading engine weights local light by
/// `1 - reflectivity - transparency`. Keeping that sum at or below one is
/// the scene author's job; nothing here validates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base (diffuse) color
    pub diffuse: Color,

    /// Diffuse weight applied to the base color
    pub albedo: f32,

    /// Weight of the light-colored specular highlight
    pub specular_albedo: f32,

    /// Phong shininess exponent
    pub specular_exponent: f32,

    /// Fraction of the result taken from the mirror ray (0-1)
    pub reflectivity: f32,

    /// Fraction of the result taken from the refracted ray (0-1)
    pub transparency: f32,

    /// Refraction ratio, only read when `transparency > 0`
    pub refraction_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::new(0.5, 0.5, 0.5), // Grey default
            albedo: 1.0,
            specular_albedo: 0.0,
            specular_exponent: 0.0,
            reflectivity: 0.0,
            transparency: 0.0,
            refraction_index: 0.0,
        }
    }
}

impl Material {
    /// Create an opaque, non-reflective material.
    pub fn new(diffuse: Color, albedo: f32, specular_albedo: f32, specular_exponent: f32) -> Self {
        Self {
            diffuse,
            albedo,
            specular_albedo,
            specular_exponent,
            ..Default::default()
        }
    }

    /// Set the mirror contribution.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the refracted contribution and its refraction ratio.
    pub fn with_transparency(mut self, transparency: f32, refraction_index: f32) -> Self {
        self.transparency = transparency;
        self.refraction_index = refraction_index;
        self
    }

    /// Weight left for diffuse + specular after reflection and refraction.
    ///
    /// Goes negative when `reflectivity + transparency > 1`.
    #[inline]
    pub fn local_weight(&self) -> f32 {
        1.0 - self.reflectivity - self.transparency
    }

    /// Check if this material spawns a mirror ray.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }

    /// Check if this material spawns a refraction ray.
    pub fn is_transparent(&self) -> bool {
        self.transparency > 0.0
    }
}
