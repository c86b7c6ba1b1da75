use dio_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;

/// Single point light. Read-only while a frame renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub position: Vec3,
    /// Scalar multiplier applied to diffuse and specular terms
    pub intensity: f32,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            position,
            intensity,
            color,
        }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }

    /// Distance from `point` to the light.
    pub fn distance_from(&self, point: Vec3) -> f32 {
        (self.position - point).length()
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 12.0, -60.0), 2.7, Color::ONE)
    }
}
