// Re-export glam for convenience
pub use glam::*;

// Diorama math types
mod camera;
mod optics;
mod ray;

pub use camera::{Camera, ViewBasis, WORLD_UP};
pub use optics::{reflect, refract};
pub use ray::Ray;
