//! Diorama Renderer - CPU recursive ray tracing.
//!
//! Classic Whitted-style tracer: Phong direct light with a distance-ratio
//! shadow term, plus one mirror and one refraction ray per hit, cut off at
//! a fixed recursion depth. Every primitive is tested against every ray.

mod cube;
mod intersect;
mod renderer;
mod scene;
pub mod shading;
mod sphere;
mod stats;

pub use cube::{Cube, FACE_EPSILON};
pub use intersect::{Intersect, Primitive};
pub use renderer::{render, render_parallel, render_pixel, ImageBuffer};
pub use scene::SceneContext;
pub use shading::{cast_ray, cast_shadow, closest_hit, BIAS, MAX_RECURSION_DEPTH};
pub use sphere::Sphere;
pub use stats::FrameStats;

/// Re-export the types callers need to build a scene
pub use dio_core::{Color, Environment, Light, Material};
pub use dio_math::{Camera, Vec3};
