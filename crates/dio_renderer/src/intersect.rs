//! Hit record and the primitive capability set.

use dio_core::Material;
use dio_math::Vec3;

/// Result of a ray/primitive test.
///
/// When `is_intersecting` is false the other fields are zero and carry no
/// meaning. When true, `point = origin + distance * direction` and
/// `normal` is the outward unit normal. A box containing the ray origin
/// reports its entry face behind the origin with a negative `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersect {
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection
    pub normal: Vec3,
    /// Parameter along the ray where the intersection occurs
    pub distance: f32,
    pub is_intersecting: bool,
}

impl Intersect {
    /// A record for a ray that missed.
    pub const fn miss() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            distance: 0.0,
            is_intersecting: false,
        }
    }

    pub fn hit(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
            is_intersecting: true,
        }
    }
}

impl Default for Intersect {
    fn default() -> Self {
        Self::miss()
    }
}

/// Anything a ray can hit.
///
/// Primitives are built once per scene and only read while rendering.
pub trait Primitive: Send + Sync {
    /// Test a ray against this primitive.
    fn ray_intersect(&self, origin: Vec3, direction: Vec3) -> Intersect;

    /// Surface description used to shade a hit.
    fn material(&self) -> &Material;
}
