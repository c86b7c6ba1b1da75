//! Axis-aligned box primitive.

use crate::intersect::{Intersect, Primitive};
use dio_core::Material;
use dio_math::Vec3;

/// How close a point must be to a face plane to take that face's normal.
pub const FACE_EPSILON: f32 = 1e-4;

/// Axis-aligned box between two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    min: Vec3,
    max: Vec3,
    material: Material,
}

impl Cube {
    /// Create a new box. `min` must be component-wise below `max`.
    pub fn new(min: Vec3, max: Vec3, material: Material) -> Self {
        Self { min, max, material }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Outward normal of the face `point` lies on.
    ///
    /// Faces are tried in the order -x, +x, -y, +y, -z, +z and the first
    /// one within [`FACE_EPSILON`] wins, so edges and corners resolve to
    /// the earlier axis. A point on no face yields the zero vector.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        let faces = [
            (point.x, self.min.x, Vec3::NEG_X),
            (point.x, self.max.x, Vec3::X),
            (point.y, self.min.y, Vec3::NEG_Y),
            (point.y, self.max.y, Vec3::Y),
            (point.z, self.min.z, Vec3::NEG_Z),
            (point.z, self.max.z, Vec3::Z),
        ];

        faces
            .iter()
            .find(|(coord, plane, _)| (coord - plane).abs() < FACE_EPSILON)
            .map(|&(_, _, normal)| normal)
            .unwrap_or(Vec3::ZERO)
    }
}

impl Primitive for Cube {
    /// Slab test. Both slab distances are kept per axis and ordered with
    /// min/max, so negative and zero direction components need no special
    /// case: a zero component gives infinite slab distances and that axis
    /// stops limiting the interval.
    fn ray_intersect(&self, origin: Vec3, direction: Vec3) -> Intersect {
        let inv_dir = Vec3::ONE / direction;

        let t_low = (self.min - origin) * inv_dir;
        let t_high = (self.max - origin) * inv_dir;

        let t_enter = t_low.min(t_high).max_element();
        let t_exit = t_low.max(t_high).min_element();

        if t_enter > t_exit || t_exit < 0.0 {
            return Intersect::miss();
        }

        // An origin inside the box gives a negative entry distance; callers
        // only accept hits in front of the origin.
        let point = origin + t_enter * direction;

        Intersect::hit(point, self.normal(point), t_enter)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
