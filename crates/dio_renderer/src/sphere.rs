//! Sphere primitive for ray tracing.

use crate::intersect::{Intersect, Primitive};
use dio_core::Material;
use dio_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }
}

impl Primitive for Sphere {
    fn ray_intersect(&self, origin: Vec3, direction: Vec3) -> Intersect {
        let oc = origin - self.center;
        let a = direction.length_squared();
        let half_b = oc.dot(direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return Intersect::miss();
        }

        let sqrtd = discriminant.sqrt();

        // Smaller positive root; the far root when the origin is inside
        let mut root = (-half_b - sqrtd) / a;
        if !(root > 0.0) {
            root = (-half_b + sqrtd) / a;
            if !(root > 0.0) {
                return Intersect::miss();
            }
        }

        let point = origin + root * direction;
        Intersect::hit(point, self.normal(point), root)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
