use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Primary rays carry unit directions; secondary rays inherit whatever
/// length the reflect/refract helpers produce.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Offset the origin along `normal` by `bias`, keeping the direction.
    ///
    /// A negative bias pushes the origin below the surface.
    #[inline]
    pub fn offset(&self, normal: Vec3, bias: f32) -> Self {
        Self::new(self.origin + bias * normal, self.direction)
    }
}
