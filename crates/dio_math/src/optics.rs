//! Mirror and Snell-law direction helpers.

use crate::Vec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract an incident direction through a surface with ratio `eta`.
///
/// Uses the GLSL `refract` formulation: `eta` is applied as given and the
/// normal is expected to face the incoming ray. Returns `None` on total
/// internal reflection.
#[inline]
pub fn refract(incident: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = n.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(eta * incident - (eta * cos_i + k.sqrt()) * n)
}
