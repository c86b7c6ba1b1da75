//! Recursive shading engine.
//!
//! Each hit combines:
//! - Phong diffuse + specular from the single point light
//! - A shadow term from [`cast_shadow`] scaling both of those
//! - One mirror ray and one refraction ray, weighted by the material
//!
//! Recursion stops at [`MAX_RECURSION_DEPTH`], where the environment
//! color stands in for whatever the ray would have hit.

use crate::intersect::{Intersect, Primitive};
use crate::scene::SceneContext;
use dio_core::Color;
use dio_math::{reflect, refract, Ray, Vec3};

/// Depth at which rays stop being shaded and take the environment color.
pub const MAX_RECURSION_DEPTH: u32 = 2;

/// Offset applied to secondary-ray origins along the surface normal:
/// outward for shadow and mirror rays, inward for refraction rays.
pub const BIAS: f32 = 0.01;

/// Find the nearest primitive along a ray.
///
/// Returns the primitive's index and its hit record. Ties keep the
/// earlier primitive.
pub fn closest_hit(
    origin: Vec3,
    direction: Vec3,
    primitives: &[Box<dyn Primitive>],
) -> Option<(usize, Intersect)> {
    let mut closest = None;
    let mut closest_distance = f32::INFINITY;

    for (index, primitive) in primitives.iter().enumerate() {
        let hit = primitive.ray_intersect(origin, direction);
        if hit.is_intersecting && hit.distance >= 0.0 && hit.distance < closest_distance {
            closest_distance = hit.distance;
            closest = Some((index, hit));
        }
    }

    closest
}

/// Light visibility from `shadow_origin`, in [0, 1].
///
/// Walks the primitives in scene order, skipping `skip` (the surface being
/// shaded), and stops at the first one hit at a positive distance. The
/// result is `1 - clamp(occluder_distance / light_distance, 0, 1)`, so a
/// near occluder darkens less than a far one. This is the first occluder
/// in list order, not the nearest. Returns 1.0 when nothing is hit.
pub fn cast_shadow(
    shadow_origin: Vec3,
    light_dir: Vec3,
    scene: &SceneContext,
    skip: Option<usize>,
) -> f32 {
    let light_distance = scene.light.distance_from(shadow_origin);
    let biased_origin = shadow_origin + BIAS * light_dir;

    for (index, primitive) in scene.primitives.iter().enumerate() {
        if Some(index) == skip {
            continue;
        }

        let hit = primitive.ray_intersect(biased_origin, light_dir);
        if hit.is_intersecting && hit.distance > 0.0 {
            let shadow_factor = (hit.distance / light_distance).clamp(0.0, 1.0);
            return 1.0 - shadow_factor;
        }
    }

    1.0
}

/// Compute the color seen along a ray.
///
/// `depth` is 0 for primary rays and grows by one per mirror/refraction
/// bounce.
pub fn cast_ray(origin: Vec3, direction: Vec3, scene: &SceneContext, depth: u32) -> Color {
    let hit = closest_hit(origin, direction, &scene.primitives);

    let (hit_index, hit) = match hit {
        Some(found) if depth < MAX_RECURSION_DEPTH => found,
        _ => return scene.environment.color(direction),
    };

    let material = scene.primitives[hit_index].material();
    let light = &scene.light;

    let light_dir = light.direction_from(hit.point);
    let view_dir = (origin - hit.point).normalize_or_zero();

    let shadow = cast_shadow(hit.point + BIAS * hit.normal, light_dir, scene, Some(hit_index));
    let intensity = shadow * light.intensity;

    // Direct light
    let diff_intensity = hit.normal.dot(light_dir).max(0.0);
    let diffuse = diff_intensity * material.albedo * material.diffuse * intensity;

    let light_reflect_dir = reflect(-light_dir, hit.normal);
    let spec_intensity = view_dir
        .dot(light_reflect_dir)
        .max(0.0)
        .powf(material.specular_exponent);
    let specular = spec_intensity * material.specular_albedo * light.color * intensity;

    // Secondary rays
    let mut reflected = Color::ZERO;
    if material.is_reflective() {
        let ray = Ray::new(hit.point, reflect(direction, hit.normal)).offset(hit.normal, BIAS);
        reflected = material.reflectivity * cast_ray(ray.origin, ray.direction, scene, depth + 1);
    }

    let mut refracted = Color::ZERO;
    if material.is_transparent() {
        // Total internal reflection leaves a zero direction, which hits
        // nothing and picks up the environment color
        let refract_dir =
            refract(direction, hit.normal, material.refraction_index).unwrap_or(Vec3::ZERO);
        let ray = Ray::new(hit.point, refract_dir).offset(hit.normal, -BIAS);
        refracted = material.transparency * cast_ray(ray.origin, ray.direction, scene, depth + 1);
    }

    material.local_weight() * (diffuse + specular) + reflected + refracted
}
