use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The "simulated" up vector used to build the view basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Largest pitch an orbit may reach, keeping `forward` off the up axis.
const MAX_PITCH_DEGREES: f32 = 89.0;

/// Orthonormal view basis derived from a camera once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Orbit camera looking at a fixed target.
///
/// Only mutated between frames; the frame driver reads it through
/// [`Camera::basis`] and [`Camera::primary_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Closest the camera may get to its target when zooming in
    pub min_distance: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec3, target: Vec3, min_distance: f32) -> Self {
        Self {
            position,
            target,
            min_distance,
        }
    }

    /// Current orbit radius (distance from position to target)
    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Move along the view axis. Negative deltas move toward the target.
    pub fn move_by(&mut self, delta: f32) {
        let offset = self.position - self.target;
        let axis = offset.try_normalize().unwrap_or(-Vec3::Z);
        let radius = (offset.length() + delta).max(self.min_distance);
        self.position = self.target + axis * radius;
    }

    /// Orbit the position around the target.
    ///
    /// Yaw turns about the world up axis, pitch tilts over the target.
    /// Both deltas are in degrees; the radius is preserved.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let yaw = offset.x.atan2(offset.z) + yaw_delta.to_radians();
        let max_pitch = MAX_PITCH_DEGREES.to_radians();
        let pitch = ((offset.y / radius).clamp(-1.0, 1.0).asin() + pitch_delta.to_radians())
            .clamp(-max_pitch, max_pitch);

        let orbit = Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        );
        self.position = self.target + orbit * radius;
    }

    /// View basis for the current position and target.
    pub fn basis(&self) -> ViewBasis {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(WORLD_UP).normalize();
        let up = right.cross(forward);
        ViewBasis { forward, right, up }
    }

    /// Unit direction of the primary ray through pixel (x, y).
    ///
    /// Screen coordinates run from -1 to 1 with y pointing up; the
    /// horizontal axis is stretched by the aspect ratio.
    pub fn primary_direction(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        self.basis().primary_direction(x, y, width, height)
    }
}

impl ViewBasis {
    /// Same as [`Camera::primary_direction`], reusing a basis computed once per frame.
    pub fn primary_direction(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let aspect_ratio = width as f32 / height as f32;
        let screen_x = ((2.0 * x as f32) / width as f32 - 1.0) * aspect_ratio;
        let screen_y = -(2.0 * y as f32) / height as f32 + 1.0;

        (self.forward + self.right * screen_x + self.up * screen_y).normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(-15.0, 14.0, -20.0), Vec3::ZERO, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);

        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.distance(), 5.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::default();
        let basis = camera.basis();

        assert!((basis.forward.length() - 1.0).abs() < 1e-5);
        assert!((basis.right.length() - 1.0).abs() < 1e-5);
        assert!((basis.up.length() - 1.0).abs() < 1e-5);
        assert!(basis.forward.dot(basis.right).abs() < 1e-5);
        assert!(basis.forward.dot(basis.up).abs() < 1e-5);
        assert!(basis.up.y > 0.0);
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, 1.0);
        let dir = camera.primary_direction(240, 160, 480, 320);

        assert_vec_eq(dir, Vec3::Z);
    }

    #[test]
    fn test_top_left_pixel() {
        // Looking down +Z, right = forward x up = -X
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, 1.0);
        let dir = camera.primary_direction(0, 0, 200, 100);

        // screen_x = -1 * 2, screen_y = 1
        assert_vec_eq(dir, Vec3::new(2.0, 1.0, 1.0).normalize());
    }

    #[test]
    fn test_move_toward_target() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO, 10.0);

        camera.move_by(-1.0);
        assert_vec_eq(camera.position, Vec3::new(0.0, 0.0, 19.0));

        camera.move_by(5.0);
        assert_vec_eq(camera.position, Vec3::new(0.0, 0.0, 24.0));
    }

    #[test]
    fn test_move_clamps_to_min_distance() {
        let mut camera = Camera::new(Vec3::new(0.0, 12.0, 0.0), Vec3::ZERO, 10.0);

        camera.move_by(-50.0);
        assert_vec_eq(camera.position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_rotate_yaw_orbits_target() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);

        camera.rotate(90.0, 0.0);
        assert_vec_eq(camera.position, Vec3::new(10.0, 0.0, 0.0));
        assert!((camera.distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_pitch_is_clamped() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);

        camera.rotate(0.0, 180.0);
        let basis = camera.basis();

        assert!((camera.distance() - 10.0).abs() < 1e-4);
        assert!(basis.right.is_finite());
        assert!(camera.position.y > 9.9);
    }

    #[test]
    fn test_rotate_keeps_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let mut camera = Camera::new(Vec3::new(-15.0, 14.0, -20.0), target, 10.0);
        let radius = camera.distance();

        camera.rotate(-1.0, 1.0);
        assert_eq!(camera.target, target);
        assert!((camera.distance() - radius).abs() < 1e-3);
    }
}
