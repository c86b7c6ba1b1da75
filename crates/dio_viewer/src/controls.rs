//! Keyboard bindings for the orbit camera.

use dio_core::RenderSettings;
use dio_math::Camera;
use minifb::Key;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Change the distance to the target; negative moves closer
    Move(f32),
    /// Orbit around the target, in degrees
    Orbit { yaw: f32, pitch: f32 },
    /// Close the viewer
    Quit,
}

impl CameraCommand {
    /// Map a key to a command, or `None` for unbound keys.
    pub fn from_key(key: Key, settings: &RenderSettings) -> Option<Self> {
        let step = settings.move_step;
        let angle = settings.rotate_step_degrees;
        match key {
            Key::Up => Some(Self::Move(-step)),
            Key::Down => Some(Self::Move(step)),
            Key::A => Some(Self::Orbit { yaw: -angle, pitch: 0.0 }),
            Key::D => Some(Self::Orbit { yaw: angle, pitch: 0.0 }),
            Key::W => Some(Self::Orbit { yaw: 0.0, pitch: -angle }),
            Key::S => Some(Self::Orbit { yaw: 0.0, pitch: angle }),
            Key::Q | Key::Escape => Some(Self::Quit),
            _ => None,
        }
    }

    /// Apply the command to `camera`. Returns false when the viewer should
    /// stop.
    pub fn apply(self, camera: &mut Camera) -> bool {
        match self {
            Self::Move(delta) => camera.move_by(delta),
            Self::Orbit { yaw, pitch } => camera.rotate(yaw, pitch),
            Self::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dio_math::Vec3;

    #[test]
    fn test_key_bindings() {
        let settings = RenderSettings::default();
        assert_eq!(
            CameraCommand::from_key(Key::Up, &settings),
            Some(CameraCommand::Move(-1.0))
        );
        assert_eq!(
            CameraCommand::from_key(Key::Down, &settings),
            Some(CameraCommand::Move(1.0))
        );
        assert_eq!(
            CameraCommand::from_key(Key::A, &settings),
            Some(CameraCommand::Orbit { yaw: -1.0, pitch: 0.0 })
        );
        assert_eq!(
            CameraCommand::from_key(Key::S, &settings),
            Some(CameraCommand::Orbit { yaw: 0.0, pitch: 1.0 })
        );
        assert_eq!(
            CameraCommand::from_key(Key::Escape, &settings),
            Some(CameraCommand::Quit)
        );
        assert_eq!(CameraCommand::from_key(Key::Space, &settings), None);
    }

    #[test]
    fn test_custom_steps() {
        let settings = RenderSettings {
            move_step: 2.5,
            rotate_step_degrees: 5.0,
            ..Default::default()
        };
        assert_eq!(
            CameraCommand::from_key(Key::Up, &settings),
            Some(CameraCommand::Move(-2.5))
        );
        assert_eq!(
            CameraCommand::from_key(Key::W, &settings),
            Some(CameraCommand::Orbit { yaw: 0.0, pitch: -5.0 })
        );
    }

    #[test]
    fn test_apply_move() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, -20.0), Vec3::ZERO, 1.0);
        assert!(CameraCommand::Move(-5.0).apply(&mut camera));
        assert!((camera.distance() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_apply_orbit_keeps_distance() {
        let mut camera = Camera::default();
        let before = camera.distance();
        assert!(CameraCommand::Orbit { yaw: 10.0, pitch: 5.0 }.apply(&mut camera));
        assert!((camera.distance() - before).abs() < 1e-3);
    }

    #[test]
    fn test_apply_quit() {
        let mut camera = Camera::default();
        let before = camera.position;
        assert!(!CameraCommand::Quit.apply(&mut camera));
        assert_eq!(camera.position, before);
    }
}
