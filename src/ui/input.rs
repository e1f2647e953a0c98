use crate::core::math::EPSILON;
use crate::scene::camera::Camera;
use minifb::{Key, MouseMode, Window};
use nalgebra::Vector3;

/// Held-key booleans and raw mouse position, sampled once per frame. The
/// core never touches the window after this.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub quit: bool,
    pub mouse: (f32, f32),
}

pub fn sample_input(window: &Window) -> InputState {
    InputState {
        forward: window.is_key_down(Key::W),
        back: window.is_key_down(Key::S),
        left: window.is_key_down(Key::A),
        right: window.is_key_down(Key::D),
        up: window.is_key_down(Key::E),
        down: window.is_key_down(Key::Q),
        quit: window.is_key_down(Key::Escape),
        mouse: window.get_mouse_pos(MouseMode::Pass).unwrap_or((0.0, 0.0)),
    }
}

/// Turns sampled input into camera motion.
///
/// Mouse deltas are measured against the previous sample; the first sample
/// after startup only seeds the reference point. Movement follows the
/// current forward direction and the world-up cross product for strafing,
/// scaled by speed and elapsed frame time.
pub struct CameraController {
    pub speed: f32,
    pub sensitivity: f32,
    last_mouse: Option<(f32, f32)>,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            speed,
            sensitivity,
            last_mouse: None,
        }
    }

    pub fn update(&mut self, camera: &mut Camera, input: &InputState, dt: f32) {
        if let Some((last_x, last_y)) = self.last_mouse {
            camera.look(
                input.mouse.0 - last_x,
                input.mouse.1 - last_y,
                self.sensitivity,
            );
        }
        self.last_mouse = Some(input.mouse);

        let forward = camera.forward();
        let right = Vector3::y().cross(&forward);

        let mut direction = Vector3::zeros();
        if input.forward {
            direction += forward;
        }
        if input.back {
            direction -= forward;
        }
        if input.right {
            direction += right;
        }
        if input.left {
            direction -= right;
        }
        if input.up {
            direction += Vector3::y();
        }
        if input.down {
            direction -= Vector3::y();
        }

        // Normalized so diagonals are no faster than a single axis.
        if let Some(step) = direction.try_normalize(EPSILON) {
            camera.position += step * self.speed * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn forward_key_moves_along_the_view_direction() {
        let mut camera = Camera::new(Point3::origin());
        let mut controller = CameraController::new(8.0, 0.01);
        let input = InputState {
            forward: true,
            ..InputState::default()
        };

        controller.update(&mut camera, &input, 0.5);
        assert!((camera.position - Point3::new(0.0, 0.0, 4.0)).norm() < 1e-5);
    }

    #[test]
    fn diagonal_movement_is_not_faster() {
        let mut camera = Camera::new(Point3::origin());
        let mut controller = CameraController::new(8.0, 0.01);
        let input = InputState {
            forward: true,
            right: true,
            ..InputState::default()
        };

        controller.update(&mut camera, &input, 1.0);
        assert!((camera.position.coords.norm() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn opposed_keys_cancel_without_normalize_blowup() {
        let mut camera = Camera::new(Point3::origin());
        let mut controller = CameraController::new(8.0, 0.01);
        let input = InputState {
            forward: true,
            back: true,
            ..InputState::default()
        };

        controller.update(&mut camera, &input, 1.0);
        assert_eq!(camera.position, Point3::origin());
    }

    #[test]
    fn first_mouse_sample_only_seeds_the_reference() {
        let mut camera = Camera::new(Point3::origin());
        let mut controller = CameraController::new(8.0, 0.01);

        let mut input = InputState {
            mouse: (400.0, 300.0),
            ..InputState::default()
        };
        controller.update(&mut camera, &input, 0.016);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);

        // The next sample rotates by the delta against the first.
        input.mouse = (410.0, 300.0);
        controller.update(&mut camera, &input, 0.016);
        assert!((camera.yaw - 0.1).abs() < 1e-5);
    }
}
