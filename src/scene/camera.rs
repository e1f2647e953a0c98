use crate::core::math::TransformFactory;
use nalgebra::{Matrix4, Point3, Vector3};

/// Pitch is clamped short of straight up/down to keep the look-at basis
/// well conditioned.
const PITCH_LIMIT_DEG: f32 = 89.0;

/// First-person camera: position plus yaw/pitch in radians.
/// The forward direction and view matrix are derived every frame, never
/// cached across input updates.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Applies a mouse delta. Yaw grows with dx, pitch shrinks with dy
    /// (moving the mouse down looks down), then pitch is clamped to
    /// [-89, +89] degrees, landing exactly on the bound when exceeded.
    pub fn look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += dx * sensitivity;
        self.pitch -= dy * sensitivity;

        let limit = PITCH_LIMIT_DEG.to_radians();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Current forward direction derived from yaw and pitch.
    pub fn forward(&self) -> Vector3<f32> {
        let rotation =
            TransformFactory::rotation_y(self.yaw) * TransformFactory::rotation_x(self.pitch);
        rotation.transform_vector(&Vector3::z())
    }

    /// View matrix for this frame: the rigid inverse of the camera world
    /// matrix looking from position toward position + forward, world up.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let world = TransformFactory::point_at(
            &self.position,
            &(self.position + self.forward()),
            &Vector3::y(),
        );
        TransformFactory::rigid_inverse(&world)
    }
}
