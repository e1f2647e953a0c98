use crate::core::math::{self, TransformFactory};
use nalgebra::{Matrix4, Point2, Point3};

/// Maps view-space points to screen coordinates.
///
/// The two policies are not numerically equivalent: the matrix pipeline keeps
/// clip-space depth and only rejects vertices that collapse onto the camera
/// plane, while the first-order mapping rejects anything at or in front of
/// the near plane. One is selected at construction and used for every
/// triangle; call sites never branch on the policy.
pub trait ProjectionStrategy {
    /// Screen position for a view-space point, or `None` when the vertex is
    /// rejected. One rejected vertex drops the whole triangle.
    fn project(&self, view: &Point3<f32>) -> Option<Point2<f32>>;
}

/// Full perspective pipeline: fixed matrix built once, homogeneous divide,
/// viewport transform. The canonical default.
pub struct MatrixProjection {
    matrix: Matrix4<f32>,
    width: f32,
    height: f32,
}

impl MatrixProjection {
    pub fn new(fov_y_deg: f32, width: usize, height: usize, near: f32, far: f32) -> Self {
        let aspect = width as f32 / height as f32;
        Self {
            matrix: TransformFactory::perspective(fov_y_deg.to_radians(), aspect, near, far),
            width: width as f32,
            height: height as f32,
        }
    }
}

impl ProjectionStrategy for MatrixProjection {
    fn project(&self, view: &Point3<f32>) -> Option<Point2<f32>> {
        let ndc = math::project_point(&self.matrix, view)?;
        Some(math::ndc_to_screen(ndc.x, ndc.y, self.width, self.height))
    }
}

/// Screen-space magnification of the first-order mapping.
const SIMPLE_SCALE: f32 = 100.0;

/// First-order approximation: screen = center + (FOV * axis) / (FOV + depth)
/// * scale. Carries no clip-space depth, so vertices at or in front of the
/// near plane are rejected outright instead.
pub struct SimpleProjection {
    fov: f32,
    near: f32,
    half_width: f32,
    half_height: f32,
}

impl SimpleProjection {
    pub fn new(fov_deg: f32, width: usize, height: usize, near: f32) -> Self {
        Self {
            fov: fov_deg,
            near,
            half_width: width as f32 * 0.5,
            half_height: height as f32 * 0.5,
        }
    }
}

impl ProjectionStrategy for SimpleProjection {
    fn project(&self, view: &Point3<f32>) -> Option<Point2<f32>> {
        if view.z <= self.near {
            return None;
        }
        let denom = self.fov + view.z;
        if denom.abs() < math::EPSILON {
            return None;
        }
        Some(Point2::new(
            self.half_width + (self.fov * view.x) / denom * SIMPLE_SCALE,
            self.half_height + (self.fov * view.y) / denom * SIMPLE_SCALE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_projection_maps_view_axis_to_screen_center() {
        let proj = MatrixProjection::new(100.0, 960, 540, 0.1, 1000.0);
        let screen = proj.project(&Point3::new(0.0, 0.0, 10.0)).unwrap();
        assert!((screen.x - 480.0).abs() < 1e-3);
        assert!((screen.y - 270.0).abs() < 1e-3);
    }

    #[test]
    fn matrix_projection_rejects_camera_plane_vertex() {
        let proj = MatrixProjection::new(100.0, 960, 540, 0.1, 1000.0);
        assert!(proj.project(&Point3::new(1.0, 2.0, 0.0)).is_none());
    }

    #[test]
    fn matrix_projection_shrinks_with_distance() {
        let proj = MatrixProjection::new(100.0, 960, 540, 0.1, 1000.0);
        let near = proj.project(&Point3::new(1.0, 0.0, 5.0)).unwrap();
        let far = proj.project(&Point3::new(1.0, 0.0, 50.0)).unwrap();
        assert!((near.x - 480.0).abs() > (far.x - 480.0).abs());
    }

    #[test]
    fn simple_projection_maps_view_axis_to_screen_center() {
        let proj = SimpleProjection::new(100.0, 960, 540, 0.1);
        let screen = proj.project(&Point3::new(0.0, 0.0, 10.0)).unwrap();
        assert!((screen.x - 480.0).abs() < 1e-3);
        assert!((screen.y - 270.0).abs() < 1e-3);
    }

    #[test]
    fn simple_projection_rejects_near_plane_vertices() {
        let proj = SimpleProjection::new(100.0, 960, 540, 0.1);
        assert!(proj.project(&Point3::new(0.0, 0.0, 0.1)).is_none());
        assert!(proj.project(&Point3::new(0.0, 0.0, -5.0)).is_none());
        assert!(proj.project(&Point3::new(0.0, 0.0, 0.2)).is_some());
    }
}
