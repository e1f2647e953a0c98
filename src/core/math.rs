use nalgebra::{Matrix4, Point2, Point3, Vector3, Vector4};

pub const EPSILON: f32 = 1e-6;

//=================================
// Transform Matrix Factory
//=================================

/// Factory for creating transformation matrices.
/// Manually implemented to keep the convention explicit: column vectors,
/// left-handed, camera looking down +Z, NDC depth in [0, 1].
pub struct TransformFactory;

#[rustfmt::skip]
impl TransformFactory {
    /// Creates a rotation matrix around the X-axis.
    pub fn rotation_x(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,  -s,   0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a rotation matrix around the Y-axis.
    pub fn rotation_y(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
           -s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a translation matrix.
    pub fn translation(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, translation.x,
            0.0, 1.0, 0.0, translation.y,
            0.0, 0.0, 1.0, translation.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Builds the camera world matrix from eye, target and an approximate up
    /// vector. The basis is orthonormalized by Gram-Schmidt against the
    /// supplied up; eye lands in the translation column.
    pub fn point_at(eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
        let forward = (target - eye)
            .try_normalize(EPSILON)
            .unwrap_or_else(Vector3::z);
        let new_up = (up - forward * up.dot(&forward))
            .try_normalize(EPSILON)
            .unwrap_or_else(Vector3::y);
        let right = new_up.cross(&forward);

        Matrix4::new(
            right.x, new_up.x, forward.x, eye.x,
            right.y, new_up.y, forward.y, eye.y,
            right.z, new_up.z, forward.z, eye.z,
            0.0,     0.0,      0.0,       1.0,
        )
    }

    /// Inverts a rigid transform (rotation + translation only, no scale).
    /// Transposes the rotation block and counter-rotates the translation;
    /// much cheaper than a general 4x4 inverse and exact for camera matrices.
    pub fn rigid_inverse(m: &Matrix4<f32>) -> Matrix4<f32> {
        let rt = m.fixed_view::<3, 3>(0, 0).transpose();
        let t = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
        let nt = -(rt * t);

        Matrix4::new(
            rt[(0, 0)], rt[(0, 1)], rt[(0, 2)], nt.x,
            rt[(1, 0)], rt[(1, 1)], rt[(1, 2)], nt.y,
            rt[(2, 0)], rt[(2, 1)], rt[(2, 2)], nt.z,
            0.0,        0.0,        0.0,        1.0,
        )
    }

    /// Creates a perspective projection matrix.
    /// View-space depth z in [near, far] maps to NDC z in [0, 1] via
    /// far/(far-near) and -(far*near)/(far-near); w receives view z.
    pub fn perspective(fov_y_rad: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
        let f = 1.0 / (fov_y_rad * 0.5).tan();
        let q = far / (far - near);

        Matrix4::new(
            f / aspect_ratio, 0.0, 0.0, 0.0,
            0.0,              f,   0.0, 0.0,
            0.0,              0.0, q,  -near * q,
            0.0,              0.0, 1.0, 0.0,
        )
    }
}

//=================================
// Core Transformation Functions
//=================================

/// Applies a homogeneous matrix to a point and performs the perspective
/// divide. Returns `None` when w collapses toward zero (vertex on the
/// camera plane); callers must drop the triangle rather than let NaN/Inf
/// reach the rasterizer.
#[inline]
pub fn project_point(m: &Matrix4<f32>, p: &Point3<f32>) -> Option<Point3<f32>> {
    let clip: Vector4<f32> = m * p.to_homogeneous();
    if clip.w.abs() < EPSILON {
        return None;
    }
    let ndc = Point3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w);
    if !ndc.coords.iter().all(|c| c.is_finite()) {
        return None;
    }
    Some(ndc)
}

/// Converts NDC coordinates to screen coordinates (viewport transform).
/// Note: Y-axis is flipped (NDC +Y is up, screen +Y is down).
#[inline]
pub fn ndc_to_screen(ndc_x: f32, ndc_y: f32, width: f32, height: f32) -> Point2<f32> {
    Point2::new((ndc_x + 1.0) * 0.5 * width, (1.0 - ndc_y) * 0.5 * height)
}

/// Calculates the barycentric coordinates (alpha, beta, gamma) of point `p`
/// with respect to triangle (v1, v2, v3).
///
/// Returns `None` if the triangle is degenerate (area near zero).
pub fn barycentric(
    p: Point2<f32>,
    v1: Point2<f32>,
    v2: Point2<f32>,
    v3: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = v2 - v1;
    let e2 = v3 - v1;
    let p_v1 = p - v1;

    // Determinant (2x signed area of the triangle)
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;
    if total_area_x2.abs() < EPSILON {
        return None;
    }
    let inv = 1.0 / total_area_x2;

    let beta = (p_v1.x * e2.y - p_v1.y * e2.x) * inv;
    let gamma = (e1.x * p_v1.y - e1.y * p_v1.x) * inv;
    let alpha = 1.0 - beta - gamma;

    Some(Vector3::new(alpha, beta, gamma))
}

/// Checks if barycentric coordinates describe a point inside the triangle
/// (boundary included).
#[inline(always)]
pub fn is_inside_triangle(bary: Vector3<f32>) -> bool {
    bary.x >= 0.0 && bary.y >= 0.0 && bary.z >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn normalize_produces_unit_length() {
        for v in [
            Vector3::<f32>::new(3.0, 4.0, 0.0),
            Vector3::new(-1.0, 2.0, -7.5),
            Vector3::new(0.0, 0.0, 0.001),
        ] {
            let n = v.try_normalize(EPSILON).unwrap();
            assert!((n.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn normalize_zero_vector_is_rejected() {
        assert!(Vector3::<f32>::zeros().try_normalize(EPSILON).is_none());
    }

    #[test]
    fn point_at_builds_orthonormal_basis() {
        let m = TransformFactory::point_at(
            &Point3::new(1.0, 2.0, 3.0),
            &Point3::new(4.0, 1.0, -2.0),
            &Vector3::y(),
        );
        let right = Vector3::new(m[(0, 0)], m[(1, 0)], m[(2, 0)]);
        let up = Vector3::new(m[(0, 1)], m[(1, 1)], m[(2, 1)]);
        let forward = Vector3::new(m[(0, 2)], m[(1, 2)], m[(2, 2)]);

        assert!((right.norm() - 1.0).abs() < 1e-5);
        assert!((up.norm() - 1.0).abs() < 1e-5);
        assert!((forward.norm() - 1.0).abs() < 1e-5);
        assert!(right.dot(&up).abs() < 1e-5);
        assert!(right.dot(&forward).abs() < 1e-5);
        assert!(up.dot(&forward).abs() < 1e-5);
    }

    #[test]
    fn rigid_inverse_undoes_the_transform() {
        let m = TransformFactory::point_at(
            &Point3::new(5.0, -1.0, 2.0),
            &Point3::new(0.0, 0.0, 10.0),
            &Vector3::y(),
        );
        let product = TransformFactory::rigid_inverse(&m) * m;
        assert!((product - Matrix4::identity()).norm() < 1e-4);
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth_range() {
        let (near, far) = (0.1, 1000.0);
        let m = TransformFactory::perspective(100.0_f32.to_radians(), 16.0 / 9.0, near, far);

        let at_near = project_point(&m, &Point3::new(0.0, 0.0, near)).unwrap();
        let at_far = project_point(&m, &Point3::new(0.0, 0.0, far)).unwrap();
        assert!(at_near.z.abs() < 1e-4);
        assert!((at_far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn project_point_rejects_vertex_on_camera_plane() {
        let m = TransformFactory::perspective(90.0_f32.to_radians(), 1.0, 0.1, 100.0);
        assert!(project_point(&m, &Point3::new(1.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn ndc_to_screen_flips_y() {
        let center = ndc_to_screen(0.0, 0.0, 960.0, 540.0);
        assert!((center.x - 480.0).abs() < 1e-5);
        assert!((center.y - 270.0).abs() < 1e-5);

        let top = ndc_to_screen(0.0, 1.0, 960.0, 540.0);
        assert!(top.y.abs() < 1e-5);
    }

    #[test]
    fn barycentric_weights_sum_to_one_inside() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let c = Point2::new(0.0, 10.0);
        let bary = barycentric(Point2::new(2.0, 3.0), a, b, c).unwrap();
        assert!((bary.x + bary.y + bary.z - 1.0).abs() < 1e-5);
        assert!(is_inside_triangle(bary));
        assert!(!is_inside_triangle(barycentric(Point2::new(8.0, 8.0), a, b, c).unwrap()));
    }

    #[test]
    fn barycentric_rejects_degenerate_triangle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(5.0, 5.0);
        let c = Point2::new(10.0, 10.0);
        assert!(barycentric(Point2::new(1.0, 2.0), a, b, c).is_none());
    }
}
