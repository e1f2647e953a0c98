use crate::core::math::EPSILON;
use nalgebra::{Point3, Vector3};

/// Unit face normal from the winding (v1-v0) x (v2-v0).
///
/// Returns `None` for a degenerate triangle (zero-length cross product);
/// callers skip those instead of propagating NaN.
pub fn face_normal(positions: &[Point3<f32>; 3]) -> Option<Vector3<f32>> {
    let e1 = positions[1] - positions[0];
    let e2 = positions[2] - positions[0];
    e1.cross(&e2).try_normalize(EPSILON)
}

/// Backface test. A triangle is front-facing when its normal points against
/// the ray from the camera to its first vertex; mesh winding is assumed
/// consistent rather than inferred.
#[inline]
pub fn is_front_facing(
    normal: &Vector3<f32>,
    v0: &Point3<f32>,
    camera_pos: &Point3<f32>,
) -> bool {
    normal.dot(&(v0 - camera_pos)) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_facing_triangle() -> [Point3<f32>; 3] {
        // Wound so the normal points toward -Z.
        [
            Point3::new(-1.0, -1.0, 5.0),
            Point3::new(-1.0, 1.0, 5.0),
            Point3::new(1.0, -1.0, 5.0),
        ]
    }

    #[test]
    fn face_normal_matches_winding() {
        let normal = face_normal(&z_facing_triangle()).unwrap();
        assert!((normal - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
    }

    #[test]
    fn face_normal_rejects_collinear_vertices() {
        let degenerate = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        assert!(face_normal(&degenerate).is_none());
    }

    #[test]
    fn visibility_is_symmetric_around_the_triangle() {
        let positions = z_facing_triangle();
        let normal = face_normal(&positions).unwrap();

        // Camera on the front side (normal points at it) sees the face;
        // the mirrored position behind it does not.
        let front = Point3::new(0.0, 0.0, 0.0);
        let back = Point3::new(0.0, 0.0, 10.0);
        assert!(is_front_facing(&normal, &positions[0], &front));
        assert!(!is_front_facing(&normal, &positions[0], &back));
    }
}
