use crate::pipeline::transform::RenderTriangle;

/// Painter's ordering: farthest triangles first by average view-space depth,
/// so nearer fills overwrite farther ones. The sort is stable; equal depths
/// keep their encounter order. Interpenetrating triangles are not resolved.
pub fn sort_back_to_front(triangles: &mut [RenderTriangle<'_>]) {
    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Vector2};

    fn triangle(depth: f32, shade: f32) -> RenderTriangle<'static> {
        RenderTriangle {
            points: [Point2::origin(); 3],
            texcoords: [Vector2::zeros(); 3],
            depth,
            shade,
            texture: None,
        }
    }

    #[test]
    fn farthest_triangle_comes_first() {
        let mut triangles = vec![triangle(2.0, 0.0), triangle(10.0, 0.0), triangle(5.0, 0.0)];
        sort_back_to_front(&mut triangles);
        let depths: Vec<f32> = triangles.iter().map(|t| t.depth).collect();
        assert_eq!(depths, vec![10.0, 5.0, 2.0]);
    }

    #[test]
    fn equal_depths_keep_encounter_order() {
        // Shade doubles as an input-order marker.
        let mut triangles = vec![
            triangle(5.0, 0.0),
            triangle(5.0, 1.0),
            triangle(1.0, 2.0),
            triangle(5.0, 3.0),
        ];
        sort_back_to_front(&mut triangles);
        let shades: Vec<f32> = triangles.iter().map(|t| t.shade).collect();
        assert_eq!(shades, vec![0.0, 1.0, 3.0, 2.0]);
    }
}
