use nalgebra::{Point3, Vector2};

/// A triangle with per-corner positions and index-aligned texture
/// coordinates. Light intensity is derived per frame by the pipeline and
/// never stored here.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub positions: [Point3<f32>; 3],
    pub texcoords: [Vector2<f32>; 3],
}

impl Triangle {
    pub fn new(positions: [Point3<f32>; 3]) -> Self {
        Self {
            positions,
            texcoords: [Vector2::zeros(); 3],
        }
    }

    pub fn with_texcoords(positions: [Point3<f32>; 3], texcoords: [Vector2<f32>; 3]) -> Self {
        Self {
            positions,
            texcoords,
        }
    }
}

/// An ordered list of triangles. Insertion order carries no semantics
/// beyond being the tie-break order for the depth sorter.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Unit cube with faces wound consistently outward.
    pub fn unit_cube() -> Self {
        let t = |coords: [f32; 9]| {
            Triangle::new([
                Point3::new(coords[0], coords[1], coords[2]),
                Point3::new(coords[3], coords[4], coords[5]),
                Point3::new(coords[6], coords[7], coords[8]),
            ])
        };
        Self::new(vec![
            // South
            t([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]),
            t([0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0]),
            // East
            t([1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0]),
            t([1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0]),
            // North
            t([1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0]),
            t([1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]),
            // West
            t([0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0]),
            t([0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
            // Top
            t([0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
            t([0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]),
            // Bottom
            t([1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
            t([1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
        ])
    }

    /// Square-based pyramid, apex up.
    pub fn pyramid() -> Self {
        let t = |coords: [f32; 9]| {
            Triangle::new([
                Point3::new(coords[0], coords[1], coords[2]),
                Point3::new(coords[3], coords[4], coords[5]),
                Point3::new(coords[6], coords[7], coords[8]),
            ])
        };
        Self::new(vec![
            t([-0.5, 0.0, -0.5, 0.5, 0.0, -0.5, 0.5, 0.0, 0.5]),
            t([-0.5, 0.0, -0.5, 0.5, 0.0, 0.5, -0.5, 0.0, 0.5]),
            t([-0.5, 0.0, -0.5, 0.5, 0.0, -0.5, 0.0, 1.0, 0.0]),
            t([0.5, 0.0, -0.5, 0.5, 0.0, 0.5, 0.0, 1.0, 0.0]),
            t([0.5, 0.0, 0.5, -0.5, 0.0, 0.5, 0.0, 1.0, 0.0]),
            t([-0.5, 0.0, 0.5, -0.5, 0.0, -0.5, 0.0, 1.0, 0.0]),
        ])
    }
}
