use crate::core::math::TransformFactory;
use crate::pipeline::cull;
use crate::pipeline::projection::ProjectionStrategy;
use crate::scene::camera::Camera;
use crate::scene::context::FrameContext;
use crate::scene::object::SceneObject;
use crate::scene::texture::Texture;
use nalgebra::{Matrix4, Point2, Vector2, Vector3};

/// Fixed directional light the shading term is taken against. Purely
/// cosmetic; there is no shadowing or second light.
pub const LIGHT_DIRECTION: Vector3<f32> = Vector3::new(0.0, 0.0, -1.0);

/// A triangle that survived culling and projection, carrying everything the
/// painter's sort and the rasterizer need.
pub struct RenderTriangle<'a> {
    pub points: [Point2<f32>; 3],
    pub texcoords: [Vector2<f32>; 3],
    /// Average view-space depth of the three vertices.
    pub depth: f32,
    /// Light intensity, unclamped until color conversion.
    pub shade: f32,
    pub texture: Option<&'a Texture>,
}

/// Runs placement, lighting, backface culling, the view transform and the
/// projection strategy for one object, appending survivors to `out`.
///
/// Degenerate triangles and triangles with any rejected vertex are dropped
/// here so the rasterizer never sees NaN or infinity.
pub fn transform_object<'a>(
    object: &'a SceneObject,
    camera: &Camera,
    view: &Matrix4<f32>,
    projection: &dyn ProjectionStrategy,
    ctx: &FrameContext,
    out: &mut Vec<RenderTriangle<'a>>,
) {
    let world_matrix = world_matrix(object, ctx);

    for tri in &object.mesh.triangles {
        let world = [
            world_matrix.transform_point(&tri.positions[0]),
            world_matrix.transform_point(&tri.positions[1]),
            world_matrix.transform_point(&tri.positions[2]),
        ];

        let Some(normal) = cull::face_normal(&world) else {
            continue;
        };
        if !cull::is_front_facing(&normal, &world[0], &camera.position) {
            continue;
        }
        let shade = normal.dot(&LIGHT_DIRECTION);

        let viewed = [
            view.transform_point(&world[0]),
            view.transform_point(&world[1]),
            view.transform_point(&world[2]),
        ];
        let depth = (viewed[0].z + viewed[1].z + viewed[2].z) / 3.0;

        let projected = (
            projection.project(&viewed[0]),
            projection.project(&viewed[1]),
            projection.project(&viewed[2]),
        );
        let (Some(p0), Some(p1), Some(p2)) = projected else {
            continue;
        };

        out.push(RenderTriangle {
            points: [p0, p1, p2],
            texcoords: tri.texcoords,
            depth,
            shade,
            texture: object.texture.as_ref(),
        });
    }
}

fn world_matrix(object: &SceneObject, ctx: &FrameContext) -> Matrix4<f32> {
    if object.spin {
        object.placement
            * TransformFactory::rotation_y(ctx.spin_angle)
            * TransformFactory::rotation_x(ctx.spin_angle)
    } else {
        object.placement
    }
}
