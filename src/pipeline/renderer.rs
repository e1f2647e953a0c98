use crate::core::color::Color;
use crate::core::framebuffer::FrameBuffer;
use crate::core::rasterizer::Rasterizer;
use crate::pipeline::projection::ProjectionStrategy;
use crate::pipeline::transform::RenderTriangle;
use crate::pipeline::{sort, transform};
use crate::scene::camera::Camera;
use crate::scene::context::FrameContext;
use crate::scene::object::Scene;

/// Orchestrates the per-frame stages: transform and cull every object,
/// sort the survivors back to front, then rasterize them in order.
///
/// The projection strategy is fixed at construction; the view matrix is
/// rebuilt from the camera every frame.
pub struct Renderer {
    pub rasterizer: Rasterizer,
    pub framebuffer: FrameBuffer,
    projection: Box<dyn ProjectionStrategy>,
}

impl Renderer {
    pub fn new(width: usize, height: usize, projection: Box<dyn ProjectionStrategy>) -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            framebuffer: FrameBuffer::new(width, height),
            projection,
        }
    }

    /// Renders one frame of the scene into the framebuffer. Overlay text is
    /// drawn by the caller afterwards so it lands on top of the geometry.
    pub fn render_scene(&mut self, scene: &Scene, camera: &Camera, ctx: &FrameContext) {
        self.framebuffer.clear(Color::BLACK);
        let view = camera.view_matrix();

        let mut visible: Vec<RenderTriangle<'_>> = Vec::new();
        for object in &scene.objects {
            transform::transform_object(
                object,
                camera,
                &view,
                self.projection.as_ref(),
                ctx,
                &mut visible,
            );
        }

        sort::sort_back_to_front(&mut visible);

        for tri in &visible {
            let tint = Color::from_intensity(tri.shade);
            self.rasterizer.draw_triangle(
                &mut self.framebuffer,
                &tri.points,
                &tri.texcoords,
                tint,
                tri.texture,
            );
        }
    }
}
