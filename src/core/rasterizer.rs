use crate::core::color::Color;
use crate::core::framebuffer::FrameBuffer;
use crate::core::math::{EPSILON, barycentric, is_inside_triangle};
use crate::scene::texture::Texture;
use nalgebra::{Point2, Vector2};

/// Draws screen-space triangles onto the framebuffer.
///
/// Fill mode walks the bounding box and tests pixel centers against the
/// triangle's edge functions; texture coordinates are interpolated affinely
/// in screen space. Wireframe mode draws the three edges instead.
pub struct Rasterizer {
    pub wireframe: bool,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self { wireframe: false }
    }

    pub fn draw_triangle(
        &self,
        fb: &mut FrameBuffer,
        points: &[Point2<f32>; 3],
        texcoords: &[Vector2<f32>; 3],
        tint: Color,
        texture: Option<&Texture>,
    ) {
        if self.wireframe {
            self.draw_wireframe(fb, points, tint);
        } else {
            self.fill_triangle(fb, points, texcoords, tint, texture);
        }
    }

    /// Fills a triangle, sampling the texture at interpolated UVs when one
    /// is bound and multiply-blending with the tint; a flat tint otherwise.
    /// Zero-area and non-finite triangles are skipped without drawing.
    pub fn fill_triangle(
        &self,
        fb: &mut FrameBuffer,
        points: &[Point2<f32>; 3],
        texcoords: &[Vector2<f32>; 3],
        tint: Color,
        texture: Option<&Texture>,
    ) {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return;
        }

        let e1 = points[1] - points[0];
        let e2 = points[2] - points[0];
        let area_x2 = e1.x * e2.y - e1.y * e2.x;
        if area_x2.abs() < EPSILON {
            return;
        }

        let (min_x, min_y, max_x, max_y) = bounding_box(points);
        if max_x < 0 || max_y < 0 || min_x >= fb.width as i32 || min_y >= fb.height as i32 {
            return;
        }
        let start_x = min_x.max(0);
        let end_x = max_x.min(fb.width as i32 - 1);
        let start_y = min_y.max(0);
        let end_y = max_y.min(fb.height as i32 - 1);

        for y in start_y..=end_y {
            for x in start_x..=end_x {
                let center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
                let Some(bary) = barycentric(center, points[0], points[1], points[2]) else {
                    continue;
                };
                if !is_inside_triangle(bary) {
                    continue;
                }

                let color = match texture {
                    Some(tex) => {
                        let uv = texcoords[0] * bary.x
                            + texcoords[1] * bary.y
                            + texcoords[2] * bary.z;
                        tex.sample(uv.x, uv.y).modulate(tint)
                    }
                    None => tint,
                };
                fb.set_pixel(x, y, color);
            }
        }
    }

    /// Wireframe fallback: the three edges as lines.
    pub fn draw_wireframe(&self, fb: &mut FrameBuffer, points: &[Point2<f32>; 3], color: Color) {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return;
        }
        for i in 0..3 {
            let a = points[i];
            let b = points[(i + 1) % 3];
            draw_line(fb, a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
        }
    }
}

/// Bresenham line between two screen points.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        fb.set_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn bounding_box(points: &[Point2<f32>; 3]) -> (i32, i32, i32, i32) {
    let min_x = points[0].x.min(points[1].x).min(points[2].x).floor() as i32;
    let min_y = points[0].y.min(points[1].y).min(points[2].y).floor() as i32;
    let max_x = points[0].x.max(points[1].x).max(points[2].x).ceil() as i32;
    let max_y = points[0].y.max(points[1].y).max(points[2].y).ceil() as i32;
    (min_x, min_y, max_x, max_y)
}
