use crate::core::color::Color;
use crate::io::error::LoadError;
use image::DynamicImage;
use log::info;
use std::path::Path;

/// A 2D texture map sampled by the rasterizer and the font renderer.
#[derive(Debug, Clone)]
pub struct Texture {
    pixels: image::RgbaImage,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
        }
        let img = image::open(path_ref)
            .map_err(|e| LoadError::Parse(format!("failed to decode {}: {e}", path_ref.display())))?;

        let texture = Self::from_image(img);
        info!(
            "Loaded texture: {} ({}x{})",
            path_ref.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    pub fn from_image(img: DynamicImage) -> Self {
        let pixels = img.to_rgba8();
        let (width, height) = pixels.dimensions();
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Samples at UV coordinates with repeat wrapping.
    ///
    /// V is flipped relative to image row order: v = 0 addresses the bottom
    /// row of the image, matching the convention of the mesh files.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let u = wrap_unit(u);
        let v = wrap_unit(v);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = (((1.0 - v) * self.height as f32) as u32).min(self.height - 1);
        self.texel(x, y)
    }

    /// Direct texel fetch at integer atlas coordinates (clamped).
    pub fn texel(&self, x: u32, y: u32) -> Color {
        let p = self
            .pixels
            .get_pixel(x.min(self.width - 1), y.min(self.height - 1));
        Color::rgba(p[0], p[1], p[2], p[3])
    }
}

#[inline]
fn wrap_unit(t: f32) -> f32 {
    let f = t.fract();
    if f < 0.0 { 1.0 + f } else { f }
}
