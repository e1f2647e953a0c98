use crate::core::framebuffer::FrameBuffer;
use image::ImageBuffer;
use log::{error, info};
use std::path::Path;

/// Saves the packed 0RGB framebuffer as an RGB image file (headless mode).
pub fn save_framebuffer<P: AsRef<Path>>(fb: &FrameBuffer, path: P) {
    let path = path.as_ref();
    let buffer = fb.data();
    let mut img = ImageBuffer::new(fb.width as u32, fb.height as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let packed = buffer[y as usize * fb.width + x as usize];
        *pixel = image::Rgb([
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        ]);
    }

    match img.save(path) {
        Ok(()) => info!("Saved render to '{}'", path.display()),
        Err(e) => error!("Failed to save image to '{}': {e}", path.display()),
    }
}
