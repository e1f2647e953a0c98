use crate::core::color::Color;

/// A 2D color buffer the rasterizer and font renderer draw into.
///
/// Pixels are stored as packed 0RGB so the finished frame can be handed to
/// the presentation surface without conversion. The pipeline is
/// single-threaded and synchronous, so no interior locking is needed; a
/// concurrent reimplementation would have to double-buffer instead.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    data: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn clear(&mut self, color: Color) {
        self.data.fill(color.to_0rgb());
    }

    /// Bounds-checked pixel write; out-of-surface writes are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.index(x as usize, y as usize);
            self.data[idx] = color.to_0rgb();
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_0rgb(self.data[self.index(x, y)]))
    }

    /// The packed buffer for presentation (`update_with_buffer`) or PNG export.
    pub fn data(&self) -> &[u32] {
        &self.data
    }
}
