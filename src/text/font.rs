use crate::core::color::Color;
use crate::core::framebuffer::FrameBuffer;
use crate::io::error::LoadError;
use crate::scene::texture::Texture;
use std::collections::HashMap;
use std::path::Path;

/// Height of every glyph in the atlas.
pub const GLYPH_HEIGHT: u32 = 15;
/// Horizontal and vertical stride of the atlas grid.
const CELL_STRIDE: u32 = 16;
/// The grid wraps after this many pixels (8 cells per row).
const ATLAS_ROW_WIDTH: u32 = 128;
/// Every character with an atlas cell, in grid order.
const CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!.abcdefghijklmnopqrstuvwxyz";

/// A character's rectangle in the atlas. Width varies per character and
/// doubles as the advance; height is fixed.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub width: u32,
}

/// Bitmap-font renderer over a single glyph atlas.
///
/// The lookup table is built once at construction. Characters without a
/// table entry are skipped entirely: no glyph, no advance. Newline and space
/// are the only special cases.
pub struct Font {
    atlas: Texture,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::from_atlas(Texture::load(path)?))
    }

    pub fn from_atlas(atlas: Texture) -> Self {
        let mut glyphs = HashMap::new();
        let (mut x, mut y) = (0, 0);
        for c in CHARACTERS.chars() {
            glyphs.insert(
                c,
                Glyph {
                    x,
                    y,
                    width: glyph_width(c),
                },
            );
            x += CELL_STRIDE;
            if x >= ATLAS_ROW_WIDTH {
                x = 0;
                y += CELL_STRIDE;
            }
        }
        // Space maps onto a blank region of the atlas; it advances the
        // cursor without inking anything.
        glyphs.insert(' ', Glyph { x: 85, y: 64, width: 7 });

        Self { atlas, glyphs }
    }

    /// Draws `text` left to right from (x, y). The cursor advances by glyph
    /// width times scale per character; a newline resets x and moves down one
    /// line. Unrecognized characters are dropped silently.
    pub fn render_text(
        &self,
        fb: &mut FrameBuffer,
        text: &str,
        x: i32,
        y: i32,
        scale: f32,
        color: Color,
    ) {
        let line_height = GLYPH_HEIGHT as f32 * scale;
        let mut cursor_x = x as f32;
        let mut cursor_y = y as f32;

        for c in text.chars() {
            if c == '\n' {
                cursor_x = x as f32;
                cursor_y += line_height;
                continue;
            }
            let Some(glyph) = self.glyphs.get(&c) else {
                continue;
            };
            let (nudge_x, nudge_y) = descender_nudge(c);
            self.blit_glyph(
                fb,
                glyph,
                cursor_x + nudge_x * scale,
                cursor_y + nudge_y * scale,
                scale,
                color,
            );
            cursor_x += glyph.width as f32 * scale;
        }
    }

    /// Centers the first line on `x` and then draws like `render_text`:
    /// lines after the first keep the computed origin and are not
    /// re-centered.
    pub fn render_text_centered(
        &self,
        fb: &mut FrameBuffer,
        text: &str,
        x: i32,
        y: i32,
        scale: f32,
        color: Color,
    ) {
        let start = x as f32 - self.first_line_width(text, scale) / 2.0;
        self.render_text(fb, text, start.round() as i32, y, scale, color);
    }

    /// Total advance width of `text` up to the first newline.
    pub fn first_line_width(&self, text: &str, scale: f32) -> f32 {
        text.chars()
            .take_while(|&c| c != '\n')
            .filter_map(|c| self.glyphs.get(&c))
            .map(|g| g.width as f32 * scale)
            .sum()
    }

    fn blit_glyph(
        &self,
        fb: &mut FrameBuffer,
        glyph: &Glyph,
        x: f32,
        y: f32,
        scale: f32,
        color: Color,
    ) {
        let dest_w = (glyph.width as f32 * scale).round() as i32;
        let dest_h = (GLYPH_HEIGHT as f32 * scale).round() as i32;
        let origin_x = x.round() as i32;
        let origin_y = y.round() as i32;

        for dy in 0..dest_h {
            for dx in 0..dest_w {
                let src_x = (glyph.x + (dx as f32 / scale) as u32).min(glyph.x + glyph.width - 1);
                let src_y = (glyph.y + (dy as f32 / scale) as u32).min(glyph.y + GLYPH_HEIGHT - 1);
                let texel = self.atlas.texel(src_x, src_y);
                // Black atlas background is treated as transparent.
                if texel.r == 0 && texel.g == 0 && texel.b == 0 {
                    continue;
                }
                fb.set_pixel(origin_x + dx, origin_y + dy, texel.modulate(color));
            }
        }
    }
}

/// Per-character advance widths of the atlas; everything else is 15.
fn glyph_width(c: char) -> u32 {
    match c {
        'J' | 'K' | 'L' | 'T' | 'U' | 'Y' | 'm' => 14,
        'I' => 8,
        'X' | '2' | '3' | '5' | '6' | '8' | '9' | '0' => 13,
        '1' | 't' => 9,
        '!' | '.' | 'i' | 'l' => 6,
        'c' | 'g' | 'k' | 'n' | 'r' | 's' | 'u' | 'v' | 'x' | 'z' => 11,
        'f' | 'j' => 10,
        'a' | 'b' | 'd' | 'e' | 'o' | 'p' | 'q' | 'h' | 'y' => 12,
        _ => 15,
    }
}

/// Baseline nudge for descenders, in unscaled atlas pixels.
fn descender_nudge(c: char) -> (f32, f32) {
    match c {
        'g' => (-2.0, 3.0),
        'p' | 'q' | 'y' => (0.0, 4.0),
        'j' => (0.0, 3.0),
        _ => (0.0, 0.0),
    }
}
