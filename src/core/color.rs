/// 8-bit RGBA color used for tints, texels and overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts a light intensity into a grayscale tint.
    /// The intensity is clamped to [0, 1] here, at color conversion; the
    /// pipeline carries it unclamped up to this point.
    pub fn from_intensity(intensity: f32) -> Self {
        let level = (intensity.clamp(0.0, 1.0) * 255.0) as u8;
        Self::rgb(level, level, level)
    }

    /// Multiply blend, used to combine a texel with the triangle tint.
    pub fn modulate(self, other: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Color {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }

    /// Packs into the 0RGB layout the presentation buffer expects.
    pub fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn from_0rgb(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_clamped_at_conversion() {
        assert_eq!(Color::from_intensity(2.0), Color::WHITE);
        assert_eq!(Color::from_intensity(-0.5), Color::BLACK);
        assert_eq!(Color::from_intensity(1.0), Color::WHITE);
    }

    #[test]
    fn modulate_is_multiplicative() {
        let gray = Color::rgb(128, 128, 128);
        let out = Color::WHITE.modulate(gray);
        assert_eq!(out, gray);
        assert_eq!(Color::BLACK.modulate(gray), Color::BLACK);
    }

    #[test]
    fn pack_roundtrip() {
        let c = Color::rgb(12, 200, 7);
        assert_eq!(Color::from_0rgb(c.to_0rgb()), c);
    }
}
