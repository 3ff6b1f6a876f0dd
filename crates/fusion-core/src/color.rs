use std::fmt;

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::hex(0x000000);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Channels as floats in [0,1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// CSS `rgba()` string at the given opacity.
    pub fn css(self, opacity: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            opacity.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A fill color together with its own opacity.
///
/// Distinct from a particle's compositing alpha: a friction droplet is black
/// at `darkness` opacity *and* drawn with its per-particle alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub rgb: Rgb,
    pub opacity: f32,
}

impl Paint {
    pub const fn opaque(rgb: Rgb) -> Self {
        Self { rgb, opacity: 1.0 }
    }

    pub const fn tinted(rgb: Rgb, opacity: f32) -> Self {
        Self { rgb, opacity }
    }
}

/// Opacity of a two-digit hex alpha suffix such as `0x40`.
pub fn hex_alpha(value: u8) -> f32 {
    value as f32 / 255.0
}
