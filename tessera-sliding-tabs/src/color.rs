//! Packed 8-bit colors and the linear blend used while dragging between tabs.

/// An 8-bit-per-channel ARGB color.
///
/// Indicator colors are compared for equality before blending, so the type
/// keeps integer channels rather than floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    // --- Common Colors ---
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);

    /// Creates a new `Color` from red, green, blue and alpha channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color`.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs the color as `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Blends `color1` and `color2` using the given ratio.
///
/// A ratio of `1.0` returns `color1`, `0.5` gives an even blend and `0.0`
/// returns `color2`. Each of red, green and blue is interpolated on its own
/// and truncated, and always lies between the two input channels; the result
/// is always opaque. Ratios outside `[0, 1]` are clamped.
///
/// # Examples
///
/// ```
/// use tessera_sliding_tabs::color::{Color, blend_colors};
///
/// let mixed = blend_colors(Color::RED, Color::BLUE, 0.5);
/// assert_eq!(mixed, Color::from_rgb(127, 0, 127));
/// assert_eq!(blend_colors(Color::RED, Color::BLUE, 0.0), Color::BLUE);
/// ```
pub fn blend_colors(color1: Color, color2: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    // Anchored on `c2` so equal channels come back unchanged.
    let channel = |c1: u8, c2: u8| {
        let c2 = f32::from(c2);
        (c2 + (f32::from(c1) - c2) * ratio) as u8
    };
    Color::from_rgb(
        channel(color1.r, color2.r),
        channel(color1.g, color2.g),
        channel(color1.b, color2.b),
    )
}
