/// A device color in one of the color models the content stream can emit.
///
/// The enum is closed on purpose: every representable color maps onto one of
/// the PDF color operators (`rg`/`RG`, `g`/`G`, `k`/`K`), so an "unknown
/// color model" cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// DeviceRGB, each channel in `[0.0, 1.0]`.
    Rgb { r: f32, g: f32, b: f32 },
    /// DeviceGray, `0.0` black to `1.0` white.
    Gray { gray: f32 },
    /// DeviceCMYK, each channel in `[0.0, 1.0]`.
    Cmyk { c: f32, m: f32, y: f32, k: f32 },
}

impl Color {
    pub const BLACK: Color = Color::Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Returns a grayscale color from a single luminance value.
    ///
    /// The gray level is a value between 0.0 (black) and 1.0 (white). This
    /// does not clamp the input; callers should ensure the value is within
    /// the valid range.
    pub const fn from_gray(gray: f32) -> Self {
        Self::Gray { gray }
    }

    pub const fn from_cmyk(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self::Cmyk { c, m, y, k }
    }

    /// Converts this color to RGB channels.
    ///
    /// CMYK conversion uses the standard formula `r = (1 - c) * (1 - k)`,
    /// `g = (1 - m) * (1 - k)`, `b = (1 - y) * (1 - k)`.
    pub fn to_rgb(self) -> (f32, f32, f32) {
        match self {
            Color::Rgb { r, g, b } => (r, g, b),
            Color::Gray { gray } => (gray, gray, gray),
            Color::Cmyk { c, m, y, k } => ((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k)),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
