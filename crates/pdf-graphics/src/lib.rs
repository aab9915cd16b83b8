pub mod color;
pub mod point;
pub mod rect;
pub mod size;
pub mod transform;

use num_derive::FromPrimitive;

/// Specifies the shape to be used at the end of open subpaths when they are stroked.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, FromPrimitive)]
pub enum LineCap {
    /// The stroke ends exactly at the endpoint.
    #[default]
    Butt = 0,
    /// The stroke ends with a semicircular arc.
    Round = 1,
    /// The stroke ends with a square projecting beyond the endpoint.
    Square = 2,
}

/// Specifies the shape to be used at the corners of paths when they are stroked.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, FromPrimitive)]
pub enum LineJoin {
    /// Sharp corner or angled join.
    #[default]
    Miter = 0,
    /// Rounded join at the corner.
    Round = 1,
    /// Beveled (flattened) join at the corner.
    Bevel = 2,
}

/// Text rendering modes selected with the `Tr` operator.
///
/// The mode decides whether glyph outlines are filled, stroked, used as a
/// clipping boundary, or any combination thereof.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, FromPrimitive)]
pub enum TextRenderingMode {
    /// Fill glyph outlines (the default).
    #[default]
    Fill = 0,
    /// Stroke glyph outlines.
    Stroke = 1,
    /// Fill, then stroke glyph outlines.
    FillAndStroke = 2,
    /// Neither fill nor stroke, leaving the glyphs invisible.
    Invisible = 3,
    /// Fill and add the outlines to the clipping path.
    FillAndClip = 4,
    /// Stroke and add the outlines to the clipping path.
    StrokeAndClip = 5,
    /// Fill, stroke, and add the outlines to the clipping path.
    FillStrokeAndClip = 6,
    /// Add the outlines to the clipping path only.
    Clip = 7,
}

/// Represents the standard blend modes allowed in PDF for compositing graphics.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// The PDF name of this blend mode, as written into an `/BM` entry.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "Normal",
            BlendMode::Multiply => "Multiply",
            BlendMode::Screen => "Screen",
            BlendMode::Overlay => "Overlay",
            BlendMode::Darken => "Darken",
            BlendMode::Lighten => "Lighten",
            BlendMode::ColorDodge => "ColorDodge",
            BlendMode::ColorBurn => "ColorBurn",
            BlendMode::HardLight => "HardLight",
            BlendMode::SoftLight => "SoftLight",
            BlendMode::Difference => "Difference",
            BlendMode::Exclusion => "Exclusion",
            BlendMode::Hue => "Hue",
            BlendMode::Saturation => "Saturation",
            BlendMode::Color => "Color",
            BlendMode::Luminosity => "Luminosity",
        }
    }
}

/// Determines the rule used to define the "inside" region of a path for
/// filling and clipping operations.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum PathFillType {
    /// Non-zero winding number rule: "inside" is computed by a non-zero sum of signed edge crossings.
    #[default]
    Winding,
    /// Even-odd rule: "inside" is computed by an odd number of edge crossings.
    EvenOdd,
}
