use std::sync::Arc;

use bitflags::bitflags;
use pdf_canvas::{Canvas, CanvasError};
use pdf_font::font::Font;
use pdf_graphics::{PathFillType, TextRenderingMode, color::Color, rect::Rect};

/// Default point size applied when no span in the tree sets one.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

bitflags! {
    /// The decoration lines drawn over a run of spans.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextDecoration: u8 {
        const UNDERLINE = 1 << 0;
        const OVERLINE = 1 << 1;
        const LINE_THROUGH = 1 << 2;
    }
}

/// Whether decoration lines are drawn once or doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorationStyle {
    #[default]
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Paints behind the spans a decoration run covers.
pub trait BackgroundDecoration {
    fn paint(&self, canvas: &mut Canvas<'_>, rect: Rect) -> Result<(), CanvasError>;
}

/// A solid-color background box.
pub struct BoxDecoration {
    pub color: Color,
}

impl BoxDecoration {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl BackgroundDecoration for BoxDecoration {
    fn paint(&self, canvas: &mut Canvas<'_>, rect: Rect) -> Result<(), CanvasError> {
        canvas.content.set_fill_color(self.color)?;
        canvas
            .content
            .draw_rect(rect.x, rect.y, rect.width, rect.height)?;
        canvas.content.fill_path(PathFillType::Winding);
        Ok(())
    }
}

/// An inheritable, mergeable text style.
///
/// Every field is optional; merging is right-biased, so a child span only
/// needs to set the fields it changes. The resolved style a leaf ends up
/// with always carries a font once layout has run.
#[derive(Clone, Default)]
pub struct TextStyle {
    pub font: Option<Arc<dyn Font>>,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub background: Option<Arc<dyn BackgroundDecoration>>,
    pub decoration: Option<TextDecoration>,
    pub decoration_style: Option<DecorationStyle>,
    pub decoration_color: Option<Color>,
    /// Decoration stroke width as a fraction of the font size.
    pub decoration_thickness: Option<f32>,
    /// Extra advance after every glyph, in points.
    pub letter_spacing: Option<f32>,
    /// Multiplier on the space glyph's advance between words.
    pub word_spacing: Option<f32>,
    /// Extra leading between lines, in points.
    pub line_spacing: Option<f32>,
    pub rendering_mode: Option<TextRenderingMode>,
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document base style: `font` plus a default for every other
    /// field.
    pub fn base(font: Arc<dyn Font>) -> Self {
        Self {
            font: Some(font),
            font_size: Some(DEFAULT_FONT_SIZE),
            color: Some(Color::BLACK),
            background: None,
            decoration: Some(TextDecoration::empty()),
            decoration_style: Some(DecorationStyle::Single),
            decoration_color: None,
            decoration_thickness: Some(1.0),
            letter_spacing: Some(0.0),
            word_spacing: Some(1.0),
            line_spacing: Some(0.0),
            rendering_mode: Some(TextRenderingMode::Fill),
            font_style: Some(FontStyle::Normal),
            font_weight: Some(FontWeight::Normal),
        }
    }

    /// Merges `child` over `self`: fields set on the child win.
    pub fn merge(&self, child: &TextStyle) -> TextStyle {
        TextStyle {
            font: child.font.clone().or_else(|| self.font.clone()),
            font_size: child.font_size.or(self.font_size),
            color: child.color.or(self.color),
            background: child.background.clone().or_else(|| self.background.clone()),
            decoration: child.decoration.or(self.decoration),
            decoration_style: child.decoration_style.or(self.decoration_style),
            decoration_color: child.decoration_color.or(self.decoration_color),
            decoration_thickness: child.decoration_thickness.or(self.decoration_thickness),
            letter_spacing: child.letter_spacing.or(self.letter_spacing),
            word_spacing: child.word_spacing.or(self.word_spacing),
            line_spacing: child.line_spacing.or(self.line_spacing),
            rendering_mode: child.rendering_mode.or(self.rendering_mode),
            font_style: child.font_style.or(self.font_style),
            font_weight: child.font_weight.or(self.font_weight),
        }
    }

    pub fn font_size_or_default(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn color_or_default(&self) -> Color {
        self.color.unwrap_or(Color::BLACK)
    }

    pub fn letter_spacing_or_default(&self) -> f32 {
        self.letter_spacing.unwrap_or(0.0)
    }

    pub fn word_spacing_or_default(&self) -> f32 {
        self.word_spacing.unwrap_or(1.0)
    }

    pub fn line_spacing_or_default(&self) -> f32 {
        self.line_spacing.unwrap_or(0.0)
    }

    pub fn decoration_or_default(&self) -> TextDecoration {
        self.decoration.unwrap_or_default()
    }

    pub fn decoration_style_or_default(&self) -> DecorationStyle {
        self.decoration_style.unwrap_or_default()
    }

    pub fn decoration_thickness_or_default(&self) -> f32 {
        self.decoration_thickness.unwrap_or(1.0)
    }

    pub fn rendering_mode_or_default(&self) -> TextRenderingMode {
        self.rendering_mode.unwrap_or_default()
    }
}

fn arc_opt_eq<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl PartialEq for TextStyle {
    fn eq(&self, other: &Self) -> bool {
        arc_opt_eq(&self.font, &other.font)
            && self.font_size == other.font_size
            && self.color == other.color
            && arc_opt_eq(&self.background, &other.background)
            && self.decoration == other.decoration
            && self.decoration_style == other.decoration_style
            && self.decoration_color == other.decoration_color
            && self.decoration_thickness == other.decoration_thickness
            && self.letter_spacing == other.letter_spacing
            && self.word_spacing == other.word_spacing
            && self.line_spacing == other.line_spacing
            && self.rendering_mode == other.rendering_mode
            && self.font_style == other.font_style
            && self.font_weight == other.font_weight
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pdf_font::fixed_metrics_font::FixedMetricsFont;
    use pdf_font::font::Font;
    use pdf_graphics::color::Color;

    use super::{TextDecoration, TextStyle};

    fn font() -> Arc<dyn Font> {
        Arc::new(FixedMetricsFont::new("Mono", 0.5, 0.8, -0.2))
    }

    #[test]
    fn merge_is_right_biased() {
        let parent = TextStyle::base(font());
        let child = TextStyle {
            font_size: Some(20.0),
            color: Some(Color::from_rgb(1.0, 0.0, 0.0)),
            ..TextStyle::new()
        };
        let merged = parent.merge(&child);
        assert_eq!(merged.font_size, Some(20.0));
        assert_eq!(merged.color, Some(Color::from_rgb(1.0, 0.0, 0.0)));
        // Inherited from the parent.
        assert!(merged.font.is_some());
        assert_eq!(merged.word_spacing, Some(1.0));
    }

    #[test]
    fn equality_uses_font_identity() {
        let shared = font();
        let a = TextStyle {
            font: Some(Arc::clone(&shared)),
            ..TextStyle::new()
        };
        let b = TextStyle {
            font: Some(shared),
            ..TextStyle::new()
        };
        assert!(a == b);

        let c = TextStyle {
            font: Some(font()),
            ..TextStyle::new()
        };
        assert!(a != c);
    }

    #[test]
    fn decoration_flags_combine() {
        let deco = TextDecoration::UNDERLINE | TextDecoration::LINE_THROUGH;
        assert!(deco.contains(TextDecoration::UNDERLINE));
        assert!(!deco.contains(TextDecoration::OVERLINE));
    }
}
