use crate::{
    font::{Font, put_literal_string},
    font_metrics::FontMetrics,
};

/// A metrics provider with one fixed advance for every character.
///
/// Useful for monospace layout against one of the non-embedded standard
/// fonts, and for deterministic layout tests. Text is encoded as an escaped
/// literal string.
pub struct FixedMetricsFont {
    name: String,
    advance: f32,
    ascent: f32,
    descent: f32,
}

impl FixedMetricsFont {
    /// All values are in em units; `descent` is expected to be negative.
    pub fn new(name: impl Into<String>, advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            name: name.into(),
            advance,
            ascent,
            descent,
        }
    }

    fn glyph_metrics(&self) -> FontMetrics {
        FontMetrics {
            left: 0.0,
            top: self.descent,
            right: self.advance,
            bottom: self.ascent,
            ascent: self.ascent,
            descent: self.descent,
            advance_width: self.advance,
        }
    }
}

impl Font for FixedMetricsFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn string_metrics(&self, text: &str, letter_spacing: f32) -> FontMetrics {
        FontMetrics::append(
            text.chars().map(|_| self.glyph_metrics()),
            letter_spacing,
        )
    }

    fn put_text(&self, out: &mut Vec<u8>, text: &str) {
        put_literal_string(out, text);
    }
}

#[cfg(test)]
mod tests {
    use super::FixedMetricsFont;
    use crate::font::Font;

    #[test]
    fn every_character_advances_the_same() {
        let font = FixedMetricsFont::new("Mono", 0.6, 0.8, -0.2);
        let one = font.string_metrics("a", 0.0);
        let four = font.string_metrics("abcd", 0.0);
        assert_eq!(one.advance_width, 0.6);
        assert_eq!(four.advance_width, 2.4);
        assert_eq!(four.max_height(), 1.0);
    }

    #[test]
    fn empty_text_measures_zero() {
        let font = FixedMetricsFont::new("Mono", 0.6, 0.8, -0.2);
        assert_eq!(font.string_metrics("", 0.0).advance_width, 0.0);
    }
}
