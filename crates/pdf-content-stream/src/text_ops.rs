use pdf_graphics::TextRenderingMode;

use crate::{content_stream::ContentStream, error::ContentStreamError};

/// Text-state parameters accompanying a `Tf` font selection.
///
/// Each field maps onto one optional operator; fields at their PDF default
/// value are not emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextParams {
    /// Character spacing (`Tc`), in unscaled text space units.
    pub char_spacing: f32,
    /// Word spacing (`Tw`), in unscaled text space units.
    pub word_spacing: f32,
    /// Horizontal scaling (`Tz`), as a fraction where 1.0 means 100%.
    pub horizontal_scale: f32,
    /// Text rise (`Ts`), a vertical offset from the baseline.
    pub rise: f32,
    /// Rendering mode (`Tr`).
    pub mode: TextRenderingMode,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scale: 1.0,
            rise: 0.0,
            mode: TextRenderingMode::Fill,
        }
    }
}

impl ContentStream {
    /// Begins a text object with `BT`.
    pub fn begin_text(&mut self) {
        self.put_op(&[], "BT");
    }

    /// Ends the current text object with `ET`.
    pub fn end_text(&mut self) {
        self.put_op(&[], "ET");
    }

    /// Moves the text position with `Td`.
    pub fn move_text_position(&mut self, x: f32, y: f32) -> Result<(), ContentStreamError> {
        self.op(&[x, y], "Td")
    }

    /// Selects `/name size` with `Tf`, then the non-default text-state
    /// parameters (`Tc`, `Tw`, `Tz`, `Ts`, `Tr`). `Tr` is omitted when the
    /// mode is fill.
    pub fn set_font(
        &mut self,
        name: &str,
        size: f32,
        params: &TextParams,
    ) -> Result<(), ContentStreamError> {
        for value in [size, params.char_spacing, params.word_spacing, params.horizontal_scale, params.rise] {
            if !value.is_finite() {
                return Err(ContentStreamError::NonFiniteNumber(value));
            }
        }
        self.put_name(name);
        self.put_number(size);
        self.put_str(" Tf\n");
        if params.char_spacing != 0.0 {
            self.put_op(&[params.char_spacing], "Tc");
        }
        if params.word_spacing != 0.0 {
            self.put_op(&[params.word_spacing], "Tw");
        }
        if params.horizontal_scale != 1.0 {
            self.put_op(&[params.horizontal_scale * 100.0], "Tz");
        }
        if params.rise != 0.0 {
            self.put_op(&[params.rise], "Ts");
        }
        if params.mode != TextRenderingMode::Fill {
            self.put_int(params.mode as i32);
            self.put_str(" Tr\n");
        }
        Ok(())
    }

    /// Shows pre-encoded text with `[…] TJ`.
    ///
    /// `encoded` must already be a complete PDF string object (literal or
    /// hex) as produced by a font's text encoder.
    pub fn show_text(&mut self, encoded: &[u8]) {
        self.put_str("[");
        self.put_raw(encoded);
        self.put_str("] TJ\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn set_font_with_defaults_is_just_tf() {
        let mut cs = ContentStream::new();
        cs.set_font("F0", 12.0, &TextParams::default()).unwrap();
        assert_eq!(text(&cs), "/F0 12 Tf\n");
    }

    #[test]
    fn set_font_emits_non_default_state() {
        let mut cs = ContentStream::new();
        let params = TextParams {
            char_spacing: 1.5,
            word_spacing: 2.0,
            horizontal_scale: 0.5,
            rise: 3.0,
            mode: TextRenderingMode::Stroke,
        };
        cs.set_font("F1", 10.0, &params).unwrap();
        assert_eq!(
            text(&cs),
            "/F1 10 Tf\n1.5 Tc\n2 Tw\n50 Tz\n3 Ts\n1 Tr\n"
        );
    }

    #[test]
    fn show_text_wraps_encoded_bytes() {
        let mut cs = ContentStream::new();
        cs.begin_text();
        cs.move_text_position(10.0, 20.0).unwrap();
        cs.show_text(b"(Hello)");
        cs.end_text();
        assert_eq!(text(&cs), "BT\n10 20 Td\n[(Hello)] TJ\nET\n");
    }
}
