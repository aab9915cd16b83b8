use crate::font_metrics::FontMetrics;

/// A glyph metrics and text encoding provider.
///
/// Implementations measure text in em units (1.0 = the point size) and know
/// how to encode a string into the PDF string object their font dictionary
/// expects. Everything else about fonts (file parsing, embedding, character
/// maps) stays behind this trait.
pub trait Font {
    /// The font name used to key the page resource registry.
    fn name(&self) -> &str;

    /// Ascender in em units, positive above the baseline.
    fn ascent(&self) -> f32;

    /// Descender in em units, negative below the baseline.
    fn descent(&self) -> f32;

    /// Measures `text`, returning run metrics in em units.
    ///
    /// `letter_spacing` is in em units and is applied after every glyph. A
    /// character with no representable glyph contributes zero-width metrics.
    fn string_metrics(&self, text: &str, letter_spacing: f32) -> FontMetrics;

    /// Appends the PDF string object encoding `text` to `out`, delimiters
    /// and escaping included.
    fn put_text(&self, out: &mut Vec<u8>, text: &str);
}

/// Writes `text` as a PDF literal string `(…)`, escaping the characters the
/// string grammar reserves.
pub fn put_literal_string(out: &mut Vec<u8>, text: &str) {
    out.push(b'(');
    for byte in text.bytes() {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            _ => out.push(byte),
        }
    }
    out.push(b')');
}

#[cfg(test)]
mod tests {
    use super::put_literal_string;

    #[test]
    fn literal_string_escapes_delimiters() {
        let mut out = Vec::new();
        put_literal_string(&mut out, r"a(b)\c");
        assert_eq!(out, br"(a\(b\)\\c)");
    }

    #[test]
    fn literal_string_escapes_control_characters() {
        let mut out = Vec::new();
        put_literal_string(&mut out, "a\nb");
        assert_eq!(out, b"(a\\nb)");
    }
}
