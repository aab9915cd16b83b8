use ttf_parser::{Face, GlyphId};

use crate::{error::FontError, font::Font, font_metrics::FontMetrics};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A [`Font`] backed by a TrueType or OpenType face.
///
/// The face is parsed on demand from the owned font data, so the type stays
/// free of self-references. Text is encoded as a hex string of 2-byte
/// big-endian glyph ids, the form an Identity-H encoded Type0 font dictionary
/// expects.
pub struct TrueTypeFont {
    name: String,
    data: Vec<u8>,
    index: u32,
    units_per_em: f32,
    ascent: f32,
    descent: f32,
}

impl TrueTypeFont {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Result<Self, FontError> {
        Self::with_index(name, data, 0)
    }

    /// Parses face `index` of a font collection.
    pub fn with_index(name: impl Into<String>, data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        let name = name.into();
        let face = Face::parse(&data, index)?;
        let units_per_em = f32::from(face.units_per_em());
        if units_per_em == 0.0 {
            return Err(FontError::MissingUnitsPerEm(name));
        }
        let ascent = f32::from(face.ascender()) / units_per_em;
        let descent = f32::from(face.descender()) / units_per_em;
        Ok(Self {
            name,
            data,
            index,
            units_per_em,
            ascent,
            descent,
        })
    }

    fn face(&self) -> Option<Face<'_>> {
        // The data was validated at construction, so this only fails if the
        // bytes were corrupted afterwards.
        Face::parse(&self.data, self.index).ok()
    }

    fn glyph_metrics(&self, face: &Face<'_>, ch: char) -> FontMetrics {
        let Some(glyph) = face.glyph_index(ch) else {
            // Unrepresentable characters measure as nothing.
            return FontMetrics::ZERO;
        };

        let advance_width =
            face.glyph_hor_advance(glyph).map(f32::from).unwrap_or(0.0) / self.units_per_em;

        let (left, top, right, bottom) = match face.glyph_bounding_box(glyph) {
            Some(b) => (
                f32::from(b.x_min) / self.units_per_em,
                f32::from(b.y_min) / self.units_per_em,
                f32::from(b.x_max) / self.units_per_em,
                f32::from(b.y_max) / self.units_per_em,
            ),
            // Blank glyphs (e.g. the space) have no outline.
            None => (0.0, 0.0, advance_width, 0.0),
        };

        FontMetrics {
            left,
            top,
            right,
            bottom,
            ascent: self.ascent,
            descent: self.descent,
            advance_width,
        }
    }
}

impl Font for TrueTypeFont {
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
        let Some(face) = self.face() else {
            return FontMetrics::ZERO;
        };
        FontMetrics::append(
            text.chars().map(|ch| self.glyph_metrics(&face, ch)),
            letter_spacing,
        )
    }

    fn put_text(&self, out: &mut Vec<u8>, text: &str) {
        let face = self.face();
        out.push(b'<');
        for ch in text.chars() {
            let glyph = face
                .as_ref()
                .and_then(|f| f.glyph_index(ch))
                .unwrap_or(GlyphId(0));
            for shift in [12u16, 8, 4, 0] {
                out.push(HEX_DIGITS[usize::from(glyph.0 >> shift) & 0xf]);
            }
        }
        out.push(b'>');
    }
}
