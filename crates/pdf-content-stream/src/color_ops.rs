use pdf_graphics::color::Color;

use crate::{content_stream::ContentStream, error::ContentStreamError};

impl ContentStream {
    /// Sets the non-stroking color (`rg` / `g` / `k` by model).
    pub fn set_fill_color(&mut self, color: Color) -> Result<(), ContentStreamError> {
        match color {
            Color::Rgb { r, g, b } => self.op(&[r, g, b], "rg"),
            Color::Gray { gray } => self.op(&[gray], "g"),
            Color::Cmyk { c, m, y, k } => self.op(&[c, m, y, k], "k"),
        }
    }

    /// Sets the stroking color (`RG` / `G` / `K` by model).
    pub fn set_stroke_color(&mut self, color: Color) -> Result<(), ContentStreamError> {
        match color {
            Color::Rgb { r, g, b } => self.op(&[r, g, b], "RG"),
            Color::Gray { gray } => self.op(&[gray], "G"),
            Color::Cmyk { c, m, y, k } => self.op(&[c, m, y, k], "K"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn rgb_colors() {
        let mut cs = ContentStream::new();
        cs.set_fill_color(Color::from_rgb(1.0, 0.5, 0.0)).unwrap();
        cs.set_stroke_color(Color::from_rgb(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(text(&cs), "1 0.5 0 rg\n0 0 1 RG\n");
    }

    #[test]
    fn cmyk_colors() {
        let mut cs = ContentStream::new();
        cs.set_fill_color(Color::from_cmyk(0.1, 0.2, 0.3, 0.4)).unwrap();
        cs.set_stroke_color(Color::from_cmyk(0.0, 0.0, 0.0, 1.0)).unwrap();
        assert_eq!(text(&cs), "0.1 0.2 0.3 0.4 k\n0 0 0 1 K\n");
    }

    #[test]
    fn gray_colors() {
        let mut cs = ContentStream::new();
        cs.set_fill_color(Color::from_gray(0.5)).unwrap();
        cs.set_stroke_color(Color::from_gray(1.0)).unwrap();
        assert_eq!(text(&cs), "0.5 g\n1 G\n");
    }
}
