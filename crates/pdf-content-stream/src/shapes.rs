use crate::{content_stream::ContentStream, error::ContentStreamError};

/// Control-point distance for approximating a quarter circle with one cubic
/// Bézier: `4 * (sqrt(2) - 1) / 3`.
pub(crate) const QUARTER_ARC: f32 = 0.551784;

impl ContentStream {
    /// Appends an ellipse centered at (`x`, `y`) with radii `rx`/`ry` as one
    /// `m` and four `c` segments, wound clockwise from the bottom.
    pub fn draw_ellipse(
        &mut self,
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
    ) -> Result<(), ContentStreamError> {
        let kx = QUARTER_ARC * rx;
        let ky = QUARTER_ARC * ry;
        self.move_to(x, y - ry)?;
        self.curve_to(x + kx, y - ry, x + rx, y - ky, x + rx, y)?;
        self.curve_to(x + rx, y + ky, x + kx, y + ry, x, y + ry)?;
        self.curve_to(x - kx, y + ry, x - rx, y + ky, x - rx, y)?;
        self.curve_to(x - rx, y - ky, x - kx, y - ry, x, y - ry)
    }

    /// Appends a circle of radius `r` centered at (`x`, `y`).
    pub fn draw_circle(&mut self, x: f32, y: f32, r: f32) -> Result<(), ContentStreamError> {
        self.draw_ellipse(x, y, r, r)
    }

    /// Appends a rectangle with elliptical corners of radii (`rh`, `rv`),
    /// starting on the left edge above the bottom-left corner: four corner
    /// cubics connected by edge lines.
    pub fn draw_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rh: f32,
        rv: f32,
    ) -> Result<(), ContentStreamError> {
        let kh = QUARTER_ARC * rh;
        let kv = QUARTER_ARC * rv;

        self.move_to(x, y + rv)?;
        self.curve_to(x, y + rv - kv, x + rh - kh, y, x + rh, y)?;
        self.line_to(x + width - rh, y)?;
        self.curve_to(
            x + width - rh + kh,
            y,
            x + width,
            y + rv - kv,
            x + width,
            y + rv,
        )?;
        self.line_to(x + width, y + height - rv)?;
        self.curve_to(
            x + width,
            y + height - rv + kv,
            x + width - rh + kh,
            y + height,
            x + width - rh,
            y + height,
        )?;
        self.line_to(x + rh, y + height)?;
        self.curve_to(
            x + rh - kh,
            y + height,
            x,
            y + height - rv + kv,
            x,
            y + height - rv,
        )?;
        self.line_to(x, y + rv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(cs: &ContentStream) -> Vec<String> {
        core::str::from_utf8(cs.bytes())
            .unwrap()
            .split_whitespace()
            .filter(|t| t.parse::<f32>().is_err())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn ellipse_is_one_move_and_four_curves() {
        let mut cs = ContentStream::new();
        cs.draw_ellipse(50.0, 50.0, 20.0, 10.0).unwrap();
        assert_eq!(tokens(&cs), ["m", "c", "c", "c", "c"]);
    }

    #[test]
    fn ellipse_starts_at_the_bottom() {
        let mut cs = ContentStream::new();
        cs.draw_ellipse(50.0, 50.0, 20.0, 10.0).unwrap();
        let text = core::str::from_utf8(cs.bytes()).unwrap();
        assert!(text.starts_with("50 40 m\n"));
        // The path returns to its starting point.
        assert!(text.trim_end().ends_with("50 40 c"));
    }

    #[test]
    fn rounded_rect_token_sequence() {
        let mut cs = ContentStream::new();
        cs.draw_rounded_rect(0.0, 0.0, 10.0, 10.0, 2.0, 2.0).unwrap();
        let text = core::str::from_utf8(cs.bytes()).unwrap();
        assert!(text.starts_with("0 2 m\n"));
        assert_eq!(tokens(&cs), ["m", "c", "l", "c", "l", "c", "l", "c", "l"]);
    }

    #[test]
    fn rounded_rect_with_zero_radii_degenerates_to_box_edges() {
        let mut cs = ContentStream::new();
        cs.draw_rounded_rect(0.0, 0.0, 10.0, 10.0, 0.0, 0.0).unwrap();
        // Corner curves collapse onto the corners but the operator shape
        // stays the same.
        assert_eq!(tokens(&cs), ["m", "c", "l", "c", "l", "c", "l", "c", "l"]);
    }
}
