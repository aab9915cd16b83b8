use pdf_graphics::point::Point;

use crate::{content_stream::ContentStream, error::ContentStreamError};

impl ContentStream {
    /// Begins a new subpath at (`x`, `y`) with `m`.
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<(), ContentStreamError> {
        self.op(&[x, y], "m")?;
        self.last_point = Some((x, y));
        self.subpath_start = Some((x, y));
        Ok(())
    }

    /// Appends a straight line segment to (`x`, `y`) with `l`.
    pub fn line_to(&mut self, x: f32, y: f32) -> Result<(), ContentStreamError> {
        self.op(&[x, y], "l")?;
        self.last_point = Some((x, y));
        Ok(())
    }

    /// Appends a cubic Bézier curve to (`x3`, `y3`) with `c`.
    ///
    /// (`x1`, `y1`) and (`x2`, `y2`) are the control points.
    pub fn curve_to(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
    ) -> Result<(), ContentStreamError> {
        self.op(&[x1, y1, x2, y2, x3, y3], "c")?;
        self.last_point = Some((x3, y3));
        Ok(())
    }

    /// Appends a rectangle as a complete subpath with `re`.
    pub fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), ContentStreamError> {
        self.op(&[x, y, width, height], "re")?;
        self.last_point = Some((x, y));
        self.subpath_start = Some((x, y));
        Ok(())
    }

    /// Closes the current subpath with `h`.
    pub fn close_path(&mut self) {
        self.put_op(&[], "h");
        self.last_point = self.subpath_start;
    }

    /// A straight line segment from (`x1`, `y1`) to (`x2`, `y2`).
    pub fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<(), ContentStreamError> {
        self.move_to(x1, y1)?;
        self.line_to(x2, y2)
    }

    /// A polyline through `points`, optionally closed into a polygon.
    pub fn draw_polygon(&mut self, points: &[Point], close: bool) -> Result<(), ContentStreamError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.move_to(first.x, first.y)?;
        for point in rest {
            self.line_to(point.x, point.y)?;
        }
        if close {
            self.close_path();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn path_segments_emit_in_operand_order() {
        let mut cs = ContentStream::new();
        cs.move_to(10.0, 20.0).unwrap();
        cs.line_to(30.0, 20.0).unwrap();
        cs.curve_to(30.0, 30.0, 20.0, 40.0, 10.0, 40.0).unwrap();
        cs.close_path();
        assert_eq!(text(&cs), "10 20 m\n30 20 l\n30 30 20 40 10 40 c\nh\n");
    }

    #[test]
    fn rect_is_one_operator() {
        let mut cs = ContentStream::new();
        cs.draw_rect(0.0, 0.0, 100.0, 50.0).unwrap();
        assert_eq!(text(&cs), "0 0 100 50 re\n");
    }

    #[test]
    fn polygon_closes_with_h() {
        let mut cs = ContentStream::new();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ];
        cs.draw_polygon(&points, true).unwrap();
        assert_eq!(text(&cs), "0 0 m\n10 0 l\n5 8 l\nh\n");
    }

    #[test]
    fn empty_polygon_emits_nothing() {
        let mut cs = ContentStream::new();
        cs.draw_polygon(&[], true).unwrap();
        assert!(cs.bytes().is_empty());
    }
}
