use pdf_graphics::rect::Rect;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::{content_stream::ContentStream, error::ContentStreamError};

impl ContentStream {
    /// Replays SVG path data as path construction operators.
    ///
    /// The tokenizer resolves relative coordinates, shorthand segments and
    /// arcs, leaving only absolute move/line/curve/quadratic/close events.
    /// Quadratic segments are promoted to the cubics the content stream
    /// speaks.
    #[allow(clippy::as_conversions)]
    pub fn draw_shape(&mut self, data: &str) -> Result<(), ContentStreamError> {
        for segment in SimplifyingPathParser::from(data) {
            match segment? {
                SimplePathSegment::MoveTo { x, y } => {
                    self.move_to(x as f32, y as f32)?;
                }
                SimplePathSegment::LineTo { x, y } => {
                    self.line_to(x as f32, y as f32)?;
                }
                SimplePathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                    self.curve_to(
                        x1 as f32, y1 as f32, x2 as f32, y2 as f32, x as f32, y as f32,
                    )?;
                }
                SimplePathSegment::Quadratic { x1, y1, x, y } => {
                    let (x0, y0) = self.last_point.unwrap_or((0.0, 0.0));
                    let (qx, qy) = (x1 as f32, y1 as f32);
                    let (ex, ey) = (x as f32, y as f32);
                    // Degree elevation: both cubic control points sit 2/3 of
                    // the way towards the quadratic one.
                    self.curve_to(
                        x0 + 2.0 / 3.0 * (qx - x0),
                        y0 + 2.0 / 3.0 * (qy - y0),
                        ex + 2.0 / 3.0 * (qx - ex),
                        ey + 2.0 / 3.0 * (qy - ey),
                        ex,
                        ey,
                    )?;
                }
                SimplePathSegment::ClosePath => self.close_path(),
            }
        }
        Ok(())
    }
}

/// Computes the tight bounding box of SVG path data without emitting
/// anything: the union of all line endpoints and cubic extrema.
///
/// Returns [`Rect::ZERO`] when the path visits no points.
pub fn shape_bounding_box(data: &str) -> Result<Rect, ContentStreamError> {
    let mut bounds = PathBounds::default();
    for segment in SimplifyingPathParser::from(data) {
        bounds.segment(segment?);
    }
    Ok(bounds.finish())
}

#[derive(Default)]
struct PathBounds {
    min: Option<(f64, f64)>,
    max: (f64, f64),
    current: (f64, f64),
    subpath_start: (f64, f64),
}

impl PathBounds {
    fn segment(&mut self, segment: SimplePathSegment) {
        match segment {
            SimplePathSegment::MoveTo { x, y } => {
                self.visit(x, y);
                self.current = (x, y);
                self.subpath_start = (x, y);
            }
            SimplePathSegment::LineTo { x, y } => {
                self.visit(x, y);
                self.current = (x, y);
            }
            SimplePathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                self.cubic((x1, y1), (x2, y2), (x, y));
            }
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                let (x0, y0) = self.current;
                self.cubic(
                    (
                        x0 + 2.0 / 3.0 * (x1 - x0),
                        y0 + 2.0 / 3.0 * (y1 - y0),
                    ),
                    (
                        x + 2.0 / 3.0 * (x1 - x),
                        y + 2.0 / 3.0 * (y1 - y),
                    ),
                    (x, y),
                );
            }
            SimplePathSegment::ClosePath => {
                self.current = self.subpath_start;
            }
        }
    }

    fn cubic(&mut self, p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) {
        let p0 = self.current;
        self.visit(p3.0, p3.1);
        for axis in 0..2 {
            let pick = |p: (f64, f64)| if axis == 0 { p.0 } else { p.1 };
            let (c0, c1, c2, c3) = (pick(p0), pick(p1), pick(p2), pick(p3));
            // B'(t) = 3at² + 2bt + c with the usual power-basis coefficients.
            let a = -c0 + 3.0 * c1 - 3.0 * c2 + c3;
            let b = 6.0 * c0 - 12.0 * c1 + 6.0 * c2;
            let c = -3.0 * c0 + 3.0 * c1;
            for t in quadratic_roots(3.0 * a, b, c) {
                if t > 0.0 && t < 1.0 {
                    let point = point_on_cubic(p0, p1, p2, p3, t);
                    self.visit(point.0, point.1);
                }
            }
        }
        self.current = p3;
    }

    fn visit(&mut self, x: f64, y: f64) {
        match &mut self.min {
            None => {
                self.min = Some((x, y));
                self.max = (x, y);
            }
            Some(min) => {
                min.0 = min.0.min(x);
                min.1 = min.1.min(y);
                self.max.0 = self.max.0.max(x);
                self.max.1 = self.max.1.max(y);
            }
        }
    }

    #[allow(clippy::as_conversions)]
    fn finish(self) -> Rect {
        match self.min {
            None => Rect::ZERO,
            Some(min) => Rect::from_ltrb(
                min.0 as f32,
                min.1 as f32,
                self.max.0 as f32,
                self.max.1 as f32,
            ),
        }
    }
}

fn point_on_cubic(
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    t: f64,
) -> (f64, f64) {
    let s = 1.0 - t;
    (
        s * s * s * p0.0 + 3.0 * s * s * t * p1.0 + 3.0 * s * t * t * p2.0 + t * t * t * p3.0,
        s * s * s * p0.1 + 3.0 * s * s * t * p1.1 + 3.0 * s * t * t * p2.1 + t * t * t * p3.1,
    )
}

/// Real roots of `at² + bt + c = 0`, degenerating to the linear case when
/// `a` vanishes.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let root = discriminant.sqrt();
    vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn polyline_replays_as_moves_and_lines() {
        let mut cs = ContentStream::new();
        cs.draw_shape("M 10 10 L 20 10 L 20 20 Z").unwrap();
        assert_eq!(text(&cs), "10 10 m\n20 10 l\n20 20 l\nh\n");
    }

    #[test]
    fn relative_segments_become_absolute() {
        let mut cs = ContentStream::new();
        cs.draw_shape("m 10 10 l 5 0 v 5").unwrap();
        assert_eq!(text(&cs), "10 10 m\n15 10 l\n15 15 l\n");
    }

    #[test]
    fn quadratic_promotes_to_cubic() {
        let mut cs = ContentStream::new();
        cs.draw_shape("M 0 0 Q 30 60 60 0").unwrap();
        assert_eq!(text(&cs), "0 0 m\n20 40 40 40 60 0 c\n");
    }

    #[test]
    fn invalid_path_data_is_an_error() {
        let mut cs = ContentStream::new();
        assert!(cs.draw_shape("M 10 fish").is_err());
    }

    #[test]
    fn bounding_box_of_lines_is_the_point_hull() {
        let bounds = shape_bounding_box("M 10 10 L 20 10 L 20 25 Z").unwrap();
        assert_eq!(bounds, Rect::from_ltrb(10.0, 10.0, 20.0, 25.0));
    }

    #[test]
    fn bounding_box_includes_cubic_extrema() {
        // Peak of this symmetric curve is at t = 0.5, y = 75.
        let bounds = shape_bounding_box("M 0 0 C 0 100 100 100 100 0").unwrap();
        assert_eq!(bounds.x, 0.0);
        assert_eq!(bounds.y, 0.0);
        assert_eq!(bounds.width, 100.0);
        assert!((bounds.height - 75.0).abs() < 1e-4);
    }

    #[test]
    fn bounding_box_of_empty_path_is_zero() {
        assert_eq!(shape_bounding_box("").unwrap(), Rect::ZERO);
    }
}
