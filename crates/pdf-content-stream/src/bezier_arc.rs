use core::f32::consts::PI;

use pdf_graphics::transform::Transform;

use crate::{content_stream::ContentStream, error::ContentStreamError};

/// Radii below this threshold degrade the arc to a straight line.
const MIN_RADIUS: f32 = 1e-10;

impl ContentStream {
    /// Appends an SVG-style elliptical arc from (`x1`, `y1`) to (`x2`, `y2`)
    /// as a run of cubic Bézier segments.
    ///
    /// The endpoint parameterization follows SVG 1.1 Appendix F.6.5:
    /// coincident endpoints emit nothing, a vanishing radius emits a single
    /// line, and a non-zero `phi` (x-axis rotation, in radians) is handled
    /// by computing the arc in a rotated frame and mapping the control
    /// points back. The current point is expected to be at (`x1`, `y1`).
    #[allow(clippy::too_many_arguments)]
    pub fn bezier_arc(
        &mut self,
        x1: f32,
        y1: f32,
        rx: f32,
        ry: f32,
        x2: f32,
        y2: f32,
        large_arc: bool,
        sweep: bool,
        phi: f32,
    ) -> Result<(), ContentStreamError> {
        if x1 == x2 && y1 == y2 {
            // Equivalent to omitting the arc segment entirely.
            return Ok(());
        }
        if rx.abs() < MIN_RADIUS || ry.abs() < MIN_RADIUS {
            return self.line_to(x2, y2);
        }

        if phi == 0.0 {
            self.arc_segments(x1, y1, rx.abs(), ry.abs(), x2, y2, large_arc, sweep, None)
        } else {
            // Move the start point to the origin and undo the axis rotation,
            // compute there, then map every control point back.
            let (tx, ty) = Transform::from_rotate(-phi).transform_point(x2 - x1, y2 - y1);
            let back = Transform::from_translate(x1, y1).multiplied(&Transform::from_rotate(phi));
            self.arc_segments(0.0, 0.0, rx.abs(), ry.abs(), tx, ty, large_arc, sweep, Some(back))
        }
    }

    /// Converts center parameterization to cubics and emits them.
    #[allow(clippy::too_many_arguments)]
    fn arc_segments(
        &mut self,
        x1: f32,
        y1: f32,
        mut rx: f32,
        mut ry: f32,
        x2: f32,
        y2: f32,
        large_arc: bool,
        sweep: bool,
        back: Option<Transform>,
    ) -> Result<(), ContentStreamError> {
        // F.6.5.1: half the vector between the endpoints.
        let x1p = (x1 - x2) / 2.0;
        let y1p = (y1 - y2) / 2.0;

        // F.6.6.3: scale up radii that cannot reach the endpoint.
        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // F.6.5.2: center of the ellipse in the primed frame.
        let numerator =
            (rx * rx) * (ry * ry) - (rx * rx) * (y1p * y1p) - (ry * ry) * (x1p * x1p);
        let denominator = (rx * rx) * (y1p * y1p) + (ry * ry) * (x1p * x1p);
        let sign = if large_arc != sweep { 1.0 } else { -1.0 };
        let coefficient = sign * (numerator / denominator).max(0.0).sqrt();
        let cxp = coefficient * rx * y1p / ry;
        let cyp = -coefficient * ry * x1p / rx;

        // F.6.5.3: back to the unprimed frame.
        let cx = cxp + (x1 + x2) / 2.0;
        let cy = cyp + (y1 + y2) / 2.0;

        // F.6.5.5 and F.6.5.6: start angle and sweep extent.
        let start = vector_angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry);
        let mut extent = vector_angle(
            (x1p - cxp) / rx,
            (y1p - cyp) / ry,
            (-x1p - cxp) / rx,
            (-y1p - cyp) / ry,
        ) % (2.0 * PI);
        if !sweep && extent > 0.0 {
            extent -= 2.0 * PI;
        } else if sweep && extent < 0.0 {
            extent += 2.0 * PI;
        }

        // Split into fragments no wider than a quarter turn.
        let fragments = (extent.abs() / (PI / 2.0)).ceil().max(1.0);
        #[allow(clippy::as_conversions)]
        let count = fragments as usize;
        let step = extent / fragments;
        // Control-point distance for one fragment; `sin` carries the sign of
        // the sweep direction.
        let kappa = (4.0 / 3.0) * (1.0 - (step / 2.0).cos()) / (step / 2.0).sin();

        let mut theta = start;
        for _ in 0..count {
            let next = theta + step;
            let (sin0, cos0) = theta.sin_cos();
            let (sin1, cos1) = next.sin_cos();

            let p1 = (
                cx + rx * (cos0 - kappa * sin0),
                cy + ry * (sin0 + kappa * cos0),
            );
            let p2 = (
                cx + rx * (cos1 + kappa * sin1),
                cy + ry * (sin1 - kappa * cos1),
            );
            let p3 = (cx + rx * cos1, cy + ry * sin1);

            match &back {
                Some(transform) => {
                    let (x1t, y1t) = transform.transform_point(p1.0, p1.1);
                    let (x2t, y2t) = transform.transform_point(p2.0, p2.1);
                    let (x3t, y3t) = transform.transform_point(p3.0, p3.1);
                    self.curve_to(x1t, y1t, x2t, y2t, x3t, y3t)?;
                }
                None => self.curve_to(p1.0, p1.1, p2.0, p2.1, p3.0, p3.1)?,
            }
            theta = next;
        }
        Ok(())
    }
}

/// Signed angle from vector `(ux, uy)` to `(vx, vy)` (F.6.5.4).
fn vector_angle(ux: f32, uy: f32, vx: f32, vy: f32) -> f32 {
    let dot = ux * vx + uy * vy;
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();
    let mut angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        angle = -angle;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator_tokens(cs: &ContentStream) -> Vec<String> {
        core::str::from_utf8(cs.bytes())
            .unwrap()
            .split_whitespace()
            .filter(|t| t.parse::<f32>().is_err())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn coincident_endpoints_emit_nothing() {
        let mut cs = ContentStream::new();
        cs.bezier_arc(10.0, 10.0, 5.0, 5.0, 10.0, 10.0, false, false, 0.0)
            .unwrap();
        assert!(cs.bytes().is_empty());
    }

    #[test]
    fn vanishing_radius_degrades_to_a_line() {
        let mut cs = ContentStream::new();
        cs.bezier_arc(0.0, 0.0, 0.0, 5.0, 10.0, 0.0, false, false, 0.0)
            .unwrap();
        assert_eq!(operator_tokens(&cs), ["l"]);
        assert_eq!(core::str::from_utf8(cs.bytes()).unwrap(), "10 0 l\n");
    }

    #[test]
    fn half_circle_splits_into_two_curves() {
        let mut cs = ContentStream::new();
        cs.bezier_arc(0.0, 0.0, 5.0, 5.0, 10.0, 0.0, false, true, 0.0)
            .unwrap();
        assert_eq!(operator_tokens(&cs), ["c", "c"]);
    }

    #[test]
    fn arc_lands_on_the_end_point() {
        let mut cs = ContentStream::new();
        cs.bezier_arc(0.0, 0.0, 5.0, 5.0, 10.0, 0.0, false, true, 0.0)
            .unwrap();
        let text = core::str::from_utf8(cs.bytes()).unwrap();
        let last_curve = text.lines().last().unwrap();
        let numbers: Vec<f32> = last_curve
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        let (x, y) = (numbers[4], numbers[5]);
        assert!((x - 10.0).abs() < 1e-3, "ends at x = {x}");
        assert!(y.abs() < 1e-3, "ends at y = {y}");
    }

    #[test]
    fn large_arc_uses_more_fragments() {
        let mut cs = ContentStream::new();
        cs.bezier_arc(0.0, 0.0, 5.0, 5.0, 5.0, 5.0, true, true, 0.0)
            .unwrap();
        // Three fragments for the 270° sweep.
        assert_eq!(operator_tokens(&cs), ["c", "c", "c"]);
    }

    #[test]
    fn rotated_arc_still_reaches_the_end_point() {
        let mut cs = ContentStream::new();
        cs.bezier_arc(0.0, 0.0, 8.0, 4.0, 10.0, 2.0, false, true, 0.5)
            .unwrap();
        let text = core::str::from_utf8(cs.bytes()).unwrap();
        let numbers: Vec<f32> = text
            .lines()
            .last()
            .unwrap()
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        assert!((numbers[4] - 10.0).abs() < 1e-3);
        assert!((numbers[5] - 2.0).abs() < 1e-3);
    }
}
