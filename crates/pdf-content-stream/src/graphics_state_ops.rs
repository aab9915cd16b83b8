use pdf_graphics::{LineCap, LineJoin};

use crate::{content_stream::ContentStream, error::ContentStreamError};

impl ContentStream {
    /// Sets the line width for stroking with `w`.
    pub fn set_line_width(&mut self, width: f32) -> Result<(), ContentStreamError> {
        self.op(&[width], "w")
    }

    /// Sets the line cap style with `J`.
    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.put_int(cap as i32);
        self.put_str(" J\n");
    }

    /// Sets the line join style with `j`.
    pub fn set_line_join(&mut self, join: LineJoin) {
        self.put_int(join as i32);
        self.put_str(" j\n");
    }

    /// Sets the miter limit with `M`.
    pub fn set_miter_limit(&mut self, limit: f32) -> Result<(), ContentStreamError> {
        if limit < 0.0 {
            return Err(ContentStreamError::NegativeMiterLimit(limit));
        }
        self.op(&[limit], "M")
    }

    /// Sets the dash pattern with `[…] phase d`. An empty `pattern` resets
    /// to a solid line.
    pub fn set_dash_pattern(
        &mut self,
        pattern: &[f32],
        phase: f32,
    ) -> Result<(), ContentStreamError> {
        for &value in pattern {
            if !value.is_finite() {
                return Err(ContentStreamError::NonFiniteNumber(value));
            }
        }
        if !phase.is_finite() {
            return Err(ContentStreamError::NonFiniteNumber(phase));
        }
        self.put_str("[");
        for (i, &value) in pattern.iter().enumerate() {
            if i > 0 {
                self.put_str(" ");
            }
            self.put_number(value);
        }
        self.put_str("] ");
        self.put_number(phase);
        self.put_str(" d\n");
        Ok(())
    }

    /// Installs a named external graphics state dictionary with `gs`.
    pub fn set_graphic_state(&mut self, name: &str) {
        self.put_name(name);
        self.put_str("gs\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn stroke_parameters() {
        let mut cs = ContentStream::new();
        cs.set_line_width(2.5).unwrap();
        cs.set_line_cap(LineCap::Round);
        cs.set_line_join(LineJoin::Bevel);
        cs.set_miter_limit(4.0).unwrap();
        assert_eq!(text(&cs), "2.5 w\n1 J\n2 j\n4 M\n");
    }

    #[test]
    fn dash_pattern_brackets_and_phase() {
        let mut cs = ContentStream::new();
        cs.set_dash_pattern(&[3.0, 2.0], 1.0).unwrap();
        cs.set_dash_pattern(&[], 0.0).unwrap();
        assert_eq!(text(&cs), "[3 2] 1 d\n[] 0 d\n");
    }

    #[test]
    fn negative_miter_limit_is_rejected() {
        let mut cs = ContentStream::new();
        assert!(cs.set_miter_limit(-1.0).is_err());
        assert!(cs.bytes().is_empty());
    }

    #[test]
    fn graphic_state_by_name() {
        let mut cs = ContentStream::new();
        cs.set_graphic_state("a0");
        assert_eq!(text(&cs), "/a0 gs\n");
    }
}
