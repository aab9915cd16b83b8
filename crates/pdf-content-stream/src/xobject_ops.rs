use crate::content_stream::ContentStream;

impl ContentStream {
    /// Paints a named XObject with `Do`.
    pub fn draw_xobject(&mut self, name: &str) {
        self.put_name(name);
        self.put_str("Do\n");
    }

    /// Paints a named shading over the clip region with `sh`.
    pub fn apply_shading(&mut self, name: &str) {
        self.put_name(name);
        self.put_str("sh\n");
    }

    /// Selects a named pattern as the non-stroking color.
    pub fn set_fill_pattern(&mut self, name: &str) {
        self.put_str("/Pattern cs\n");
        self.put_name(name);
        self.put_str("scn\n");
    }

    /// Selects a named pattern as the stroking color.
    pub fn set_stroke_pattern(&mut self, name: &str) {
        self.put_str("/Pattern CS\n");
        self.put_name(name);
        self.put_str("SCN\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn xobject_and_shading_reference_by_name() {
        let mut cs = ContentStream::new();
        cs.draw_xobject("I0");
        cs.apply_shading("S0");
        assert_eq!(text(&cs), "/I0 Do\n/S0 sh\n");
    }

    #[test]
    fn pattern_selection_sets_color_space_first() {
        let mut cs = ContentStream::new();
        cs.set_fill_pattern("P0");
        cs.set_stroke_pattern("P1");
        assert_eq!(
            text(&cs),
            "/Pattern cs\n/P0 scn\n/Pattern CS\n/P1 SCN\n"
        );
    }
}
