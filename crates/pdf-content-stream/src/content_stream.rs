use pdf_graphics::transform::Transform;

use crate::error::ContentStreamError;

/// Graphics parameters saved and restored by `q` / `Q`.
///
/// A value type: `save_context` pushes a clone, `restore_context` pops it
/// back. Only the parts of the graphics state the engine needs to read back
/// are tracked here; everything else lives solely in the emitted bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsContext {
    /// The current transformation matrix.
    pub ctm: Transform,
}

/// Serializes page description operators into a content stream byte buffer.
///
/// Every drawing call appends the operator's operands followed by its token,
/// newline terminated. Numbers are written in shortest round-trip decimal
/// form with a `.` separator and no exponent; non-finite operands are
/// rejected before any bytes are appended. The buffer lives for one page.
pub struct ContentStream {
    buf: Vec<u8>,
    context: GraphicsContext,
    saved: Vec<GraphicsContext>,
    pub(crate) last_point: Option<(f32, f32)>,
    pub(crate) subpath_start: Option<(f32, f32)>,
}

impl Default for ContentStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStream {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            context: GraphicsContext::default(),
            saved: Vec::new(),
            last_point: None,
            subpath_start: None,
        }
    }

    /// The operator bytes emitted so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// The current transformation matrix, as accumulated by `set_transform`
    /// within the current save/restore scope.
    pub fn matrix(&self) -> &Transform {
        &self.context.ctm
    }

    /// Number of contexts currently saved and not yet restored.
    pub fn saved_context_count(&self) -> usize {
        self.saved.len()
    }

    /// Saves the graphics state: emits `q` and pushes a clone of the current
    /// context.
    pub fn save_context(&mut self) {
        self.saved.push(self.context.clone());
        self.put_op(&[], "q");
    }

    /// Restores the most recently saved graphics state with `Q`.
    ///
    /// A no-op when no context is saved.
    pub fn restore_context(&mut self) {
        if let Some(context) = self.saved.pop() {
            self.context = context;
            self.put_op(&[], "Q");
        }
    }

    /// Concatenates `transform` onto the current matrix with `cm`.
    pub fn set_transform(&mut self, transform: &Transform) -> Result<(), ContentStreamError> {
        self.op(
            &[
                transform.sx,
                transform.ky,
                transform.kx,
                transform.sy,
                transform.tx,
                transform.ty,
            ],
            "cm",
        )?;
        self.context.ctm = self.context.ctm.multiplied(transform);
        Ok(())
    }

    /// Writes `operands`, a space, and the newline-terminated `operator`.
    ///
    /// All operands are validated before the first byte is appended.
    pub(crate) fn op(&mut self, operands: &[f32], operator: &str) -> Result<(), ContentStreamError> {
        for &value in operands {
            if !value.is_finite() {
                return Err(ContentStreamError::NonFiniteNumber(value));
            }
        }
        self.put_op(operands, operator);
        Ok(())
    }

    /// Like [`op`](Self::op) for operands already known to be finite.
    pub(crate) fn put_op(&mut self, operands: &[f32], operator: &str) {
        for &value in operands {
            self.put_number(value);
            self.buf.push(b' ');
        }
        self.buf.extend_from_slice(operator.as_bytes());
        self.buf.push(b'\n');
    }

    /// Writes one number in canonical decimal form.
    pub(crate) fn put_number(&mut self, value: f32) {
        // `Display` for floats is shortest round-trip, locale independent,
        // trims trailing zeros and never switches to scientific notation.
        let formatted = value.to_string();
        self.buf.extend_from_slice(formatted.as_bytes());
    }

    pub(crate) fn put_int(&mut self, value: i32) {
        let formatted = value.to_string();
        self.buf.extend_from_slice(formatted.as_bytes());
    }

    /// Writes a `/Name` token followed by a space.
    pub(crate) fn put_name(&mut self, name: &str) {
        self.buf.push(b'/');
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.push(b' ');
    }

    pub(crate) fn put_str(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    pub(crate) fn put_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::ContentStream;
    use pdf_graphics::transform::Transform;

    fn text(cs: &ContentStream) -> &str {
        core::str::from_utf8(cs.bytes()).unwrap()
    }

    #[test]
    fn numbers_are_trimmed_decimals() {
        let mut cs = ContentStream::new();
        cs.op(&[1.0, 0.5, -2.25, 100.0], "cm").unwrap();
        assert_eq!(text(&cs), "1 0.5 -2.25 100 cm\n");
    }

    #[test]
    fn emitted_numbers_round_trip() {
        let values = [0.1f32, 1.0 / 3.0, 123.456, -0.000123, 16777216.0];
        let mut cs = ContentStream::new();
        cs.op(&values, "cm").unwrap();
        let line = text(&cs);
        let mut parts = line.split_whitespace();
        for expected in values {
            let parsed: f32 = parts.next().unwrap().parse().unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn non_finite_operand_writes_nothing() {
        let mut cs = ContentStream::new();
        assert!(cs.op(&[1.0, f32::NAN], "m").is_err());
        assert!(cs.bytes().is_empty());
    }

    #[test]
    fn save_and_restore_mirror_the_stack() {
        let mut cs = ContentStream::new();
        cs.save_context();
        cs.set_transform(&Transform::from_scale(2.0, 2.0)).unwrap();
        assert_eq!(cs.matrix().sx, 2.0);
        cs.restore_context();
        assert_eq!(cs.matrix().sx, 1.0);
        assert_eq!(text(&cs), "q\n2 0 0 2 0 0 cm\nQ\n");
    }

    #[test]
    fn restore_on_empty_stack_is_silent() {
        let mut cs = ContentStream::new();
        cs.restore_context();
        assert!(cs.bytes().is_empty());
        assert_eq!(cs.saved_context_count(), 0);
    }

    #[test]
    fn transform_accumulates_onto_ctm() {
        let mut cs = ContentStream::new();
        cs.set_transform(&Transform::from_translate(10.0, 0.0)).unwrap();
        cs.set_transform(&Transform::from_scale(2.0, 2.0)).unwrap();
        // ctm = T * S, so scaling applies before the translation.
        assert_eq!(cs.matrix().transform_point(1.0, 1.0), (12.0, 2.0));
    }
}
