/// Maps logical code points to their visually shaped forms.
///
/// Right-to-left scripts with contextual letter forms (Arabic in
/// particular) need their text transformed before measuring and showing;
/// the layout engine applies the shaper to every text leaf laid out in
/// right-to-left direction. Implementations receive logical order and
/// return the presentation forms to measure and emit.
pub trait TextShaper {
    fn convert(&self, text: &str) -> String;
}
