use pdf_graphics::PathFillType;

use crate::content_stream::ContentStream;

impl ContentStream {
    /// Fills the current path with `f`, or `f*` under the even-odd rule.
    pub fn fill_path(&mut self, fill_type: PathFillType) {
        let operator = match fill_type {
            PathFillType::Winding => "f",
            PathFillType::EvenOdd => "f*",
        };
        self.put_op(&[], operator);
    }

    /// Strokes the current path with `S`, or `s` to close it first.
    pub fn stroke_path(&mut self, close: bool) {
        self.put_op(&[], if close { "s" } else { "S" });
    }

    /// Fills and strokes the current path (`B` family).
    pub fn fill_and_stroke_path(&mut self, fill_type: PathFillType, close: bool) {
        let operator = match (close, fill_type) {
            (false, PathFillType::Winding) => "B",
            (false, PathFillType::EvenOdd) => "B*",
            (true, PathFillType::Winding) => "b",
            (true, PathFillType::EvenOdd) => "b*",
        };
        self.put_op(&[], operator);
    }

    /// Intersects the clipping path with the current path (`W`).
    ///
    /// `end` also ends the path with a no-op paint (`n`), which is what
    /// callers want unless another painting operator follows.
    pub fn clip_path(&mut self, fill_type: PathFillType, end: bool) {
        let operator = match (fill_type, end) {
            (PathFillType::Winding, false) => "W",
            (PathFillType::EvenOdd, false) => "W*",
            (PathFillType::Winding, true) => "W n",
            (PathFillType::EvenOdd, true) => "W* n",
        };
        self.put_op(&[], operator);
    }

    /// Ends the current path without painting it (`n`).
    pub fn end_path(&mut self) {
        self.put_op(&[], "n");
    }
}
