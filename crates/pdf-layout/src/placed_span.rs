use std::sync::Arc;

use pdf_canvas::{Canvas, annotations::AnnotationBuilder};
use pdf_content_stream::TextParams;
use pdf_font::font_metrics::FontMetrics;
use pdf_graphics::{point::Point, rect::Rect, size::Size};

use crate::{
    error::LayoutError,
    style::{DecorationStyle, TextDecoration, TextStyle},
};

/// One word of text positioned on a line.
///
/// `offset` is the baseline anchor in layout-local coordinates: x from the
/// line start, y negative downwards from the top of the layout box.
pub struct Word {
    pub text: String,
    pub style: TextStyle,
    pub metrics: FontMetrics,
    pub offset: Point,
}

/// An embedded widget positioned on a line.
///
/// The widget itself stays in the span tree; `widget_index` is its ordinal
/// in visit order, resolved back to the instance during the paint pass.
pub struct PlacedWidget {
    pub widget_index: usize,
    pub style: TextStyle,
    pub offset: Point,
    pub size: Size,
}

/// A span after layout: a glyph run or a widget placement.
pub enum PlacedSpan {
    Word(Word),
    Widget(PlacedWidget),
}

impl PlacedSpan {
    pub fn style(&self) -> &TextStyle {
        match self {
            PlacedSpan::Word(word) => &word.style,
            PlacedSpan::Widget(widget) => &widget.style,
        }
    }

    pub fn offset(&self) -> Point {
        match self {
            PlacedSpan::Word(word) => word.offset,
            PlacedSpan::Widget(widget) => widget.offset,
        }
    }

    pub(crate) fn offset_mut(&mut self) -> &mut Point {
        match self {
            PlacedSpan::Word(word) => &mut word.offset,
            PlacedSpan::Widget(widget) => &mut widget.offset,
        }
    }

    /// Horizontal extent used for alignment and mirroring.
    pub fn width(&self) -> f32 {
        match self {
            PlacedSpan::Word(word) => word.metrics.width(),
            PlacedSpan::Widget(widget) => widget.size.width,
        }
    }

    /// Bounding box in layout-local coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            PlacedSpan::Word(word) => Rect::new(
                word.offset.x + word.metrics.left,
                word.offset.y + word.metrics.top,
                word.metrics.width(),
                word.metrics.height(),
            ),
            PlacedSpan::Widget(widget) => Rect::new(
                widget.offset.x,
                widget.offset.y,
                widget.size.width,
                widget.size.height,
            ),
        }
    }
}

impl Word {
    /// Shows this word with `origin` at the top-left of the layout box.
    pub(crate) fn paint(
        &self,
        canvas: &mut Canvas<'_>,
        text_scale: f32,
        origin: Point,
    ) -> Result<(), LayoutError> {
        let font = self.style.font.clone().ok_or(LayoutError::MissingFont)?;
        let params = TextParams {
            char_spacing: self.style.letter_spacing_or_default(),
            mode: self.style.rendering_mode_or_default(),
            ..TextParams::default()
        };
        canvas.draw_string(
            &font,
            self.style.font_size_or_default() * text_scale,
            &self.text,
            origin.x + self.offset.x,
            origin.y + self.offset.y,
            &params,
        )?;
        Ok(())
    }
}

/// A visual adornment covering a contiguous index range of placed spans.
///
/// Adjacent single-span runs merge on append while style and annotation
/// stay equal, so one underline or one link rectangle spans whole styled
/// stretches of a line.
pub struct DecorationRun {
    pub style: TextStyle,
    pub annotation: Option<Arc<dyn AnnotationBuilder>>,
    pub start_span: usize,
    pub end_span: usize,
}

fn annotation_eq(
    a: &Option<Arc<dyn AnnotationBuilder>>,
    b: &Option<Arc<dyn AnnotationBuilder>>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl DecorationRun {
    pub(crate) fn matches(
        &self,
        style: &TextStyle,
        annotation: &Option<Arc<dyn AnnotationBuilder>>,
    ) -> bool {
        self.style == *style && annotation_eq(&self.annotation, annotation)
    }

    /// Union of the covered spans' boxes, in layout-local coordinates.
    pub fn rect(&self, spans: &[PlacedSpan]) -> Rect {
        let mut covered = spans[self.start_span..=self.end_span].iter();
        let Some(first) = covered.next() else {
            return Rect::ZERO;
        };
        covered.fold(first.bounds(), |acc, span| acc.union(&span.bounds()))
    }

    /// Paints what sits behind the spans: the annotation rectangle and the
    /// background decoration.
    pub(crate) fn background_paint(
        &self,
        canvas: &mut Canvas<'_>,
        spans: &[PlacedSpan],
        global_box: Rect,
    ) -> Result<(), LayoutError> {
        if let Some(builder) = &self.annotation {
            let rect = self.rect(spans).translate(global_box.left(), global_box.top());
            builder.build(canvas, rect)?;
        }
        if let Some(background) = &self.style.background {
            let rect = self.rect(spans).translate(global_box.left(), global_box.top());
            background.paint(canvas, rect)?;
            // Background painting changes the fill color; put the text color
            // back before any glyphs are shown.
            canvas.content.set_fill_color(self.style.color_or_default())?;
        }
        Ok(())
    }

    /// Strokes the decoration lines over the spans.
    pub(crate) fn foreground_paint(
        &self,
        canvas: &mut Canvas<'_>,
        spans: &[PlacedSpan],
        global_box: Rect,
        text_scale: f32,
    ) -> Result<(), LayoutError> {
        let decoration = self.style.decoration_or_default();
        if decoration.is_empty() {
            return Ok(());
        }
        let font = self.style.font.as_ref().ok_or(LayoutError::MissingFont)?;
        let size = self.style.font_size_or_default() * text_scale;
        let thickness = self.style.decoration_thickness_or_default();
        let double = self.style.decoration_style_or_default() == DecorationStyle::Double;
        // Offset between the two lines of a double decoration.
        let space = -0.15 * size * thickness;

        let color = self
            .style
            .decoration_color
            .unwrap_or_else(|| self.style.color_or_default());
        canvas.content.set_stroke_color(color)?;
        canvas.content.set_line_width(thickness * size * 0.05)?;

        let rect = self.rect(spans).translate(global_box.left(), global_box.top());

        if decoration.contains(TextDecoration::UNDERLINE) {
            let base = -font.descent() * size / 2.0;
            canvas
                .content
                .draw_line(rect.left(), rect.bottom() + base, rect.right(), rect.bottom() + base)?;
            if double {
                let offset = base + space;
                canvas.content.draw_line(
                    rect.left(),
                    rect.bottom() + offset,
                    rect.right(),
                    rect.bottom() + offset,
                )?;
            }
            canvas.content.stroke_path(false);
        }

        if decoration.contains(TextDecoration::OVERLINE) {
            let base = size;
            canvas
                .content
                .draw_line(rect.left(), rect.bottom() + base, rect.right(), rect.bottom() + base)?;
            if double {
                let offset = base - space;
                canvas.content.draw_line(
                    rect.left(),
                    rect.bottom() + offset,
                    rect.right(),
                    rect.bottom() + offset,
                )?;
            }
            canvas.content.stroke_path(false);
        }

        if decoration.contains(TextDecoration::LINE_THROUGH) {
            let base = (1.0 - font.descent()) * size / 2.0;
            canvas
                .content
                .draw_line(rect.left(), rect.bottom() + base, rect.right(), rect.bottom() + base)?;
            if double {
                let offset = base + space;
                canvas.content.draw_line(
                    rect.left(),
                    rect.bottom() + offset,
                    rect.right(),
                    rect.bottom() + offset,
                )?;
            }
            canvas.content.stroke_path(false);
        }

        Ok(())
    }
}
