use std::sync::Arc;

use pdf_canvas::{Canvas, annotations::AnnotationBuilder};
use pdf_font::font::Font;
use pdf_graphics::{color::Color, point::Point, rect::Rect};

use crate::{
    error::LayoutError,
    placed_span::{DecorationRun, PlacedSpan, PlacedWidget, Word},
    shaping::TextShaper,
    span::{InlineSpan, Leaf, collect_widgets, visit_leaves},
    style::TextStyle,
    widget::{BoxConstraints, LayoutContext, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// One laid-out line: an index range into the placed span list plus the
/// measurements realignment needs.
pub struct Line {
    pub first_span: usize,
    pub span_count: usize,
    /// Baseline drop: how far the spans shift down so the line's tallest
    /// extent touches the line top.
    pub baseline: f32,
    /// Width of the placed content without the trailing inter-word gap.
    pub words_width: f32,
    /// Lines ended by wrapping or an explicit newline may be justified;
    /// the line flushed at the end of the walk may not.
    pub justifiable: bool,
}

/// Inline content laid out into positioned spans and decoration runs.
///
/// `layout` clears and rebuilds the placed state, so a `RichText` is not
/// reentrant; `paint` replays it through a canvas. Coordinates inside the
/// layout are local: x from the left edge, y downwards (negative) from the
/// top of the box.
pub struct RichText {
    text: InlineSpan,
    style: Option<TextStyle>,
    text_align: TextAlign,
    text_direction: TextDirection,
    soft_wrap: bool,
    tight_bounds: bool,
    max_lines: Option<usize>,
    text_scale: f32,
    shaper: Option<Arc<dyn TextShaper>>,

    bounds: Rect,
    spans: Vec<PlacedSpan>,
    decorations: Vec<DecorationRun>,
    lines: Vec<Line>,
    overflow: bool,
}

impl RichText {
    pub fn new(text: impl Into<InlineSpan>) -> Self {
        Self {
            text: text.into(),
            style: None,
            text_align: TextAlign::default(),
            text_direction: TextDirection::default(),
            soft_wrap: true,
            tight_bounds: false,
            max_lines: None,
            text_scale: 1.0,
            shaper: None,
            bounds: Rect::ZERO,
            spans: Vec::new(),
            decorations: Vec::new(),
            lines: Vec::new(),
            overflow: false,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    pub fn with_soft_wrap(mut self, soft_wrap: bool) -> Self {
        self.soft_wrap = soft_wrap;
        self
    }

    pub fn with_tight_bounds(mut self, tight_bounds: bool) -> Self {
        self.tight_bounds = tight_bounds;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub fn with_text_scale(mut self, text_scale: f32) -> Self {
        self.text_scale = text_scale;
        self
    }

    pub fn with_shaper(mut self, shaper: Arc<dyn TextShaper>) -> Self {
        self.shaper = Some(shaper);
        self
    }

    pub fn placed_spans(&self) -> &[PlacedSpan] {
        &self.spans
    }

    pub fn decorations(&self) -> &[DecorationRun] {
        &self.decorations
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether a word had to wrap because it crossed the width limit.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Strokes the layout box and every span box; a visual aid while
    /// debugging span trees.
    pub fn debug_paint(&self, canvas: &mut Canvas<'_>) -> Result<(), LayoutError> {
        let bounds = self.bounds;
        canvas.content.set_stroke_color(Color::from_rgb(0.0, 0.0, 1.0))?;
        canvas.content.set_line_width(0.5)?;
        canvas
            .content
            .draw_rect(bounds.x, bounds.y, bounds.width, bounds.height)?;
        for span in &self.spans {
            let rect = span.bounds().translate(bounds.left(), bounds.top());
            canvas
                .content
                .draw_rect(rect.x, rect.y, rect.width, rect.height)?;
        }
        canvas.content.stroke_path(false);
        Ok(())
    }
}

impl Widget for RichText {
    fn layout(
        &mut self,
        context: &LayoutContext,
        constraints: BoxConstraints,
    ) -> Result<(), LayoutError> {
        self.spans.clear();
        self.decorations.clear();
        self.lines.clear();
        self.overflow = false;

        let base = self.style.clone().unwrap_or_default();
        let text_scale = self.text_scale;
        let tight_bounds = self.tight_bounds;
        let soft_wrap = self.soft_wrap;
        let direction = self.text_direction;
        let align = self.text_align;
        let max_lines = self.max_lines.unwrap_or(usize::MAX);

        let Self {
            text,
            spans,
            decorations,
            lines,
            shaper,
            ..
        } = self;

        let mut breaker = LineBreaker {
            spans,
            decorations,
            lines,
            text_scale,
            tight_bounds,
            soft_wrap,
            direction,
            max_lines,
            max_width: constraints.max_width,
            max_height: constraints.max_height,
            shaper: shaper.as_ref(),
            default_font: context.default_font(),
            widget_count: 0,
            offset_x: 0.0,
            offset_y: 0.0,
            span_start: 0,
            top: 0.0,
            bottom: 0.0,
            overflow: false,
        };

        let mut failure = None;
        visit_leaves(core::slice::from_mut(text), &base, None, &mut |leaf| {
            let outcome = match leaf {
                Leaf::Text {
                    text,
                    style,
                    baseline,
                    annotation,
                } => breaker.text_leaf(text, &style, baseline, &annotation),
                Leaf::Widget {
                    widget,
                    style,
                    baseline,
                    annotation,
                } => breaker.widget_leaf(context, widget, &style, baseline, &annotation),
            };
            match outcome {
                Ok(keep_going) => keep_going,
                Err(error) => {
                    failure = Some(error);
                    false
                }
            }
        });
        if let Some(error) = failure {
            return Err(error);
        }

        // The line the walk ended on; it is the "last line" and never
        // justified.
        let span_count = breaker.spans.len() - breaker.span_start;
        if span_count > 0 {
            breaker.lines.push(Line {
                first_span: breaker.span_start,
                span_count,
                baseline: breaker.bottom,
                words_width: breaker.offset_x,
                justifiable: false,
            });
            breaker.offset_y += breaker.bottom - breaker.top;
        }

        let overflow = breaker.overflow;
        let total_height = breaker.offset_y;

        let width = if overflow {
            debug_assert!(constraints.max_width.is_finite());
            constraints.max_width
        } else {
            let widest = breaker
                .lines
                .iter()
                .map(|line| line.words_width)
                .fold(0.0f32, f32::max);
            constraints.min_width.max(widest)
        };

        for line in breaker.lines.iter() {
            realign_line(breaker.spans, line, width, align, direction);
        }

        self.overflow = overflow;
        self.bounds = Rect::new(0.0, 0.0, width, total_height);
        Ok(())
    }

    fn paint(&mut self, canvas: &mut Canvas<'_>) -> Result<(), LayoutError> {
        let text_scale = self.text_scale;
        let global_box = self.bounds;
        let origin = Point::new(global_box.left(), global_box.top());

        let Self {
            text,
            spans,
            decorations,
            ..
        } = self;

        for decoration in decorations.iter() {
            decoration.background_paint(canvas, spans, global_box)?;
        }

        let mut widgets = Vec::new();
        collect_widgets(core::slice::from_mut(text), &mut widgets);

        let mut running_style: Option<&TextStyle> = None;
        let mut emitted_color: Option<Color> = None;
        for span in spans.iter() {
            let style = span.style();
            if running_style.is_none_or(|current| current != style) {
                running_style = Some(style);
                let color = style.color_or_default();
                if emitted_color != Some(color) {
                    emitted_color = Some(color);
                    canvas.content.set_fill_color(color)?;
                }
            }
            match span {
                PlacedSpan::Word(word) => word.paint(canvas, text_scale, origin)?,
                PlacedSpan::Widget(placed) => {
                    if let Some(widget) = widgets.get_mut(placed.widget_index) {
                        let size = widget.bounds().size();
                        widget.set_bounds(Rect::from_points(
                            Point::new(origin.x + placed.offset.x, origin.y + placed.offset.y),
                            size,
                        ));
                        widget.paint(canvas)?;
                    }
                }
            }
        }

        for decoration in decorations.iter() {
            decoration.foreground_paint(canvas, spans, global_box, text_scale)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

struct LineBreaker<'a> {
    spans: &'a mut Vec<PlacedSpan>,
    decorations: &'a mut Vec<DecorationRun>,
    lines: &'a mut Vec<Line>,
    text_scale: f32,
    tight_bounds: bool,
    soft_wrap: bool,
    direction: TextDirection,
    max_lines: usize,
    max_width: f32,
    max_height: f32,
    shaper: Option<&'a Arc<dyn TextShaper>>,
    default_font: Option<&'a Arc<dyn Font>>,
    widget_count: usize,
    offset_x: f32,
    offset_y: f32,
    span_start: usize,
    top: f32,
    bottom: f32,
    overflow: bool,
}

impl LineBreaker<'_> {
    fn resolve_font(&self, style: &TextStyle) -> Result<Arc<dyn Font>, LayoutError> {
        style
            .font
            .clone()
            .or_else(|| self.default_font.cloned())
            .ok_or(LayoutError::MissingFont)
    }

    /// Ends the current line and resets the caret. Returns `false` when
    /// layout must terminate (line or height budget exhausted).
    fn flush_line(&mut self, words_width: f32, empty_line_height: f32, line_spacing: f32) -> bool {
        let span_count = self.spans.len() - self.span_start;
        if span_count > 0 {
            self.lines.push(Line {
                first_span: self.span_start,
                span_count,
                baseline: self.bottom,
                words_width,
                justifiable: true,
            });
            self.offset_y += (self.bottom - self.top) + line_spacing;
        } else {
            // An empty logical line still takes vertical room, measured from
            // the space glyph.
            self.offset_y += empty_line_height + line_spacing;
        }
        self.offset_x = 0.0;
        self.span_start = self.spans.len();
        self.top = 0.0;
        self.bottom = 0.0;

        if self.lines.len() >= self.max_lines {
            return false;
        }
        self.offset_y <= self.max_height
    }

    fn append_decoration(
        &mut self,
        style: &TextStyle,
        annotation: &Option<Arc<dyn AnnotationBuilder>>,
    ) {
        let index = self.spans.len() - 1;
        if index > self.span_start {
            if let Some(last) = self.decorations.last_mut() {
                if last.matches(style, annotation) {
                    last.end_span = index;
                    return;
                }
            }
        }
        self.decorations.push(DecorationRun {
            style: style.clone(),
            annotation: annotation.clone(),
            start_span: index,
            end_span: index,
        });
    }

    fn text_leaf(
        &mut self,
        text: &str,
        style: &TextStyle,
        baseline: f32,
        annotation: &Option<Arc<dyn AnnotationBuilder>>,
    ) -> Result<bool, LayoutError> {
        let font = self.resolve_font(style)?;
        let mut style = style.clone();
        style.font = Some(Arc::clone(&font));

        let font_size = style.font_size_or_default() * self.text_scale;
        let letter_spacing = style.letter_spacing_or_default();
        let word_spacing = style.word_spacing_or_default();
        let line_spacing = style.line_spacing_or_default();
        let baseline = baseline * self.text_scale;
        let space = font.string_metrics(" ", 0.0) * font_size;
        let empty_line_height = space.ascent + space.descent;
        let letter_spacing_em = if font_size > 0.0 {
            letter_spacing / font_size
        } else {
            0.0
        };

        let shaped;
        let text = if self.direction == TextDirection::Rtl {
            match self.shaper {
                Some(shaper) => {
                    shaped = shaper.convert(text);
                    shaped.as_str()
                }
                None => text,
            }
        } else {
            text
        };

        for (line_index, logical_line) in text.split('\n').enumerate() {
            if line_index > 0 && self.soft_wrap {
                let words_width =
                    self.offset_x - space.advance_width * word_spacing - letter_spacing;
                if !self.flush_line(words_width, empty_line_height, line_spacing) {
                    return Ok(false);
                }
            }
            for token in logical_line.split(char::is_whitespace) {
                if token.is_empty() {
                    // A run of whitespace: advance the caret only.
                    self.offset_x += space.advance_width * word_spacing + letter_spacing;
                    continue;
                }
                let metrics = font.string_metrics(token, letter_spacing_em) * font_size;
                if self.offset_x + metrics.width() > self.max_width
                    && self.spans.len() > self.span_start
                {
                    self.overflow = true;
                    let words_width =
                        self.offset_x - space.advance_width * word_spacing - letter_spacing;
                    if !self.flush_line(words_width, empty_line_height, line_spacing) {
                        return Ok(false);
                    }
                }
                self.spans.push(PlacedSpan::Word(Word {
                    text: token.to_string(),
                    style: style.clone(),
                    metrics,
                    offset: Point::new(self.offset_x, -self.offset_y + baseline),
                }));
                self.append_decoration(&style, annotation);

                let (span_top, span_bottom) = if self.tight_bounds {
                    (metrics.top, metrics.bottom)
                } else {
                    (metrics.descent, metrics.ascent)
                };
                self.top = self.top.min(span_top + baseline);
                self.bottom = self.bottom.max(span_bottom + baseline);

                self.offset_x +=
                    metrics.advance_width + space.advance_width * word_spacing + letter_spacing;
            }
        }

        // Retract the trailing inter-word advance; one letter spacing stays
        // in the caret.
        self.offset_x -= space.advance_width * word_spacing - letter_spacing;
        Ok(true)
    }

    fn widget_leaf(
        &mut self,
        context: &LayoutContext,
        widget: &mut Box<dyn Widget>,
        style: &TextStyle,
        baseline: f32,
        annotation: &Option<Arc<dyn AnnotationBuilder>>,
    ) -> Result<bool, LayoutError> {
        let ordinal = self.widget_count;
        self.widget_count += 1;

        let mut style = style.clone();
        if style.font.is_none() {
            // Widgets do not need a font themselves, but their decorations
            // do; resolve one when available.
            style.font = self.default_font.cloned();
        }
        let font_size = style.font_size_or_default() * self.text_scale;
        let line_spacing = style.line_spacing_or_default();
        let baseline = baseline * self.text_scale;

        widget.layout(context, BoxConstraints::tight_height(font_size))?;
        let bounds = widget.bounds();
        let advance = bounds.left() + bounds.width;

        if self.offset_x + advance > self.max_width && self.spans.len() > self.span_start {
            self.overflow = true;
            if !self.flush_line(self.offset_x, 0.0, line_spacing) {
                return Ok(false);
            }
        }
        self.spans.push(PlacedSpan::Widget(PlacedWidget {
            widget_index: ordinal,
            style: style.clone(),
            offset: Point::new(self.offset_x, -self.offset_y + baseline),
            size: bounds.size(),
        }));
        self.append_decoration(&style, annotation);

        self.top = self.top.min(baseline);
        self.bottom = self.bottom.max(bounds.height + baseline);
        self.offset_x += advance;
        Ok(true)
    }
}

#[allow(clippy::as_conversions)]
fn realign_line(
    spans: &mut [PlacedSpan],
    line: &Line,
    total_width: f32,
    align: TextAlign,
    direction: TextDirection,
) {
    let slack = total_width - line.words_width;
    let justify_gap = if align == TextAlign::Justify && line.justifiable && line.span_count > 1 {
        Some(slack / (line.span_count - 1) as f32)
    } else {
        None
    };

    let range = line.first_span..line.first_span + line.span_count;
    for (i, span) in spans[range].iter_mut().enumerate() {
        let delta = match (align, justify_gap) {
            (TextAlign::Left, _) | (TextAlign::Justify, None) => 0.0,
            (TextAlign::Right, _) => slack,
            (TextAlign::Center, _) => slack / 2.0,
            (TextAlign::Justify, Some(gap)) => gap * i as f32,
        };
        let width = span.width();
        let offset = span.offset_mut();
        match direction {
            TextDirection::Ltr => offset.x += delta,
            TextDirection::Rtl => offset.x = total_width - (offset.x + width) - delta,
        }
        offset.y -= line.baseline;
    }
}
