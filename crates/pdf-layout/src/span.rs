use std::sync::Arc;

use pdf_canvas::annotations::AnnotationBuilder;

use crate::{style::TextStyle, widget::Widget};

/// A run of text in the inline tree.
///
/// A span may carry text, children, or both; when both are present the text
/// is laid out first, then the children in order. Style and annotation are
/// inherited downwards: the style by merging, the annotation by
/// nearest-non-null.
pub struct TextSpan {
    pub style: Option<TextStyle>,
    pub text: Option<String>,
    /// Baseline shift in points, scaled by the text scale factor.
    pub baseline: f32,
    pub annotation: Option<Arc<dyn AnnotationBuilder>>,
    pub children: Vec<InlineSpan>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            style: None,
            text: Some(text.into()),
            baseline: 0.0,
            annotation: None,
            children: Vec::new(),
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::new(text)
        }
    }

    /// A container span holding only children.
    pub fn group(children: Vec<InlineSpan>) -> Self {
        Self {
            style: None,
            text: None,
            baseline: 0.0,
            annotation: None,
            children,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_annotation(mut self, annotation: Arc<dyn AnnotationBuilder>) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_children(mut self, children: Vec<InlineSpan>) -> Self {
        self.children = children;
        self
    }
}

/// A widget embedded in the text flow.
pub struct WidgetSpan {
    pub style: Option<TextStyle>,
    pub child: Box<dyn Widget>,
    /// Baseline shift in points, scaled by the text scale factor.
    pub baseline: f32,
    pub annotation: Option<Arc<dyn AnnotationBuilder>>,
}

impl WidgetSpan {
    pub fn new(child: Box<dyn Widget>) -> Self {
        Self {
            style: None,
            child,
            baseline: 0.0,
            annotation: None,
        }
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }
}

/// One node of the inline content tree.
pub enum InlineSpan {
    Text(TextSpan),
    Widget(WidgetSpan),
}

impl From<TextSpan> for InlineSpan {
    fn from(span: TextSpan) -> Self {
        InlineSpan::Text(span)
    }
}

impl From<WidgetSpan> for InlineSpan {
    fn from(span: WidgetSpan) -> Self {
        InlineSpan::Widget(span)
    }
}

/// A leaf delivered to the visitor, with style and annotation already
/// resolved along the path from the root.
pub(crate) enum Leaf<'a> {
    Text {
        text: &'a str,
        style: TextStyle,
        baseline: f32,
        annotation: Option<Arc<dyn AnnotationBuilder>>,
    },
    Widget {
        widget: &'a mut Box<dyn Widget>,
        style: TextStyle,
        baseline: f32,
        annotation: Option<Arc<dyn AnnotationBuilder>>,
    },
}

/// Depth-first pre-order walk delivering leaves to `visit`.
///
/// Returns `false` as soon as the callback does, short-circuiting the rest
/// of the tree.
pub(crate) fn visit_leaves(
    spans: &mut [InlineSpan],
    inherited: &TextStyle,
    annotation: Option<&Arc<dyn AnnotationBuilder>>,
    visit: &mut dyn FnMut(Leaf<'_>) -> bool,
) -> bool {
    for span in spans {
        match span {
            InlineSpan::Text(text_span) => {
                let TextSpan {
                    ref style,
                    ref text,
                    baseline,
                    annotation: ref own_annotation,
                    ref mut children,
                } = *text_span;
                let merged = match style {
                    Some(style) => inherited.merge(style),
                    None => inherited.clone(),
                };
                let effective = own_annotation.as_ref().or(annotation);
                if let Some(text) = text {
                    let keep_going = visit(Leaf::Text {
                        text: text.as_str(),
                        style: merged.clone(),
                        baseline,
                        annotation: effective.cloned(),
                    });
                    if !keep_going {
                        return false;
                    }
                }
                if !visit_leaves(children, &merged, effective, visit) {
                    return false;
                }
            }
            InlineSpan::Widget(widget_span) => {
                let WidgetSpan {
                    ref style,
                    ref mut child,
                    baseline,
                    annotation: ref own_annotation,
                } = *widget_span;
                let merged = match style {
                    Some(style) => inherited.merge(style),
                    None => inherited.clone(),
                };
                let effective = own_annotation.as_ref().or(annotation);
                let keep_going = visit(Leaf::Widget {
                    widget: child,
                    style: merged,
                    baseline,
                    annotation: effective.cloned(),
                });
                if !keep_going {
                    return false;
                }
            }
        }
    }
    true
}

/// Collects mutable references to every embedded widget, in visit order.
pub(crate) fn collect_widgets<'a>(
    spans: &'a mut [InlineSpan],
    out: &mut Vec<&'a mut Box<dyn Widget>>,
) {
    for span in spans {
        match span {
            InlineSpan::Text(text_span) => collect_widgets(&mut text_span.children, out),
            InlineSpan::Widget(widget_span) => out.push(&mut widget_span.child),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pdf_font::fixed_metrics_font::FixedMetricsFont;
    use pdf_font::font::Font;

    use super::{InlineSpan, Leaf, TextSpan, visit_leaves};
    use crate::style::TextStyle;

    fn base() -> TextStyle {
        let font: Arc<dyn Font> = Arc::new(FixedMetricsFont::new("Mono", 0.5, 0.8, -0.2));
        TextStyle::base(font)
    }

    #[test]
    fn text_comes_before_children() {
        let tree = TextSpan::new("parent").with_children(vec![
            TextSpan::new("first").into(),
            TextSpan::new("second").into(),
        ]);
        let mut spans = [InlineSpan::Text(tree)];
        let mut seen = Vec::new();
        visit_leaves(&mut spans, &base(), None, &mut |leaf| {
            if let Leaf::Text { text, .. } = leaf {
                seen.push(text.to_string());
            }
            true
        });
        assert_eq!(seen, ["parent", "first", "second"]);
    }

    #[test]
    fn child_style_overrides_inherited() {
        let child = TextSpan::styled(
            "small",
            TextStyle {
                font_size: Some(8.0),
                ..TextStyle::new()
            },
        );
        let tree = TextSpan::group(vec![child.into()]).with_style(TextStyle {
            font_size: Some(30.0),
            ..TextStyle::new()
        });
        let mut spans = [InlineSpan::Text(tree)];
        let mut sizes = Vec::new();
        visit_leaves(&mut spans, &base(), None, &mut |leaf| {
            if let Leaf::Text { style, .. } = leaf {
                sizes.push(style.font_size);
            }
            true
        });
        assert_eq!(sizes, [Some(8.0)]);
    }

    #[test]
    fn visitor_short_circuits() {
        let tree = TextSpan::group(vec![
            TextSpan::new("one").into(),
            TextSpan::new("two").into(),
            TextSpan::new("three").into(),
        ]);
        let mut spans = [InlineSpan::Text(tree)];
        let mut count = 0;
        let finished = visit_leaves(&mut spans, &base(), None, &mut |_| {
            count += 1;
            count < 2
        });
        assert!(!finished);
        assert_eq!(count, 2);
    }
}
