use pdf_graphics::rect::Rect;

/// The annotation flavors the engine can place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationKind {
    /// A link opening an external URI.
    UriLink { uri: String },
    /// A link jumping to a named destination in the same document.
    NamedLink { name: String },
}

/// An annotation recorded on a page at a given rectangle.
///
/// The rectangle is in page coordinates; the layout engine supplies it after
/// positioning the annotated spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub rect: Rect,
    pub kind: AnnotationKind,
}

impl Annotation {
    pub fn uri_link(rect: Rect, uri: impl Into<String>) -> Self {
        Self {
            rect,
            kind: AnnotationKind::UriLink { uri: uri.into() },
        }
    }

    pub fn named_link(rect: Rect, name: impl Into<String>) -> Self {
        Self {
            rect,
            kind: AnnotationKind::NamedLink { name: name.into() },
        }
    }
}
