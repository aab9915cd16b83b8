use pdf_graphics::rect::Rect;
use pdf_page::annotation::Annotation;

use crate::{canvas::Canvas, error::CanvasError};

/// Builds an annotation once layout has determined its rectangle.
///
/// The layout engine carries builders down the span tree and invokes them
/// with page-absolute rectangles during the paint pass, one call per merged
/// decoration run.
pub trait AnnotationBuilder {
    fn build(&self, canvas: &mut Canvas<'_>, rect: Rect) -> Result<(), CanvasError>;
}

/// Links the annotated area to an external URI.
pub struct UrlLink {
    pub uri: String,
}

impl UrlLink {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl AnnotationBuilder for UrlLink {
    fn build(&self, canvas: &mut Canvas<'_>, rect: Rect) -> Result<(), CanvasError> {
        canvas.annotations.push(Annotation::uri_link(rect, &self.uri));
        Ok(())
    }
}

/// Links the annotated area to a named destination in the same document.
pub struct NamedLink {
    pub name: String,
}

impl NamedLink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AnnotationBuilder for NamedLink {
    fn build(&self, canvas: &mut Canvas<'_>, rect: Rect) -> Result<(), CanvasError> {
        canvas
            .annotations
            .push(Annotation::named_link(rect, &self.name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pdf_graphics::rect::Rect;
    use pdf_page::{annotation::AnnotationKind, page::Page};

    use super::{AnnotationBuilder, NamedLink, UrlLink};
    use crate::canvas::Canvas;

    #[test]
    fn url_link_records_rect_and_uri() {
        let mut page = Page::new(100.0, 100.0);
        let mut canvas = Canvas::for_page(&mut page);
        let link = UrlLink::new("https://example.com");
        link.build(&mut canvas, Rect::new(5.0, 5.0, 50.0, 10.0))
            .unwrap();
        assert_eq!(page.annotations.len(), 1);
        assert_eq!(
            page.annotations[0].kind,
            AnnotationKind::UriLink {
                uri: "https://example.com".into()
            }
        );
    }

    #[test]
    fn named_link_records_rect_and_destination() {
        let mut page = Page::new(100.0, 100.0);
        let mut canvas = Canvas::for_page(&mut page);
        let link = NamedLink::new("chapter-2");
        link.build(&mut canvas, Rect::new(5.0, 20.0, 50.0, 10.0))
            .unwrap();
        assert_eq!(page.annotations.len(), 1);
        assert_eq!(page.annotations[0].rect, Rect::new(5.0, 20.0, 50.0, 10.0));
        assert_eq!(
            page.annotations[0].kind,
            AnnotationKind::NamedLink {
                name: "chapter-2".into()
            }
        );
    }
}
