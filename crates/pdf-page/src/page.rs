use std::io::Write as _;
use std::sync::Arc;

use flate2::{Compression, write::ZlibEncoder};
use pdf_content_stream::ContentStream;
use pdf_font::font::Font;
use pdf_graphics::rect::Rect;

use crate::{annotation::Annotation, resources::Resources};

/// A single page under construction.
///
/// Owns the content stream being emitted, the named resources it references
/// and the annotations placed on it. The buffer and registries live for one
/// page; a document serializer consumes them afterwards.
pub struct Page {
    media_box: Rect,
    pub content: ContentStream,
    pub resources: Resources,
    pub annotations: Vec<Annotation>,
    default_font: Option<Arc<dyn Font>>,
}

impl Page {
    /// A page of `width` × `height` points with the origin at the lower
    /// left.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            media_box: Rect::new(0.0, 0.0, width, height),
            content: ContentStream::new(),
            resources: Resources::new(),
            annotations: Vec::new(),
            default_font: None,
        }
    }

    pub fn media_box(&self) -> Rect {
        self.media_box
    }

    /// Sets the font used when a span tree resolves without one.
    pub fn set_default_font(&mut self, font: Arc<dyn Font>) {
        self.default_font = Some(font);
    }

    pub fn default_font(&self) -> Option<&Arc<dyn Font>> {
        self.default_font.as_ref()
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// The finished content stream compressed with FlateDecode, ready to be
    /// embedded as a stream object.
    pub fn compressed_content(&self) -> std::io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(self.content.bytes())?;
        encoder.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read as _;

    use flate2::read::ZlibDecoder;

    use super::Page;

    #[test]
    fn compressed_content_inflates_back() {
        let mut page = Page::new(595.0, 842.0);
        page.content.draw_rect(10.0, 10.0, 100.0, 50.0).unwrap();
        page.content.fill_path(pdf_graphics::PathFillType::Winding);

        let compressed = page.compressed_content().unwrap();
        let mut inflated = Vec::new();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_end(&mut inflated)
            .unwrap();
        assert_eq!(inflated, page.content.bytes());
    }

    #[test]
    fn media_box_spans_the_page() {
        let page = Page::new(595.0, 842.0);
        assert_eq!(page.media_box().width, 595.0);
        assert_eq!(page.media_box().top(), 842.0);
    }
}
