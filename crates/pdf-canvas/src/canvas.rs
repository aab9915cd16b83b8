use pdf_content_stream::ContentStream;
use pdf_page::{annotation::Annotation, page::Page, resources::Resources};

/// A drawing surface over one page.
///
/// Borrows the page's content stream, resource registries and annotation
/// list so that resource-dependent operators (text, images, shadings,
/// patterns, graphics states) can register what they reference before
/// emitting the referencing operator. Resource-free operators are reached
/// through [`content`](Self::content) directly.
pub struct Canvas<'a> {
    pub content: &'a mut ContentStream,
    pub resources: &'a mut Resources,
    pub annotations: &'a mut Vec<Annotation>,
}

impl<'a> Canvas<'a> {
    pub fn for_page(page: &'a mut Page) -> Self {
        Self {
            content: &mut page.content,
            resources: &mut page.resources,
            annotations: &mut page.annotations,
        }
    }
}
