use pdf_canvas::CanvasError;
use pdf_content_stream::ContentStreamError;
use thiserror::Error;

/// Defines errors that can occur while laying out or painting inline
/// content.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A span resolved to a style without a font and the layout context has
    /// no default font either.
    #[error("Style resolved without a font and no default font is set")]
    MissingFont,
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
    #[error("Content stream error: {0}")]
    ContentStream(#[from] ContentStreamError),
}
