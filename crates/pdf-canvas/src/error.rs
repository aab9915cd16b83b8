use pdf_content_stream::ContentStreamError;
use thiserror::Error;

/// Defines errors that can occur during canvas drawing operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Font size must be positive, got {0}")]
    InvalidFontSize(f32),
    #[error("Content stream error: {0}")]
    ContentStream(#[from] ContentStreamError),
}
