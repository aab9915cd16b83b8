use thiserror::Error;

/// Defines errors that can occur while preparing a font for use.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to parse font data: {0}")]
    FaceParsing(#[from] ttf_parser::FaceParsingError),
    #[error("Font '{0}' has no units-per-em value")]
    MissingUnitsPerEm(String),
}
