use thiserror::Error;

/// Defines errors that can occur while emitting content stream operators.
#[derive(Debug, Error)]
pub enum ContentStreamError {
    /// An operand was NaN or infinite. Nothing is written to the buffer when
    /// this is returned.
    #[error("Operand is not a finite number: {0}")]
    NonFiniteNumber(f32),

    /// Miter limits below zero are meaningless.
    #[error("Miter limit must not be negative, got {0}")]
    NegativeMiterLimit(f32),

    /// SVG path data handed to `draw_shape` did not tokenize.
    #[error("Invalid SVG path data: {0}")]
    InvalidShapePath(#[from] svgtypes::Error),
}
