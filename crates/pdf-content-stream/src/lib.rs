#![deny(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::todo)]

pub mod bezier_arc;
pub mod color_ops;
pub mod content_stream;
pub mod error;
pub mod graphics_state_ops;
pub mod path_ops;
pub mod path_paint_ops;
pub mod shapes;
pub mod svg_path;
pub mod text_ops;
pub mod xobject_ops;

pub use content_stream::ContentStream;
pub use error::ContentStreamError;
pub use text_ops::TextParams;
