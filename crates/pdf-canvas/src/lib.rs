pub mod annotations;
pub mod canvas;
pub mod canvas_text_ops;
pub mod canvas_xobject_ops;
pub mod error;

pub use canvas::Canvas;
pub use error::CanvasError;
