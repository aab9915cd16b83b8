use std::sync::Arc;

use pdf_graphics::rect::Rect;

use crate::shading::Shading;

/// A paint pattern registered on a page and selected with `scn` / `SCN`.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A tiled cell repeated over the painted area.
    Tiling {
        bbox: Rect,
        x_step: f32,
        y_step: f32,
    },
    /// A shading used as paint.
    Shading(Arc<Shading>),
}
