use std::sync::Arc;

use pdf_canvas::Canvas;
use pdf_font::font::Font;
use pdf_graphics::{PathFillType, color::Color, rect::Rect};
use pdf_page::page::Page;

use crate::error::LayoutError;

/// The box a widget may size itself within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl BoxConstraints {
    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// No constraints at all.
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Exactly `width` wide, any height.
    pub fn tight_width(width: f32) -> Self {
        Self::new(width, width, 0.0, f32::INFINITY)
    }

    /// Exactly `height` tall, any width.
    pub fn tight_height(height: f32) -> Self {
        Self::new(0.0, f32::INFINITY, height, height)
    }

    /// At most `width` wide, any height.
    pub fn bounded_width(width: f32) -> Self {
        Self::new(0.0, width, 0.0, f32::INFINITY)
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn constrain_width(&self, width: f32) -> f32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: f32) -> f32 {
        height.clamp(self.min_height, self.max_height)
    }
}

/// Ambient inputs to a layout pass.
#[derive(Clone, Default)]
pub struct LayoutContext {
    default_font: Option<Arc<dyn Font>>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_font(font: Arc<dyn Font>) -> Self {
        Self {
            default_font: Some(font),
        }
    }

    /// Picks up the page's default font, if one was set.
    pub fn for_page(page: &Page) -> Self {
        Self {
            default_font: page.default_font().cloned(),
        }
    }

    pub fn default_font(&self) -> Option<&Arc<dyn Font>> {
        self.default_font.as_ref()
    }
}

/// Anything the layout engine can position and paint.
///
/// `layout` computes and stores the widget's bounds; the parent may then
/// move the box before `paint` reads it back. The two calls form one
/// cycle: bounds and any cached layout data are only valid until the next
/// `layout`.
pub trait Widget {
    fn layout(
        &mut self,
        context: &LayoutContext,
        constraints: BoxConstraints,
    ) -> Result<(), LayoutError>;

    fn paint(&mut self, canvas: &mut Canvas<'_>) -> Result<(), LayoutError>;

    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);
}

/// A fixed-size box, optionally filled with a color.
///
/// Doubles as a spacer (no color) and as the simplest paintable widget to
/// embed in inline content.
pub struct SizedBox {
    width: f32,
    height: f32,
    color: Option<Color>,
    bounds: Rect,
}

impl SizedBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            color: None,
            bounds: Rect::ZERO,
        }
    }

    pub fn colored(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color: Some(color),
            bounds: Rect::ZERO,
        }
    }
}

impl Widget for SizedBox {
    fn layout(
        &mut self,
        _context: &LayoutContext,
        constraints: BoxConstraints,
    ) -> Result<(), LayoutError> {
        self.bounds = Rect::new(
            0.0,
            0.0,
            constraints.constrain_width(self.width),
            constraints.constrain_height(self.height),
        );
        Ok(())
    }

    fn paint(&mut self, canvas: &mut Canvas<'_>) -> Result<(), LayoutError> {
        if let Some(color) = self.color {
            canvas.content.set_fill_color(color)?;
            canvas.content.draw_rect(
                self.bounds.x,
                self.bounds.y,
                self.bounds.width,
                self.bounds.height,
            )?;
            canvas.content.fill_path(PathFillType::Winding);
        }
        Ok(())
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
