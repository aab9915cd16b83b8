use std::sync::Arc;

use pdf_graphics::transform::Transform;
use pdf_page::{
    external_graphics_state::GraphicState,
    image::{Image, Orientation},
    pattern::Pattern,
    shading::Shading,
};

use crate::{canvas::Canvas, error::CanvasError};

/// Placement matrix mapping the unit image square onto the target rectangle
/// while undoing the EXIF orientation of the samples.
fn placement_matrix(orientation: Orientation, x: f32, y: f32, w: f32, h: f32) -> Transform {
    match orientation {
        Orientation::TopLeft => Transform::from_row(w, 0.0, 0.0, h, x, y),
        Orientation::TopRight => Transform::from_row(-w, 0.0, 0.0, h, w + x, y),
        Orientation::BottomRight => Transform::from_row(-w, 0.0, 0.0, -h, w + x, h + y),
        Orientation::BottomLeft => Transform::from_row(w, 0.0, 0.0, -h, x, h + y),
        Orientation::LeftTop => Transform::from_row(0.0, -h, -w, 0.0, w + x, h + y),
        Orientation::RightTop => Transform::from_row(0.0, -h, w, 0.0, x, h + y),
        Orientation::RightBottom => Transform::from_row(0.0, h, w, 0.0, x, y),
        Orientation::LeftBottom => Transform::from_row(0.0, h, -w, 0.0, w + x, y),
    }
}

impl Canvas<'_> {
    /// Paints `image` into the rectangle (`x`, `y`, `w`, `h`), honoring its
    /// EXIF orientation: `q`, the placement `cm`, `/I{n} Do`, `Q`.
    pub fn draw_image(
        &mut self,
        image: &Arc<Image>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Result<(), CanvasError> {
        let name = self.resources.add_xobject(image);
        let matrix = placement_matrix(image.orientation(), x, y, w, h);
        self.content.save_context();
        self.content.set_transform(&matrix)?;
        self.content.draw_xobject(&name);
        self.content.restore_context();
        Ok(())
    }

    /// Paints `shading` over the current clip region with `sh`.
    pub fn apply_shading(&mut self, shading: &Arc<Shading>) {
        let name = self.resources.add_shading(shading);
        self.content.apply_shading(&name);
    }

    /// Selects `pattern` as the non-stroking paint.
    pub fn set_fill_pattern(&mut self, pattern: &Arc<Pattern>) {
        let name = self.resources.add_pattern(pattern);
        self.content.set_fill_pattern(&name);
    }

    /// Selects `pattern` as the stroking paint.
    pub fn set_stroke_pattern(&mut self, pattern: &Arc<Pattern>) {
        let name = self.resources.add_pattern(pattern);
        self.content.set_stroke_pattern(&name);
    }

    /// Installs an external graphics state with `gs`, registering the
    /// dictionary if this exact state is new.
    pub fn set_graphic_state(&mut self, state: &GraphicState) {
        let name = self.resources.state_name(state);
        self.content.set_graphic_state(&name);
    }
}
