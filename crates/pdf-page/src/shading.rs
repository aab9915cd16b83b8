use pdf_graphics::{point::Point, rect::Rect};

/// The shading geometries the `sh` operator can reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadingKind {
    /// A linear gradient between two points.
    Axial { from: Point, to: Point },
    /// A radial gradient between two circles.
    Radial {
        from: Point,
        from_radius: f32,
        to: Point,
        to_radius: f32,
    },
}

/// A shading registered on a page and painted by name.
///
/// The color function itself is assembled by the document serializer; the
/// page only needs identity and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Shading {
    pub kind: ShadingKind,
    /// Optional clip box for the shading, in user space.
    pub bbox: Option<Rect>,
}

impl Shading {
    pub fn axial(from: Point, to: Point) -> Self {
        Self {
            kind: ShadingKind::Axial { from, to },
            bbox: None,
        }
    }

    pub fn radial(from: Point, from_radius: f32, to: Point, to_radius: f32) -> Self {
        Self {
            kind: ShadingKind::Radial {
                from,
                from_radius,
                to,
                to_radius,
            },
            bbox: None,
        }
    }
}
