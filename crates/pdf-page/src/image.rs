use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// EXIF orientation of raster data, numbered as in the EXIF specification.
///
/// The orientation decides the placement matrix `draw_image` emits, so a
/// rotated camera picture lands upright on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive)]
pub enum Orientation {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
    LeftTop = 5,
    RightTop = 6,
    RightBottom = 7,
    LeftBottom = 8,
}

impl Orientation {
    /// Maps a raw EXIF orientation tag value; out-of-range values are `None`.
    pub fn from_exif(value: u16) -> Option<Self> {
        Self::from_u16(value)
    }

    /// Whether this orientation swaps the horizontal and vertical axes.
    pub fn is_transposed(self) -> bool {
        matches!(
            self,
            Orientation::LeftTop
                | Orientation::RightTop
                | Orientation::RightBottom
                | Orientation::LeftBottom
        )
    }
}

/// A raster image registered on a page as an XObject.
///
/// Only the placement-relevant properties live here; sample data and
/// encoding belong to the document serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    orientation: Orientation,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::TopLeft,
        }
    }

    pub fn with_orientation(width: u32, height: u32, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            orientation,
        }
    }

    /// Pixel width as stored, before any orientation correction.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height as stored, before any orientation correction.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::Orientation;

    #[test]
    fn exif_values_map_one_to_eight() {
        assert_eq!(Orientation::from_exif(1), Some(Orientation::TopLeft));
        assert_eq!(Orientation::from_exif(6), Some(Orientation::RightTop));
        assert_eq!(Orientation::from_exif(8), Some(Orientation::LeftBottom));
        assert_eq!(Orientation::from_exif(0), None);
        assert_eq!(Orientation::from_exif(9), None);
    }

    #[test]
    fn transposed_orientations_swap_axes() {
        assert!(!Orientation::TopLeft.is_transposed());
        assert!(Orientation::RightTop.is_transposed());
    }
}
