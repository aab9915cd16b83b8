/// An affine transformation matrix.
///
/// Stored as the six significant entries of the 3×3 matrix
///
/// ```text
/// [ sx  kx  tx ]
/// [ ky  sy  ty ]
/// [  0   0   1 ]
/// ```
///
/// which is also the order the PDF `cm` operator takes its operands in:
/// `sx ky kx sy tx ty`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform {
    pub sx: f32,
    pub kx: f32,
    pub ky: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl Transform {
    /// Creates an identity transform.
    pub const fn identity() -> Self {
        Transform::from_row(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// We are using column-major-column-vector matrix notation, therefore it's ky-kx, not kx-ky.
    pub const fn from_row(sx: f32, ky: f32, kx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Transform {
            sx,
            ky,
            kx,
            sy,
            tx,
            ty,
        }
    }

    pub fn from_translate(tx: f32, ty: f32) -> Self {
        Transform::from_row(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn from_scale(sx: f32, sy: f32) -> Self {
        Transform::from_row(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A counter-clockwise rotation by `radians` around the origin.
    pub fn from_rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Transform::from_row(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Applies a translation before the existing transformation components.
    ///
    /// The new transform becomes `T(tx, ty) * M` where `M` is the current
    /// matrix, so only `tx`/`ty` change.
    pub fn translate(&mut self, tx: f32, ty: f32) -> &mut Self {
        self.tx += tx;
        self.ty += ty;
        self
    }

    /// Applies a scaling before the existing transformation components.
    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.sx *= sx;
        self.kx *= sx;
        self.tx *= sx;

        self.sy *= sy;
        self.ky *= sy;
        self.ty *= sy;
        self
    }

    /// Returns the matrix product `self * other`.
    ///
    /// When transforming a point `P`, the result acts as `self * (other * P)`:
    /// `other` is applied first, then `self`.
    pub fn multiplied(&self, other: &Transform) -> Transform {
        Transform {
            sx: self.sx * other.sx + self.kx * other.ky,
            kx: self.sx * other.kx + self.kx * other.sy,
            tx: self.sx * other.tx + self.kx * other.ty + self.tx,

            ky: self.ky * other.sx + self.sy * other.ky,
            sy: self.ky * other.kx + self.sy * other.sy,
            ty: self.ky * other.tx + self.sy * other.ty + self.ty,
        }
    }

    /// Transforms a 2D point `(x, y)` using this transform.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let new_x = self.sx * x + self.kx * y + self.tx;
        let new_y = self.ky * x + self.sy * y + self.ty;
        (new_x, new_y)
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;

    #[test]
    fn identity_leaves_points_unchanged() {
        let t = Transform::identity();
        assert_eq!(t.transform_point(3.5, -2.0), (3.5, -2.0));
    }

    #[test]
    fn multiplied_applies_right_hand_side_first() {
        // Scale by 2, then translate by (10, 0).
        let t = Transform::from_translate(10.0, 0.0).multiplied(&Transform::from_scale(2.0, 2.0));
        assert_eq!(t.transform_point(1.0, 1.0), (12.0, 2.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let t = Transform::from_rotate(core::f32::consts::FRAC_PI_2);
        let (x, y) = t.transform_point(1.0, 0.0);
        assert!(x.abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn translate_mutates_offsets_only() {
        let mut t = Transform::from_scale(2.0, 3.0);
        t.translate(5.0, 7.0);
        assert_eq!(t, Transform::from_row(2.0, 0.0, 0.0, 3.0, 5.0, 7.0));
    }

    #[test]
    fn scale_applies_before_existing_components() {
        let mut t = Transform::from_translate(5.0, 7.0);
        t.scale(2.0, 3.0);
        assert_eq!(t, Transform::from_row(2.0, 0.0, 0.0, 3.0, 10.0, 21.0));
    }
}
