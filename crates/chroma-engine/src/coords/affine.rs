use core::ops::Mul;

use super::Vec2;

/// 2D affine transform: a 2x2 linear part (column vectors) plus translation.
///
/// `a * b` applies `b` first, then `a`, matching matrix products:
///
/// ```
/// use chroma_engine::coords::{Affine2, Vec2};
///
/// let model = Affine2::translation(Vec2::new(40.0, 40.0)) * Affine2::scale(Vec2::new(80.0, 80.0));
/// assert_eq!(model.transform_point(Vec2::new(-0.5, -0.5)), Vec2::new(0.0, 0.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub x_axis: Vec2,
    pub y_axis: Vec2,
    pub translation: Vec2,
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        x_axis: Vec2::new(1.0, 0.0),
        y_axis: Vec2::new(0.0, 1.0),
        translation: Vec2::ZERO,
    };

    #[inline]
    pub const fn translation(t: Vec2) -> Self {
        Self {
            x_axis: Vec2::new(1.0, 0.0),
            y_axis: Vec2::new(0.0, 1.0),
            translation: t,
        }
    }

    #[inline]
    pub const fn scale(s: Vec2) -> Self {
        Self {
            x_axis: Vec2::new(s.x, 0.0),
            y_axis: Vec2::new(0.0, s.y),
            translation: Vec2::ZERO,
        }
    }

    /// Maps the unit square centered at the origin onto the axis-aligned
    /// rectangle centered at `center` with extent `size`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::translation(center) * Self::scale(size)
    }

    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.x_axis * v.x + self.y_axis * v.y
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.transform_vector(p) + self.translation
    }

    /// Applies `self` first, then `next`.
    #[inline]
    pub fn then(self, next: Affine2) -> Affine2 {
        next * self
    }

    /// Column-major 3x2 layout, as uploaded to the GPU instance buffer.
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[f32; 2]; 3] {
        [
            [self.x_axis.x, self.x_axis.y],
            [self.y_axis.x, self.y_axis.y],
            [self.translation.x, self.translation.y],
        ]
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine2 {
    type Output = Affine2;

    #[inline]
    fn mul(self, rhs: Affine2) -> Affine2 {
        Affine2 {
            x_axis: self.transform_vector(rhs.x_axis),
            y_axis: self.transform_vector(rhs.y_axis),
            translation: self.transform_point(rhs.translation),
        }
    }
}
