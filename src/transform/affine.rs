// Copyright 2023 John Nunley
//
// This file is part of sweep-geometry.
//
// sweep-geometry is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// sweep-geometry is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License
// for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with sweep-geometry. If not, see <https://www.gnu.org/licenses/>.

//! A six-coefficient 2D affine transformation.

use crate::angle::Angle;
use crate::point::{Point, Vector};
use num_traits::{real::Real, Float, One, Zero};

use core::ops;

/// `[a b; c d]` plus a translation `(e, f)`, applied to a point as
/// `(a*x + c*y + e, b*x + d*y + f)`.
// Coefficient layout and the inverse formula follow
// https://docs.rs/kurbo/latest/src/kurbo/affine.rs.html
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affine<T> {
    a: T,
    b: T,
    c: T,
    d: T,
    e: T,
    f: T,
}

#[cfg(feature = "arbitrary")]
impl<'a, T: Copy + arbitrary::Arbitrary<'a>> arbitrary::Arbitrary<'a> for Affine<T> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Affine::new(arbitrary::Arbitrary::arbitrary(u)?))
    }
}

impl<T: Copy> Affine<T> {
    /// Build a transform from its six coefficients, `[a, b, c, d, e, f]`.
    #[inline]
    pub fn new(coefficients: [T; 6]) -> Self {
        let [a, b, c, d, e, f] = coefficients;
        Affine { a, b, c, d, e, f }
    }

    /// The six coefficients, in the same order `new` takes them.
    #[inline]
    pub fn as_coefficients(&self) -> [T; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// A transform that scales `x` by `sx` and `y` by `sy`.
    #[inline]
    pub fn scale(sx: T, sy: T) -> Self
    where
        T: Zero,
    {
        Self::new([sx, T::zero(), T::zero(), sy, T::zero(), T::zero()])
    }

    /// A transform that rotates by `angle`.
    #[inline]
    pub fn rotate(angle: Angle<T>) -> Self
    where
        T: Zero + Real,
    {
        let sin = angle.sin();
        let cos = angle.cos();
        Self::new([cos, sin, -sin, cos, T::zero(), T::zero()])
    }

    /// A transform that translates by `(x, y)`.
    #[inline]
    pub fn translate(x: T, y: T) -> Self
    where
        T: Zero + One,
    {
        Self::new([T::one(), T::zero(), T::zero(), T::one(), x, y])
    }

    /// `a*d - b*c`. Negative iff this transform reverses orientation
    /// (a mirror, or a rotation folded in with one).
    #[inline]
    pub fn determinant(&self) -> T
    where
        T: ops::Sub<Output = T> + ops::Mul<Output = T>,
    {
        self.a * self.d - self.b * self.c
    }

    /// The transform that undoes this one.
    #[inline]
    pub fn inverse(&self) -> Self
    where
        T: Real,
    {
        let inv_det = self.determinant().recip();
        Self::new([
            self.d * inv_det,
            -self.b * inv_det,
            -self.c * inv_det,
            self.a * inv_det,
            (self.c * self.f - self.d * self.e) * inv_det,
            (self.b * self.e - self.a * self.f) * inv_det,
        ])
    }

    /// Apply the transform to a point, translation included.
    #[inline]
    pub fn transform_point(&self, point: Point<T>) -> Point<T>
    where
        T: ops::Mul<Output = T> + ops::Add<Output = T>,
    {
        Point::new(
            self.a * point.x() + self.c * point.y() + self.e,
            self.b * point.x() + self.d * point.y() + self.f,
        )
    }

    /// Apply only the linear part of the transform to a vector: no
    /// translation, since a displacement has no position of its own.
    #[inline]
    pub fn transform_vector(&self, vector: Vector<T>) -> Vector<T>
    where
        T: ops::Mul<Output = T> + ops::Add<Output = T>,
    {
        Vector::new(
            self.a * vector.x() + self.c * vector.y(),
            self.b * vector.x() + self.d * vector.y(),
        )
    }
}

impl Affine<f64> {
    /// `sqrt(|determinant|)`, a single-number stand-in for "how much
    /// does this transform scale areas", used to convert a device-space
    /// tolerance into an equivalent user-space one.
    #[inline]
    pub fn approx_scale(&self) -> f64 {
        Float::sqrt(Float::abs(self.determinant()))
    }
}

impl<T: Copy + Zero + One> Default for Affine<T> {
    #[inline]
    fn default() -> Self {
        Self::new([T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_a_point() {
        let identity = Affine::<f64>::default();
        let p = Point::new(3.0, 4.0);
        assert_eq!(identity.transform_point(p), p);
    }

    #[test]
    fn inverse_undoes_translate_and_scale() {
        let t = Affine::translate(2.0, -3.0);
        let s = Affine::scale(2.0, 0.5);
        let combined = Affine::new([
            s.as_coefficients()[0],
            s.as_coefficients()[1],
            s.as_coefficients()[2],
            s.as_coefficients()[3],
            t.as_coefficients()[4],
            t.as_coefficients()[5],
        ]);
        let inv = combined.inverse();
        let p = Point::new(5.0, 7.0);
        let round_tripped = inv.transform_point(combined.transform_point(p));
        assert!(num_traits::Float::abs(round_tripped.x() - p.x()) < 1e-9);
        assert!(num_traits::Float::abs(round_tripped.y() - p.y()) < 1e-9);
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let t = Affine::translate(100.0, 100.0);
        let v = Vector::new(1.0, 0.0);
        assert_eq!(t.transform_vector(v), v);
    }

    #[test]
    fn mirrored_transform_has_negative_determinant() {
        let mirror = Affine::scale(-1.0, 1.0);
        assert!(mirror.determinant() < 0.0);
    }
}
