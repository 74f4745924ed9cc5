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

//! Points and vectors, generic over their coordinate representation.
//!
//! The sweep-line core only ever instantiates these at [`crate::fixed::Coord`]
//! (`i32`); the stroker additionally instantiates them at `f64` for the
//! user-space tangent and offset math of [`crate::stroke`], which is
//! rounded down to the fixed-point plane only once an edge is emitted.

use core::cmp::Ordering;
use core::fmt;
use core::ops;

use num_traits::Float;

macro_rules! two_dimensional {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
        #[repr(C)]
        pub struct $name<T> {
            x: T,
            y: T,
        }

        #[cfg(feature = "arbitrary")]
        impl<'a, T: arbitrary::Arbitrary<'a>> arbitrary::Arbitrary<'a> for $name<T> {
            fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
                let (x, y) = arbitrary::Arbitrary::arbitrary(u)?;
                Ok(Self { x, y })
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.x).field(&self.y).finish()
            }
        }

        impl<T: Copy> $name<T> {
            /// Create a new value from its coordinates.
            #[inline]
            pub fn new(x: T, y: T) -> Self {
                Self { x, y }
            }

            /// The `x` coordinate.
            #[inline]
            pub fn x(self) -> T {
                self.x
            }

            /// The `y` coordinate.
            #[inline]
            pub fn y(self) -> T {
                self.y
            }
        }
    };
}

two_dimensional! {
    /// A point on the plane.
    Point
}

two_dimensional! {
    /// A displacement between two points.
    Vector
}

impl<T: Copy + ops::Sub<Output = T>> ops::Sub for Point<T> {
    type Output = Vector<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Vector<T> {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Copy + ops::Add<Output = T>> ops::Add<Vector<T>> for Point<T> {
    type Output = Point<T>;

    #[inline]
    fn add(self, rhs: Vector<T>) -> Point<T> {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + ops::Sub<Output = T>> ops::Sub<Vector<T>> for Point<T> {
    type Output = Point<T>;

    #[inline]
    fn sub(self, rhs: Vector<T>) -> Point<T> {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Copy + ops::Add<Output = T>> ops::Add for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn add(self, rhs: Self) -> Vector<T> {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + ops::Neg<Output = T>> ops::Neg for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn neg(self) -> Vector<T> {
        Vector::new(-self.x, -self.y)
    }
}

impl<T: Copy + ops::Mul<Output = T>> ops::Mul<T> for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn mul(self, rhs: T) -> Vector<T> {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Copy + ops::Div<Output = T>> ops::Div<T> for Vector<T> {
    type Output = Vector<T>;

    #[inline]
    fn div(self, rhs: T) -> Vector<T> {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Vector<f64> {
    /// The Euclidean length of this vector.
    #[inline]
    pub fn length(self) -> f64 {
        Float::sqrt(self.length_squared())
    }

    /// The squared Euclidean length of this vector, avoiding the `sqrt`.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// This vector scaled to unit length.
    ///
    /// Returns `None` for the zero vector, where no direction is defined.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 {
            None
        } else {
            Some(self / len)
        }
    }

    /// This vector rotated by 90 degrees counterclockwise in a
    /// y-down device space (i.e. towards `-x` when pointing along `+y`).
    #[inline]
    pub fn turn_left(self) -> Self {
        Vector::new(self.y, -self.x)
    }

    /// This vector rotated by 90 degrees clockwise in a y-down device space.
    #[inline]
    pub fn turn_right(self) -> Self {
        Vector::new(-self.y, self.x)
    }

    /// The dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The 2D cross product (the `z` component of the 3D cross product).
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Point<i32> {
    /// Round a point in user space down onto the fixed-point device plane.
    ///
    /// Rounds half away from zero on each axis independently, matching
    /// the rounding policy [`crate::intersect`] uses for intersection
    /// points so that stroke output and tessellator output agree on how
    /// ties are broken.
    #[inline]
    pub fn from_f64(p: Point<f64>) -> Self {
        Point::new(round_half_away_from_zero(p.x), round_half_away_from_zero(p.y))
    }

    /// Widen this point's coordinates to `f64` for user-space math.
    #[inline]
    pub fn to_f64(self) -> Point<f64> {
        Point::new(self.x as f64, self.y as f64)
    }
}

#[inline]
fn round_half_away_from_zero(v: f64) -> i32 {
    if v >= 0.0 {
        Float::floor(v + 0.5) as i32
    } else {
        Float::ceil(v - 0.5) as i32
    }
}

/// Compare two points by `y` ascending, ties broken by `x` ascending.
///
/// This is the fundamental order the sweep advances in; event
/// ordering, edge endpoints and the
/// priority queue are all ultimately built on this.
#[inline]
pub fn point_order(a: Point<i32>, b: Point<i32>) -> Ordering {
    a.y.cmp(&b.y).then_with(|| a.x.cmp(&b.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_order_is_y_then_x() {
        assert_eq!(point_order(Point::new(0, 0), Point::new(5, 0)), Ordering::Less);
        assert_eq!(point_order(Point::new(5, 0), Point::new(0, 1)), Ordering::Less);
        assert_eq!(point_order(Point::new(3, 3), Point::new(3, 3)), Ordering::Equal);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_half_away_from_zero(0.5), 1);
        assert_eq!(round_half_away_from_zero(-0.5), -1);
        assert_eq!(round_half_away_from_zero(0.4), 0);
        assert_eq!(round_half_away_from_zero(-0.4), 0);
    }

    #[test]
    fn vector_turn_left_right_are_opposite() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(v.turn_left(), -v.turn_right());
    }
}
