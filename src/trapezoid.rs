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

//! A trapezoid with horizontal top and bottom edges.

use crate::line::Line;

/// A trapezoid bounded above and below by horizontal lines at `top`
/// and `bottom`, and on the sides by two (possibly slanted) lines.
///
/// `top < bottom` is an invariant of every trapezoid that leaves
/// [`crate::tessellate_polygon`] — degenerate trapezoids (`top >=
/// bottom`) are discarded before they are ever constructed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Trapezoid {
    top: i32,
    bottom: i32,
    left: Line,
    right: Line,
}

impl Trapezoid {
    /// Create a new trapezoid.
    #[inline]
    pub fn new(top: i32, bottom: i32, left: Line, right: Line) -> Self {
        Trapezoid { top, bottom, left, right }
    }

    /// The top `y`.
    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// The bottom `y`.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// The left boundary line.
    #[inline]
    pub fn left(&self) -> Line {
        self.left
    }

    /// The right boundary line.
    #[inline]
    pub fn right(&self) -> Line {
        self.right
    }

    /// `true` if `top < bottom` — the one shape invariant a trapezoid
    /// must hold to be worth emitting.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.top < self.bottom
    }

    /// The left and right `x` coordinates at the vertical midpoint,
    /// used when checking trapezoid orientation and by callers doing
    /// point-in-trapezoid tests.
    pub fn x_at_mid(&self) -> (i32, i32) {
        // Average without overflow; top/bottom are both within i32 range
        // and the spec's 2^30 coordinate bound leaves headroom for the sum.
        let mid = self.top + (self.bottom - self.top) / 2;
        (self.left.x_at_y(mid).unwrap_or_else(|| self.left.p1().x()),
         self.right.x_at_y(mid).unwrap_or_else(|| self.right.p1().x()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn orientation_left_lt_right() {
        let left = Line::new(Point::new(0, 0), Point::new(0, 10));
        let right = Line::new(Point::new(10, 0), Point::new(10, 10));
        let t = Trapezoid::new(0, 10, left, right);
        let (lx, rx) = t.x_at_mid();
        assert!(lx < rx);
    }

    #[test]
    fn invalid_when_top_not_below_bottom() {
        let left = Line::new(Point::new(0, 0), Point::new(0, 10));
        let right = Line::new(Point::new(10, 0), Point::new(10, 10));
        assert!(!Trapezoid::new(10, 10, left, right).is_valid());
        assert!(!Trapezoid::new(11, 10, left, right).is_valid());
    }
}
