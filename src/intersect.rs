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

//! Exact line-segment intersection.

use crate::fixed::{det, mul64x32_128};
use crate::line::Line;
use crate::point::Point;

/// Whether a rounded intersection ordinate landed exactly on the true
/// rational value, or was nudged by rounding.
///
/// Containment checks use this to decide between a strict and
/// non-strict comparison against an edge's endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Exactness {
    Exact,
    Inexact,
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct Intersection {
    pub(crate) point: Point<i32>,
    pub(crate) x_exact: Exactness,
    pub(crate) y_exact: Exactness,
}

/// Intersect the supporting lines of `a` and `b`, strictly within both
/// `[top, bottom]` ranges, rounding the result to the nearest integer
/// point.
///
/// Returns `None` when the lines are parallel, when either parameter
/// falls outside the open interval `(0, 1)`, or when the rounded point
/// does not fall strictly within both edges' spans.
pub(crate) fn intersect(
    a: Line,
    a_top: i32,
    a_bottom: i32,
    b: Line,
    b_top: i32,
    b_bottom: i32,
) -> Option<Intersection> {
    let (dx1, dy1) = (a.dx(), a.dy());
    let (dx2, dy2) = (b.dx(), b.dy());

    let den = det(dx1, dy1, dx2, dy2);
    if den == 0 {
        return None;
    }

    let delta_x = b.p1().x() - a.p1().x();
    let delta_y = b.p1().y() - a.p1().y();

    // t = t_num / den is a's parameter; s = s_num / den is b's.
    let t_num = det(delta_x, delta_y, dx2, dy2);
    let s_num = det(delta_x, delta_y, dx1, dy1);

    if !strictly_between_zero_and_den(t_num, den) {
        return None;
    }
    if !strictly_between_zero_and_den(s_num, den) {
        return None;
    }

    let (x, x_exact) = round_ordinate(a.p1().x(), dx1, t_num, den)?;
    let (y, y_exact) = round_ordinate(a.p1().y(), dy1, t_num, den)?;
    let point = Point::new(x, y);

    if !strictly_within(point, a_top, a_bottom, a, y_exact) {
        return None;
    }
    if !strictly_within(point, b_top, b_bottom, b, y_exact) {
        return None;
    }

    Some(Intersection { point, x_exact, y_exact })
}

/// Is `0 < num/den < 1`? Both branches depend on the sign of `den`.
fn strictly_between_zero_and_den(num: i64, den: i64) -> bool {
    if den > 0 {
        num > 0 && num < den
    } else {
        num < 0 && num > den
    }
}

/// Round `base + (num * delta) / den` to the nearest integer,
/// half-away-from-zero in the direction of the true quotient's sign.
fn round_ordinate(base: i32, delta: i32, num: i64, den: i64) -> Option<(i32, Exactness)> {
    let numerator = mul64x32_128(den, base) + mul64x32_128(num, delta);
    let (quotient, remainder) = crate::fixed::checked_div_96_by_64(numerator, den)?;

    if remainder == 0 {
        return Some((quotient as i32, Exactness::Exact));
    }

    let round_up = (remainder as i128).abs() * 2 >= (den as i128).abs();
    // The true quotient's sign: the truncated quotient's sign when it is
    // nonzero, otherwise the sign of `remainder / den`.
    let value_sign = if quotient != 0 {
        quotient.signum()
    } else {
        remainder.signum() * den.signum()
    };
    let rounded = if round_up { quotient + value_sign } else { quotient };

    Some((rounded as i32, Exactness::Inexact))
}

/// Is `point` inside `(top, bottom)` for `line`? Endpoints count as
/// "outside", to avoid phantom intersections at shared vertices. When
/// `point.y` coincides with an endpoint's `y`, break the tie by
/// comparing exact endpoint `x`.
///
/// `y_exact` decides whether that boundary test is strict or
/// non-strict: when the rounded `y` is the true rational value
/// (`Exactness::Exact`), touching `top`/`bottom` means the point truly
/// is that endpoint, so it's rejected. When `y` was nudged by rounding
/// (`Exactness::Inexact`), the true intersection may sit strictly
/// inside the span and merely round onto its boundary, so only a value
/// that rounds to strictly past the boundary is rejected.
fn strictly_within(point: Point<i32>, top: i32, bottom: i32, line: Line, y_exact: Exactness) -> bool {
    let outside = match y_exact {
        Exactness::Exact => point.y() <= top || point.y() >= bottom,
        Exactness::Inexact => point.y() < top || point.y() > bottom,
    };
    if outside {
        return false;
    }
    if point.y() == line.p1().y() && point.x() == line.p1().x() {
        return false;
    }
    if point.y() == line.p2().y() && point.x() == line.p2().x() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(p1: (i32, i32), p2: (i32, i32)) -> Line {
        Line::new(Point::new(p1.0, p1.1), Point::new(p2.0, p2.1))
    }

    #[test]
    fn crossing_diagonals_meet_at_center() {
        let a = line((0, 0), (10, 10));
        let b = line((10, 0), (0, 10));
        let hit = intersect(a, 0, 10, b, 0, 10).unwrap();
        assert_eq!(hit.point, Point::new(5, 5));
        assert_eq!(hit.x_exact, Exactness::Exact);
    }

    #[test]
    fn parallel_lines_never_intersect() {
        let a = line((0, 0), (10, 10));
        let b = line((1, 0), (11, 10));
        assert!(intersect(a, 0, 10, b, 0, 10).is_none());
    }

    #[test]
    fn intersection_at_unit_square_endpoint_is_rejected() {
        // These two segments' supporting lines cross exactly at (1, 1),
        // which is edge `a`'s own bottom endpoint — a phantom crossing
        // that containment correctly throws out.
        let a = line((0, 0), (1, 1));
        let b = line((1, 0), (0, 1));
        assert!(intersect(a, 0, 1, b, 0, 1).is_none());
    }

    #[test]
    fn interior_crossing_rounds_exactly() {
        let a = line((0, 0), (2, 2));
        let b = line((2, 0), (0, 2));
        let hit = intersect(a, 0, 2, b, 0, 2).unwrap();
        assert_eq!(hit.point, Point::new(1, 1));
        assert_eq!(hit.x_exact, Exactness::Exact);
    }

    #[test]
    fn inexact_rounding_onto_a_boundary_is_still_contained() {
        // a's true intersection with b sits at y = 1.3, strictly inside
        // a's (1, 10) span, but rounds down to y = 1 exactly on `top`.
        // A strict comparison would throw this out as if it landed on
        // a's own endpoint; the inexact tag says otherwise.
        let a = line((0, 1), (900, 10));
        let b = line((30, 0), (30, 20));
        let hit = intersect(a, 1, 10, b, 0, 20).unwrap();
        assert_eq!(hit.point, Point::new(30, 1));
        assert_eq!(hit.y_exact, Exactness::Inexact);
    }

    #[test]
    fn shared_endpoint_is_not_an_intersection() {
        let a = line((0, 0), (10, 10));
        let b = line((0, 0), (10, -10));
        assert!(intersect(a, 0, 10, b, -10, 0).is_none());
    }
}
