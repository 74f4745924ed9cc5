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

//! Exact integer comparison predicates over [`Edge`](crate::line::Edge)s.
//!
//! Every comparison here widens before combining — no predicate here
//! may lose precision the way a naive `f64` cast
//! would.

use core::cmp::Ordering;

use crate::fixed::det;
use crate::line::Line;

/// Sign of `adx * bdy - bdx * ady`, with cheap fast paths tried
/// before falling back to the full widened determinant.
pub(crate) fn slope_compare(a: Line, b: Line) -> Ordering {
    let (adx, ady) = (a.dx(), a.dy());
    let (bdx, bdy) = (b.dx(), b.dy());

    if adx == 0 {
        return 0.cmp(&(-bdx));
    }
    if bdx == 0 {
        return adx.cmp(&0);
    }
    if (adx < 0) != (bdx < 0) {
        return adx.cmp(&0);
    }

    det(adx, ady, bdx, bdy).cmp(&0)
}

/// Compare edge `a`'s `x` at `y` against edge `b`'s `x` at `y`, without
/// ever materializing either `x` when a cheaper decision is available.
///
/// `y` is assumed to lie within both edges' `[top, bottom]` range (the
/// sweep only ever asks this of edges active at `y`).
pub(crate) fn x_at_y_compare(a: Line, b: Line, y: i32) -> Ordering {
    // Exact endpoint fast path: if `y` coincides with an endpoint of
    // either line, use that line's exact endpoint x rather than
    // re-deriving it through division.
    let a_exact = endpoint_x_at(a, y);
    let b_exact = endpoint_x_at(b, y);

    match (a_exact, b_exact) {
        (Some(ax), Some(bx)) => return ax.cmp(&bx),
        (Some(ax), None) => return ax.cmp(&b.x_at_y(y).expect("y within range")),
        (None, Some(bx)) => return a.x_at_y(y).expect("y within range").cmp(&bx),
        (None, None) => {}
    }

    // Bounding-box fast path: if the x-ranges are disjoint, the order
    // is decided without touching either slope.
    let (a_lo, a_hi) = minmax(a.p1().x(), a.p2().x());
    let (b_lo, b_hi) = minmax(b.p1().x(), b.p2().x());
    if a_hi < b_lo {
        return Ordering::Less;
    }
    if b_hi < a_lo {
        return Ordering::Greater;
    }

    // Full predicate: `ady * bdy * (ax - bx) cmp (y - by)*bdx*ady - (y - ay)*adx*bdy`.
    // `ax`, `ay` are `a.p1`; `bx`, `by` are `b.p1`. `ady`, `bdy` are both
    // non-negative by the sweep-edge orientation invariant. Each side is
    // a product of three `i32`-scale quantities, which can reach ~2^91 —
    // past `i64`'s range — so every product here is widened to `i128`.
    let (ax, ay) = (a.p1().x() as i128, a.p1().y() as i128);
    let (bx, by) = (b.p1().x() as i128, b.p1().y() as i128);
    let (adx, ady) = (a.dx() as i128, a.dy() as i128);
    let (bdx, bdy) = (b.dx() as i128, b.dy() as i128);
    let y = y as i128;

    let lhs = ady * bdy * (ax - bx);
    let rhs = (y - by) * bdx * ady - (y - ay) * adx * bdy;
    lhs.cmp(&rhs)
}

/// If `y` is exactly one of `line`'s endpoint y-values, the endpoint's
/// exact `x`; otherwise `None`.
fn endpoint_x_at(line: Line, y: i32) -> Option<i32> {
    if line.p1().y() == y {
        Some(line.p1().x())
    } else if line.p2().y() == y {
        Some(line.p2().x())
    } else {
        None
    }
}

fn minmax(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Compare an edge's `x` at `y` against a bare scalar `x`, for the
/// intersection-event containment check. 64-bit arithmetic suffices
/// here.
pub(crate) fn edge_at_y_compare_scalar(line: Line, y: i32, x: i32) -> Ordering {
    if let Some(ex) = endpoint_x_at(line, y) {
        return ex.cmp(&x);
    }
    let lhs = line.dy() as i64 * (x as i64 - line.p1().x() as i64);
    let rhs = (y as i64 - line.p1().y() as i64) * line.dx() as i64;
    rhs.cmp(&lhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn line(p1: (i32, i32), p2: (i32, i32)) -> Line {
        Line::new(Point::new(p1.0, p1.1), Point::new(p2.0, p2.1))
    }

    #[test]
    fn slope_compare_fast_paths() {
        let vertical = line((0, 0), (0, 10));
        let slanted = line((0, 0), (10, 10));
        assert_eq!(slope_compare(vertical, slanted), Ordering::Less);
        assert_eq!(slope_compare(slanted, vertical), Ordering::Greater);
    }

    #[test]
    fn x_at_y_compare_disjoint_boxes() {
        let a = line((0, 0), (0, 10));
        let b = line((5, 0), (5, 10));
        assert_eq!(x_at_y_compare(a, b, 5), Ordering::Less);
    }

    #[test]
    fn x_at_y_compare_crossing_lines() {
        let a = line((0, 0), (10, 10));
        let b = line((10, 0), (0, 10));
        assert_eq!(x_at_y_compare(a, b, 0), Ordering::Less);
        assert_eq!(x_at_y_compare(a, b, 10), Ordering::Greater);
    }

    #[test]
    fn endpoint_fast_path_is_exact() {
        let a = line((0, 0), (10, 10));
        let b = line((3, 0), (3, 10));
        assert_eq!(x_at_y_compare(a, b, 0), Ordering::Less);
    }
}
