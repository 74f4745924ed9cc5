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

//! The extra points a join shape contributes between two faces, on
//! whichever side of the path is convex at that vertex.

use alloc::vec::Vec;

use crate::point::{Point, Vector};

use super::{face, pen, LineJoin};

/// Which offset side is on the convex (outer) side of a turn, given
/// the two segments' tangents. `None` for a straight continuation,
/// where neither side needs a join shape.
pub(crate) enum Side {
    Cw,
    Ccw,
}

pub(crate) fn outer_side(tangent_prev: Vector<f64>, tangent_next: Vector<f64>) -> Option<Side> {
    let turn = tangent_prev.cross(tangent_next);
    if turn.abs() < 1e-9 {
        None
    } else if turn < 0.0 {
        Some(Side::Cw)
    } else {
        Some(Side::Ccw)
    }
}

/// The points (if any) a join inserts between `end_point` (where the
/// previous segment's offset ends) and `start_point` (where the next
/// segment's offset begins), both on the outer side of `vertex`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn points(
    join: LineJoin,
    miter_limit: f64,
    vertex: Point<f64>,
    end_point: Point<f64>,
    start_point: Point<f64>,
    tangent_prev: Vector<f64>,
    tangent_next: Vector<f64>,
    half_width: f64,
    ctm_scale: f64,
    tolerance: f64,
    tolerance_user: f64,
) -> Vec<Point<f64>> {
    match join {
        LineJoin::Bevel => Vec::new(),
        LineJoin::Miter => {
            let cos_psi = tangent_prev.dot(tangent_next);
            let accept = 2.0 <= miter_limit * miter_limit * (1.0 - cos_psi);
            if accept {
                if let Some(apex) = face::line_intersect(end_point, tangent_prev, start_point, tangent_next) {
                    let bisector = (end_point - vertex) + (start_point - vertex);
                    if (apex - vertex).dot(bisector) > 0.0 {
                        return alloc::vec![apex];
                    }
                }
            }
            Vec::new()
        }
        LineJoin::Round => {
            let threshold = 1.0 - tolerance / (half_width * ctm_scale).max(1e-9);
            let cos_turn = tangent_prev.dot(tangent_next);
            if cos_turn > threshold {
                return Vec::new();
            }
            let through = (end_point - vertex) + (start_point - vertex);
            let max_step = pen::max_step_for_tolerance(half_width, tolerance_user);
            pen::arc_between(vertex, end_point, start_point, through, half_width, max_step)
        }
    }
}
