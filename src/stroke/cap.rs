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

//! The points a cap contributes at an open sub-path's two ends.

use alloc::vec::Vec;

use crate::point::{Point, Vector};

use super::{pen, LineCap};

/// Cap points bridging `from` to `to`, both offset points at `anchor`,
/// with `outward` pointing away from the segment the cap terminates
/// (`-tangent` for a start cap, `+tangent` for an end cap).
pub(crate) fn points(
    cap: LineCap,
    anchor: Point<f64>,
    from: Point<f64>,
    to: Point<f64>,
    outward: Vector<f64>,
    half_width: f64,
    tolerance_user: f64,
) -> Vec<Point<f64>> {
    match cap {
        LineCap::Butt => Vec::new(),
        LineCap::Square => alloc::vec![from + outward, to + outward],
        LineCap::Round => {
            let max_step = pen::max_step_for_tolerance(half_width, tolerance_user);
            pen::arc_between(anchor, from, to, outward, half_width, max_step)
        }
    }
}
