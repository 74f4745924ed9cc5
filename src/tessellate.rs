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

//! The Bentley-Ottmann tessellator: polygon and fill rule in,
//! trapezoids out.

use alloc::vec::Vec;

use crate::engine;
use crate::error::Result;
use crate::polygon::Polygon;
use crate::trapezoid::Trapezoid;
use crate::FillRule;

/// Is `w` an "inside" winding value under `rule`?
pub(crate) fn is_inside(rule: FillRule, w: i32) -> bool {
    match rule {
        FillRule::Winding => w != 0,
        FillRule::EvenOdd => w & 1 != 0,
    }
}

/// Sweep `polygon`'s edges under `fill_rule`, producing trapezoids.
///
/// Edges outside `polygon`'s clip limits (if any) contribute nothing.
/// Degenerate trapezoids (`top >= bottom`) are never constructed — the
/// engine only ever calls back with slabs that have positive height.
pub fn tessellate_polygon(polygon: &Polygon, fill_rule: FillRule) -> Result<Vec<Trapezoid>> {
    let edges: Vec<(crate::line::Edge, ())> = polygon.clipped_edges().map(|edge| (edge, ())).collect();
    tracing::debug!(edge_count = edges.len(), ?fill_rule, "tessellating polygon");

    let mut output = Vec::new();
    engine::run_sweep(
        edges,
        0i32,
        |w, edge, ()| w + edge.dir() as i32,
        |w| is_inside(fill_rule, w),
        |_, _| false,
        |left, right, top, bottom| {
            if top < bottom {
                tracing::trace!(top, bottom, "emitting trapezoid");
                output.push(Trapezoid::new(top, bottom, left.line(), right.line()));
            }
        },
    )?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Edge;
    use crate::point::Point;

    fn crossing_diagonals() -> Polygon {
        Polygon::from_edges([
            Edge::from_segment(Point::new(0, 0), Point::new(10, 10), 1).unwrap(),
            Edge::from_segment(Point::new(10, 0), Point::new(0, 10), 1).unwrap(),
        ])
    }

    #[test]
    fn crossing_diagonals_yield_four_trapezoids() {
        let polygon = crossing_diagonals();
        let traps = tessellate_polygon(&polygon, FillRule::EvenOdd).unwrap();
        assert_eq!(traps.len(), 4);
        for t in &traps {
            assert!(t.is_valid());
        }
    }

    #[test]
    fn vertical_and_slanted_winding_split() {
        let polygon = Polygon::from_edges([
            Edge::from_segment(Point::new(5, 1), Point::new(5, 7), 1).unwrap(),
            Edge::from_segment(Point::new(2, 4), Point::new(8, 5), 1).unwrap(),
        ]);
        let traps = tessellate_polygon(&polygon, FillRule::Winding).unwrap();
        assert_eq!(traps.len(), 4);
    }

    #[test]
    fn empty_polygon_yields_no_trapezoids() {
        let polygon = Polygon::new();
        let traps = tessellate_polygon(&polygon, FillRule::Winding).unwrap();
        assert!(traps.is_empty());
    }
}
