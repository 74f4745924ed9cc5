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

//! The polygon reducer: the same sweep as the tessellator, but
//! emitting a clean polygon instead of trapezoids.

use alloc::vec::Vec;

use crate::engine;
use crate::error::Result;
use crate::line::Edge;
use crate::polygon::Polygon;
use crate::tessellate::is_inside;
use crate::FillRule;

/// Resolve self-intersections in `polygon` under `fill_rule`, producing
/// a polygon whose edges do not cross and whose winding under the
/// given rule matches the input's.
pub fn reduce_polygon(polygon: &Polygon, fill_rule: FillRule) -> Result<Polygon> {
    let edges: Vec<(Edge, ())> = polygon.clipped_edges().map(|edge| (edge, ())).collect();
    tracing::debug!(edge_count = edges.len(), ?fill_rule, "reducing polygon");

    let mut out = Polygon::new();
    engine::run_sweep(
        edges,
        0i32,
        |w, edge, ()| w + edge.dir() as i32,
        |w| is_inside(fill_rule, w),
        |a, b| identical(a, b),
        |left, right, top, bottom| {
            if top >= bottom {
                return;
            }
            if let Some(e) = Edge::new(left.line().p1(), left.line().p2(), top, bottom, 1) {
                out.push_edge(e);
            }
            if let Some(e) = Edge::new(right.line().p1(), right.line().p2(), top, bottom, -1) {
                out.push_edge(e);
            }
        },
    )?;

    Ok(out)
}

/// Two edges are "identical" for the purposes of suppressing a
/// spurious self-intersection when they share both endpoints of their
/// supporting line, regardless of winding direction.
fn identical(a: Edge, b: Edge) -> bool {
    a.line() == b.line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn near_miss_edges_reduce_without_residual_crossings() {
        let polygon = Polygon::from_edges([
            Edge::from_segment(Point::new(4, 0), Point::new(0, 9), 1).unwrap(),
            Edge::from_segment(Point::new(7, 0), Point::new(0, 3), 1).unwrap(),
            Edge::from_segment(Point::new(5, 0), Point::new(1, 7), 1).unwrap(),
        ]);
        let reduced = reduce_polygon(&polygon, FillRule::Winding).unwrap();
        assert!(no_self_intersections(reduced.edges()));
    }

    #[test]
    fn idempotent_under_repeated_reduction() {
        let polygon = Polygon::from_edges([
            Edge::from_segment(Point::new(0, 0), Point::new(10, 10), 1).unwrap(),
            Edge::from_segment(Point::new(10, 0), Point::new(0, 10), 1).unwrap(),
        ]);
        let once = reduce_polygon(&polygon, FillRule::Winding).unwrap();
        let twice = reduce_polygon(&once, FillRule::Winding).unwrap();
        assert_eq!(once.edges(), twice.edges());
    }

    fn no_self_intersections(edges: &[Edge]) -> bool {
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                if crate::intersect::intersect(a.line(), a.top(), a.bottom(), b.line(), b.top(), b.bottom()).is_some() {
                    return false;
                }
            }
        }
        true
    }
}
