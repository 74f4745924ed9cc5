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

//! The polygon intersector: clips one polygon against another using a
//! dual-winding sweep over both inputs' reduced boundaries.

use alloc::vec::Vec;

use crate::engine;
use crate::error::Result;
use crate::line::Edge;
use crate::polygon::Polygon;
use crate::reduce::reduce_polygon;
use crate::FillRule;

/// Which of the two input polygons an edge in the dual sweep came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Source {
    A,
    B,
}

/// Geometric intersection of the filled regions of `a` (under `rule_a`)
/// and `b` (under `rule_b`).
///
/// Both inputs are first reduced to non-self-intersecting, winding-rule
/// boundaries; the result is always in terms of that simple nonzero
/// winding, regardless of the rules `a` and `b` were originally filled
/// under.
pub fn intersect_polygons(a: &Polygon, rule_a: FillRule, b: &Polygon, rule_b: FillRule) -> Result<Polygon> {
    let reduced_a = reduce_polygon(a, rule_a)?;
    let reduced_b = reduce_polygon(b, rule_b)?;
    tracing::debug!(a_edges = reduced_a.edges().len(), b_edges = reduced_b.edges().len(), "intersecting polygons");

    let mut edges: Vec<(Edge, Source)> = Vec::with_capacity(reduced_a.edges().len() + reduced_b.edges().len());
    edges.extend(reduced_a.edges().iter().copied().map(|e| (e, Source::A)));
    edges.extend(reduced_b.edges().iter().copied().map(|e| (e, Source::B)));

    let mut out = Polygon::new();
    engine::run_sweep(
        edges,
        [0i32, 0i32],
        |mut w: [i32; 2], edge, source| {
            let slot = match source {
                Source::A => 0,
                Source::B => 1,
            };
            w[slot] += edge.dir() as i32;
            w
        },
        |w: [i32; 2]| w[0] != 0 && w[1] != 0,
        |_, _| false,
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
