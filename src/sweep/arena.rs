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

use alloc::vec::Vec;
use core::cell::Cell;

use crate::line::Edge;

/// An index into a sweep's [`Arena`].
///
/// Plays the role the original's edge pointers played, but as a plain
/// index so the active list can be a safe arena instead of an
/// intrusive linked list of raw pointers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EdgeId(u32);

impl EdgeId {
    #[inline]
    pub(crate) fn from_raw(i: u32) -> Self {
        EdgeId(i)
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A trapezoid (or polygon-edge pair) that has a known top but whose
/// bottom is still pending, kept on the left edge of the pair.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Deferred {
    pub(crate) right: EdgeId,
    pub(crate) top: i32,
}

/// One edge as seen by the sweep: its geometry, active-list links, a
/// deferred trapezoid, a cached collinearity hint, and whatever extra
/// per-consumer bookkeeping `Extra` carries (nothing for the
/// tessellator/reducer, a source tag for the intersector).
#[derive(Debug)]
pub(crate) struct SweepEdge<Extra> {
    edge: Edge,
    prev: Cell<Option<EdgeId>>,
    next: Cell<Option<EdgeId>>,
    trapezoid: Cell<Option<Deferred>>,
    /// `(peer, result)`: the last edge this one was compared against
    /// for collinearity, and the memoized answer. Replaces the
    /// original's bit-stuffed pointer.
    collinear_hint: Cell<Option<(EdgeId, bool)>>,
    pub(crate) extra: Extra,
}

impl<Extra: Copy> SweepEdge<Extra> {
    fn new(edge: Edge, extra: Extra) -> Self {
        SweepEdge {
            edge,
            prev: Cell::new(None),
            next: Cell::new(None),
            trapezoid: Cell::new(None),
            collinear_hint: Cell::new(None),
            extra,
        }
    }

    #[inline]
    pub(crate) fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<EdgeId> {
        self.prev.get()
    }

    #[inline]
    pub(crate) fn set_prev(&self, prev: Option<EdgeId>) {
        self.prev.set(prev);
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<EdgeId> {
        self.next.get()
    }

    #[inline]
    pub(crate) fn set_next(&self, next: Option<EdgeId>) {
        self.next.set(next);
    }

    #[inline]
    pub(crate) fn deferred(&self) -> Option<Deferred> {
        self.trapezoid.get()
    }

    #[inline]
    pub(crate) fn set_deferred(&self, deferred: Option<Deferred>) {
        self.trapezoid.set(deferred);
    }

    #[inline]
    pub(crate) fn take_deferred(&self) -> Option<Deferred> {
        self.trapezoid.take()
    }

    /// Is `other` collinear with this edge's supporting line?
    ///
    /// Memoized against the last edge compared, so repeated queries
    /// about the same pair within one slab cost O(1) after the first.
    pub(crate) fn collinear_with(&self, other_id: EdgeId, other: &SweepEdge<Extra>) -> bool {
        if let Some((peer, result)) = self.collinear_hint.get() {
            if peer == other_id {
                return result;
            }
        }
        let result = lines_collinear(&self.edge, &other.edge);
        self.collinear_hint.set(Some((other_id, result)));
        result
    }
}

fn lines_collinear(a: &Edge, b: &Edge) -> bool {
    // Two non-horizontal lines are collinear iff both of `b`'s defining
    // points lie exactly on `a`'s supporting line: `det(a.dx, a.dy, px -
    // a.p1.x, py - a.p1.y) == 0` for each point `p` of `b`.
    let al = a.line();
    let on_line = |p: crate::point::Point<i32>| {
        crate::fixed::det(al.dx(), al.dy(), p.x() - al.p1().x(), p.y() - al.p1().y()) == 0
    };
    on_line(b.line().p1()) && on_line(b.line().p2())
}

/// Owns every edge a single sweep operates on, plus a monotonic event
/// sequence counter, replacing pointer-identity tie-breaks.
pub(crate) struct Arena<Extra> {
    edges: Vec<SweepEdge<Extra>>,
    next_seq: Cell<u64>,
}

impl<Extra: Copy> Arena<Extra> {
    pub(crate) fn new() -> Self {
        Arena { edges: Vec::new(), next_seq: Cell::new(0) }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        Arena { edges: Vec::with_capacity(cap), next_seq: Cell::new(0) }
    }

    pub(crate) fn push(&mut self, edge: Edge, extra: Extra) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(SweepEdge::new(edge, extra));
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: EdgeId) -> &SweepEdge<Extra> {
        &self.edges[id.index()]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    /// The next monotonic sequence number, for event tie-breaking.
    pub(crate) fn next_sequence(&self) -> u64 {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        seq
    }

    pub(crate) fn iter_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len() as u32).map(EdgeId)
    }
}
