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

use core::cmp::Ordering;

use super::arena::{Arena, EdgeId};
use super::linked_list::{self, LinkedList};
use crate::compare::{slope_compare, x_at_y_compare};

/// The ordered active-edge list plus bookkeeping shared by the
/// tessellator, reducer and intersector: current scan `y`, a cursor
/// used as an insertion hint, and a `stopped` list of edges whose
/// deferred trapezoid may still be extended by a collinear
/// continuation starting at the same `y`.
pub(crate) struct SweepLine {
    current_y: i32,
    active: LinkedList,
    hint: Option<EdgeId>,
    stopped: LinkedList,
}

/// Compare two active edges at scan `y`: by `x`, then by slope, then
/// — for genuinely collinear edges — by `bottom` descending, so the
/// edge ending sooner sorts first and is swept out first.
fn compare_active_edges<Extra: Copy>(arena: &Arena<Extra>, y: i32, a: EdgeId, b: EdgeId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let (la, lb) = (arena.get(a).edge(), arena.get(b).edge());
    x_at_y_compare(la.line(), lb.line(), y)
        .then_with(|| slope_compare(la.line(), lb.line()))
        .then_with(|| lb.bottom().cmp(&la.bottom()))
}

impl SweepLine {
    pub(crate) fn new() -> Self {
        SweepLine { current_y: i32::MIN, active: LinkedList::default(), hint: None, stopped: LinkedList::default() }
    }

    pub(crate) fn current_y(&self) -> i32 {
        self.current_y
    }

    pub(crate) fn set_current_y(&mut self, y: i32) {
        self.current_y = y;
    }

    /// Insert `id` into the active list, using the current hint as a
    /// starting point; leaves the hint pointing at `id`.
    pub(crate) fn insert<Extra: Copy>(&mut self, id: EdgeId, arena: &Arena<Extra>) {
        tracing::trace!(edge = ?id, "inserting edge into sweep line");
        let hint = self.hint;
        let current_y = self.current_y;
        self.active
            .insert(id, hint, arena, |a, b| compare_active_edges(arena, current_y, a, b) != Ordering::Greater);
        self.hint = Some(id);
    }

    /// Remove `id` from the active list. If `id` carries a deferred
    /// trapezoid, hand it off to the `stopped` list so a later
    /// collinear `Start` at the same `y` can adopt it.
    pub(crate) fn remove<Extra: Copy>(&mut self, id: EdgeId, arena: &Arena<Extra>) {
        tracing::trace!(edge = ?id, "removing edge from sweep line");
        if self.hint == Some(id) {
            self.hint = arena.get(id).prev().or_else(|| arena.get(id).next());
        }
        self.active.remove(id, arena);

        if arena.get(id).deferred().is_some() {
            self.stopped.push_back(id, arena);
        }
    }

    /// Swap `id` with its current successor in the active list.
    pub(crate) fn swap_with_next<Extra: Copy>(&mut self, id: EdgeId, arena: &Arena<Extra>) {
        self.active.swap_with_next(id, arena);
    }

    pub(crate) fn prev<Extra: Copy>(&self, arena: &Arena<Extra>, id: EdgeId) -> Option<EdgeId> {
        arena.get(id).prev()
    }

    pub(crate) fn next<Extra: Copy>(&self, arena: &Arena<Extra>, id: EdgeId) -> Option<EdgeId> {
        arena.get(id).next()
    }

    pub(crate) fn iter<'a, Extra: Copy>(&self, arena: &'a Arena<Extra>) -> linked_list::Iter<'a, Extra> {
        self.active.iter(arena)
    }

    /// Find a stopped edge ending at or after `top` that is collinear
    /// with `candidate`, so its deferred trapezoid can be adopted
    /// rather than starting a fresh one.
    pub(crate) fn take_collinear_stopped<Extra: Copy>(
        &mut self,
        arena: &Arena<Extra>,
        candidate: EdgeId,
        top: i32,
    ) -> Option<EdgeId> {
        let found = self.stopped.iter(arena).find(|&stopped_id| {
            let stopped_edge = arena.get(stopped_id);
            stopped_edge.edge().bottom() >= top && stopped_edge.collinear_with(candidate, arena.get(candidate))
        })?;
        self.stopped.remove(found, arena);
        Some(found)
    }

    /// Drain the `stopped` list, for the end-of-slab flush.
    pub(crate) fn drain_stopped<Extra: Copy>(&mut self, arena: &Arena<Extra>) -> alloc::vec::Vec<EdgeId> {
        let mut out = alloc::vec::Vec::new();
        while let Some(id) = self.stopped.pop_front(arena) {
            out.push(id);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Edge;
    use crate::point::Point;

    fn edge(arena: &mut Arena<()>, x: i32) -> EdgeId {
        arena.push(Edge::from_segment(Point::new(x, 0), Point::new(x, 10), 1).unwrap(), ())
    }

    #[test]
    fn insert_orders_by_x() {
        let mut arena: Arena<()> = Arena::new();
        let a = edge(&mut arena, 5);
        let b = edge(&mut arena, 1);
        let c = edge(&mut arena, 10);

        let mut line = SweepLine::new();
        line.set_current_y(0);
        line.insert(a, &arena);
        line.insert(b, &arena);
        line.insert(c, &arena);

        let order: alloc::vec::Vec<_> = line.iter(&arena).collect();
        assert_eq!(order, alloc::vec::Vec::from([b, a, c]));
    }

    #[test]
    fn remove_moves_deferred_edge_to_stopped() {
        let mut arena: Arena<()> = Arena::new();
        let a = edge(&mut arena, 0);
        let mut line = SweepLine::new();
        line.set_current_y(0);
        line.insert(a, &arena);
        arena.get(a).set_deferred(Some(super::super::arena::Deferred { right: a, top: 0 }));

        line.remove(a, &arena);
        assert!(line.take_collinear_stopped(&arena, a, 0).is_some());
    }
}
