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

use core::iter::FusedIterator;

use super::arena::{Arena, EdgeId};

/// A doubly-linked list of [`EdgeId`]s, threaded through the arena's
/// own `prev`/`next` cells rather than owning any storage itself.
#[derive(Debug, Default)]
pub(crate) struct LinkedList {
    head: Option<EdgeId>,
}

impl LinkedList {
    pub(crate) fn iter<'a, Extra: Copy>(&self, arena: &'a Arena<Extra>) -> Iter<'a, Extra> {
        Iter { current: self.head, arena }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert `id` using `hint` as a starting point: walk forward while
    /// `before(id, candidate)` is false, otherwise walk backward. If
    /// `hint` is `None`, fall back to a linear scan from the head.
    ///
    /// Equal-to-hint insertion places the new edge immediately after
    /// the hint.
    pub(crate) fn insert<Extra: Copy>(
        &mut self,
        id: EdgeId,
        hint: Option<EdgeId>,
        arena: &Arena<Extra>,
        mut before: impl FnMut(EdgeId, EdgeId) -> bool,
    ) {
        let start = hint.or(self.head);
        let target = match start {
            None => None,
            Some(mut cursor) => {
                if before(id, cursor) {
                    // Walk backward while the predecessor should also come after `id`.
                    while let Some(prev) = arena.get(cursor).prev() {
                        if before(id, prev) {
                            cursor = prev;
                        } else {
                            break;
                        }
                    }
                    Some(cursor)
                } else {
                    // Walk forward while the next edge should still come before `id`.
                    loop {
                        match arena.get(cursor).next() {
                            Some(next) if !before(id, next) => cursor = next,
                            Some(next) => break Some(next),
                            None => break None,
                        }
                    }
                }
            }
        };

        self.insert_before(id, target, arena);
    }

    fn insert_before<Extra: Copy>(&mut self, id: EdgeId, target: Option<EdgeId>, arena: &Arena<Extra>) {
        match target {
            None => {
                // Insert at the tail.
                match self.tail(arena) {
                    Some(tail) => {
                        arena.get(tail).set_next(Some(id));
                        arena.get(id).set_prev(Some(tail));
                        arena.get(id).set_next(None);
                    }
                    None => {
                        self.head = Some(id);
                        arena.get(id).set_prev(None);
                        arena.get(id).set_next(None);
                    }
                }
            }
            Some(target) => {
                let prev = arena.get(target).prev();
                arena.get(id).set_prev(prev);
                arena.get(id).set_next(Some(target));
                arena.get(target).set_prev(Some(id));
                match prev {
                    Some(prev) => arena.get(prev).set_next(Some(id)),
                    None => self.head = Some(id),
                }
            }
        }
    }

    pub(crate) fn remove<Extra: Copy>(&mut self, id: EdgeId, arena: &Arena<Extra>) {
        let prev = arena.get(id).prev();
        let next = arena.get(id).next();

        match prev {
            Some(prev) => arena.get(prev).set_next(next),
            None => self.head = next,
        }
        if let Some(next) = next {
            arena.get(next).set_prev(prev);
        }
        arena.get(id).set_prev(None);
        arena.get(id).set_next(None);
    }

    /// Swap `id` with its current successor. Panics (recoverable via
    /// `tracing::error!` and a no-op) if `id` has no successor — the
    /// engine only ever calls this for edges it has already confirmed
    /// are adjacent.
    pub(crate) fn swap_with_next<Extra: Copy>(&mut self, id: EdgeId, arena: &Arena<Extra>) {
        let next = match arena.get(id).next() {
            Some(next) => next,
            None => {
                tracing::error!("swap_with_next called on an edge with no successor");
                return;
            }
        };
        let prev = arena.get(id).prev();
        let next_next = arena.get(next).next();

        match prev {
            Some(prev) => arena.get(prev).set_next(Some(next)),
            None => self.head = Some(next),
        }
        if let Some(next_next) = next_next {
            arena.get(next_next).set_prev(Some(id));
        }

        arena.get(id).set_next(next_next);
        arena.get(id).set_prev(Some(next));
        arena.get(next).set_prev(prev);
        arena.get(next).set_next(Some(id));
    }

    /// Append `id` at the tail, unconditionally. Used for the
    /// `stopped` list, which has no sort order of its own.
    pub(crate) fn push_back<Extra: Copy>(&mut self, id: EdgeId, arena: &Arena<Extra>) {
        self.insert_before(id, None, arena);
    }

    /// Remove and return the head, if any. Used to drain the
    /// `stopped` list at the end of a slab.
    pub(crate) fn pop_front<Extra: Copy>(&mut self, arena: &Arena<Extra>) -> Option<EdgeId> {
        let head = self.head?;
        self.remove(head, arena);
        Some(head)
    }

    fn tail<Extra: Copy>(&self, arena: &Arena<Extra>) -> Option<EdgeId> {
        let mut current = self.head?;
        while let Some(next) = arena.get(current).next() {
            current = next;
        }
        Some(current)
    }
}

pub(crate) struct Iter<'a, Extra> {
    current: Option<EdgeId>,
    arena: &'a Arena<Extra>,
}

impl<'a, Extra: Copy> Iterator for Iter<'a, Extra> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let current = self.current?;
        self.current = self.arena.get(current).next();
        Some(current)
    }
}

impl<'a, Extra: Copy> FusedIterator for Iter<'a, Extra> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Edge;
    use crate::point::Point;

    fn edges(arena: &mut Arena<()>) -> [EdgeId; 3] {
        [
            arena.push(Edge::from_segment(Point::new(0, 0), Point::new(0, 10), 1).unwrap(), ()),
            arena.push(Edge::from_segment(Point::new(1, 0), Point::new(1, 10), 1).unwrap(), ()),
            arena.push(Edge::from_segment(Point::new(2, 0), Point::new(2, 10), 1).unwrap(), ()),
        ]
    }

    #[test]
    fn insert_in_sorted_order() {
        let mut arena: Arena<()> = Arena::new();
        let [a, b, c] = edges(&mut arena);
        let mut list = LinkedList::default();

        // Insert out of order; `before` sorts by x at y=0.
        let before = |lhs: EdgeId, rhs: EdgeId| {
            arena.get(lhs).edge().x_at_y(0) < arena.get(rhs).edge().x_at_y(0)
        };

        list.insert(b, None, &arena, before);
        list.insert(a, None, &arena, before);
        list.insert(c, None, &arena, before);

        let order: alloc::vec::Vec<_> = list.iter(&arena).collect();
        assert_eq!(order, alloc::vec::Vec::from([a, b, c]));
    }

    #[test]
    fn remove_and_swap() {
        let mut arena: Arena<()> = Arena::new();
        let [a, b, c] = edges(&mut arena);
        let mut list = LinkedList::default();
        let before = |lhs: EdgeId, rhs: EdgeId| {
            arena.get(lhs).edge().x_at_y(0) < arena.get(rhs).edge().x_at_y(0)
        };
        list.insert(a, None, &arena, before);
        list.insert(b, None, &arena, before);
        list.insert(c, None, &arena, before);

        list.swap_with_next(a, &arena);
        let order: alloc::vec::Vec<_> = list.iter(&arena).collect();
        assert_eq!(order, alloc::vec::Vec::from([b, a, c]));

        list.remove(a, &arena);
        let order: alloc::vec::Vec<_> = list.iter(&arena).collect();
        assert_eq!(order, alloc::vec::Vec::from([b, c]));
    }
}
