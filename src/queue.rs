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

//! The merged event source every sweep dequeues from.
//!
//! Two sources are merged
//! on-the-fly: a pre-sorted, immutable array of `Start` events
//! (advanced by a cursor) and a mutable min-heap of `Intersection`/
//! `Stop` events discovered during the sweep. Whichever head compares
//! smaller is dequeued.
//!
//! The original's free-pool event allocator has no separate analogue
//! here: `Event` is `Copy` and small, so the heap's own `Vec` storage
//! already gives bulk allocation and bulk deallocation at sweep end —
//! building a bump allocator on top would just reimplement `Vec`.

use alloc::vec::Vec;

use crate::error::Result;
use crate::event::Event;
use crate::pqueue::PriorityQueue;

pub(crate) struct EventQueue {
    starts: Vec<Event>,
    cursor: usize,
    heap: PriorityQueue,
}

impl EventQueue {
    /// Build a queue from a pre-sorted array of `Start` events. Callers
    /// are responsible for sorting `starts` by [`Event::cmp`] before
    /// construction; this type never re-sorts them.
    pub(crate) fn new(starts: Vec<Event>) -> Self {
        EventQueue { starts, cursor: 0, heap: PriorityQueue::new() }
    }

    /// Schedule an `Intersection` or `Stop` event discovered mid-sweep.
    pub(crate) fn schedule(&mut self, event: Event) -> Result<()> {
        self.heap.push(event)
    }

    fn peek_start(&self) -> Option<&Event> {
        self.starts.get(self.cursor)
    }

    /// Pop whichever of the two sources has the smaller head event.
    pub(crate) fn pop(&mut self) -> Option<Event> {
        match (self.peek_start(), self.heap.peek()) {
            (None, None) => None,
            (Some(_), None) => {
                let event = self.starts[self.cursor];
                self.cursor += 1;
                Some(event)
            }
            (None, Some(_)) => self.heap.pop(),
            (Some(start), Some(heap_head)) => {
                if start <= heap_head {
                    let event = self.starts[self.cursor];
                    self.cursor += 1;
                    Some(event)
                } else {
                    self.heap.pop()
                }
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.peek_start().is_none() && self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::point::Point;
    use crate::sweep::EdgeId;

    fn start(y: i32, seq: u64) -> Event {
        Event::new(Point::new(0, y), EventKind::Start, EdgeId::from_raw(0), seq)
    }

    fn stop(y: i32, seq: u64) -> Event {
        Event::new(Point::new(0, y), EventKind::Stop, EdgeId::from_raw(0), seq)
    }

    #[test]
    fn merges_both_sources_in_order() {
        let mut q = EventQueue::new(alloc::vec![start(0, 0), start(10, 1)]);
        q.schedule(stop(5, 2)).unwrap();

        assert_eq!(q.pop().unwrap().point.y(), 0);
        assert_eq!(q.pop().unwrap().point.y(), 5);
        assert_eq!(q.pop().unwrap().point.y(), 10);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_points_prefer_stop_over_start() {
        let mut q = EventQueue::new(alloc::vec![start(0, 0)]);
        q.schedule(stop(0, 1)).unwrap();
        // Stop < Start at equal points per the event kind rank.
        assert_eq!(q.pop().unwrap().kind, EventKind::Stop);
        assert_eq!(q.pop().unwrap().kind, EventKind::Start);
    }
}
