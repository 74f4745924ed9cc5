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

//! The min-heap of Intersection/Stop events.
//!
//! `Event`'s `Ord` impl is already the total order §4.3 describes
//! (point, then kind rank, then sequence number), so the heap itself
//! needs no extra wrapper the way a float-keyed one would.

use alloc::collections::BinaryHeap;
use core::cmp::Reverse;

use crate::error::{Error, Result};
use crate::event::Event;

/// Entries the queue reserves up front so the common case (a sweep
/// whose dynamic event count stays within one slab's worth of
/// crossings) never grows the heap's backing storage.
const INLINE_CAPACITY: usize = 1024;

/// A min-heap of pending [`Event`]s.
///
/// The original design uses an embedded small-array fast path with
/// doubling growth on overflow; a safe `alloc`-only crate gets the
/// same effect by reserving [`INLINE_CAPACITY`] slots eagerly so the
/// allocator is touched once per sweep instead of on every push.
#[derive(Debug)]
pub(crate) struct PriorityQueue {
    heap: BinaryHeap<Reverse<Event>>,
}

impl PriorityQueue {
    pub(crate) fn new() -> Self {
        PriorityQueue { heap: BinaryHeap::with_capacity(INLINE_CAPACITY) }
    }

    /// Push an event. Fails with [`Error::OutOfMemory`] only if growing
    /// the backing storage fails — which, on a fallible-allocation
    /// target, is the only way this can fail.
    pub(crate) fn push(&mut self, event: Event) -> Result<()> {
        if self.heap.len() == self.heap.capacity() {
            let additional = self.heap.capacity().max(INLINE_CAPACITY);
            self.heap.try_reserve(additional).map_err(|_| Error::OutOfMemory)?;
        }
        self.heap.push(Reverse(event));
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(event)| event)
    }

    pub(crate) fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(event)| event)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::point::Point;
    use crate::sweep::EdgeId;

    fn ev(y: i32, seq: u64) -> Event {
        Event::new(Point::new(0, y), EventKind::Stop, EdgeId::from_raw(0), seq)
    }

    #[test]
    fn pops_in_increasing_point_order() {
        let mut q = PriorityQueue::new();
        q.push(ev(5, 0)).unwrap();
        q.push(ev(1, 1)).unwrap();
        q.push(ev(3, 2)).unwrap();

        assert_eq!(q.pop().unwrap().point.y(), 1);
        assert_eq!(q.pop().unwrap().point.y(), 3);
        assert_eq!(q.pop().unwrap().point.y(), 5);
        assert!(q.pop().is_none());
    }

    #[test]
    fn grows_past_inline_capacity() {
        let mut q = PriorityQueue::new();
        for i in 0..(INLINE_CAPACITY as u64 + 10) {
            q.push(ev(i as i32, i)).unwrap();
        }
        assert_eq!(q.pop().unwrap().point.y(), 0);
    }
}
