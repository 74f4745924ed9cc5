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

//! The three event kinds the sweep dequeues, and their total order.

use core::cmp::Ordering;

use crate::point::{point_order, Point};
use crate::sweep::EdgeId;

/// What kind of event this is.
///
/// Queue events (`Intersection`, `Stop`) carry up to two edge
/// references; `Start` carries only the edge it begins (the full edge
/// record lives in the sweep's edge arena, keyed by [`EdgeId`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum EventKind {
    /// The beginning of an edge.
    Start,
    /// An intersection between two currently-adjacent active edges.
    Intersection { other: EdgeId },
    /// The end of an edge.
    Stop,
}

impl EventKind {
    /// Rank used for the tie-break in [`Event::cmp`]: `Stop < Intersection < Start`.
    fn rank(&self) -> u8 {
        match self {
            EventKind::Stop => 0,
            EventKind::Intersection { .. } => 1,
            EventKind::Start => 2,
        }
    }
}

/// A single sweep event: a point, the edge it concerns, and a kind.
///
/// Ties are broken by a monotonically increasing sequence number
/// stamped at creation rather than by
/// pointer identity, so that the sweep's output never depends on
/// allocator layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Event {
    pub(crate) point: Point<i32>,
    pub(crate) kind: EventKind,
    pub(crate) edge: EdgeId,
    pub(crate) seq: u64,
}

impl Event {
    pub(crate) fn new(point: Point<i32>, kind: EventKind, edge: EdgeId, seq: u64) -> Self {
        Event { point, kind, edge, seq }
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        point_order(self.point, other.point)
            .then_with(|| self.kind.rank().cmp(&other.kind.rank()))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(y: i32, x: i32, kind: EventKind, seq: u64) -> Event {
        Event::new(Point::new(x, y), kind, EdgeId::from_raw(0), seq)
    }

    #[test]
    fn orders_by_point_first() {
        let a = ev(0, 0, EventKind::Start, 0);
        let b = ev(1, 0, EventKind::Stop, 0);
        assert!(a < b);
    }

    #[test]
    fn ties_broken_by_kind_rank() {
        let stop = ev(0, 0, EventKind::Stop, 5);
        let inter = ev(0, 0, EventKind::Intersection { other: EdgeId::from_raw(1) }, 3);
        let start = ev(0, 0, EventKind::Start, 1);
        assert!(stop < inter);
        assert!(inter < start);
    }

    #[test]
    fn final_tie_broken_by_sequence_not_identity() {
        let a = ev(0, 0, EventKind::Start, 1);
        let b = ev(0, 0, EventKind::Start, 2);
        assert!(a < b);
    }
}
