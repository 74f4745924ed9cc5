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

//! The Bentley-Ottmann loop shared by the tessellator, the reducer and
//! the polygon intersector.
//!
//! The three consumers differ only in what "inside" means and what
//! happens when a `(left, right)` active pair is finalized; this
//! module owns the loop, the slab walk, and the deferred-trapezoid
//! bookkeeping, and takes those two differences as closures rather
//! than forcing the three call sites through a shared trait object.

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::compare::slope_compare;
use crate::error::Result;
use crate::event::{Event, EventKind};
use crate::intersect;
use crate::line::Edge;
use crate::queue::EventQueue;
use crate::sweep::{Arena, Deferred, EdgeId, SweepLine};

/// Run one sweep over `edges`, calling `emit` once per finalized
/// `(left, right)` active pair with the slab's `[top, bottom)` range.
///
/// - `zero`/`accumulate`/`inside` define the winding model: `Extra` is
///   whatever per-edge tag the caller needs during accumulation (`()`
///   for the tessellator/reducer, a source tag for the intersector).
/// - `suppress_intersection` vetoes scheduling an intersection test
///   between a specific pair of edges (the reducer uses it to drop
///   identical-edge pairs that would otherwise self-intersect
///   spuriously).
pub(crate) fn run_sweep<Extra, W>(
    edges: Vec<(Edge, Extra)>,
    zero: W,
    accumulate: impl Fn(W, Edge, Extra) -> W,
    inside: impl Fn(W) -> bool,
    mut suppress_intersection: impl FnMut(Edge, Edge) -> bool,
    mut emit: impl FnMut(Edge, Edge, i32, i32),
) -> Result<()>
where
    Extra: Copy,
    W: Copy,
{
    let mut arena: Arena<Extra> = Arena::with_capacity(edges.len());
    let mut starts = Vec::with_capacity(edges.len());
    for (edge, extra) in edges {
        let id = arena.push(edge, extra);
        let seq = arena.next_sequence();
        starts.push(Event::new(edge.top_point(), EventKind::Start, id, seq));
    }
    starts.sort_unstable();

    let mut queue = EventQueue::new(starts);
    let mut sweep = SweepLine::new();
    let mut started = false;

    while let Some(event) = queue.pop() {
        if started && event.point.y() > sweep.current_y() {
            flush_stopped(&mut sweep, &arena, &mut emit);
            extract_slab(&sweep, &arena, sweep.current_y(), event.point.y(), zero, &accumulate, &inside, &mut emit);
        }
        sweep.set_current_y(event.point.y());
        started = true;

        match event.kind {
            EventKind::Start => {
                let id = event.edge;
                let top = arena.get(id).edge().top();
                if let Some(adopted) = sweep.take_collinear_stopped(&arena, id, top) {
                    arena.get(id).set_deferred(arena.get(adopted).take_deferred());
                }

                sweep.insert(id, &arena);

                let edge = arena.get(id).edge();
                let stop_seq = arena.next_sequence();
                queue.schedule(Event::new(edge.bottom_point(), EventKind::Stop, id, stop_seq))?;

                if let Some(prev) = sweep.prev(&arena, id) {
                    schedule_intersection(&mut queue, &arena, prev, id, sweep.current_y(), &mut suppress_intersection)?;
                }
                if let Some(next) = sweep.next(&arena, id) {
                    schedule_intersection(&mut queue, &arena, id, next, sweep.current_y(), &mut suppress_intersection)?;
                }
            }
            EventKind::Stop => {
                let id = event.edge;
                let prev = sweep.prev(&arena, id);
                let next = sweep.next(&arena, id);
                sweep.remove(id, &arena);
                if let (Some(p), Some(n)) = (prev, next) {
                    schedule_intersection(&mut queue, &arena, p, n, sweep.current_y(), &mut suppress_intersection)?;
                }
            }
            EventKind::Intersection { other } => {
                let id = event.edge;
                if arena.get(id).next() != Some(other) {
                    tracing::trace!("dropping stale intersection event, edges no longer adjacent");
                } else {
                    let outer_left = sweep.prev(&arena, id);
                    let outer_right = sweep.next(&arena, other);
                    sweep.swap_with_next(id, &arena);

                    if let Some(p) = outer_left {
                        schedule_intersection(&mut queue, &arena, p, other, sweep.current_y(), &mut suppress_intersection)?;
                    }
                    if let Some(n) = outer_right {
                        schedule_intersection(&mut queue, &arena, id, n, sweep.current_y(), &mut suppress_intersection)?;
                    }
                }
            }
        }
    }

    flush_stopped(&mut sweep, &arena, &mut emit);
    Ok(())
}

fn flush_stopped<Extra: Copy>(
    sweep: &mut SweepLine,
    arena: &Arena<Extra>,
    emit: &mut impl FnMut(Edge, Edge, i32, i32),
) {
    for id in sweep.drain_stopped(arena) {
        if let Some(deferred) = arena.get(id).take_deferred() {
            let left = arena.get(id).edge();
            let right = arena.get(deferred.right).edge();
            emit(left, right, deferred.top, left.bottom());
        }
    }
}

fn extract_slab<Extra: Copy, W: Copy>(
    sweep: &SweepLine,
    arena: &Arena<Extra>,
    top: i32,
    bottom: i32,
    zero: W,
    accumulate: &impl Fn(W, Edge, Extra) -> W,
    inside: &impl Fn(W) -> bool,
    emit: &mut impl FnMut(Edge, Edge, i32, i32),
) {
    let ids: Vec<EdgeId> = sweep.iter(arena).collect();
    let mut w = zero;
    let mut left: Option<EdgeId> = None;
    let mut i = 0;

    while i < ids.len() {
        let mut j = i + 1;
        while j < ids.len() && arena.get(ids[j - 1]).collinear_with(ids[j], arena.get(ids[j])) {
            j += 1;
        }

        let was_inside = inside(w);
        for &id in &ids[i..j] {
            let edge = arena.get(id).edge();
            w = accumulate(w, edge, arena.get(id).extra);
        }
        let is_inside = inside(w);

        if !was_inside && is_inside {
            left = Some(ids[i]);
        } else if was_inside && !is_inside {
            if let Some(l) = left.take() {
                handle_pair(arena, l, ids[j - 1], top, bottom, emit);
            }
        }

        i = j;
    }
}

fn handle_pair<Extra: Copy>(
    arena: &Arena<Extra>,
    left_id: EdgeId,
    right_id: EdgeId,
    top: i32,
    _bottom: i32,
    emit: &mut impl FnMut(Edge, Edge, i32, i32),
) {
    let left = arena.get(left_id);
    match left.deferred() {
        None => left.set_deferred(Some(Deferred { right: right_id, top })),
        Some(d) if d.right == right_id => {
            // Same pair as the previous slab; the deferred trapezoid's
            // bottom extends implicitly, nothing to do.
        }
        Some(d) => {
            let old_right = arena.get(d.right);
            if old_right.collinear_with(right_id, arena.get(right_id)) {
                left.set_deferred(Some(Deferred { right: right_id, top: d.top }));
            } else {
                emit(left.edge(), old_right.edge(), d.top, top);
                left.set_deferred(Some(Deferred { right: right_id, top }));
            }
        }
    }
}

fn schedule_intersection<Extra: Copy>(
    queue: &mut EventQueue,
    arena: &Arena<Extra>,
    left: EdgeId,
    right: EdgeId,
    current_y: i32,
    suppress: &mut impl FnMut(Edge, Edge) -> bool,
) -> Result<()> {
    let (le, re) = (arena.get(left).edge(), arena.get(right).edge());

    if suppress(le, re) {
        return Ok(());
    }
    if le.line().is_horizontal() || re.line().is_horizontal() {
        return Ok(());
    }
    // Only worth testing if `left` is steeper than `right`: otherwise
    // any crossing of their supporting lines lies above `current_y`
    // and has already been swept past.
    if slope_compare(le.line(), re.line()) != Ordering::Greater {
        return Ok(());
    }
    if !x_ranges_overlap(le, re) {
        return Ok(());
    }

    let top = le.top().max(re.top());
    let bottom = le.bottom().min(re.bottom());
    if top >= bottom {
        return Ok(());
    }

    if let Some(hit) = intersect::intersect(le.line(), le.top(), le.bottom(), re.line(), re.top(), re.bottom()) {
        if hit.point.y() > current_y {
            let seq = arena.next_sequence();
            queue.schedule(Event::new(hit.point, EventKind::Intersection { other: right }, left, seq))?;
        }
    }

    Ok(())
}

fn x_ranges_overlap(a: Edge, b: Edge) -> bool {
    let (a_lo, a_hi) = minmax(a.top_point().x(), a.bottom_point().x());
    let (b_lo, b_hi) = minmax(b.top_point().x(), b.bottom_point().x());
    a_lo <= b_hi && b_lo <= a_hi
}

fn minmax(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
