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

//! Splitting a polyline into the on/off runs a dash pattern describes.

use alloc::vec::Vec;

/// A dash pattern's repeating on/off lengths, where to start in it,
/// and how far into it the path's own arc length has already begun.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashPattern {
    /// Alternating on/off run lengths, starting with an "on" run.
    pub pattern: Vec<f64>,
    /// Whether the path's very first point starts inside an "on" run.
    pub start_on: bool,
    /// Arc-length offset into the pattern to start at.
    pub offset: f64,
}

/// Tracks position within a repeating dash pattern: which entry, how
/// much of it remains, and whether that entry is an "on" or "off" run.
struct State<'a> {
    pattern: &'a [f64],
    index: usize,
    remaining: f64,
    on: bool,
}

impl<'a> State<'a> {
    fn new(dashes: &'a DashPattern) -> Option<Self> {
        if dashes.pattern.is_empty() || dashes.pattern.iter().all(|&l| l <= 0.0) {
            return None;
        }
        let mut state = State { pattern: &dashes.pattern, index: 0, remaining: dashes.pattern[0].max(1e-9), on: dashes.start_on };
        if dashes.offset > 0.0 {
            state.advance(dashes.offset);
        }
        Some(state)
    }

    fn advance_one(&mut self) {
        self.index = (self.index + 1) % self.pattern.len();
        self.remaining = self.pattern[self.index].max(1e-9);
        self.on = !self.on;
    }

    /// Consume `length` of path, returning the `(run_length, on)` runs
    /// it was split into.
    fn advance(&mut self, mut length: f64) -> Vec<(f64, bool)> {
        let mut out = Vec::new();
        while length > 1e-12 {
            let take = self.remaining.min(length);
            out.push((take, self.on));
            self.remaining -= take;
            length -= take;
            if self.remaining <= 1e-9 {
                self.advance_one();
            }
        }
        out
    }
}

/// Split `points` (a polyline, closed if `closed`) into the polylines
/// covered by "on" runs of `dashes`. Each returned run is its own
/// open sub-path, capped independently by the caller.
///
/// Returns `None` if `dashes` describes no dashing at all (an empty
/// or all-zero pattern), in which case the caller should stroke
/// `points` whole.
pub(crate) fn split(
    points: &[crate::point::Point<f64>],
    closed: bool,
    dashes: &DashPattern,
) -> Option<Vec<Vec<crate::point::Point<f64>>>> {
    let mut state = State::new(dashes)?;
    let mut segments: Vec<Vec<crate::point::Point<f64>>> = Vec::new();
    let mut current: Vec<crate::point::Point<f64>> = Vec::new();

    let mut walk = points.to_vec();
    if closed {
        if let Some(&first) = points.first() {
            walk.push(first);
        }
    }

    for pair in walk.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg_vec = b - a;
        let seg_len = seg_vec.length();
        if seg_len <= 1e-12 {
            continue;
        }
        let dir = seg_vec / seg_len;
        let mut consumed = 0.0;
        for (run_len, on) in state.advance(seg_len) {
            let start = a + dir * consumed;
            let end = a + dir * (consumed + run_len);
            consumed += run_len;
            if on {
                if current.is_empty() {
                    current.push(start);
                }
                current.push(end);
            } else if !current.is_empty() {
                segments.push(core::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    Some(segments)
}
