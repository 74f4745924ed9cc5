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

//! Paths as a flat sequence of move/line/close events.
//!
//! Curves are out of scope here: callers are expected to have already
//! flattened any curved segments into polylines before handing a path
//! to [`crate::stroke_to_polygon`].

use alloc::vec::Vec;

use crate::point::Point;

/// One command in a flattened path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEvent {
    /// Start a new sub-path at this point.
    Move(Point<i32>),
    /// Draw a straight line to this point from the current point.
    Line(Point<i32>),
    /// Close the current sub-path back to its starting point.
    Close,
}

/// One sub-path extracted from a [`PathEvent`] stream: its points in
/// order, and whether it was terminated by `Close`.
pub(crate) struct SubPath {
    pub(crate) points: Vec<Point<i32>>,
    pub(crate) closed: bool,
}

/// Split a flattened path into its sub-paths.
///
/// Consecutive duplicate points are collapsed, since they describe a
/// zero-length segment the stroker has nothing to draw for. A `Move`
/// with no following `Line` (or a `Move` immediately followed by
/// `Close`) yields a one-point sub-path, which the stroker treats as
/// a degenerate dot.
pub(crate) fn sub_paths(path: &[PathEvent]) -> Vec<SubPath> {
    let mut out = Vec::new();
    let mut current: Vec<Point<i32>> = Vec::new();

    for event in path {
        match *event {
            PathEvent::Move(p) => {
                if !current.is_empty() {
                    out.push(SubPath { points: core::mem::take(&mut current), closed: false });
                }
                current.push(p);
            }
            PathEvent::Line(p) => {
                if current.last() != Some(&p) {
                    current.push(p);
                }
            }
            PathEvent::Close => {
                if !current.is_empty() {
                    out.push(SubPath { points: core::mem::take(&mut current), closed: true });
                }
            }
        }
    }
    if !current.is_empty() {
        out.push(SubPath { points: current, closed: false });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn splits_on_move_and_close() {
        let path = vec![
            PathEvent::Move(Point::new(0, 0)),
            PathEvent::Line(Point::new(10, 0)),
            PathEvent::Line(Point::new(10, 10)),
            PathEvent::Close,
            PathEvent::Move(Point::new(20, 20)),
            PathEvent::Line(Point::new(30, 20)),
        ];
        let subs = sub_paths(&path);
        assert_eq!(subs.len(), 2);
        assert!(subs[0].closed);
        assert_eq!(subs[0].points, vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)]);
        assert!(!subs[1].closed);
        assert_eq!(subs[1].points, vec![Point::new(20, 20), Point::new(30, 20)]);
    }

    #[test]
    fn collapses_duplicate_points() {
        let path = vec![
            PathEvent::Move(Point::new(0, 0)),
            PathEvent::Line(Point::new(0, 0)),
            PathEvent::Line(Point::new(5, 0)),
        ];
        let subs = sub_paths(&path);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].points, vec![Point::new(0, 0), Point::new(5, 0)]);
    }

    #[test]
    fn single_point_subpath_survives() {
        let path = vec![PathEvent::Move(Point::new(5, 5)), PathEvent::Close];
        let subs = sub_paths(&path);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].points, vec![Point::new(5, 5)]);
        assert!(subs[0].closed);
    }
}
