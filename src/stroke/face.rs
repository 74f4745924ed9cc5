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

//! One straight segment's offset geometry, in user space.

use crate::point::{Point, Vector};

/// A straight segment between two path points, plus the unit tangent
/// and half-width-scaled normal the stroker offsets it by.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Segment {
    pub(crate) start: Point<f64>,
    pub(crate) end: Point<f64>,
    pub(crate) tangent: Vector<f64>,
    /// The normal, rotated from `tangent` by 90 degrees and scaled to
    /// `half_width`. `start + normal` and `end + normal` are the "cw"
    /// face points; subtracting gives "ccw".
    pub(crate) normal: Vector<f64>,
}

impl Segment {
    /// Build the segment from `start` to `end`, or `None` if the two
    /// points coincide (no tangent is defined).
    pub(crate) fn new(start: Point<f64>, end: Point<f64>, half_width: f64, mirrored: bool) -> Option<Self> {
        let tangent = (end - start).normalize()?;
        let rotated = if mirrored { tangent.turn_left() } else { tangent.turn_right() };
        Some(Segment { start, end, tangent, normal: rotated * half_width })
    }

    pub(crate) fn cw_start(&self) -> Point<f64> {
        self.start + self.normal
    }

    pub(crate) fn cw_end(&self) -> Point<f64> {
        self.end + self.normal
    }

    pub(crate) fn ccw_start(&self) -> Point<f64> {
        self.start - self.normal
    }

    pub(crate) fn ccw_end(&self) -> Point<f64> {
        self.end - self.normal
    }
}

/// The intersection of the line through `p` in direction `d` and the
/// line through `q` in direction `e`, or `None` if they're parallel.
pub(crate) fn line_intersect(p: Point<f64>, d: Vector<f64>, q: Point<f64>, e: Vector<f64>) -> Option<Point<f64>> {
    let denom = d.cross(e);
    if denom.abs() < 1e-9 {
        return None;
    }
    let diff = q - p;
    let t = diff.cross(e) / denom;
    Some(p + d * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_perpendicular_to_tangent() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0, false).unwrap();
        assert!((seg.cw_start().y() - seg.ccw_start().y()).abs() > 1.0);
        assert!((seg.cw_start().x() - seg.start.x()).abs() < 1e-9);
    }

    #[test]
    fn coincident_points_have_no_segment() {
        assert!(Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0), 1.0, false).is_none());
    }

    #[test]
    fn line_intersect_finds_square_corner() {
        let p = line_intersect(
            Point::new(0.0, 1.0),
            Vector::new(1.0, 0.0),
            Point::new(1.0, 0.0),
            Vector::new(0.0, 1.0),
        )
        .unwrap();
        assert!((p.x() - 1.0).abs() < 1e-9);
        assert!((p.y() - 1.0).abs() < 1e-9);
    }
}
