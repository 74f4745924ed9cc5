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

//! Expanding a path and a line style into the polygon that fills it.
//!
//! All of the trigonometry here — tangents, offsets, joins, caps —
//! happens in user space, on `f64`. Points only cross onto the
//! fixed-point device plane at the very end, through the current
//! transform matrix and [`crate::point::Point::from_f64`]. This keeps
//! stroke geometry correct under skew and non-uniform scale, at the
//! cost of the sweep core's exactness guarantees: unlike
//! [`crate::tessellate_polygon`], stroking rounds.

mod cap;
mod dash;
mod face;
mod join;
mod pen;

pub use dash::DashPattern;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::Result;
use crate::path::{sub_paths, PathEvent};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::line::Edge;
use crate::transform::Affine;

use face::Segment;

/// How a sub-path's two open ends are terminated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineCap {
    /// Stop flush with the final point.
    Butt,
    /// A half-disk centered on the final point.
    Round,
    /// Extend past the final point by half the line width.
    Square,
}

/// How two segments meeting at a vertex are joined on the outer side
/// of the turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineJoin {
    /// A sharp corner, degrading to [`LineJoin::Bevel`] past the miter limit.
    Miter,
    /// A circular arc around the vertex.
    Round,
    /// A single flat chamfer across the corner.
    Bevel,
}

/// How a path is expanded into a filled outline.
#[derive(Debug, Clone)]
pub struct Style {
    /// The full width of the stroke, in user-space units.
    pub line_width: f64,
    /// The cap applied to each open sub-path's two ends.
    pub line_cap: LineCap,
    /// The join applied at each interior vertex.
    pub line_join: LineJoin,
    /// The miter length limit, as a multiple of the line width, past
    /// which [`LineJoin::Miter`] degrades to a bevel.
    pub miter_limit: f64,
    /// An optional dash pattern; `None` strokes the path whole.
    pub dash_pattern: Option<DashPattern>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 4.0,
            dash_pattern: None,
        }
    }
}

/// Expand `path` under `style` into the polygon that fills its stroked
/// outline.
///
/// `ctm` maps the user space `path` and `style.line_width` are given
/// in onto the fixed-point device plane the returned polygon lives on;
/// `ctm_inverse` is its inverse, used to size arc subdivision in user
/// space for a `tolerance` given in device units. Run the result
/// through [`crate::reduce_polygon`] or [`crate::tessellate_polygon`]
/// (nonzero fill rule) to get a clean boundary or trapezoids.
pub fn stroke_to_polygon(
    path: &[PathEvent],
    style: &Style,
    ctm: &Affine<f64>,
    ctm_inverse: &Affine<f64>,
    tolerance: f64,
) -> Result<Polygon> {
    let half_width = (style.line_width * 0.5).max(0.0);
    let ctm_scale = ctm.approx_scale().max(1e-12);
    let tolerance = tolerance.max(1e-9);
    let tolerance_user = tolerance * ctm_inverse.approx_scale();
    let mirrored = ctm.determinant() < 0.0;

    let mut polygon = Polygon::new();

    for sub in sub_paths(path) {
        if sub.points.len() < 2 {
            stroke_dot(&mut polygon, sub.points.first().copied(), sub.closed, style, ctm, half_width, tolerance_user);
            continue;
        }

        let points_f64: Vec<Point<f64>> = sub.points.iter().map(|p| p.to_f64()).collect();

        if let Some(dashes) = &style.dash_pattern {
            if let Some(runs) = dash::split(&points_f64, sub.closed, dashes) {
                for run in runs {
                    if run.len() < 2 {
                        stroke_dot(&mut polygon, run.first().map(|p| Point::from_f64(*p)), true, style, ctm, half_width, tolerance_user);
                        continue;
                    }
                    stroke_open(&mut polygon, &run, style, ctm, ctm_scale, half_width, tolerance, tolerance_user, mirrored);
                }
                continue;
            }
        }

        if sub.closed {
            stroke_closed(&mut polygon, &points_f64, style, ctm, ctm_scale, half_width, tolerance, tolerance_user, mirrored);
        } else {
            stroke_open(&mut polygon, &points_f64, style, ctm, ctm_scale, half_width, tolerance, tolerance_user, mirrored);
        }
    }

    Ok(polygon)
}

/// A degenerate zero-length sub-path: a dot under a round cap, nothing
/// otherwise.
fn stroke_dot(
    polygon: &mut Polygon,
    point: Option<Point<i32>>,
    closed: bool,
    style: &Style,
    ctm: &Affine<f64>,
    half_width: f64,
    tolerance_user: f64,
) {
    let point = match point {
        Some(p) => p,
        None => return,
    };
    if !closed || style.line_cap != LineCap::Round || half_width <= 0.0 {
        return;
    }
    let center = point.to_f64();
    let max_step = pen::max_step_for_tolerance(half_width, tolerance_user);
    let ring = pen::full_circle(center, half_width, max_step);
    push_ring(polygon, &to_device(&ring, ctm));
}

fn segments(points: &[Point<f64>], half_width: f64, mirrored: bool) -> Vec<Segment> {
    points
        .windows(2)
        .filter_map(|pair| Segment::new(pair[0], pair[1], half_width, mirrored))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn build_rings(
    segs: &[Segment],
    closed: bool,
    style: &Style,
    ctm_scale: f64,
    tolerance: f64,
    tolerance_user: f64,
    half_width: f64,
) -> (Vec<Point<f64>>, Vec<Point<f64>>) {
    let n = segs.len();
    let mut cw_ring = Vec::new();
    let mut ccw_ring = Vec::new();

    if !closed {
        cw_ring.push(segs[0].cw_start());
        ccw_ring.push(segs[0].ccw_start());
    }

    let vertex_count = if closed { n } else { n - 1 };
    for i in 0..vertex_count {
        let seg = &segs[i];
        let next = &segs[(i + 1) % n];
        cw_ring.push(seg.cw_end());
        ccw_ring.push(seg.ccw_end());

        let vertex = seg.end;
        match join::outer_side(seg.tangent, next.tangent) {
            Some(join::Side::Cw) => {
                let pts = join::points(
                    style.line_join,
                    style.miter_limit,
                    vertex,
                    seg.cw_end(),
                    next.cw_start(),
                    seg.tangent,
                    next.tangent,
                    half_width,
                    ctm_scale,
                    tolerance,
                    tolerance_user,
                );
                cw_ring.extend(pts);
            }
            Some(join::Side::Ccw) => {
                let pts = join::points(
                    style.line_join,
                    style.miter_limit,
                    vertex,
                    seg.ccw_end(),
                    next.ccw_start(),
                    seg.tangent,
                    next.tangent,
                    half_width,
                    ctm_scale,
                    tolerance,
                    tolerance_user,
                );
                ccw_ring.extend(pts);
            }
            None => {}
        }

        cw_ring.push(next.cw_start());
        ccw_ring.push(next.ccw_start());
    }

    if !closed {
        cw_ring.push(segs[n - 1].cw_end());
        ccw_ring.push(segs[n - 1].ccw_end());
    }

    (cw_ring, ccw_ring)
}

#[allow(clippy::too_many_arguments)]
fn stroke_closed(
    polygon: &mut Polygon,
    points: &[Point<f64>],
    style: &Style,
    ctm: &Affine<f64>,
    ctm_scale: f64,
    half_width: f64,
    tolerance: f64,
    tolerance_user: f64,
    mirrored: bool,
) {
    if half_width <= 0.0 {
        return;
    }
    let mut closed_points = points.to_vec();
    closed_points.push(points[0]);
    let segs = segments(&closed_points, half_width, mirrored);
    if segs.is_empty() {
        stroke_dot(polygon, Some(Point::from_f64(points[0])), true, style, ctm, half_width, tolerance_user);
        return;
    }

    let (cw_ring, mut ccw_ring) = build_rings(&segs, true, style, ctm_scale, tolerance, tolerance_user, half_width);
    ccw_ring.reverse();

    push_ring(polygon, &to_device(&cw_ring, ctm));
    push_ring(polygon, &to_device(&ccw_ring, ctm));
}

#[allow(clippy::too_many_arguments)]
fn stroke_open(
    polygon: &mut Polygon,
    points: &[Point<f64>],
    style: &Style,
    ctm: &Affine<f64>,
    ctm_scale: f64,
    half_width: f64,
    tolerance: f64,
    tolerance_user: f64,
    mirrored: bool,
) {
    if half_width <= 0.0 {
        return;
    }
    let segs = segments(points, half_width, mirrored);
    if segs.is_empty() {
        stroke_dot(polygon, Some(Point::from_f64(points[0])), true, style, ctm, half_width, tolerance_user);
        return;
    }

    let (mut cw_ring, mut ccw_ring) = build_rings(&segs, false, style, ctm_scale, tolerance, tolerance_user, half_width);

    let first = segs.first().unwrap();
    let last = segs.last().unwrap();

    let end_cap = cap::points(
        style.line_cap,
        last.end,
        last.cw_end(),
        last.ccw_end(),
        last.tangent * half_width,
        half_width,
        tolerance_user,
    );
    let start_cap = cap::points(
        style.line_cap,
        first.start,
        first.ccw_start(),
        first.cw_start(),
        first.tangent * -half_width,
        half_width,
        tolerance_user,
    );

    ccw_ring.reverse();

    let mut combined = Vec::with_capacity(cw_ring.len() + ccw_ring.len() + end_cap.len() + start_cap.len());
    combined.append(&mut cw_ring);
    combined.extend(end_cap);
    combined.extend(ccw_ring);
    combined.extend(start_cap);

    push_ring(polygon, &to_device(&combined, ctm));
}

fn to_device(points: &[Point<f64>], ctm: &Affine<f64>) -> Vec<Point<i32>> {
    points.iter().map(|&p| Point::from_f64(ctm.transform_point(p))).collect()
}

/// Push every edge of a closed ring of device-space points, assigning
/// each edge's winding contribution from the direction it was drawn
/// in: descending contributes `+1`, ascending `-1`. For any simple
/// boundary traversed consistently, this makes crossing in and
/// crossing out cancel under the nonzero fill rule regardless of the
/// ring's overall handedness.
fn push_ring(polygon: &mut Polygon, points: &[Point<i32>]) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        if a == b {
            continue;
        }
        let dir: i8 = if b.y() >= a.y() { 1 } else { -1 };
        if let Some(edge) = Edge::from_segment(a, b, dir) {
            polygon.push_edge(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Angle;
    use crate::transform::Affine as Aff;

    fn identity() -> (Aff<f64>, Aff<f64>) {
        let id = Aff::default();
        (id, id)
    }

    #[test]
    fn closed_square_has_two_disjoint_rings() {
        let path = [
            PathEvent::Move(Point::new(0, 0)),
            PathEvent::Line(Point::new(10, 0)),
            PathEvent::Line(Point::new(10, 10)),
            PathEvent::Line(Point::new(0, 10)),
            PathEvent::Close,
        ];
        let style = Style {
            line_width: 2.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 4.0,
            dash_pattern: None,
        };
        let (ctm, ctm_inv) = identity();
        let poly = stroke_to_polygon(&path, &style, &ctm, &ctm_inv, 0.25).unwrap();
        // Outer and inner rings each contribute at least one edge per
        // side, with extra edges at whichever corners carry a miter
        // join on that ring's outer side.
        assert!(poly.edges().len() >= 8);
        let bbox = poly.bounding_box().unwrap();
        assert!(bbox.min().x() <= -1 && bbox.min().y() <= -1);
        assert!(bbox.max().x() >= 11 && bbox.max().y() >= 11);
    }

    #[test]
    fn round_cap_dot_is_a_polygon() {
        let path = [PathEvent::Move(Point::new(5, 5)), PathEvent::Close];
        let style = Style {
            line_width: 2.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            miter_limit: 4.0,
            dash_pattern: None,
        };
        let (ctm, ctm_inv) = identity();
        let poly = stroke_to_polygon(&path, &style, &ctm, &ctm_inv, 0.1).unwrap();
        assert!(poly.edges().len() >= 3);
    }

    #[test]
    fn butt_capped_open_segment_is_a_rectangle() {
        // The rectangle's top and bottom sides are exactly horizontal,
        // and horizontal edges carry no winding contribution (they
        // have no supporting non-horizontal line); only its two
        // vertical sides survive as edges, same as any other
        // axis-aligned rectangle on this plane.
        let path = [PathEvent::Move(Point::new(0, 0)), PathEvent::Line(Point::new(10, 0))];
        let style = Style { line_width: 2.0, ..Style::default() };
        let (ctm, ctm_inv) = identity();
        let poly = stroke_to_polygon(&path, &style, &ctm, &ctm_inv, 0.25).unwrap();
        assert_eq!(poly.edges().len(), 2);
        let bbox = poly.bounding_box().unwrap();
        assert_eq!(bbox.min(), Point::new(0, -1));
        assert_eq!(bbox.max(), Point::new(10, 1));
    }

    #[test]
    fn zero_width_produces_nothing() {
        let path = [PathEvent::Move(Point::new(0, 0)), PathEvent::Line(Point::new(10, 0))];
        let style = Style { line_width: 0.0, ..Style::default() };
        let (ctm, ctm_inv) = identity();
        let poly = stroke_to_polygon(&path, &style, &ctm, &ctm_inv, 0.25).unwrap();
        assert!(poly.edges().is_empty());
    }

    #[test]
    fn rotation_does_not_panic() {
        let path = [
            PathEvent::Move(Point::new(0, 0)),
            PathEvent::Line(Point::new(10, 0)),
            PathEvent::Line(Point::new(10, 10)),
        ];
        let style = Style { line_width: 2.0, line_join: LineJoin::Round, ..Style::default() };
        let ctm = Aff::rotate(Angle::from_degrees(30.0));
        let ctm_inv = ctm.inverse();
        let poly = stroke_to_polygon(&path, &style, &ctm, &ctm_inv, 0.25).unwrap();
        assert!(!poly.edges().is_empty());
    }
}
