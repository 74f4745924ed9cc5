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

//! The convex fan of points a round join or cap discretizes down to.
//!
//! Built on top of [`crate::arc::Arc`]: every round feature here is
//! just an arc of the disk a round pen of the stroke's half-width
//! would trace, cut to the angular span the join or cap needs.

use alloc::vec::Vec;

use num_traits::Float;

use crate::angle::Angle;
use crate::arc::Arc;
use crate::point::{Point, Vector};

const TAU: f64 = core::f64::consts::TAU;

/// The angle of `v`, in `(-pi, pi]`.
pub(crate) fn angle_of(v: Vector<f64>) -> f64 {
    Float::atan2(v.y(), v.x())
}

/// `a` folded into `(-pi, pi]`.
pub(crate) fn normalize_angle(a: f64) -> f64 {
    let mut a = a % TAU;
    if a > core::f64::consts::PI {
        a -= TAU;
    }
    if a <= -core::f64::consts::PI {
        a += TAU;
    }
    a
}

/// The largest angular step (radians) a chord of `radius` can take
/// while staying within `tolerance` of the true arc.
pub(crate) fn max_step_for_tolerance(radius: f64, tolerance: f64) -> f64 {
    let radius = radius.max(1e-9);
    let ratio = (1.0 - (tolerance / radius).min(1.0)).max(-1.0);
    let step = 2.0 * Float::acos(ratio);
    if step.is_finite() && step > 1e-6 {
        step
    } else {
        core::f64::consts::FRAC_PI_3
    }
}

/// The interior points of the shorter arc from `from` to `to` around
/// `anchor`, chosen to pass near `through` (so callers don't have to
/// reason about rotation sign themselves).
pub(crate) fn arc_between(
    anchor: Point<f64>,
    from: Point<f64>,
    to: Point<f64>,
    through: Vector<f64>,
    radius: f64,
    max_step: f64,
) -> Vec<Point<f64>> {
    let a0 = angle_of(from - anchor);
    let a1 = angle_of(to - anchor);
    let mid_target = angle_of(through);

    let candidate1 = normalize_angle(a1 - a0);
    let candidate2 = if candidate1 >= 0.0 { candidate1 - TAU } else { candidate1 + TAU };
    let score = |delta: f64| normalize_angle(a0 + delta / 2.0 - mid_target).abs();
    let delta = if score(candidate1) <= score(candidate2) { candidate1 } else { candidate2 };

    if delta.abs() < 1e-9 {
        return Vec::new();
    }

    let arc = Arc::new(anchor, radius, Angle::from_radians(a0), Angle::from_radians(a0 + delta));
    arc.flatten(max_step)
}

/// A full circle of `radius` around `center`, as a closed ring of
/// points (first point not repeated at the end).
pub(crate) fn full_circle(center: Point<f64>, radius: f64, max_step: f64) -> Vec<Point<f64>> {
    let arc = Arc::new(center, radius, Angle::from_radians(0.0), Angle::from_radians(TAU));
    arc.flatten(max_step)
}
