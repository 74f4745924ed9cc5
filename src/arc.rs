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

//! A geometric arc: a center, a radius and a pair of angles.
//!
//! [`crate::stroke`] discretizes arcs of this shape into the fan of
//! points it stitches into a polygon's boundary for round joins and
//! caps.

use alloc::vec::Vec;

use num_traits::real::Real;

use crate::angle::Angle;
use crate::point::Point;

/// An arc of a circle.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc<T: Copy> {
    center: Point<T>,
    radius: T,
    start_angle: Angle<T>,
    end_angle: Angle<T>,
}

#[cfg(feature = "arbitrary")]
impl<'a, T: Copy + arbitrary::Arbitrary<'a>> arbitrary::Arbitrary<'a> for Arc<T> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Arc {
            center: arbitrary::Arbitrary::arbitrary(u)?,
            radius: arbitrary::Arbitrary::arbitrary(u)?,
            start_angle: arbitrary::Arbitrary::arbitrary(u)?,
            end_angle: arbitrary::Arbitrary::arbitrary(u)?,
        })
    }
}

impl<T: Copy> Arc<T> {
    /// Create a new arc from its center, radius, and start/end angles.
    pub fn new(center: Point<T>, radius: T, start_angle: Angle<T>, end_angle: Angle<T>) -> Self {
        Arc { center, radius, start_angle, end_angle }
    }

    /// The center of the arc.
    pub fn center(self) -> Point<T> {
        self.center
    }

    /// The radius of the arc.
    pub fn radius(self) -> T {
        self.radius
    }

    /// The angle the arc starts at.
    pub fn start_angle(self) -> Angle<T> {
        self.start_angle
    }

    /// The angle the arc ends at.
    pub fn end_angle(self) -> Angle<T> {
        self.end_angle
    }

    /// Reverse the direction of the arc.
    pub fn reverse(self) -> Self
    where
        T: Real,
    {
        let full_circle = T::from(core::f32::consts::PI * 2.0).unwrap();

        Self {
            center: self.center,
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: Angle::from_radians((self.start_angle().radians() + full_circle) % full_circle),
        }
    }
}

impl<T: Real> Arc<T> {
    /// Points approximating this arc, walking from `start_angle` to
    /// `end_angle` in steps of at most `max_step` radians.
    ///
    /// Neither endpoint is included — callers already have the faces
    /// or offset points the arc connects and only need the interior
    /// of the fan.
    pub fn flatten(self, max_step: T) -> Vec<Point<T>> {
        let span = self.end_angle.radians() - self.start_angle.radians();
        let max_step = if max_step > T::zero() { max_step } else { T::one() };
        let steps_f = (span.abs() / max_step).ceil();
        let steps = if steps_f < T::one() {
            1usize
        } else {
            num_traits::NumCast::from(steps_f).unwrap_or(1)
        };

        (1..steps)
            .map(|i| {
                let t = T::from(i).unwrap() / T::from(steps).unwrap();
                let angle = self.start_angle.radians() + span * t;
                Point::new(
                    self.center.x() + self.radius * angle.cos(),
                    self.center.y() + self.radius * angle.sin(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_excludes_endpoints() {
        let arc = Arc::new(Point::new(0.0, 0.0), 1.0, Angle::from_radians(0.0), Angle::from_radians(core::f64::consts::PI));
        let points = arc.flatten(core::f64::consts::FRAC_PI_4);
        assert!(points.len() >= 3);
        for p in &points {
            assert!((p.x() * p.x() + p.y() * p.y() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn reverse_swaps_angles() {
        let arc = Arc::new(
            Point::new(0.0, 0.0),
            1.0,
            Angle::from_radians(0.0),
            Angle::from_radians(1.0),
        );
        let reversed = arc.reverse();
        assert_eq!(reversed.start_angle().radians(), 1.0);
    }
}
