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

//! A planar-sweep geometry engine on a fixed-point integer plane.
//!
//! `sweep-geometry` runs a single Bentley-Ottmann sweep-line core three
//! ways:
//!
//! * [`tessellate_polygon`] decomposes arbitrary edge soup into
//!   trapezoids under a [`FillRule`].
//! * [`intersect_polygons`] boolean-intersects two polygons, each
//!   under its own fill rule.
//! * [`reduce_polygon`] reduces a self-intersecting polygon to a
//!   simple boundary under a fill rule.
//!
//! [`stroke_to_polygon`] sits beside the sweep core rather than on
//! top of it: it expands a path and a line style into the [`Polygon`]
//! that fills its stroked outline, which can then be run through
//! [`reduce_polygon`] or [`tessellate_polygon`] like any other
//! polygon.
//!
//! Every sweep operation works exclusively in [`fixed::Coord`] (`i32`)
//! device-space coordinates; there is no floating point anywhere in
//! the sweep core itself. The stroker is the one exception: its
//! offset, join and cap trigonometry runs in user-space `f64`, and
//! only rounds onto the device plane at the very end.

#![no_std]
#![forbid(unsafe_code, future_incompatible)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod angle;
mod arc;
mod clip;
mod compare;
mod engine;
mod error;
mod event;
pub mod fixed;
mod intersect;
mod line;
mod path;
mod point;
mod polygon;
mod pqueue;
mod queue;
mod reduce;
mod stroke;
mod sweep;
mod tessellate;
mod transform;
mod trapezoid;

pub use angle::Angle;
pub use arc::Arc;
pub use clip::intersect_polygons;
pub use error::{Error, Result};
pub use line::{Edge, Line};
pub use path::PathEvent;
pub use point::{Point, Vector};
pub use polygon::{BoundingBox, Polygon};
pub use reduce::reduce_polygon;
pub use stroke::{stroke_to_polygon, DashPattern, LineCap, LineJoin, Style};
pub use tessellate::tessellate_polygon;
pub use transform::Affine;
pub use trapezoid::Trapezoid;

/// How a polygon's edge windings are turned into an inside/outside
/// test.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
    /// Inside wherever the accumulated winding number is nonzero.
    Winding,
    /// Inside wherever the accumulated winding number is odd.
    EvenOdd,
}
