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

//! The active-edge arena and doubly-linked sweep line.
//!
//! This replaces the original's
//! intrusive pointer-linked active list with an arena of indices; this
//! module is that arena. Every sweep (`tessellate_polygon`,
//! `reduce_polygon`, `intersect_polygons`) builds one of these fresh
//! and drops it when the sweep ends — no edge here outlives the call
//! that created it.

mod arena;
mod linked_list;
mod line;

pub(crate) use arena::{Arena, Deferred, EdgeId, SweepEdge};
pub(crate) use line::SweepLine;
