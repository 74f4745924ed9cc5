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

use core::fmt;

/// Failure modes for the sweep core's entry points.
///
/// Every operation in this crate is infallible except for allocation
/// failure: degenerate edges are dropped silently, and
/// coordinate-overflow risk is the caller's responsibility to clamp
/// before calling in. `OutOfMemory` is the only variant any public
/// function can currently return; the others are reserved so that
/// adding a genuinely-raised error later is not a breaking change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Growing the event pool, the priority queue's overflow storage,
    /// or the caller's output buffer failed.
    ///
    /// The sweep that hit this is aborted: its queue and sweep-line
    /// arena are dropped, and no partial output is returned.
    OutOfMemory,

    /// Reserved: degenerate input (`top >= bottom`, `dir == 0`) is
    /// currently dropped silently rather than raised.
    #[non_exhaustive]
    DegenerateInput,

    /// Reserved: coordinate-overflow risk is currently the caller's
    /// responsibility (see [`crate::fixed::Coord`]) and never raised
    /// by the core.
    #[non_exhaustive]
    OverflowRisk,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => f.write_str("out of memory while growing sweep state"),
            Error::DegenerateInput => f.write_str("degenerate input edge"),
            Error::OverflowRisk => f.write_str("input coordinates risk overflow"),
        }
    }
}

impl core::error::Error for Error {}

/// Shorthand for results returned by the sweep core's public API.
pub type Result<T> = core::result::Result<T, Error>;
