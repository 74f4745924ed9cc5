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

//! Extended-precision integer arithmetic for the fixed-point plane.
//!
//! Every predicate in this crate's sweep-line works on a plane of
//! `i32` coordinates, but products and differences of those
//! coordinates routinely need more bits than the inputs to stay exact.
//! This module is the one place that widening happens; nothing else in
//! the crate is allowed to multiply two `i32`s without going through
//! here.

use core::convert::TryInto;

/// The coordinate type of the fixed-point plane.
///
/// Callers must clamp input coordinates so that `|dx|, |dy| < 2^30` for
/// any pair of points that reach the sweep (see [`crate::Edge`]);
/// everything downstream assumes that bound.
pub type Coord = i32;

/// `a * b`, exact, widened to 64 bits.
#[inline]
pub fn mul32x32_64(a: i32, b: i32) -> i64 {
    (a as i64) * (b as i64)
}

/// `a * b`, exact, widened to 128 bits.
#[inline]
pub fn mul64x32_128(a: i64, b: i32) -> i128 {
    (a as i128) * (b as i128)
}

/// `a*d - b*c`, widened so the subtraction cannot overflow even when
/// the four factors are full-width `i32`s.
#[inline]
pub fn det(a: i32, b: i32, c: i32, d: i32) -> i64 {
    mul32x32_64(a, d) - mul32x32_64(b, c)
}

/// `a*d - b*c` over already-64-bit factors, widened to 128 bits.
#[inline]
pub fn det128(a: i64, b: i64, c: i64, d: i64) -> i128 {
    (a as i128) * (d as i128) - (b as i128) * (c as i128)
}

/// Truncating `i128 / i64` division with remainder.
///
/// The remainder has the sign of the dividend, matching Rust's native
/// integer division semantics (and so matching hardware division, and
/// so matching the semantics the original C division this crate
/// replaces relied upon).
///
/// # Panics
///
/// Panics if `divisor` is zero, or if the quotient does not fit in
/// `i64`. Callers in this crate only ever divide a determinant-scaled
/// numerator by a determinant that is known to be nonzero and of
/// comparable magnitude, so the quotient is always in range in
/// practice; the checked variant exists for callers that are not sure.
#[inline]
pub fn div_96_by_64(dividend: i128, divisor: i64) -> (i64, i64) {
    checked_div_96_by_64(dividend, divisor).expect("div_96_by_64: overflow or division by zero")
}

/// Non-panicking version of [`div_96_by_64`].
#[inline]
pub fn checked_div_96_by_64(dividend: i128, divisor: i64) -> Option<(i64, i64)> {
    if divisor == 0 {
        return None;
    }
    let divisor = divisor as i128;
    let quotient = dividend.checked_div(divisor)?;
    let remainder = dividend % divisor;
    let quotient: i64 = quotient.try_into().ok()?;
    let remainder: i64 = remainder.try_into().ok()?;
    Some((quotient, remainder))
}

/// `(a * b) / c`, rounding towards negative infinity, used for
/// x-at-y interpolation along an edge.
#[inline]
pub fn mul_div_floor(a: i64, b: i32, c: i64) -> i64 {
    debug_assert!(c != 0);
    let num = mul64x32_128(a, b);
    let den = c as i128;
    let q = num.div_euclid(den);
    q as i64
}
