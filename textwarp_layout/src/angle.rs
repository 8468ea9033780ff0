// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle normalization and degree-based trigonometry.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

pub(crate) const QUARTER_TURN: f64 = 90.0;
pub(crate) const HALF_TURN: f64 = 180.0;
pub(crate) const THREE_QUARTER_TURN: f64 = 270.0;
pub(crate) const FULL_TURN: f64 = 360.0;

/// Returns `value` unless it is NaN or infinite, in which case returns `0.0`.
///
/// Negative zero is folded into positive zero so results compare and print
/// the same regardless of which branch produced them.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value + 0.0 } else { 0.0 }
}

/// Normalizes a rotation to `|degrees| mod 360`, in `[0, 360)`.
///
/// Non-finite input normalizes to `0`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let degrees = finite_or_zero(degrees);
    let magnitude = if degrees < 0.0 { -degrees } else { degrees };
    finite_or_zero(magnitude % FULL_TURN)
}

/// Converts degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / HALF_TURN)
}

pub(crate) fn sin_deg(degrees: f64) -> f64 {
    to_radians(degrees).sin()
}

pub(crate) fn tan_deg(degrees: f64) -> f64 {
    to_radians(degrees).tan()
}
