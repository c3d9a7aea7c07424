// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar interpolation and two-point helpers.

use kurbo::Point;

/// Linearly interpolates between `from` and `to`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// Inverse of [`lerp`]: where `x` sits between `from` and `to`.
///
/// A degenerate range (`from == to`) yields exactly `1.0`.
#[inline]
#[must_use]
pub fn inv_lerp(from: f64, to: f64, x: f64) -> f64 {
    let diff = to - from;
    if diff == 0.0 { 1.0 } else { (x - from) / diff }
}

/// Clamps `v` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics; when `min > max` the result is `max`.
#[inline]
#[must_use]
pub fn clamp(min: f64, max: f64, v: f64) -> f64 {
    v.max(min).min(max)
}

/// [`lerp`] with `t` clamped into `[0, 1]` first.
#[inline]
#[must_use]
pub fn lerp_clamped(from: f64, to: f64, t: f64) -> f64 {
    lerp(from, to, clamp(0.0, 1.0, t))
}

/// [`inv_lerp`] with the result clamped into `[0, 1]`.
#[inline]
#[must_use]
pub fn inv_lerp_clamped(from: f64, to: f64, x: f64) -> f64 {
    clamp(0.0, 1.0, inv_lerp(from, to, x))
}

/// Euclidean distance between two points.
#[inline]
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).hypot()
}

/// Angle in radians of the segment from `p1` to `p2`, as `atan2(dy, dx)`.
#[inline]
#[must_use]
pub fn angle(p1: Point, p2: Point) -> f64 {
    (p2 - p1).atan2()
}
