// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit tests against sampled path points.
//!
//! A sampled point counts as touched when the pointer lands inside the disk
//! the traced stroke paints around it, so the radius passed here is normally
//! half the stroke width. The test is inclusive on the boundary.

use kurbo::Point;

/// Returns `true` if `pointer` is within `radius` of `target`.
#[must_use]
pub fn hit(target: Point, pointer: Point, radius: f64) -> bool {
    target.distance(pointer) <= radius
}

/// Index of the most recent point in `points` hit by `pointer`.
///
/// Points are searched from last to first and the first match wins; recent
/// history is where a resumed gesture usually lands.
#[must_use]
pub fn hit_any(points: &[Point], pointer: Point, radius: f64) -> Option<usize> {
    points.iter().rposition(|p| hit(*p, pointer, radius))
}
