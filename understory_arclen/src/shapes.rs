// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made paths for demos and tests.

use core::f64::consts::PI;

use kurbo::{Arc, BezPath, Point, Vec2};

/// Tolerance used when converting arcs to cubic segments.
const ARC_TOLERANCE: f64 = 0.1;

/// A 500 unit square walk (right, down, left) finished by a half circle that
/// bulges below the square, from `(0, 750)` through `(250, 1000)` to
/// `(500, 750)`.
///
/// A straight connector runs from `(0, 500)` down to the start of the arc.
#[must_use]
pub fn simple_path_with_arc() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((500.0, 0.0));
    path.line_to((500.0, 500.0));
    path.line_to((0.0, 500.0));
    let arc = Arc {
        center: Point::new(250.0, 750.0),
        radii: Vec2::new(250.0, 250.0),
        start_angle: PI,
        sweep_angle: -PI,
        x_rotation: 0.0,
    };
    path.line_to(arc.center + Vec2::from_angle(arc.start_angle) * arc.radii.x);
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path
}

/// A heart outline fitted in a `width` x `height` box, drawn as four cubics
/// starting and ending at the top notch.
#[must_use]
pub fn heart(width: f64, height: f64) -> BezPath {
    let (w, h) = (width, height);
    let mut path = BezPath::new();
    path.move_to((w / 2.0, h / 5.0));
    // Upper left lobe.
    path.curve_to((5.0 * w / 14.0, 0.0), (0.0, h / 15.0), (w / 28.0, 2.0 * h / 5.0));
    // Lower left.
    path.curve_to(
        (w / 14.0, 2.0 * h / 3.0),
        (3.0 * w / 7.0, 5.0 * h / 6.0),
        (w / 2.0, h),
    );
    // Lower right.
    path.curve_to(
        (4.0 * w / 7.0, 5.0 * h / 6.0),
        (13.0 * w / 14.0, 2.0 * h / 3.0),
        (27.0 * w / 28.0, 2.0 * h / 5.0),
    );
    // Upper right lobe.
    path.curve_to((w, h / 15.0), (9.0 * w / 14.0, 0.0), (w / 2.0, h / 5.0));
    path
}

/// The shapes offered by the demo gallery.
#[must_use]
pub fn gallery() -> [BezPath; 2] {
    [simple_path_with_arc(), heart(800.0, 800.0)]
}
