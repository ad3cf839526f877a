// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing a path inside a view.

use kurbo::{Affine, BezPath, Shape, Size, Vec2};

/// Translation that centers `path` in a view of `view` size.
///
/// The offset is half the room left between the path's exact bounding box
/// far corner and the view's far corner on each axis, i.e.
/// `((w - x1) / 2, (h - y1) / 2)`. Paths drawn from the origin end up
/// centered; paths that already carry a margin keep half of it.
///
/// Returns [`Vec2::ZERO`] while either side of the view is empty, since there
/// is nothing to center in until the host has laid the view out.
#[must_use]
pub fn centering_offset(path: &BezPath, view: Size) -> Vec2 {
    if view.width <= 0.0 || view.height <= 0.0 {
        return Vec2::ZERO;
    }
    let bounds = path.bounding_box();
    Vec2::new((view.width - bounds.x1) / 2.0, (view.height - bounds.y1) / 2.0)
}

/// A copy of `path` translated by [`centering_offset`].
#[must_use]
pub fn centered(path: &BezPath, view: Size) -> BezPath {
    let mut out = path.clone();
    let offset = centering_offset(path, view);
    if offset != Vec2::ZERO {
        out.apply_affine(Affine::translate(offset));
    }
    out
}
