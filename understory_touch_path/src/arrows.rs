// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helper arrows: chevrons along the path showing which way to trace.

use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point, Vec2};
use smallvec::SmallVec;
use understory_arclen::PathSampler;

use crate::TouchPathError;

/// Half of the angle between the two wings of a chevron (27.5 degrees).
pub const ARROW_HALF_SPREAD: f64 = 27.5 * core::f64::consts::PI / 180.0;

/// Where helper arrows sit along the path.
///
/// Each entry is a `(start, end)` pair of normalized offsets; the arrow's
/// shaft covers that interval and its head sits at `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct HelperSpec {
    intervals: SmallVec<[(f64, f64); 8]>,
}

impl HelperSpec {
    /// Uses the given intervals as-is, with each bound clamped to `[0, 1]`.
    pub fn new(intervals: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            intervals: intervals
                .into_iter()
                .map(|(start, end)| (start.clamp(0.0, 1.0), end.clamp(0.0, 1.0)))
                .collect(),
        }
    }

    /// Tiles `[0, 1]` with arrows `len` long separated by `gap`.
    ///
    /// The first arrow starts at `0`; tiling stops as soon as the next start
    /// would reach `1`. The last arrow is cut short at `1` if needed.
    pub fn tiled(len: f64, gap: f64) -> Result<Self, TouchPathError> {
        if !(len.is_finite() && gap.is_finite() && len > 0.0 && gap >= 0.0) {
            return Err(TouchPathError::InvalidHelperTiling { len, gap });
        }
        Ok(Self {
            intervals: tile(len, gap),
        })
    }

    /// The configured intervals, in order.
    #[must_use]
    pub fn intervals(&self) -> &[(f64, f64)] {
        &self.intervals
    }

    /// Returns `true` if no arrows are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl Default for HelperSpec {
    /// Arrows a tenth of the path long, a tenth apart.
    fn default() -> Self {
        Self {
            intervals: tile(0.1, 0.1),
        }
    }
}

/// Tiles `[0, 1]` from `0`; `len` must be positive and `gap` non-negative.
fn tile(len: f64, gap: f64) -> SmallVec<[(f64, f64); 8]> {
    let mut intervals = SmallVec::new();
    let mut start = 0.0;
    while start < 1.0 {
        intervals.push((start, (start + len).min(1.0)));
        start += len + gap;
    }
    intervals
}

/// One drawable helper arrow.
#[derive(Clone, Debug)]
pub struct HelperArrow {
    /// The stretch of path the arrow runs along.
    pub shaft: BezPath,
    /// Head of the arrow, on the path at the interval end.
    pub tip: Point,
    /// Direction of travel at the tip, in radians.
    pub angle: f64,
    /// The two chevron wings, each starting at the tip and trailing behind it.
    pub wings: [Line; 2],
}

/// Builds the helper arrows for `spec` on `sampler`.
///
/// The direction at each tip is the finite-difference tangent over the
/// current `step`, so changing the step changes the arrow heads too. Each
/// wing is `radius` long and opens [`ARROW_HALF_SPREAD`] away from the
/// reversed direction of travel.
#[must_use]
pub fn helper_arrows(
    sampler: &PathSampler,
    spec: &HelperSpec,
    step: f64,
    radius: f64,
) -> Vec<HelperArrow> {
    spec.intervals()
        .iter()
        .map(|&(start, end)| {
            let tip = sampler.position(end);
            let back = sampler.position(end - step);
            let angle = (tip - back).atan2();
            let wing = |a: f64| Line::new(tip, tip - Vec2::from_angle(a) * radius);
            HelperArrow {
                shaft: sampler.sub_path(start, end),
                tip,
                angle,
                wings: [wing(angle - ARROW_HALF_SPREAD), wing(angle + ARROW_HALF_SPREAD)],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tiling_stops_before_one() {
        let spec = HelperSpec::tiled(0.1, 0.1).unwrap();
        let expected = [(0.0, 0.1), (0.2, 0.3), (0.4, 0.5), (0.6, 0.7), (0.8, 0.9)];
        assert_eq!(spec.intervals().len(), expected.len());
        for (got, want) in spec.intervals().iter().zip(expected) {
            assert!(approx(got.0, want.0) && approx(got.1, want.1), "{got:?} vs {want:?}");
        }
        assert_eq!(spec, HelperSpec::default());
    }

    #[test]
    fn tiling_clips_last_arrow() {
        let spec = HelperSpec::tiled(0.4, 0.2).unwrap();
        assert_eq!(spec.intervals(), &[(0.0, 0.4), (0.6000000000000001, 1.0)]);
    }

    #[test]
    fn tiling_rejects_degenerate_input() {
        assert!(HelperSpec::tiled(0.0, 0.0).is_err());
        assert!(HelperSpec::tiled(0.1, -0.05).is_err());
        assert!(matches!(
            HelperSpec::tiled(f64::NAN, 0.1),
            Err(TouchPathError::InvalidHelperTiling { .. })
        ));
    }

    #[test]
    fn explicit_intervals_are_clamped() {
        let spec = HelperSpec::new([(-0.5, 0.2), (0.9, 1.5)]);
        assert_eq!(spec.intervals(), &[(0.0, 0.2), (0.9, 1.0)]);
        assert!(HelperSpec::new([]).is_empty());
    }

    #[test]
    fn chevron_trails_the_tip() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 0.0));
        let sampler = PathSampler::new(path);
        let spec = HelperSpec::new([(0.2, 0.5)]);

        let arrows = helper_arrows(&sampler, &spec, 0.01, 40.0);
        assert_eq!(arrows.len(), 1);
        let arrow = &arrows[0];
        assert_eq!(arrow.tip, Point::new(50.0, 0.0));
        assert!(approx(arrow.angle, 0.0));

        let Vec2 { x: cos, y: sin } = Vec2::from_angle(ARROW_HALF_SPREAD);
        let [upper, lower] = arrow.wings;
        assert_eq!(upper.p0, arrow.tip);
        assert!(approx(upper.p1.x, 50.0 - 40.0 * cos));
        assert!(approx(upper.p1.y, 40.0 * sin));
        assert!(approx(lower.p1.x, 50.0 - 40.0 * cos));
        assert!(approx(lower.p1.y, -40.0 * sin));

        let shaft = PathSampler::new(arrow.shaft.clone());
        assert!(approx(shaft.length(), 30.0));
    }

    #[test]
    fn arrow_heads_follow_the_step() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 0.0));
        path.line_to((100.0, 100.0));
        let sampler = PathSampler::new(path);
        let spec = HelperSpec::new([(0.4, 0.55)]);

        let fine = helper_arrows(&sampler, &spec, 0.01, 40.0);
        let coarse = helper_arrows(&sampler, &spec, 0.2, 40.0);
        assert!(approx(fine[0].angle, core::f64::consts::FRAC_PI_2));
        assert!(coarse[0].angle < fine[0].angle);
        assert_eq!(fine[0].tip, coarse[0].tip);
    }
}
