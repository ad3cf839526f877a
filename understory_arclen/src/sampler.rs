// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length parameterization over a [`BezPath`].

use alloc::vec::Vec;

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point};

/// Default accuracy, in path units, for arc-length evaluation.
///
/// Paths are usually in device pixels, where a thousandth of a pixel is far
/// below anything visible or touchable.
pub const DEFAULT_ACCURACY: f64 = 1e-3;

/// A segment of the measured path together with where it starts in the
/// path's arc-length domain.
#[derive(Clone, Copy, Debug)]
struct MeasuredSeg {
    seg: PathSeg,
    /// Arc-length offset of the segment start.
    start: f64,
    /// Arc length of the segment.
    length: f64,
}

impl MeasuredSeg {
    const fn end(&self) -> f64 {
        self.start + self.length
    }

    /// Curve parameter at `distance` units past the segment start.
    fn param_at(&self, distance: f64, accuracy: f64) -> f64 {
        if self.length <= 0.0 || distance <= 0.0 {
            0.0
        } else if distance >= self.length {
            1.0
        } else {
            self.seg.inv_arclen(distance, accuracy).clamp(0.0, 1.0)
        }
    }
}

/// Answers arc-length queries about an immutable path.
///
/// All queries take a normalized offset `t`, clamped to `[0, 1]`, which is
/// mapped to the arc-length distance `t * length()` along the path. Points are
/// evaluated on the actual segment geometry (lines, quadratics and cubics), not
/// on a chord approximation.
///
/// Every segment of every subpath (including the implicit closing line of a
/// closed subpath) is measured into one continuous domain. Moving from one
/// subpath to the next does not add length.
///
/// The sampler owns its path and never mutates it, so a shared reference can
/// be queried from any number of readers.
#[derive(Clone, Debug)]
pub struct PathSampler {
    path: BezPath,
    segments: Vec<MeasuredSeg>,
    length: f64,
    accuracy: f64,
}

impl PathSampler {
    /// Measures `path` with [`DEFAULT_ACCURACY`].
    pub fn new(path: BezPath) -> Self {
        Self::with_accuracy(path, DEFAULT_ACCURACY)
    }

    /// Measures `path`, evaluating arc lengths to within `accuracy` units.
    ///
    /// Non-positive or non-finite accuracies fall back to [`DEFAULT_ACCURACY`].
    pub fn with_accuracy(path: BezPath, accuracy: f64) -> Self {
        let accuracy = if accuracy.is_finite() && accuracy > 0.0 {
            accuracy
        } else {
            DEFAULT_ACCURACY
        };
        let mut segments = Vec::new();
        let mut offset = 0.0;
        for seg in path.segments() {
            let length = seg.arclen(accuracy);
            segments.push(MeasuredSeg {
                seg,
                start: offset,
                length,
            });
            offset += length;
        }
        Self {
            path,
            segments,
            length: offset,
            accuracy,
        }
    }

    /// The measured path.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Accuracy used for arc-length evaluation.
    #[must_use]
    pub const fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Total arc length of the path.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Returns `true` if the path has no drawable segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Point at the normalized arc-length offset `t`.
    ///
    /// `position(0.0)` is the start of the first segment and `position(1.0)`
    /// the end of the last one. A path without segments answers with its first
    /// point, or the origin when it has none.
    #[must_use]
    pub fn position(&self, t: f64) -> Point {
        let Some(last) = self.segments.last() else {
            return self.first_point();
        };
        let distance = clamp_unit(t) * self.length;
        if distance >= self.length {
            return last.seg.end();
        }
        let seg = &self.segments[self.index_at(distance)];
        seg.seg
            .eval(seg.param_at(distance - seg.start, self.accuracy))
    }

    /// Direction of travel at `t`, in radians.
    ///
    /// This is a finite difference between `position(t)` and
    /// `position(t - step)`, so it follows the sampling granularity the
    /// caller is using rather than the analytic derivative. At `t == 0` both
    /// points coincide and the angle is `0`.
    #[must_use]
    pub fn tangent_angle(&self, t: f64, step: f64) -> f64 {
        let tip = self.position(t);
        let back = self.position(t - step);
        (tip - back).atan2()
    }

    /// The part of the path between normalized offsets `start` and `end`.
    ///
    /// The result starts with a move-to. Whenever the interval crosses into a
    /// new subpath, a new move-to is emitted. Returns an empty path when
    /// `start >= end` after clamping.
    #[must_use]
    pub fn sub_path(&self, start: f64, end: f64) -> BezPath {
        let mut out = BezPath::new();
        let d0 = clamp_unit(start) * self.length;
        let d1 = clamp_unit(end) * self.length;
        if d0 >= d1 || self.segments.is_empty() {
            return out;
        }
        let mut pen: Option<Point> = None;
        for seg in &self.segments[self.index_at(d0)..] {
            if seg.start >= d1 {
                break;
            }
            let t0 = seg.param_at(d0 - seg.start, self.accuracy);
            let t1 = seg.param_at(d1 - seg.start, self.accuracy);
            if t1 <= t0 {
                continue;
            }
            let piece = seg.seg.subsegment(t0..t1);
            if pen.is_none_or(|p| p.distance(piece.start()) > self.accuracy) {
                out.move_to(piece.start());
            }
            push_seg(&mut out, piece);
            pen = Some(piece.end());
        }
        out
    }

    /// Index of the segment containing arc-length `distance`.
    fn index_at(&self, distance: f64) -> usize {
        let ix = self.segments.partition_point(|s| s.end() < distance);
        ix.min(self.segments.len().saturating_sub(1))
    }

    fn first_point(&self) -> Point {
        match self.path.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => Point::ZERO,
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

fn push_seg(path: &mut BezPath, seg: PathSeg) {
    match seg {
        PathSeg::Line(l) => path.line_to(l.p1),
        PathSeg::Quad(q) => path.quad_to(q.p1, q.p2),
        PathSeg::Cubic(c) => path.curve_to(c.p1, c.p2, c.p3),
    }
}
