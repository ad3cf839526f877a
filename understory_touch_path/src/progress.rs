// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress along the path and the history of traced points.

use alloc::vec::Vec;

use kurbo::Point;
use understory_arclen::PathSampler;

use crate::Step;

/// Tracks how far along a path the user has traced.
///
/// The tracker keeps:
/// - the current progress, always clamped to `[0, 1]`,
/// - the ordered history of sampled points from `0` to the current progress,
///   one per step plus the exact endpoint,
/// - the next point the pointer has to reach to advance, sampled one step
///   ahead of the current progress.
///
/// The tracker does not own the path; every mutating call takes the
/// [`PathSampler`] it should sample from, so the same tracker can be rebuilt
/// after the path has been moved (for example re-centered).
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    progress: f64,
    step: Step,
    points: Vec<Point>,
    next_point: Point,
}

impl ProgressTracker {
    /// Creates a tracker at progress `0` on `sampler`.
    pub fn new(sampler: &PathSampler, step: Step) -> Self {
        let mut tracker = Self {
            progress: 0.0,
            step,
            points: Vec::new(),
            next_point: Point::ZERO,
        };
        tracker.initialize(sampler);
        tracker
    }

    /// Resets to progress `0`: history is the start point and the next point
    /// is one step in.
    pub fn initialize(&mut self, sampler: &PathSampler) {
        self.progress = 0.0;
        self.points.clear();
        self.points.push(sampler.position(0.0));
        self.next_point = sampler.position(self.step.get());
    }

    /// Jumps to `value`, clamped to `[0, 1]`, rebuilding the whole history.
    ///
    /// History is sampled at every multiple of the step up to `value`; if the
    /// last multiple is not exactly `value`, the point at `value` is appended
    /// so the newest point always matches the progress.
    pub fn set_progress(&mut self, sampler: &PathSampler, value: f64) {
        let value = clamp_progress(value);
        let step = self.step.get();
        self.progress = value;
        self.points.clear();

        let mut walked = 0.0;
        let mut k = 0_u32;
        loop {
            self.points.push(sampler.position(walked));
            k += 1;
            let next = f64::from(k) * step;
            if next > value {
                break;
            }
            walked = next;
        }
        if walked != value {
            self.points.push(sampler.position(value));
        }
        self.next_point = sampler.position(value + step);
    }

    /// Moves one step forward after the pointer reached [`next_point`](Self::next_point).
    ///
    /// The reached point is appended to history, the next target is sampled
    /// one step further, and the new (clamped) progress is returned.
    pub fn advance(&mut self, sampler: &PathSampler) -> f64 {
        let step = self.step.get();
        self.progress += step;
        self.points.push(self.next_point);
        self.next_point = sampler.position(self.progress + step);
        self.progress = clamp_progress(self.progress);
        self.progress
    }

    /// Changes the step used by later calls.
    ///
    /// The pending [`next_point`](Self::next_point) keeps its old spacing until
    /// the next advance or rebuild.
    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Traced history, oldest first.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point the pointer must reach to advance.
    #[must_use]
    pub const fn next_point(&self) -> Point {
        self.next_point
    }

    /// Newest traced point, if any.
    #[must_use]
    pub fn current_position(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns `true` once the whole path has been traced.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
