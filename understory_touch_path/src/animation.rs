// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal animation: draw the path in, then fade the helper arrows in.
//!
//! The driver never schedules anything itself. The host feeds it monotonic
//! timestamps (milliseconds) from whatever frame or tick source it has, and
//! reads back an [`AnimationState`]:
//!
//! ```text
//! Idle --animate(d > 0)--> Drawing(0..=1) --reveal done, arrows on--> HelperFade(1..=2) --> Idle
//!                                      \--reveal done, arrows off-------------------------> Idle
//! ```
//!
//! Starting a new animation (or [`cancel`](AnimationDriver::cancel)) drops the
//! running one before anything else happens, and hands out a fresh
//! [`AnimationId`]; ticks tagged with an older id are ignored.
//!
//! ```
//! use understory_touch_path::animation::{AnimationDriver, AnimationState, Linear};
//!
//! let mut driver = AnimationDriver::new(300);
//! driver.animate(1000, 0, Linear, 0);
//! assert_eq!(driver.tick(500, true), AnimationState::Drawing(0.5));
//! assert_eq!(driver.tick(1000, true), AnimationState::HelperFade(1.0));
//! assert_eq!(driver.tick(1150, true), AnimationState::HelperFade(1.5));
//! assert_eq!(driver.tick(1300, true), AnimationState::Idle);
//! ```

use alloc::boxed::Box;
use core::fmt;

/// Maps elapsed time, as a fraction of the duration, to animation progress.
///
/// Implemented for any `Fn(f64) -> f64`, so easing curves can be passed as
/// closures.
pub trait Interpolator {
    /// Progress for the time fraction `t` in `[0, 1]`.
    fn interpolate(&self, t: f64) -> f64;
}

impl<F: Fn(f64) -> f64> Interpolator for F {
    fn interpolate(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Progress proportional to time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl Interpolator for Linear {
    fn interpolate(&self, t: f64) -> f64 {
        t
    }
}

/// Observable animation state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    /// No animation; the path is shown as traced/untraced.
    #[default]
    Idle,
    /// The path is being drawn in; only the part from `0` to the value is visible.
    Drawing(f64),
    /// Helper arrows fade in; their opacity is the value minus one.
    HelperFade(f64),
}

impl AnimationState {
    /// The combined animation value, or `None` when idle.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Drawing(v) | Self::HelperFade(v) => Some(v),
        }
    }

    /// Returns `true` unless idle.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Identifies one animation started on an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

struct Reveal {
    begins_at: u64,
    duration: u64,
    interpolator: Box<dyn Interpolator>,
}

enum Phase {
    Reveal(Reveal),
    Fade { started_at: u64 },
}

/// Time-driven state machine behind the reveal animation.
pub struct AnimationDriver {
    phase: Option<Phase>,
    state: AnimationState,
    fade_ms: u64,
    generation: u64,
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("state", &self.state)
            .field("fade_ms", &self.fade_ms)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl AnimationDriver {
    /// Creates an idle driver whose helper fade lasts `fade_ms` milliseconds.
    #[must_use]
    pub const fn new(fade_ms: u64) -> Self {
        Self {
            phase: None,
            state: AnimationState::Idle,
            fade_ms,
            generation: 0,
        }
    }

    /// Starts a reveal at `now`, replacing whatever was running.
    ///
    /// The reveal waits `start_delay_ms`, then sweeps from `0` to `1` over
    /// `duration_ms` shaped by `interpolator`. A zero duration skips the whole
    /// sequence and leaves the driver idle.
    pub fn animate(
        &mut self,
        duration_ms: u64,
        start_delay_ms: u64,
        interpolator: impl Interpolator + 'static,
        now: u64,
    ) -> AnimationId {
        let id = self.cancel();
        if duration_ms > 0 {
            self.phase = Some(Phase::Reveal(Reveal {
                begins_at: now.saturating_add(start_delay_ms),
                duration: duration_ms,
                interpolator: Box::new(interpolator),
            }));
            self.state = AnimationState::Drawing(0.0);
            log::debug!("reveal scheduled: {duration_ms}ms after {start_delay_ms}ms delay");
        }
        id
    }

    /// Stops the running animation, if any, and goes idle.
    pub fn cancel(&mut self) -> AnimationId {
        if self.phase.take().is_some() {
            log::debug!("animation cancelled");
        }
        self.state = AnimationState::Idle;
        self.generation += 1;
        AnimationId(self.generation)
    }

    /// Advances to `now` and returns the new state.
    ///
    /// `helpers_enabled` decides whether a finished reveal continues into the
    /// helper fade, and collapses a running fade when it turns off.
    pub fn tick(&mut self, now: u64, helpers_enabled: bool) -> AnimationState {
        self.state = match self.phase.take() {
            None => AnimationState::Idle,
            Some(Phase::Reveal(reveal)) => {
                if now < reveal.begins_at {
                    self.phase = Some(Phase::Reveal(reveal));
                    AnimationState::Drawing(0.0)
                } else {
                    let elapsed = now - reveal.begins_at;
                    if elapsed < reveal.duration {
                        let t = elapsed as f64 / reveal.duration as f64;
                        let v = reveal.interpolator.interpolate(t);
                        self.phase = Some(Phase::Reveal(reveal));
                        AnimationState::Drawing(if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) })
                    } else if helpers_enabled && self.fade_ms > 0 {
                        log::debug!("reveal finished, fading helper arrows in");
                        self.phase = Some(Phase::Fade { started_at: now });
                        AnimationState::HelperFade(1.0)
                    } else {
                        log::debug!("reveal finished");
                        AnimationState::Idle
                    }
                }
            }
            Some(Phase::Fade { started_at }) => {
                let elapsed = now.saturating_sub(started_at);
                if !helpers_enabled {
                    log::debug!("helper arrows disabled during fade");
                    AnimationState::Idle
                } else if elapsed >= self.fade_ms {
                    log::debug!("helper fade finished");
                    AnimationState::Idle
                } else {
                    let t = elapsed as f64 / self.fade_ms as f64;
                    self.phase = Some(Phase::Fade { started_at });
                    AnimationState::HelperFade(1.0 + t)
                }
            }
        };
        self.state
    }

    /// Like [`tick`](Self::tick), but only if `id` is still the current animation.
    ///
    /// Returns `None` for stale ids, leaving the state untouched. Hosts whose
    /// timers outlive an animation can tag callbacks with the id returned by
    /// [`animate`](Self::animate).
    pub fn tick_for(
        &mut self,
        id: AnimationId,
        now: u64,
        helpers_enabled: bool,
    ) -> Option<AnimationState> {
        self.is_current(id).then(|| self.tick(now, helpers_enabled))
    }

    /// Returns `true` if `id` names the most recently started animation.
    #[must_use]
    pub fn is_current(&self, id: AnimationId) -> bool {
        id.0 == self.generation
    }

    /// State as of the last tick (or start/cancel).
    #[must_use]
    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Duration of the helper fade, in milliseconds.
    #[must_use]
    pub const fn fade_ms(&self) -> u64 {
        self.fade_ms
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_reveal_then_fade_then_idle() {
        let mut driver = AnimationDriver::default();
        driver.animate(1000, 0, Linear, 0);
        assert_eq!(driver.state(), AnimationState::Drawing(0.0));
        assert_eq!(driver.tick(500, true), AnimationState::Drawing(0.5));
        assert_eq!(driver.tick(1000, true), AnimationState::HelperFade(1.0));
        assert_eq!(driver.tick(1300, true), AnimationState::Idle);
        assert_eq!(driver.tick(2000, true), AnimationState::Idle);
    }

    #[test]
    fn delay_holds_at_zero() {
        let mut driver = AnimationDriver::default();
        driver.animate(100, 50, Linear, 1000);
        assert_eq!(driver.tick(1020, true), AnimationState::Drawing(0.0));
        assert_eq!(driver.tick(1050, true), AnimationState::Drawing(0.0));
        assert_eq!(driver.tick(1075, true), AnimationState::Drawing(0.25));
    }

    #[test]
    fn interpolator_shapes_and_is_clamped() {
        let mut driver = AnimationDriver::default();
        driver.animate(100, 0, |t: f64| t * t, 0);
        assert_eq!(driver.tick(50, true), AnimationState::Drawing(0.25));

        driver.animate(100, 0, |t: f64| t * 3.0, 0);
        assert_eq!(driver.tick(50, true), AnimationState::Drawing(1.0));
    }

    #[test]
    fn skips_fade_when_arrows_off() {
        let mut driver = AnimationDriver::default();
        driver.animate(100, 0, Linear, 0);
        assert_eq!(driver.tick(100, false), AnimationState::Idle);
        assert!(!driver.is_active());
    }

    #[test]
    fn disabling_arrows_collapses_fade() {
        let mut driver = AnimationDriver::default();
        driver.animate(100, 0, Linear, 0);
        assert_eq!(driver.tick(100, true), AnimationState::HelperFade(1.0));
        assert_eq!(driver.tick(160, true), AnimationState::HelperFade(1.2));
        assert_eq!(driver.tick(170, false), AnimationState::Idle);
        // Re-enabling does not resurrect it.
        assert_eq!(driver.tick(180, true), AnimationState::Idle);
    }

    #[test]
    fn zero_duration_is_idle() {
        let mut driver = AnimationDriver::default();
        driver.animate(1000, 0, Linear, 0);
        driver.animate(0, 0, Linear, 10);
        assert_eq!(driver.state(), AnimationState::Idle);
        assert_eq!(driver.tick(500, true), AnimationState::Idle);
    }

    #[test]
    fn restart_replaces_running_animation() {
        let mut driver = AnimationDriver::default();
        let first = driver.animate(1000, 0, Linear, 0);
        assert_eq!(driver.tick(900, true), AnimationState::Drawing(0.9));
        let second = driver.animate(1000, 0, Linear, 900);
        assert_ne!(first, second);
        assert_eq!(driver.tick_for(first, 1000, true), None);
        assert_eq!(driver.state(), AnimationState::Drawing(0.0));
        assert_eq!(driver.tick_for(second, 1400, true), Some(AnimationState::Drawing(0.5)));
    }

    #[test]
    fn values_span_both_phases() {
        let mut driver = AnimationDriver::new(200);
        assert_eq!(driver.state().value(), None);
        driver.animate(100, 0, Linear, 0);
        assert_eq!(driver.tick(25, true).value(), Some(0.25));
        assert_eq!(driver.tick(100, true).value(), Some(1.0));
        assert_eq!(driver.tick(150, true).value(), Some(1.25));
        assert_eq!(driver.tick(300, true).value(), None);
    }
}
