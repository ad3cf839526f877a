// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tracing widget core: pointer handling, state and rendering snapshot.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Point, Size};
use understory_arclen::{PathSampler, fit};

use crate::animation::{AnimationDriver, AnimationId, AnimationState, Interpolator};
use crate::arrows::{HelperArrow, HelperSpec, helper_arrows};
use crate::hit::{hit, hit_any};
use crate::{
    ProgressTracker, Scene, Step, TouchPathConfig, TouchPathError, TouchPathEvent, TouchPathFlags,
    TouchPathListener, TraceScene,
};

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer went down.
    Down,
    /// The pointer moved.
    Move,
    /// The pointer went up (or the gesture was cancelled).
    Up,
}

/// A pointer event in the path's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub phase: PointerPhase,
    /// Where it happened.
    pub position: Point,
}

impl PointerEvent {
    /// Pointer down at `position`.
    pub fn down(position: impl Into<Point>) -> Self {
        Self {
            phase: PointerPhase::Down,
            position: position.into(),
        }
    }

    /// Pointer move to `position`.
    pub fn moved(position: impl Into<Point>) -> Self {
        Self {
            phase: PointerPhase::Move,
            position: position.into(),
        }
    }

    /// Pointer up at `position`.
    pub fn up(position: impl Into<Point>) -> Self {
        Self {
            phase: PointerPhase::Up,
            position: position.into(),
        }
    }
}

/// Whether the widget consumed a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event was consumed.
    Handled,
    /// The event did not concern the widget; run the host's default handling.
    Ignored,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Handled`].
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// The installed path: the caller's original, and the sampler over the
/// working (possibly centered) copy.
#[derive(Clone, Debug)]
struct Installed {
    original: BezPath,
    sampler: PathSampler,
    tracker: ProgressTracker,
}

/// Lets a user trace a path with a single pointer.
///
/// The host forwards pointer events ([`handle_pointer`](Self::handle_pointer)),
/// frame times ([`on_frame`](Self::on_frame)) and layout
/// ([`set_view_size`](Self::set_view_size)), and draws the [`Scene`] it gets
/// back from [`scene`](Self::scene).
///
/// Tracing works like this:
/// - a gesture may only start on a point that has already been traced,
/// - while it lasts, each move that lands on the next target point advances
///   progress by one step,
/// - nothing is accepted while the widget is disabled, animating or complete.
///
/// All calls are synchronous and listener notifications are delivered before
/// the call that triggered them returns.
pub struct TouchPath {
    installed: Option<Installed>,
    step: Step,
    stroke_width: f64,
    arrow_radius: f64,
    accuracy: f64,
    flags: TouchPathFlags,
    view_size: Size,
    touching: bool,
    helpers: HelperSpec,
    animation: AnimationDriver,
    listener: Option<Box<dyn TouchPathListener>>,
}

impl fmt::Debug for TouchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchPath")
            .field("installed", &self.installed)
            .field("step", &self.step)
            .field("stroke_width", &self.stroke_width)
            .field("arrow_radius", &self.arrow_radius)
            .field("accuracy", &self.accuracy)
            .field("flags", &self.flags)
            .field("view_size", &self.view_size)
            .field("touching", &self.touching)
            .field("helpers", &self.helpers)
            .field("animation", &self.animation)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for TouchPath {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchPath {
    /// Creates a widget with [`TouchPathConfig::default`] and no path.
    #[must_use]
    pub fn new() -> Self {
        let config = TouchPathConfig::default();
        Self::from_parts(config, Step::DEFAULT)
    }

    /// Creates a widget with `config` and no path.
    ///
    /// Fails if `config.step` is not a valid [`Step`].
    pub fn with_config(config: TouchPathConfig) -> Result<Self, TouchPathError> {
        let step = Step::new(config.step)?;
        Ok(Self::from_parts(config, step))
    }

    fn from_parts(config: TouchPathConfig, step: Step) -> Self {
        Self {
            installed: None,
            step,
            stroke_width: config.stroke_width,
            arrow_radius: config.arrow_radius,
            accuracy: config.accuracy,
            flags: TouchPathFlags::default(),
            view_size: Size::ZERO,
            touching: false,
            helpers: HelperSpec::default(),
            animation: AnimationDriver::new(config.helper_fade_ms),
            listener: None,
        }
    }

    /// Current settings.
    #[must_use]
    pub fn config(&self) -> TouchPathConfig {
        TouchPathConfig {
            step: self.step.get(),
            stroke_width: self.stroke_width,
            arrow_radius: self.arrow_radius,
            helper_fade_ms: self.animation.fade_ms(),
            accuracy: self.accuracy,
        }
    }

    /// Installs the listener that receives [`TouchPathEvent`]s, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl TouchPathListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    fn emit(&mut self, event: TouchPathEvent) {
        if let Some(listener) = self.listener.as_deref_mut() {
            event.dispatch(listener);
        }
    }

    // --- Path -----------------------------------------------------------

    /// Installs `path`, centering it in the view when `to_center` is set.
    ///
    /// Progress and history start over, any gesture in progress is dropped
    /// without notification, and a running animation is cancelled.
    pub fn set_path(&mut self, path: BezPath, to_center: bool) {
        self.flags.set(TouchPathFlags::CENTER, to_center);
        self.animation.cancel();
        self.touching = false;
        let sampler = self.measure(&path);
        let tracker = ProgressTracker::new(&sampler, self.step);
        log::debug!(
            "path installed: length {:.1}, centered {to_center}",
            sampler.length()
        );
        self.installed = Some(Installed {
            original: path,
            sampler,
            tracker,
        });
    }

    fn measure(&self, original: &BezPath) -> PathSampler {
        let working = if self.flags.contains(TouchPathFlags::CENTER) {
            fit::centered(original, self.view_size)
        } else {
            original.clone()
        };
        PathSampler::with_accuracy(working, self.accuracy)
    }

    /// Reinstalls the original path with the current centering policy.
    ///
    /// Does nothing when no path is installed.
    pub fn reset(&mut self) {
        if let Some(installed) = self.installed.take() {
            log::debug!("reset");
            let center = self.flags.contains(TouchPathFlags::CENTER);
            self.set_path(installed.original, center);
        }
    }

    /// The path as passed to [`set_path`](Self::set_path).
    #[must_use]
    pub fn path(&self) -> Option<&BezPath> {
        self.installed.as_ref().map(|i| &i.original)
    }

    /// The path as traced and drawn, after centering.
    #[must_use]
    pub fn working_path(&self) -> Option<&BezPath> {
        self.installed.as_ref().map(|i| i.sampler.path())
    }

    /// Sampler over the working path.
    #[must_use]
    pub fn sampler(&self) -> Option<&PathSampler> {
        self.installed.as_ref().map(|i| &i.sampler)
    }

    /// Arc length of the working path, or `0` without a path.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        self.sampler().map_or(0.0, PathSampler::length)
    }

    /// Updates the view size; re-centers the path if centering is on.
    ///
    /// History is rebuilt at the current progress so it follows the moved path.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
        if !self.flags.contains(TouchPathFlags::CENTER) {
            return;
        }
        if let Some(original) = self.installed.as_ref().map(|i| i.original.clone()) {
            let sampler = self.measure(&original);
            if let Some(installed) = self.installed.as_mut() {
                let progress = installed.tracker.progress();
                installed.tracker.set_progress(&sampler, progress);
                installed.sampler = sampler;
            }
        }
    }

    /// Current view size.
    #[must_use]
    pub const fn view_size(&self) -> Size {
        self.view_size
    }

    // --- Progress -------------------------------------------------------

    /// Jumps to `value`, clamped to `[0, 1]`, rebuilding traced history.
    ///
    /// Does nothing without a path. No listener notification is sent.
    pub fn set_progress(&mut self, value: f64) {
        if let Some(installed) = self.installed.as_mut() {
            installed.tracker.set_progress(&installed.sampler, value);
        }
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.installed
            .as_ref()
            .map_or(0.0, |i| i.tracker.progress())
    }

    /// Sets the step. Fails, leaving the step unchanged, unless `value` is in `(0, 1)`.
    pub fn set_step(&mut self, value: f64) -> Result<(), TouchPathError> {
        let step = Step::new(value)?;
        self.step = step;
        if let Some(installed) = self.installed.as_mut() {
            installed.tracker.set_step(step);
        }
        Ok(())
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Traced history, oldest first; empty without a path.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.installed
            .as_ref()
            .map(|i| i.tracker.points())
            .unwrap_or_default()
    }

    /// The point the pointer must reach next.
    #[must_use]
    pub fn next_point(&self) -> Option<Point> {
        self.installed.as_ref().map(|i| i.tracker.next_point())
    }

    /// Newest traced point.
    #[must_use]
    pub fn current_position(&self) -> Option<Point> {
        self.installed
            .as_ref()
            .and_then(|i| i.tracker.current_position())
    }

    /// The traced part of the working path; empty at zero progress.
    #[must_use]
    pub fn traced_path(&self) -> BezPath {
        self.installed.as_ref().map_or_else(BezPath::new, |i| {
            i.sampler.sub_path(0.0, i.tracker.progress())
        })
    }

    // --- Widget state ---------------------------------------------------

    /// Enables or disables pointer input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(TouchPathFlags::ENABLED, enabled);
    }

    /// Returns `true` if pointer input is considered.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.flags.contains(TouchPathFlags::ENABLED)
    }

    /// Current flags.
    #[must_use]
    pub const fn flags(&self) -> TouchPathFlags {
        self.flags
    }

    /// Returns `true` while a tracing gesture is in progress.
    #[must_use]
    pub const fn is_touching(&self) -> bool {
        self.touching
    }

    /// Sets the stroke width; pointer hits are accepted within half of it.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.max(0.0);
    }

    /// Current stroke width.
    #[must_use]
    pub const fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    fn hit_radius(&self) -> f64 {
        self.stroke_width / 2.0
    }

    // --- Helper arrows --------------------------------------------------

    /// Places helper arrows on explicit intervals.
    pub fn set_helper_arrows(&mut self, spec: HelperSpec) {
        self.helpers = spec;
    }

    /// Tiles helper arrows `len` long, `gap` apart.
    pub fn set_helper_arrows_tiled(&mut self, len: f64, gap: f64) -> Result<(), TouchPathError> {
        self.helpers = HelperSpec::tiled(len, gap)?;
        Ok(())
    }

    /// Current helper arrow placement.
    #[must_use]
    pub fn helper_spec(&self) -> &HelperSpec {
        &self.helpers
    }

    /// Shows or hides helper arrows.
    ///
    /// Hiding them during the helper fade ends the animation on the next frame.
    pub fn set_helper_arrows_enabled(&mut self, enabled: bool) {
        self.flags.set(TouchPathFlags::HELPER_ARROWS, enabled);
    }

    /// Returns `true` if helper arrows are shown.
    #[must_use]
    pub const fn is_helper_arrows_enabled(&self) -> bool {
        self.flags.contains(TouchPathFlags::HELPER_ARROWS)
    }

    /// Helper arrows for the current path and step; empty when disabled or
    /// without a path.
    #[must_use]
    pub fn helper_arrows(&self) -> Vec<HelperArrow> {
        match &self.installed {
            Some(i) if self.is_helper_arrows_enabled() => {
                helper_arrows(&i.sampler, &self.helpers, self.step.get(), self.arrow_radius)
            }
            _ => Vec::new(),
        }
    }

    // --- Animation ------------------------------------------------------

    /// Starts the reveal animation at `now` (milliseconds, host clock).
    ///
    /// Cancels any running animation first. A zero `duration_ms` only cancels.
    pub fn animate(
        &mut self,
        duration_ms: u64,
        start_delay_ms: u64,
        interpolator: impl Interpolator + 'static,
        now: u64,
    ) -> AnimationId {
        self.animation
            .animate(duration_ms, start_delay_ms, interpolator, now)
    }

    /// Reveal duration that feels natural for the current path: half a
    /// millisecond per unit of length.
    #[must_use]
    pub fn suggested_reveal_duration(&self) -> u64 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "path lengths are far below u64::MAX milliseconds"
        )]
        let ms = (self.path_length() / 2.0) as u64;
        ms
    }

    /// Advances the animation to `now` and returns its state.
    pub fn on_frame(&mut self, now: u64) -> AnimationState {
        let helpers = self.is_helper_arrows_enabled();
        self.animation.tick(now, helpers)
    }

    /// Like [`on_frame`](Self::on_frame), but only while `id` names the
    /// running animation.
    ///
    /// Returns `None` for frames scheduled by an animation that has since
    /// been replaced or cancelled, leaving the state untouched.
    pub fn on_frame_for(&mut self, id: AnimationId, now: u64) -> Option<AnimationState> {
        let helpers = self.is_helper_arrows_enabled();
        self.animation.tick_for(id, now, helpers)
    }

    /// Animation state as of the last frame.
    #[must_use]
    pub const fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    /// Returns `true` while the reveal or helper fade is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_active()
    }

    // --- Pointer input --------------------------------------------------

    /// Routes `event` to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Outcome {
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(event.position),
            PointerPhase::Move => self.on_pointer_move(event.position),
            PointerPhase::Up => self.on_pointer_up(event.position),
        }
    }

    /// Installed state, if it currently accepts tracing input.
    fn accepting(&self) -> Option<&Installed> {
        if !self.is_enabled() || self.animation.is_active() {
            return None;
        }
        self.installed
            .as_ref()
            .filter(|i| !i.tracker.is_complete())
    }

    /// Starts a gesture if `position` lands on traced history.
    pub fn on_pointer_down(&mut self, position: Point) -> Outcome {
        let radius = self.hit_radius();
        let Some(installed) = self.accepting() else {
            return Outcome::Ignored;
        };
        let on_history = hit_any(installed.tracker.points(), position, radius).is_some();
        self.touching = on_history;
        if self.touching {
            log::debug!("touch started at {position:?}");
            self.emit(TouchPathEvent::TouchStarted);
            Outcome::Handled
        } else {
            log::trace!("pointer down off the traced path at {position:?}");
            Outcome::Ignored
        }
    }

    /// Advances one step if a gesture is active and `position` reaches the
    /// next point.
    ///
    /// Every move during a gesture is consumed, whether or not it advances.
    pub fn on_pointer_move(&mut self, position: Point) -> Outcome {
        if !self.touching {
            return Outcome::Ignored;
        }
        let radius = self.hit_radius();
        if self.accepting().is_none() {
            return Outcome::Ignored;
        }
        let Some(installed) = self.installed.as_mut() else {
            return Outcome::Ignored;
        };
        if hit(installed.tracker.next_point(), position, radius) {
            let progress = installed.tracker.advance(&installed.sampler);
            log::trace!("advanced to {progress:.3}");
            self.emit(TouchPathEvent::ProgressChanged(progress));
        }
        Outcome::Handled
    }

    /// Ends the gesture, if one is active.
    ///
    /// Like the other pointer events, this is ignored while the widget is
    /// disabled, animating or complete. The gesture is still closed then, but
    /// no [`TouchPathEvent::TouchStopped`] is sent.
    pub fn on_pointer_up(&mut self, position: Point) -> Outcome {
        let was_touching = core::mem::take(&mut self.touching);
        if self.accepting().is_none() {
            if was_touching {
                log::trace!("pointer up at {position:?} while not accepting input");
            }
            return Outcome::Ignored;
        }
        if !was_touching {
            return Outcome::Ignored;
        }
        log::debug!("touch stopped at {position:?}");
        self.emit(TouchPathEvent::TouchStopped);
        Outcome::Handled
    }

    // --- Rendering ------------------------------------------------------

    /// What to draw right now.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let Some(installed) = &self.installed else {
            return Scene::Empty;
        };
        let arrow_opacity = match self.animation.state() {
            AnimationState::Drawing(v) => {
                return Scene::Reveal {
                    path: installed.sampler.sub_path(0.0, v),
                };
            }
            AnimationState::HelperFade(v) => (v - 1.0).clamp(0.0, 1.0),
            AnimationState::Idle => 1.0,
        };
        let progress = installed.tracker.progress();
        Scene::Trace(TraceScene {
            path: installed.sampler.path().clone(),
            touching: self.touching,
            arrows: self.helper_arrows(),
            arrow_opacity,
            traced: (progress > 0.0).then(|| installed.sampler.sub_path(0.0, progress)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Linear;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    fn horizontal() -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 0.0));
        path
    }

    /// A widget on the 100 unit horizontal line, step 0.25, hit radius 5.
    fn widget() -> (TouchPath, Rc<RefCell<Vec<TouchPathEvent>>>) {
        let mut tp = TouchPath::with_config(TouchPathConfig {
            step: 0.25,
            stroke_width: 10.0,
            ..TouchPathConfig::default()
        })
        .unwrap();
        tp.set_path(horizontal(), false);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        tp.set_listener(move |ev: TouchPathEvent| sink.borrow_mut().push(ev));
        (tp, events)
    }

    #[test]
    fn tracing_scenario() {
        let (mut tp, events) = widget();
        assert_eq!(tp.points(), &[Point::new(0.0, 0.0)]);
        assert_eq!(tp.next_point(), Some(Point::new(25.0, 0.0)));

        // The next point is not traced yet, so it cannot start a gesture.
        assert_eq!(tp.on_pointer_down(Point::new(25.0, 0.0)), Outcome::Ignored);
        assert!(!tp.is_touching());

        assert_eq!(tp.on_pointer_down(Point::new(0.0, 0.0)), Outcome::Handled);
        assert!(tp.is_touching());

        assert_eq!(tp.on_pointer_move(Point::new(25.0, 0.0)), Outcome::Handled);
        assert_eq!(tp.progress(), 0.25);
        assert_eq!(tp.points(), &[Point::new(0.0, 0.0), Point::new(25.0, 0.0)]);
        assert_eq!(tp.next_point(), Some(Point::new(50.0, 0.0)));

        assert_eq!(tp.on_pointer_up(Point::new(25.0, 0.0)), Outcome::Handled);
        assert_eq!(
            *events.borrow(),
            vec![
                TouchPathEvent::TouchStarted,
                TouchPathEvent::ProgressChanged(0.25),
                TouchPathEvent::TouchStopped,
            ]
        );
    }

    #[test]
    fn large_radius_reaches_ahead() {
        let (mut tp, _) = widget();
        tp.set_stroke_width(50.0);
        assert_eq!(tp.on_pointer_down(Point::new(25.0, 0.0)), Outcome::Handled);
    }

    #[test]
    fn new_target_is_not_a_start_point() {
        let (mut tp, _) = widget();
        tp.on_pointer_down(Point::new(0.0, 0.0));
        tp.on_pointer_move(Point::new(25.0, 0.0));
        tp.on_pointer_up(Point::new(25.0, 0.0));

        assert_eq!(tp.on_pointer_down(Point::new(50.0, 0.0)), Outcome::Ignored);
        // Resuming from any traced point works.
        assert_eq!(tp.on_pointer_down(Point::new(24.0, 2.0)), Outcome::Handled);
    }

    #[test]
    fn moves_off_target_are_consumed_without_progress() {
        let (mut tp, events) = widget();
        assert_eq!(tp.on_pointer_move(Point::new(25.0, 0.0)), Outcome::Ignored);
        tp.on_pointer_down(Point::new(0.0, 0.0));
        assert_eq!(tp.on_pointer_move(Point::new(12.0, 0.0)), Outcome::Handled);
        // Jumping two steps ahead does not count.
        assert_eq!(tp.on_pointer_move(Point::new(50.0, 0.0)), Outcome::Handled);
        assert_eq!(tp.progress(), 0.0);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn up_without_gesture_is_ignored() {
        let (mut tp, events) = widget();
        assert_eq!(tp.on_pointer_up(Point::ZERO), Outcome::Ignored);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn completing_the_path_blocks_all_input() {
        let (mut tp, events) = widget();
        tp.on_pointer_down(Point::new(0.0, 0.0));
        for x in [25.0, 50.0, 75.0, 100.0] {
            tp.handle_pointer(PointerEvent::moved((x, 0.0)));
        }
        assert_eq!(tp.progress(), 1.0);
        assert_eq!(tp.points().len(), 5);
        assert_eq!(
            tp.handle_pointer(PointerEvent::moved((100.0, 0.0))),
            Outcome::Ignored
        );
        assert_eq!(
            tp.handle_pointer(PointerEvent::up((100.0, 0.0))),
            Outcome::Ignored
        );
        assert!(!tp.is_touching());
        assert_eq!(
            tp.handle_pointer(PointerEvent::down((0.0, 0.0))),
            Outcome::Ignored
        );
        assert_eq!(
            events.borrow().last(),
            Some(&TouchPathEvent::ProgressChanged(1.0))
        );
        assert_eq!(events.borrow().len(), 5);
    }

    #[test]
    fn pointer_up_while_animating_is_ignored() {
        let (mut tp, events) = widget();
        tp.on_pointer_down(Point::ZERO);
        tp.animate(1000, 0, Linear, 0);
        assert_eq!(tp.on_pointer_up(Point::ZERO), Outcome::Ignored);
        assert!(!tp.is_touching());
        assert_eq!(*events.borrow(), vec![TouchPathEvent::TouchStarted]);
    }

    #[test]
    fn pointer_up_while_disabled_is_ignored() {
        let (mut tp, events) = widget();
        tp.on_pointer_down(Point::ZERO);
        tp.set_enabled(false);
        assert_eq!(tp.on_pointer_up(Point::ZERO), Outcome::Ignored);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn disabled_widget_passes_everything_through() {
        let (mut tp, events) = widget();
        tp.set_enabled(false);
        assert_eq!(tp.on_pointer_down(Point::ZERO), Outcome::Ignored);
        assert!(events.borrow().is_empty());
        tp.set_enabled(true);
        assert_eq!(tp.on_pointer_down(Point::ZERO), Outcome::Handled);
    }

    #[test]
    fn input_is_ignored_while_animating() {
        let (mut tp, _) = widget();
        tp.animate(1000, 0, Linear, 0);
        assert_eq!(tp.on_pointer_down(Point::ZERO), Outcome::Ignored);
        assert_eq!(tp.on_frame(1000), AnimationState::HelperFade(1.0));
        assert_eq!(tp.on_pointer_down(Point::ZERO), Outcome::Ignored);
        assert_eq!(tp.on_frame(1300), AnimationState::Idle);
        assert_eq!(tp.on_pointer_down(Point::ZERO), Outcome::Handled);
    }

    #[test]
    fn frames_of_a_replaced_animation_are_dropped() {
        let (mut tp, _) = widget();
        let first = tp.animate(1000, 0, Linear, 0);
        assert_eq!(tp.on_frame_for(first, 500), Some(AnimationState::Drawing(0.5)));

        let second = tp.animate(1000, 0, Linear, 600);
        assert_eq!(tp.on_frame_for(first, 1000), None);
        assert_eq!(tp.animation_state(), AnimationState::Drawing(0.0));
        assert_eq!(tp.on_frame_for(second, 1100), Some(AnimationState::Drawing(0.5)));
    }

    #[test]
    fn disabling_arrows_mid_fade_goes_idle() {
        let (mut tp, _) = widget();
        tp.animate(100, 0, Linear, 0);
        tp.on_frame(100);
        assert_eq!(tp.on_frame(150), AnimationState::HelperFade(1.0 + 50.0 / 300.0));
        tp.set_helper_arrows_enabled(false);
        assert_eq!(tp.on_frame(160), AnimationState::Idle);
    }

    #[test]
    fn set_progress_round_trips_clamped() {
        let (mut tp, events) = widget();
        for (input, expected) in [(0.4, 0.4), (1.7, 1.0), (-0.2, 0.0), (0.75, 0.75)] {
            tp.set_progress(input);
            assert_eq!(tp.progress(), expected);
        }
        assert_eq!(tp.current_position(), Some(Point::new(75.0, 0.0)));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn invalid_step_leaves_state_alone() {
        let (mut tp, _) = widget();
        assert_eq!(tp.set_step(1.0), Err(TouchPathError::InvalidStep(1.0)));
        assert_eq!(tp.set_step(-0.5), Err(TouchPathError::InvalidStep(-0.5)));
        assert_eq!(tp.step().get(), 0.25);
        assert!(tp.set_step(0.5).is_ok());
        assert_eq!(tp.config().step, 0.5);
        assert!(TouchPath::with_config(TouchPathConfig {
            step: 0.0,
            ..TouchPathConfig::default()
        })
        .is_err());
    }

    #[test]
    fn set_path_and_reset_start_over() {
        let (mut tp, _) = widget();
        tp.on_pointer_down(Point::ZERO);
        tp.on_pointer_move(Point::new(25.0, 0.0));
        tp.animate(500, 0, Linear, 0);

        tp.reset();
        assert_eq!(tp.progress(), 0.0);
        assert_eq!(tp.points().len(), 1);
        assert!(!tp.is_touching());
        assert!(!tp.is_animating());
        assert_eq!(tp.path_length(), 100.0);
    }

    #[test]
    fn reset_without_path_is_a_no_op() {
        let mut tp = TouchPath::new();
        tp.reset();
        assert!(tp.path().is_none());
        assert_eq!(tp.current_position(), None);
        assert_eq!(tp.path_length(), 0.0);
        assert!(matches!(tp.scene(), Scene::Empty));
        assert_eq!(tp.on_pointer_down(Point::ZERO), Outcome::Ignored);
    }

    #[test]
    fn centering_follows_layout() {
        let mut tp = TouchPath::with_config(TouchPathConfig {
            step: 0.25,
            ..TouchPathConfig::default()
        })
        .unwrap();
        tp.set_path(horizontal(), true);
        tp.set_progress(0.5);
        tp.set_view_size(Size::new(300.0, 200.0));

        assert_eq!(tp.path().unwrap().elements(), horizontal().elements());
        assert_eq!(tp.progress(), 0.5);
        assert_eq!(tp.points()[0], Point::new(100.0, 100.0));
        assert_eq!(tp.current_position(), Some(Point::new(150.0, 100.0)));
        assert_eq!(tp.next_point(), Some(Point::new(175.0, 100.0)));
    }

    #[test]
    fn uncentered_paths_ignore_layout() {
        let (mut tp, _) = widget();
        tp.set_view_size(Size::new(300.0, 200.0));
        assert_eq!(tp.points()[0], Point::ZERO);
    }

    #[test]
    fn scene_follows_animation_and_progress() {
        let (mut tp, _) = widget();
        tp.set_helper_arrows(HelperSpec::new([(0.1, 0.3)]));

        let Scene::Trace(idle) = tp.scene() else {
            panic!("expected trace scene");
        };
        assert!(idle.traced.is_none());
        assert_eq!(idle.arrows.len(), 1);
        assert_eq!(idle.arrow_opacity, 1.0);

        tp.animate(100, 0, Linear, 0);
        tp.on_frame(50);
        let Scene::Reveal { path } = tp.scene() else {
            panic!("expected reveal scene");
        };
        assert!((PathSampler::new(path).length() - 50.0).abs() < 1e-9);

        tp.on_frame(100);
        tp.on_frame(250);
        let Scene::Trace(fading) = tp.scene() else {
            panic!("expected trace scene");
        };
        assert!((fading.arrow_opacity - 0.5).abs() < 1e-12);

        tp.on_frame(400);
        tp.set_progress(0.5);
        tp.set_helper_arrows_enabled(false);
        let Scene::Trace(traced) = tp.scene() else {
            panic!("expected trace scene");
        };
        assert!(traced.arrows.is_empty());
        let traced = PathSampler::new(traced.traced.unwrap());
        assert!((traced.length() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn suggested_duration_is_half_the_length() {
        let (tp, _) = widget();
        assert_eq!(tp.suggested_reveal_duration(), 50);
    }
}
