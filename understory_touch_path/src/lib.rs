// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Touch Path: trace a path with a pointer.
//!
//! This crate is the state core of a "trace the shape" widget. The user puts
//! a pointer down somewhere on the part of the path they already traced and
//! drags it along; every time the pointer reaches the next sample point,
//! progress moves one step forward. A time-driven reveal animation can draw
//! the path in first, followed by a fade-in of small chevrons that show the
//! direction of travel.
//!
//! The crate does not draw, schedule timers, or own an event loop. Host
//! frameworks are responsible for:
//!
//! - forwarding single-pointer events in the path's coordinate space
//!   ([`TouchPath::handle_pointer`]) and running their default handling when
//!   the result is [`Outcome::Ignored`],
//! - feeding frame timestamps while an animation runs ([`TouchPath::on_frame`]),
//! - reporting the view size so paths can be centered ([`TouchPath::set_view_size`]),
//! - drawing the [`Scene`] returned by [`TouchPath::scene`].
//!
//! # Key types
//!
//! - [`TouchPath`] – the controller owning path, progress, gesture and animation state.
//! - [`ProgressTracker`] – progress in `[0, 1]`, traced history and the next target.
//! - [`hit`] – stroke-width tolerant pointer hit tests.
//! - [`HelperSpec`] / [`HelperArrow`] – where the direction chevrons go and
//!   their geometry.
//! - [`animation::AnimationDriver`] – the reveal → helper-fade state machine.
//! - [`TouchPathListener`] – progress-changed / touch-started / touch-stopped callbacks.
//!
//! Arc-length sampling itself lives in [`understory_arclen`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{BezPath, Point};
//! use understory_touch_path::{
//!     Outcome, PointerEvent, TouchPath, TouchPathConfig, TouchPathEvent,
//! };
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((100.0, 0.0));
//!
//! let mut touch = TouchPath::with_config(TouchPathConfig {
//!     step: 0.25,
//!     stroke_width: 10.0,
//!     ..TouchPathConfig::default()
//! })
//! .unwrap();
//! touch.set_path(path, false);
//! touch.set_listener(|event: TouchPathEvent| println!("{event:?}"));
//!
//! // The next target (25, 0) has not been traced yet, so it can't start a gesture.
//! assert_eq!(touch.handle_pointer(PointerEvent::down((25.0, 0.0))), Outcome::Ignored);
//!
//! // Start on the traced start point and drag to the target.
//! assert!(touch.handle_pointer(PointerEvent::down((0.0, 0.0))).is_handled());
//! touch.handle_pointer(PointerEvent::moved((25.0, 0.0)));
//! assert_eq!(touch.progress(), 0.25);
//! assert_eq!(touch.next_point(), Some(Point::new(50.0, 0.0)));
//! touch.handle_pointer(PointerEvent::up((25.0, 0.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
mod arrows;
mod config;
mod error;
pub mod hit;
mod listener;
mod progress;
mod scene;
mod touch_path;

pub use arrows::{ARROW_HALF_SPREAD, HelperArrow, HelperSpec, helper_arrows};
pub use config::{Step, TouchPathConfig, TouchPathFlags};
pub use error::TouchPathError;
pub use listener::{TouchPathEvent, TouchPathListener};
pub use progress::ProgressTracker;
pub use scene::{Scene, TraceScene};
pub use touch_path::{Outcome, PointerEvent, PointerPhase, TouchPath};
