// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Arclen: arc-length sampling of 2D paths.
//!
//! This crate answers "where along this path is fraction `t` of its length?"
//! for arbitrary [`kurbo::BezPath`]s made of lines, quadratics and cubics
//! (arcs are converted to cubics by `kurbo`). It is a small, pure building
//! block for interactions that walk along a path, such as tracing gestures,
//! text-on-path or progress indicators drawn on a curve.
//!
//! # Key types
//!
//! - [`PathSampler`] – measures a path once and answers position, tangent,
//!   length and sub-path queries by normalized offset.
//! - [`fit`] – helpers for placing a path inside a view.
//! - [`shapes`] – a couple of ready-made paths for demos and tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{BezPath, Point};
//! use understory_arclen::PathSampler;
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((100.0, 0.0));
//! path.line_to((100.0, 100.0));
//!
//! let sampler = PathSampler::new(path);
//! assert_eq!(sampler.length(), 200.0);
//! // Three quarters of the way along is halfway down the second leg.
//! assert!(sampler.position(0.75).distance(Point::new(100.0, 50.0)) < 1e-6);
//! // Direction of travel, estimated over the last 10% of the path.
//! let angle = sampler.tangent_angle(0.75, 0.1);
//! assert!((angle - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod fit;
mod sampler;
pub mod shapes;

pub use sampler::{DEFAULT_ACCURACY, PathSampler};
