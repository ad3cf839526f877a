// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the host should draw for the current state.

use alloc::vec::Vec;

use kurbo::BezPath;

use crate::HelperArrow;

/// Snapshot of everything a renderer needs, in path coordinates.
///
/// Strokes are expected to use the widget's stroke width with round caps and
/// joins; helper arrows use the host's own, thinner, arrow stroke.
#[derive(Clone, Debug, Default)]
pub enum Scene {
    /// No path installed; draw nothing.
    #[default]
    Empty,
    /// The reveal animation is running: draw only this part of the path.
    Reveal {
        /// The revealed part, from the start of the path.
        path: BezPath,
    },
    /// Regular tracing view.
    Trace(TraceScene),
}

/// The regular, non-revealing view of the widget.
#[derive(Clone, Debug)]
pub struct TraceScene {
    /// The whole (possibly centered) path, drawn underneath everything.
    pub path: BezPath,
    /// Whether a tracing gesture is in progress; hosts usually tint `path`.
    pub touching: bool,
    /// Helper arrows, empty when they are disabled.
    pub arrows: Vec<HelperArrow>,
    /// Opacity multiplier for `arrows`, in `[0, 1]`.
    pub arrow_opacity: f64,
    /// The traced part, present once progress is above zero.
    pub traced: Option<BezPath>,
}
