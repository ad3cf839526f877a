// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables and widget flags.

use crate::TouchPathError;

/// Progress granularity: how far one qualifying pointer move advances, and
/// how densely traced history is recorded.
///
/// Always finite and strictly inside `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Step(f64);

impl Step {
    /// One percent of the path per step.
    pub const DEFAULT: Self = Self(0.01);

    /// Validates `value` as a step.
    pub fn new(value: f64) -> Result<Self, TouchPathError> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(TouchPathError::InvalidStep(value))
        }
    }

    /// The raw fraction.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Step {
    type Error = TouchPathError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Construction-time settings for a [`TouchPath`](crate::TouchPath).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPathConfig {
    /// Initial step, validated by [`TouchPath::with_config`](crate::TouchPath::with_config).
    pub step: f64,
    /// Width of the traced stroke. Pointer hits are accepted within half of it.
    pub stroke_width: f64,
    /// Length of each helper arrow wing.
    pub arrow_radius: f64,
    /// Duration of the helper arrow fade-in that follows the reveal, in milliseconds.
    pub helper_fade_ms: u64,
    /// Arc-length accuracy, in path units.
    pub accuracy: f64,
}

impl Default for TouchPathConfig {
    fn default() -> Self {
        Self {
            step: Step::DEFAULT.get(),
            stroke_width: 40.0,
            arrow_radius: 40.0,
            helper_fade_ms: 300,
            accuracy: understory_arclen::DEFAULT_ACCURACY,
        }
    }
}

bitflags::bitflags! {
    /// Widget-level switches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TouchPathFlags: u8 {
        /// Pointer input is considered at all.
        const ENABLED       = 0b0000_0001;
        /// Helper arrows are drawn, and faded in after a reveal.
        const HELPER_ARROWS = 0b0000_0010;
        /// Installed paths are centered in the view.
        const CENTER        = 0b0000_0100;
    }
}

impl Default for TouchPathFlags {
    fn default() -> Self {
        Self::ENABLED | Self::HELPER_ARROWS | Self::CENTER
    }
}
