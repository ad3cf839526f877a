// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// Errors raised synchronously by setters that reject their input.
///
/// Whenever one of these is returned the receiver is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TouchPathError {
    /// The step must be a finite value in `(0, 1)`.
    #[error("the step must be between 0.0 and 1.0 (exclusive), got {0}")]
    InvalidStep(f64),
    /// Helper arrow tiling needs a positive arrow length and a non-negative gap.
    #[error("invalid helper arrow tiling: len {len}, gap {gap}")]
    InvalidHelperTiling {
        /// Requested arrow length, as a fraction of the path.
        len: f64,
        /// Requested gap between arrows, as a fraction of the path.
        gap: f64,
    },
}
