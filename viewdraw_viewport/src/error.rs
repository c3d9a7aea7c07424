// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Rejected drag or viewport configuration.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    /// Friction must lie strictly between zero and one.
    #[error("friction must be in (0, 1), got {0}")]
    Friction(f64),
    /// Threshold must be finite and positive.
    #[error("threshold must be finite and positive, got {0}")]
    Threshold(f64),
    /// Flick limits must be finite and non-negative.
    #[error("flick limits must be finite and non-negative, got min {min} and max {max}")]
    NegativeFlick {
        /// Configured `min_flick`.
        min: f64,
        /// Configured `max_flick`.
        max: f64,
    },
    /// `min_flick` exceeds `max_flick`.
    #[error("min_flick ({min}) exceeds max_flick ({max})")]
    FlickOrder {
        /// Configured `min_flick`.
        min: f64,
        /// Configured `max_flick`.
        max: f64,
    },
    /// Wheel speed must be finite.
    #[error("wheel speed must be finite, got {0}")]
    WheelSpeed(f64),
}
