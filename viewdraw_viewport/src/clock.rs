// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time sources for drag velocity and momentum.
//!
//! Timestamps are milliseconds as `f64`, relative to an arbitrary origin
//! fixed per clock. Only differences between readings are meaningful.

use core::cell::Cell;

/// A monotonic millisecond clock.
pub trait Clock {
    /// Current time in milliseconds.
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// A clock that only moves when told to.
///
/// Interior mutability lets a test or headless driver keep a shared
/// reference while a [`Dragger`](crate::Dragger) reads it:
///
/// ```
/// use viewdraw_viewport::{Clock, ManualClock};
///
/// let clock = ManualClock::new(0.0);
/// let shared = &clock;
/// clock.advance(16.0);
/// assert_eq!(shared.now(), 16.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// A clock reading `start`.
    #[must_use]
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jumps to `now`.
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    /// Moves forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Wall clock backed by [`std::time::Instant`], reading zero at creation.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Starts a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
