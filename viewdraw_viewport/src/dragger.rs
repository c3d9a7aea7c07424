// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller with flick momentum.
//!
//! ## Usage
//!
//! 1) Call [`Dragger::start`] with the pointer position when a drag begins.
//!    The current position becomes the base the drag is measured from.
//! 2) On each move, call [`Dragger::drag`]; the position follows the pointer
//!    offset divided by the zoom factor.
//! 3) On release, call [`Dragger::stop`]. The release position is applied
//!    as a last move. A quick release hands that movement over as a flick
//!    velocity; a release after the pointer lingered does not.
//! 4) Call [`Dragger::update`] once per frame. It advances momentum while not
//!    dragging and returns the current position.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use viewdraw_viewport::{DragPhase, Dragger, ManualClock};
//!
//! let clock = ManualClock::new(0.0);
//! let mut dragger = Dragger::new(&clock);
//!
//! dragger.start(Point::new(0.0, 0.0));
//! clock.advance(16.0);
//! dragger.drag(Point::new(30.0, 0.0), 1.0);
//! assert_eq!(dragger.position(), Point::new(30.0, 0.0));
//!
//! // Released straight away: the content keeps sliding.
//! dragger.stop(Point::new(30.0, 0.0), 1.0);
//! assert_eq!(dragger.phase(), DragPhase::Coasting);
//! clock.advance(16.0);
//! dragger.update();
//! clock.advance(16.0);
//! assert!(dragger.update().x > 30.0);
//! ```

use kurbo::{Point, Vec2};

use crate::clock::Clock;
use crate::error::OptionsError;

/// Shortest interval credited to a drag step, in milliseconds.
const MIN_DRAG_DT: f64 = 20.0;
/// A release this long after the last move carries no flick.
const LINGER_MS: f64 = 50.0;
/// Release velocity gain applied to the last step's displacement.
const FLICK_GAIN: f64 = 4.0;

/// Tuning for [`Dragger`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragOptions {
    /// Fraction of velocity lost per momentum step.
    pub friction: f64,
    /// Momentum stops once speed falls below this fraction of the release
    /// speed.
    pub threshold: f64,
    /// Release displacements shorter than this (in pointer pixels) carry no
    /// flick.
    pub min_flick: f64,
    /// Release displacements are clamped to this length (in pointer pixels).
    pub max_flick: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            friction: 0.02,
            threshold: 1e-3,
            min_flick: 0.1,
            max_flick: 8.0,
        }
    }
}

impl DragOptions {
    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.friction.is_nan() || self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(OptionsError::Friction(self.friction));
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(OptionsError::Threshold(self.threshold));
        }
        let (min, max) = (self.min_flick, self.max_flick);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
            return Err(OptionsError::NegativeFlick { min, max });
        }
        if min > max {
            return Err(OptionsError::FlickOrder { min, max });
        }
        Ok(())
    }
}

/// Where a [`Dragger`] is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// At rest.
    #[default]
    Idle,
    /// Between [`Dragger::start`] and [`Dragger::stop`].
    Dragging,
    /// Released with a flick; momentum is decaying.
    Coasting,
}

/// Tracks a dragged position and the momentum left after release.
#[derive(Clone, Debug)]
pub struct Dragger<C> {
    clock: C,
    options: DragOptions,
    pos: Point,
    /// Position before the most recent drag step.
    last_pos: Point,
    base: Point,
    anchor: Point,
    last_pointer: Point,
    velocity: Vec2,
    release_speed: f64,
    dragging: bool,
    last_drag_time: f64,
    drag_dt: f64,
    last_update: Option<f64>,
}

impl<C: Clock> Dragger<C> {
    /// A dragger at the origin with default options.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            options: DragOptions::default(),
            pos: Point::ORIGIN,
            last_pos: Point::ORIGIN,
            base: Point::ORIGIN,
            anchor: Point::ORIGIN,
            last_pointer: Point::ORIGIN,
            velocity: Vec2::ZERO,
            release_speed: 0.0,
            dragging: false,
            last_drag_time: 0.0,
            drag_dt: MIN_DRAG_DT,
            last_update: None,
        }
    }

    /// A dragger at the origin with validated `options`.
    pub fn with_options(clock: C, options: DragOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let mut dragger = Self::new(clock);
        dragger.options = options;
        Ok(dragger)
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> DragOptions {
        self.options
    }

    /// Replaces the options, leaving them unchanged on error.
    pub fn set_options(&mut self, options: DragOptions) -> Result<(), OptionsError> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// The time source.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.dragging {
            DragPhase::Dragging
        } else if self.velocity != Vec2::ZERO {
            DragPhase::Coasting
        } else {
            DragPhase::Idle
        }
    }

    /// Returns `true` between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current position, without advancing momentum.
    #[must_use]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Current momentum in position units per millisecond.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Begins a drag anchored at `anchor`, halting any momentum.
    pub fn start(&mut self, anchor: Point) {
        self.dragging = true;
        self.anchor = anchor;
        self.last_pointer = anchor;
        self.base = self.pos;
        self.last_pos = self.pos;
        self.velocity = Vec2::ZERO;
        self.release_speed = 0.0;
        self.last_drag_time = self.clock.now();
        self.drag_dt = MIN_DRAG_DT;
    }

    /// Moves the position to follow `pointer`. Ignored unless dragging, or
    /// when `zoom` is not a positive finite number.
    pub fn drag(&mut self, pointer: Point, zoom: f64) {
        if !self.dragging {
            return;
        }
        if !usable_zoom(zoom) {
            tracing::warn!(zoom, "ignoring drag at unusable zoom");
            return;
        }
        let now = self.clock.now();
        self.step(pointer, zoom, now);
    }

    fn step(&mut self, pointer: Point, zoom: f64, now: f64) {
        self.last_pos = self.pos;
        self.pos = self.base + (pointer - self.anchor) / zoom;
        self.drag_dt = (now - self.last_drag_time).max(MIN_DRAG_DT);
        self.last_drag_time = now;
        self.last_pointer = pointer;
    }

    /// Ends the drag at `pointer` and computes the release velocity.
    ///
    /// The release position is applied as a final move whenever it differs
    /// from the last dragged pointer. No flick is produced when more than
    /// 50 ms passed between the last move and the release, or when the last
    /// step was shorter than `min_flick / zoom`. Longer steps are clamped to
    /// `max_flick / zoom` before being turned into a velocity. A `zoom` that
    /// is not a positive finite number ends the drag where it is.
    pub fn stop(&mut self, pointer: Point, zoom: f64) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.velocity = Vec2::ZERO;
        self.release_speed = 0.0;
        if !usable_zoom(zoom) {
            tracing::warn!(zoom, "ending drag at unusable zoom");
            return;
        }

        let now = self.clock.now();
        let idle_ms = now - self.last_drag_time;
        if pointer != self.last_pointer {
            self.step(pointer, zoom, now);
        }
        if idle_ms > LINGER_MS {
            tracing::trace!(idle_ms, "drag released after lingering");
            return;
        }

        let mut delta = self.pos - self.last_pos;
        let len = delta.hypot();
        let min = self.options.min_flick / zoom;
        let max = self.options.max_flick / zoom;
        if len == 0.0 || len < min {
            return;
        }
        if len > max {
            delta *= max / len;
        }
        self.velocity = delta * (FLICK_GAIN / self.drag_dt);
        self.release_speed = self.velocity.hypot();
        tracing::debug!(
            vx = self.velocity.x,
            vy = self.velocity.y,
            "flick released"
        );
    }

    /// Advances momentum to the current time and returns the position.
    ///
    /// Momentum only runs while not dragging. The first call after
    /// construction uses an elapsed time of zero.
    pub fn update(&mut self) -> Point {
        let now = self.clock.now();
        let dt = self.last_update.map_or(0.0, |last| now - last);
        if !self.dragging {
            self.coast(dt);
        }
        self.last_update = Some(now);
        self.pos
    }

    fn coast(&mut self, dt: f64) {
        if self.velocity == Vec2::ZERO {
            return;
        }
        self.pos += self.velocity * dt;
        let speed2 = self.velocity.hypot2();
        let decayed = self.velocity - self.velocity * self.options.friction;
        let threshold = self.options.threshold;
        let ratio = decayed.hypot2() / (self.release_speed * self.release_speed);
        if ratio < threshold * threshold || decayed.hypot2() >= speed2 {
            self.velocity = Vec2::ZERO;
            tracing::debug!(x = self.pos.x, y = self.pos.y, "momentum settled");
        } else {
            self.velocity = decayed;
        }
    }

    /// Abandons a drag without producing a flick.
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.velocity = Vec2::ZERO;
        self.release_speed = 0.0;
    }

    /// Overrides the position. Drag and momentum state are left as they are.
    pub fn set(&mut self, pos: Point) {
        self.pos = pos;
    }
}

/// Zoom factors a pointer offset can be divided by.
pub(crate) fn usable_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}
