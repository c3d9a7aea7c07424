// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and zoom controller driven by pointer and wheel input.
//!
//! A [`Viewport`] owns a [`Dragger`] for the pan center and a zoom scalar.
//! One pointer pans, two pointers pinch-zoom, and the wheel zooms
//! exponentially. Pointer positions are taken relative to the surface and
//! negated, so the center moves against the pointer and the content appears
//! to follow it.
//!
//! Event handling only records state. Call [`Viewport::update`] once per
//! frame to advance momentum and read the result.

use alloc::collections::BTreeMap;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::clock::Clock;
use crate::dragger::{DragOptions, Dragger, usable_zoom};
use crate::error::OptionsError;
use crate::input::{
    EventKind, EventResponse, InputEvent, InputSurface, ListenerScope, PointerEvent, PointerId,
};

/// Listeners registered by [`Viewport::attach`].
///
/// Releases are taken from the whole window so a drag that leaves the
/// surface still ends.
const LISTENERS: [(ListenerScope, EventKind); 4] = [
    (ListenerScope::Surface, EventKind::Wheel),
    (ListenerScope::Surface, EventKind::PointerDown),
    (ListenerScope::Surface, EventKind::PointerMove),
    (ListenerScope::Window, EventKind::PointerUp),
];

/// Tuning for [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportOptions {
    /// Pan momentum tuning.
    pub drag: DragOptions,
    /// Zoom doubles for every `1 / wheel_speed` units of upward scroll.
    pub wheel_speed: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            drag: DragOptions::default(),
            wheel_speed: 0.001,
        }
    }
}

impl ViewportOptions {
    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.drag.validate()?;
        if !self.wheel_speed.is_finite() {
            return Err(OptionsError::WheelSpeed(self.wheel_speed));
        }
        Ok(())
    }
}

/// Pan center and zoom, as consumed by a view camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Pan center in pointer pixels divided by zoom.
    pub center: Point,
    /// Zoom factor.
    pub zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Attachment {
    previous_capture: bool,
}

/// Pointer-driven pan and pinch-zoom state.
///
/// ```
/// use kurbo::{Point, Rect};
/// use viewdraw_viewport::{HeadlessInput, InputEvent, ManualClock, PointerEvent, Viewport};
///
/// let clock = ManualClock::new(0.0);
/// let mut input = HeadlessInput::new(Rect::new(0.0, 0.0, 200.0, 200.0));
/// let mut viewport = Viewport::new(&clock);
/// viewport.attach(&mut input);
///
/// viewport.handle_event(&input, &InputEvent::PointerDown(PointerEvent::new(1, Point::new(50.0, 50.0))));
/// viewport.handle_event(&input, &InputEvent::PointerMove(PointerEvent::new(1, Point::new(80.0, 50.0))));
/// clock.advance(200.0);
/// viewport.handle_event(&input, &InputEvent::PointerUp(PointerEvent::new(1, Point::new(80.0, 50.0))));
///
/// // The center moved against the pointer.
/// assert_eq!(viewport.update().center, Point::new(-30.0, 0.0));
///
/// viewport.detach(&mut input);
/// assert!(input.listeners().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Viewport<C> {
    options: ViewportOptions,
    dragger: Dragger<C>,
    state: ViewportState,
    pointers: BTreeMap<PointerId, Point>,
    pinching: bool,
    pinch_start: f64,
    zoom_start: f64,
    attachment: Option<Attachment>,
}

impl<C: Clock> Viewport<C> {
    /// A detached viewport at the origin with zoom `1.0` and default options.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::from_parts(ViewportOptions::default(), Dragger::new(clock))
    }

    /// A detached viewport with validated `options`.
    pub fn with_options(clock: C, options: ViewportOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        let dragger = Dragger::with_options(clock, options.drag)?;
        Ok(Self::from_parts(options, dragger))
    }

    fn from_parts(options: ViewportOptions, dragger: Dragger<C>) -> Self {
        Self {
            options,
            dragger,
            state: ViewportState::default(),
            pointers: BTreeMap::new(),
            pinching: false,
            pinch_start: 0.0,
            zoom_start: 1.0,
            attachment: None,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> ViewportOptions {
        self.options
    }

    /// The pan controller.
    #[must_use]
    pub fn dragger(&self) -> &Dragger<C> {
        &self.dragger
    }

    /// Last state produced by [`update`](Self::update), with the current
    /// zoom.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Moves the pan center.
    pub fn set_center(&mut self, center: Point) {
        self.dragger.set(center);
        self.state.center = center;
    }

    /// Sets the zoom factor. Values that are not positive and finite are
    /// ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.apply_zoom(zoom);
    }

    fn apply_zoom(&mut self, zoom: f64) {
        if usable_zoom(zoom) {
            self.state.zoom = zoom;
        } else {
            tracing::warn!(zoom, "ignoring unusable zoom");
        }
    }

    /// Returns `true` from the moment a second pointer goes down until every
    /// pointer has lifted. Single-finger panning stays off for that whole
    /// span.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` between [`attach`](Self::attach) and
    /// [`detach`](Self::detach).
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Registers the viewport's listeners and captures touch gestures.
    /// Attaching twice is a no-op.
    pub fn attach<S: InputSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.attachment.is_some() {
            return;
        }
        for (scope, kind) in LISTENERS {
            surface.add_listener(scope, kind);
        }
        let previous_capture = surface.set_capture_gestures(true);
        self.attachment = Some(Attachment { previous_capture });
        tracing::debug!(previous_capture, "viewport attached");
    }

    /// Removes everything [`attach`](Self::attach) registered, restores the
    /// previous gesture setting, and forgets pointers that are still down.
    pub fn detach<S: InputSurface + ?Sized>(&mut self, surface: &mut S) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };
        for (scope, kind) in LISTENERS {
            surface.remove_listener(scope, kind);
        }
        surface.set_capture_gestures(attachment.previous_capture);
        self.pointers.clear();
        self.pinching = false;
        self.pinch_start = 0.0;
        self.dragger.cancel();
        tracing::debug!("viewport detached");
    }

    /// Applies one input event. Events arriving while detached are ignored.
    pub fn handle_event<S: InputSurface + ?Sized>(
        &mut self,
        surface: &S,
        event: &InputEvent,
    ) -> EventResponse {
        if self.attachment.is_none() {
            return EventResponse::default();
        }
        match *event {
            InputEvent::Wheel { delta_y } => {
                let base: f64 = 2.0;
                let factor = base.powf(-delta_y * self.options.wheel_speed);
                self.apply_zoom(self.state.zoom * factor);
                tracing::trace!(zoom = self.state.zoom, "wheel zoom");
                return EventResponse {
                    prevent_default: true,
                };
            }
            InputEvent::PointerDown(e) => {
                let pos = local_pos(surface, e);
                self.pointer_down(e.pointer_id, pos);
            }
            InputEvent::PointerMove(e) => {
                let pos = local_pos(surface, e);
                self.pointer_move(e.pointer_id, pos);
            }
            InputEvent::PointerUp(e) => {
                let pos = local_pos(surface, e);
                self.pointer_up(e.pointer_id, pos);
            }
        }
        EventResponse::default()
    }

    /// Advances pan momentum and returns the current state.
    pub fn update(&mut self) -> ViewportState {
        self.state.center = self.dragger.update();
        self.state
    }

    fn pointer_down(&mut self, id: PointerId, pos: Point) {
        self.pointers.insert(id, pos);
        match self.pointers.len() {
            1 => self.dragger.start(pos),
            2 if !self.pinching => {
                // Re-anchor on the new contact so stopping cannot jump or flick.
                self.dragger.start(pos);
                self.dragger.stop(pos, self.state.zoom);
                self.pinching = true;
                self.pinch_zoom();
                tracing::debug!(zoom = self.state.zoom, "pinch started");
            }
            _ => {}
        }
    }

    fn pointer_move(&mut self, id: PointerId, pos: Point) {
        let Some(slot) = self.pointers.get_mut(&id) else {
            return;
        };
        *slot = pos;
        if self.pinching {
            self.pinch_zoom();
        } else {
            self.dragger.drag(pos, self.state.zoom);
        }
    }

    fn pointer_up(&mut self, id: PointerId, pos: Point) {
        if self.pointers.remove(&id).is_none() {
            return;
        }
        self.pinch_start = 0.0;
        if !self.pinching {
            self.dragger.stop(pos, self.state.zoom);
        } else if self.pointers.is_empty() {
            self.pinching = false;
            tracing::debug!(zoom = self.state.zoom, "pinch ended");
        }
    }

    fn pinch_zoom(&mut self) {
        let mut contacts = self.pointers.values();
        let (Some(a), Some(b), None) = (contacts.next(), contacts.next(), contacts.next()) else {
            return;
        };
        let d = a.distance(*b);
        if d == 0.0 {
            tracing::trace!("skipping pinch sample with coincident contacts");
            return;
        }
        if self.pinch_start > 0.0 {
            self.apply_zoom(self.zoom_start * d / self.pinch_start);
        } else {
            self.pinch_start = d;
            self.zoom_start = self.state.zoom;
        }
    }
}

/// Negated position relative to the surface's top-left corner.
fn local_pos<S: InputSurface + ?Sized>(surface: &S, event: PointerEvent) -> Point {
    let origin = surface.client_rect().origin();
    Point::new(origin.x - event.page_pos.x, origin.y - event.page_pos.y)
}
