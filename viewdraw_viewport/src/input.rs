// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral pointer input and the listener registry a host exposes.
//!
//! A host (a web canvas binding, a windowing toolkit, a test harness)
//! implements [`InputSurface`] so a [`Viewport`](crate::Viewport) can
//! announce which events it wants, and forwards matching [`InputEvent`]s to
//! [`Viewport::handle_event`](crate::Viewport::handle_event).

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Stable identifier of one pointer contact (mouse, pen, or touch point).
pub type PointerId = u64;

/// A pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Identifies the contact across down, move and up.
    pub pointer_id: PointerId,
    /// Position in page coordinates (CSS pixels).
    pub page_pos: Point,
}

impl PointerEvent {
    /// A sample for `pointer_id` at `page_pos`.
    #[must_use]
    pub fn new(pointer_id: PointerId, page_pos: Point) -> Self {
        Self {
            pointer_id,
            page_pos,
        }
    }
}

/// Input the viewport reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A contact was pressed over the surface.
    PointerDown(PointerEvent),
    /// A contact moved over the surface.
    PointerMove(PointerEvent),
    /// A contact was released anywhere in the window.
    PointerUp(PointerEvent),
    /// Wheel scroll over the surface.
    Wheel {
        /// Vertical scroll amount; positive scrolls down.
        delta_y: f64,
    },
}

impl InputEvent {
    /// The listener kind this event is delivered through.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown(_) => EventKind::PointerDown,
            Self::PointerMove(_) => EventKind::PointerMove,
            Self::PointerUp(_) => EventKind::PointerUp,
            Self::Wheel { .. } => EventKind::Wheel,
        }
    }
}

/// Kinds of listener a viewport registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// Wheel scroll.
    Wheel,
    /// Pointer pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Pointer released.
    PointerUp,
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerScope {
    /// Only events targeting the surface.
    Surface,
    /// Events anywhere in the host window, so releases outside the surface
    /// still end a drag.
    Window,
}

/// What the handler asks of the host after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default action (page scroll for wheels).
    pub prevent_default: bool,
}

/// Host side of the input contract.
pub trait InputSurface {
    /// Bounding rectangle of the surface in page coordinates.
    fn client_rect(&self) -> Rect;

    /// Starts delivering `kind` events from `scope`.
    fn add_listener(&mut self, scope: ListenerScope, kind: EventKind);

    /// Stops delivering `kind` events from `scope`.
    fn remove_listener(&mut self, scope: ListenerScope, kind: EventKind);

    /// Enables or disables capture of touch gestures (the platform's own
    /// touch panning and zooming). Returns the previous setting.
    fn set_capture_gestures(&mut self, capture: bool) -> bool;
}

/// An [`InputSurface`] with no platform behind it.
///
/// Keeps the registered listeners so a headless driver can check whether an
/// event would be delivered, and so tests can assert on attach and detach.
#[derive(Clone, Debug, Default)]
pub struct HeadlessInput {
    client_rect: Rect,
    listeners: Vec<(ListenerScope, EventKind)>,
    capture_gestures: bool,
}

impl HeadlessInput {
    /// A surface occupying `client_rect` in page coordinates.
    #[must_use]
    pub fn new(client_rect: Rect) -> Self {
        Self {
            client_rect,
            ..Self::default()
        }
    }

    /// Moves or resizes the surface.
    pub fn set_client_rect(&mut self, client_rect: Rect) {
        self.client_rect = client_rect;
    }

    /// Registered listeners, in registration order.
    #[must_use]
    pub fn listeners(&self) -> &[(ListenerScope, EventKind)] {
        &self.listeners
    }

    /// Returns `true` if any listener would receive `event`.
    #[must_use]
    pub fn delivers(&self, event: &InputEvent) -> bool {
        let kind = event.kind();
        self.listeners.iter().any(|&(_, k)| k == kind)
    }

    /// Whether touch gestures are currently captured.
    #[must_use]
    pub fn captures_gestures(&self) -> bool {
        self.capture_gestures
    }
}

impl InputSurface for HeadlessInput {
    fn client_rect(&self) -> Rect {
        self.client_rect
    }

    fn add_listener(&mut self, scope: ListenerScope, kind: EventKind) {
        self.listeners.push((scope, kind));
    }

    fn remove_listener(&mut self, scope: ListenerScope, kind: EventKind) {
        if let Some(i) = self.listeners.iter().position(|&l| l == (scope, kind)) {
            self.listeners.remove(i);
        }
    }

    fn set_capture_gestures(&mut self, capture: bool) -> bool {
        core::mem::replace(&mut self.capture_gestures, capture)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{EventKind, HeadlessInput, InputEvent, InputSurface, ListenerScope, PointerEvent};

    #[test]
    fn listeners_register_and_unregister() {
        let mut input = HeadlessInput::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        input.add_listener(ListenerScope::Surface, EventKind::Wheel);
        input.add_listener(ListenerScope::Window, EventKind::PointerUp);
        assert!(input.delivers(&InputEvent::Wheel { delta_y: 1.0 }));
        assert!(!input.delivers(&InputEvent::PointerDown(PointerEvent::new(
            0,
            Point::ORIGIN
        ))));

        input.remove_listener(ListenerScope::Surface, EventKind::Wheel);
        assert_eq!(
            input.listeners(),
            &[(ListenerScope::Window, EventKind::PointerUp)]
        );
        // Removing an unknown listener is a no-op.
        input.remove_listener(ListenerScope::Surface, EventKind::Wheel);
        assert_eq!(input.listeners().len(), 1);
    }

    #[test]
    fn gesture_capture_returns_previous_setting() {
        let mut input = HeadlessInput::default();
        assert!(!input.set_capture_gestures(true));
        assert!(input.captures_gestures());
        assert!(input.set_capture_gestures(false));
    }
}
