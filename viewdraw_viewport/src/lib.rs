// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewdraw Viewport: pan, flick and pinch-zoom state for canvas views.
//!
//! This crate turns pointer and wheel input into a pan center and a zoom
//! factor, with momentum after a quick release. It provides:
//!
//! - [`Dragger`]: a drag controller with flick velocity and friction decay.
//! - [`Viewport`]: wires pointer and wheel events to a [`Dragger`] and a zoom
//!   scalar, including two-pointer pinch zoom.
//! - [`Clock`]: the injected time source, with [`ManualClock`] for tests and
//!   headless drivers and `StdClock` on `std`.
//! - [`InputSurface`]: the listener registry a host exposes, with
//!   [`HeadlessInput`] for use without a platform.
//!
//! Nothing here renders or owns a window. Hosts translate their native
//! events into [`InputEvent`]s, call [`Viewport::handle_event`], and read
//! [`Viewport::update`] once per animation frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use viewdraw_viewport::{HeadlessInput, InputEvent, ManualClock, Viewport};
//!
//! let clock = ManualClock::new(0.0);
//! let mut input = HeadlessInput::new(Rect::new(0.0, 0.0, 300.0, 150.0));
//! let mut viewport = Viewport::new(&clock);
//! viewport.attach(&mut input);
//!
//! // Scrolling up by 1000 wheel units doubles the zoom.
//! let response = viewport.handle_event(&input, &InputEvent::Wheel { delta_y: -1000.0 });
//! assert!(response.prevent_default);
//! assert!((viewport.update().zoom - 2.0).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod dragger;
mod error;
mod input;
mod viewport;

#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::{Clock, ManualClock};
pub use dragger::{DragOptions, DragPhase, Dragger};
pub use error::OptionsError;
pub use input::{
    EventKind, EventResponse, HeadlessInput, InputEvent, InputSurface, ListenerScope,
    PointerEvent, PointerId,
};
pub use viewport::{Viewport, ViewportOptions, ViewportState};
