// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewdraw View: camera framing and projection-aware drawing for 2D canvases.
//!
//! This crate turns a user-facing camera (a pan center in shape coordinates
//! plus a zoom scale) into per-frame pixel geometry, and provides a small set
//! of draw primitives that place shapes through a
//! [`Projection`](viewdraw_projection::Projection). It focuses on:
//! - Camera framing: fit (contain) vs fill (cover), device pixel ratio
//!   correction, and anchoring the camera center at the surface center.
//! - Coordinate conversion from surface pixels back to shape space, for
//!   absolute positions and for deltas.
//! - Draw primitives (dots, circles, paths, text, triangles, arrows) with a
//!   canonical mode that keeps literal geometry under polar projections.
//!
//! It does **not** own a canvas. Callers implement [`Surface`] for their
//! rendering target (a web canvas context, a vector recorder, ...) and call
//! [`View::draw`] once per animation frame. [`RecordingSurface`] is provided
//! for tests and headless use.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use viewdraw_projection::{Projection, ProjectionDef, bounds};
//! use viewdraw_view::{Draw, RecordingSurface, ScaleMode, View, ViewOptions};
//!
//! let projection = Projection::new(ProjectionDef::CARTESIAN, bounds(0.0, 1.0, 0.0, 1.0));
//! let options = ViewOptions { scale_mode: ScaleMode::Fit };
//! let mut view = View::new(projection, options, |draw: &mut Draw<'_>, (): ()| {
//!     draw.dot(Point::new(0.0, 0.0), 2.0);
//! });
//!
//! // 100x100 CSS pixel surface; the camera center sits at the surface center.
//! let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
//! let summary = view.draw(&mut surface, ());
//! let center = view.projection().to_camera(summary.camera_bounds, Point::ORIGIN);
//! assert_eq!(center, Point::new(50.0, 50.0));
//! ```
//!
//! ## Design notes
//!
//! - Frame geometry is recomputed from scratch on every draw; nothing is
//!   cached between frames except the camera and the projection.
//! - Styles are typed ([`Style`]) and only pushed to the surface when they
//!   change.
//! - Unbalanced `save`/`restore` pairs are logged with `tracing` and
//!   reported in the returned [`FrameSummary`]; drawing is never aborted.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod modes;
pub mod recording;
mod style;
mod surface;
mod view;

pub use draw::{ArrowOptions, Draw, TextOptions};
pub use modes::{ScaleMode, ScaleModeError};
pub use recording::RecordingSurface;
pub use style::Style;
pub use surface::{Surface, SurfaceMetrics, TextAlign};
pub use view::{Camera, CameraFrame, FrameSummary, View, ViewOptions};
