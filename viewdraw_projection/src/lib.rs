// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewdraw Projection: bidirectional shape-space projections for 2D canvas cameras.
//!
//! A [`Projection`] pairs a named shape transform ([`ProjectionDef`]) with a
//! logical viewbox, and maps coordinates between that viewbox and any camera
//! rectangle (device pixels, world units, or the unit square). Two transforms
//! are built in:
//! - [`ProjectionDef::CARTESIAN`]: identity.
//! - [`ProjectionDef::POLAR`]: `(radius, turns)` to `(x, y)`, with the angle
//!   expressed as a fraction of a full revolution.
//!
//! The crate also carries the scalar [`lerp`]/[`inv_lerp`] family the
//! projections are built on, and the small polygon helpers in [`geometry`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use viewdraw_projection::{Projection, ProjectionDef, bounds};
//!
//! // Radius in [0, 1], angle in degrees.
//! let proj = Projection::new(ProjectionDef::POLAR, bounds(0.0, 1.0, 0.0, 360.0));
//!
//! // A 200x200 pixel camera rect.
//! let camera = bounds(0.0, 200.0, 0.0, 200.0);
//! let px = proj.to_camera(camera, Point::new(1.0, 90.0));
//! let back = proj.from_camera(camera, px);
//! assert!((back.x - 1.0).abs() < 1e-9);
//! assert!((back.y - 90.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Rectangles are plain [`kurbo::Rect`] values read as
//!   `[x_min, x_max, y_min, y_max]`; use [`bounds`] to build them in that order.
//! - A degenerate axis (`min == max`) normalizes to `1.0` instead of failing.
//! - Scalar sizes scale by the x extent only and skip the shape transform.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod geometry;
mod interp;
mod projection;

pub use error::ProjectionError;
pub use interp::{angle, clamp, distance, inv_lerp, inv_lerp_clamped, lerp, lerp_clamped};
pub use projection::{Projection, ProjectionDef, UNIT_BOUNDS, bounds};
