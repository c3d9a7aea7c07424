// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use core::f64::consts::TAU;
use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`, `atan2`
use kurbo::{Point, Rect};

use crate::error::ProjectionError;
use crate::interp::{inv_lerp, lerp};

/// The unit rectangle `[0, 1] x [0, 1]`.
pub const UNIT_BOUNDS: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Builds a bounds rectangle from per-axis extents.
///
/// Viewboxes and camera bounds are ordered `[x_min, x_max, y_min, y_max]`,
/// which does not match the argument order of [`Rect::new`]. The result is not
/// normalized, so `x_max < x_min` describes a flipped axis.
#[inline]
#[must_use]
pub const fn bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Rect {
    Rect::new(x_min, y_min, x_max, y_max)
}

/// A named pair of mutually inverse transforms between a shape space and
/// Euclidean space.
///
/// Both transforms operate on normalized coordinates: the projection maps its
/// viewbox to `[0, 1] x [0, 1]` before calling `to`, and rescales the output
/// of `from` back into the viewbox.
#[derive(Clone, Copy)]
pub struct ProjectionDef {
    name: &'static str,
    to: fn(Point) -> Point,
    from: fn(Point) -> Point,
}

impl ProjectionDef {
    /// Identity projection.
    pub const CARTESIAN: Self = Self {
        name: "cartesian",
        to: cartesian_to,
        from: cartesian_from,
    };

    /// Polar projection over `(radius, turns)`.
    ///
    /// The angle is a fraction of a full revolution rather than radians, so
    /// `theta` in `[0, 1)` covers the whole circle.
    pub const POLAR: Self = Self {
        name: "polar",
        to: polar_to,
        from: polar_from,
    };

    /// Defines a custom projection. `to` and `from` must be exact inverses.
    #[must_use]
    pub const fn new(name: &'static str, to: fn(Point) -> Point, from: fn(Point) -> Point) -> Self {
        Self { name, to, from }
    }

    /// Looks up a built-in projection by name.
    pub fn by_name(name: &str) -> Result<Self, ProjectionError> {
        match name {
            "cartesian" => Ok(Self::CARTESIAN),
            "polar" => Ok(Self::POLAR),
            _ => Err(ProjectionError::UnknownProjection {
                name: name.to_string(),
            }),
        }
    }

    /// The projection's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Maps shape coordinates into Euclidean space.
    #[inline]
    #[must_use]
    pub fn to_euclidean(&self, shape: Point) -> Point {
        (self.to)(shape)
    }

    /// Maps Euclidean coordinates back into shape space.
    #[inline]
    #[must_use]
    pub fn from_euclidean(&self, euclidean: Point) -> Point {
        (self.from)(euclidean)
    }
}

impl fmt::Debug for ProjectionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectionDef")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Default for ProjectionDef {
    fn default() -> Self {
        Self::CARTESIAN
    }
}

impl FromStr for ProjectionDef {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_name(s)
    }
}

fn cartesian_to(pt: Point) -> Point {
    pt
}

fn cartesian_from(pt: Point) -> Point {
    pt
}

fn polar_to(pt: Point) -> Point {
    let (r, theta) = (pt.x, pt.y * TAU);
    Point::new(r * theta.cos(), r * theta.sin())
}

fn polar_from(pt: Point) -> Point {
    let r = pt.to_vec2().hypot();
    let mut turns = pt.y.atan2(pt.x) / TAU;
    if turns < 0.0 {
        turns += 1.0;
    }
    // `-epsilon + 1.0` can round up to exactly one turn.
    if turns >= 1.0 {
        turns = 0.0;
    }
    Point::new(r, turns)
}

/// A projection bound to a logical viewbox.
///
/// `Projection` converts between shape coordinates inside its viewbox and
/// coordinates inside an arbitrary camera rectangle (device pixels, world
/// units, or the unit square). All conversions go through normalized space:
///
/// ```text
/// shape --normalize(viewbox)--> [0,1]^2 --to--> euclidean --rescale(camera)--> camera
/// ```
///
/// Camera rectangles are interpreted as `[x0 = left, x1 = right, y0 = top,
/// y1 = bottom]`; see [`bounds`].
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    def: ProjectionDef,
    viewbox: Rect,
}

impl Projection {
    /// Creates a projection over `viewbox`.
    #[must_use]
    pub fn new(def: ProjectionDef, viewbox: Rect) -> Self {
        Self { def, viewbox }
    }

    /// Resolves a built-in projection by name and binds it to `viewbox`.
    pub fn by_name(name: &str, viewbox: Rect) -> Result<Self, ProjectionError> {
        Ok(Self::new(ProjectionDef::by_name(name)?, viewbox))
    }

    /// The underlying shape transform.
    #[must_use]
    pub fn def(&self) -> ProjectionDef {
        self.def
    }

    /// The projection's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    /// The logical viewbox considered the projection's full extent.
    #[must_use]
    pub fn viewbox(&self) -> Rect {
        self.viewbox
    }

    /// Swaps the viewbox.
    pub fn set_viewbox(&mut self, viewbox: Rect) {
        self.viewbox = viewbox;
    }

    /// Maps shape coordinates into `camera`.
    #[must_use]
    pub fn to_camera(&self, camera: Rect, coords: Point) -> Point {
        rescale(self.def.to_euclidean(normalize(coords, self.viewbox)), camera)
    }

    /// Maps a position inside `camera` back to shape coordinates.
    ///
    /// This is the inverse of [`Projection::to_camera`] for any camera rect
    /// with non-zero extent on both axes.
    #[must_use]
    pub fn from_camera(&self, camera: Rect, coords: Point) -> Point {
        rescale(self.def.from_euclidean(normalize(coords, camera)), self.viewbox)
    }

    /// Converts a scalar length (such as a radius) into `camera` units.
    ///
    /// Sizes scale by the ratio of the x extents only and never pass through
    /// the shape transform, so they are isotropic under every projection.
    #[must_use]
    pub fn to_camera_size(&self, camera: Rect, len: f64) -> f64 {
        camera.width() * len / self.viewbox.width()
    }

    /// Converts a scalar length in `camera` units back to viewbox units.
    #[must_use]
    pub fn from_camera_size(&self, camera: Rect, len: f64) -> f64 {
        self.viewbox.width() * len / camera.width()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(ProjectionDef::CARTESIAN, UNIT_BOUNDS)
    }
}

impl From<ProjectionDef> for Projection {
    fn from(def: ProjectionDef) -> Self {
        Self::new(def, UNIT_BOUNDS)
    }
}

fn normalize(coords: Point, rect: Rect) -> Point {
    Point::new(
        inv_lerp(rect.x0, rect.x1, coords.x),
        inv_lerp(rect.y0, rect.y1, coords.y),
    )
}

fn rescale(coords: Point, rect: Rect) -> Point {
    Point::new(lerp(rect.x0, rect.x1, coords.x), lerp(rect.y0, rect.y1, coords.y))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{Projection, ProjectionDef, UNIT_BOUNDS, bounds};
    use crate::ProjectionError;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn bounds_orders_axes() {
        let r = bounds(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r, Rect::new(1.0, 3.0, 2.0, 4.0));
    }

    #[test]
    fn cartesian_to_camera_rescales_viewbox() {
        let proj = Projection::new(ProjectionDef::CARTESIAN, bounds(-1.0, 1.0, -1.0, 1.0));
        let camera = bounds(0.0, 200.0, 0.0, 100.0);
        assert_close(proj.to_camera(camera, Point::new(0.0, 0.0)), Point::new(100.0, 50.0));
        assert_close(proj.to_camera(camera, Point::new(1.0, -1.0)), Point::new(200.0, 0.0));
    }

    #[test]
    fn polar_quarter_turn_points_down_the_y_axis() {
        let proj = Projection::from(ProjectionDef::POLAR);
        let p = proj.to_camera(UNIT_BOUNDS, Point::new(1.0, 0.25));
        assert_close(p, Point::new(0.0, 1.0));
    }

    #[test]
    fn polar_from_wraps_into_one_turn() {
        let polar = ProjectionDef::POLAR;
        let back = polar.from_euclidean(polar.to_euclidean(Point::new(2.0, 0.75)));
        assert_close(back, Point::new(2.0, 0.75));
        let back = polar.from_euclidean(Point::new(1.0, -1e-18));
        assert!(back.y >= 0.0 && back.y < 1.0);
    }

    #[test]
    fn sizes_ignore_shape_transform() {
        let camera = bounds(10.0, 110.0, 0.0, 50.0);
        let cart = Projection::new(ProjectionDef::CARTESIAN, bounds(0.0, 2.0, 0.0, 1.0));
        let polar = Projection::new(ProjectionDef::POLAR, bounds(0.0, 2.0, 0.0, 1.0));
        assert_eq!(cart.to_camera_size(camera, 0.5), 25.0);
        assert_eq!(polar.to_camera_size(camera, 0.5), 25.0);
        assert_eq!(polar.from_camera_size(camera, 25.0), 0.5);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Projection::by_name("polar", UNIT_BOUNDS).unwrap().name(), "polar");
        assert_eq!("cartesian".parse::<ProjectionDef>().unwrap().name(), "cartesian");
        assert_eq!(
            ProjectionDef::by_name("mercator").unwrap_err(),
            ProjectionError::UnknownProjection {
                name: "mercator".into()
            }
        );
    }

    #[test]
    fn degenerate_viewbox_axis_normalizes_to_one() {
        let proj = Projection::new(ProjectionDef::CARTESIAN, bounds(0.0, 1.0, 5.0, 5.0));
        let camera = bounds(0.0, 10.0, 0.0, 10.0);
        assert_close(proj.to_camera(camera, Point::new(0.5, -42.0)), Point::new(5.0, 10.0));
    }

    #[test]
    fn set_viewbox_changes_mapping() {
        let mut proj = Projection::default();
        proj.set_viewbox(bounds(0.0, 10.0, 0.0, 10.0));
        assert_close(proj.to_camera(UNIT_BOUNDS, Point::new(5.0, 5.0)), Point::new(0.5, 0.5));
    }
}
