// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{Affine, Point, Rect};
use peniko::Color;
use viewdraw_projection::{Projection, ProjectionDef, angle, geometry};

use crate::style::Style;
use crate::surface::{Surface, TextAlign};
use crate::view::CameraFrame;

/// Options for [`Draw::text`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextOptions<'a> {
    /// CSS font shorthand.
    pub font: &'a str,
    /// Alignment relative to the text position.
    pub align: TextAlign,
}

impl Default for TextOptions<'_> {
    fn default() -> Self {
        Self {
            font: "12px monospace",
            align: TextAlign::Center,
        }
    }
}

/// Options for [`Draw::arrow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowOptions {
    /// Shaft stroke width in CSS pixels.
    pub stroke: f64,
    /// Size the head in world units, so it grows and shrinks with the
    /// camera zoom, rather than in fixed camera pixels.
    pub scale_head: bool,
    /// Head half-width.
    pub head_size: f64,
    /// Head color; the current color when `None`.
    pub head_color: Option<Color>,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            stroke: 1.0,
            scale_head: false,
            head_size: 6.0,
            head_color: None,
        }
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    canonical: bool,
    style: Style,
}

/// Per-frame drawing context.
///
/// Every primitive takes positions and sizes in shape coordinates and maps
/// them through the view's projection onto the frame's camera bounds. In
/// [canonical](Draw::canonical) mode a plain cartesian projection over the
/// unit square is used instead, so shapes such as arrow heads keep their
/// literal geometry under a non-Euclidean projection.
///
/// [`Draw::save`] and [`Draw::restore`] bracket both the surface state and
/// the canonical toggle. Saves left open at the end of a frame are reported
/// as a warning.
pub struct Draw<'a> {
    surface: &'a mut dyn Surface,
    projection: &'a Projection,
    canonical_projection: Projection,
    frame: CameraFrame,
    use_canonical: bool,
    style: Style,
    saved: Vec<Snapshot>,
}

impl core::fmt::Debug for Draw<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Draw")
            .field("projection", &self.projection)
            .field("frame", &self.frame)
            .field("use_canonical", &self.use_canonical)
            .field("style", &self.style)
            .field("save_depth", &self.saved.len())
            .finish_non_exhaustive()
    }
}

impl<'a> Draw<'a> {
    /// Starts a frame: resets the surface transform to CSS pixel units and
    /// leaves canonical mode.
    pub(crate) fn begin(
        surface: &'a mut dyn Surface,
        projection: &'a Projection,
        frame: CameraFrame,
    ) -> Self {
        surface.set_transform(Affine::scale(frame.pixel_ratio));
        Self {
            surface,
            projection,
            canonical_projection: Projection::from(ProjectionDef::CARTESIAN),
            frame,
            use_canonical: false,
            style: Style::default(),
            saved: Vec::new(),
        }
    }

    /// Finishes the frame, returning the number of unmatched saves.
    pub(crate) fn end(self) -> u32 {
        let depth = u32::try_from(self.saved.len()).unwrap_or(u32::MAX);
        if depth > 0 {
            tracing::warn!(depth, "frame ended with save() calls missing a matching restore()");
        }
        depth
    }

    /// Camera geometry for this frame.
    #[must_use]
    pub fn frame(&self) -> &CameraFrame {
        &self.frame
    }

    /// Where the viewbox lands on the surface this frame.
    #[must_use]
    pub fn camera_bounds(&self) -> Rect {
        self.frame.camera_bounds
    }

    /// One logical unit, ignoring zoom.
    #[must_use]
    pub fn world_unit(&self) -> Rect {
        self.frame.world_unit
    }

    /// One logical unit, including zoom.
    #[must_use]
    pub fn world_scale(&self) -> Rect {
        self.frame.world_scale
    }

    /// Backing store width in device pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.frame.width()
    }

    /// Backing store height in device pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.frame.height()
    }

    /// The view's projection.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        self.projection
    }

    /// Whether canonical (cartesian) mode is active.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.use_canonical
    }

    /// Current `save()` nesting depth.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Forces cartesian interpretation of coordinates until toggled off or
    /// until the enclosing [`Draw::restore`].
    pub fn canonical(&mut self, toggle: bool) -> &mut Self {
        self.use_canonical = toggle;
        self
    }

    fn active_projection(&self) -> &Projection {
        if self.use_canonical {
            &self.canonical_projection
        } else {
            self.projection
        }
    }

    /// Maps a shape-space point onto the camera bounds.
    #[must_use]
    pub fn to_camera(&self, pt: Point) -> Point {
        self.active_projection().to_camera(self.frame.camera_bounds, pt)
    }

    /// Maps a shape-space length onto the camera bounds.
    #[must_use]
    pub fn to_camera_size(&self, len: f64) -> f64 {
        self.active_projection()
            .to_camera_size(self.frame.camera_bounds, len)
    }

    /// Pushes surface state and the canonical toggle.
    pub fn save(&mut self) -> &mut Self {
        self.saved.push(Snapshot {
            canonical: self.use_canonical,
            style: self.style.clone(),
        });
        self.surface.save();
        self
    }

    /// Pops surface state and the canonical toggle.
    pub fn restore(&mut self) -> &mut Self {
        self.surface.restore();
        match self.saved.pop() {
            Some(Snapshot { canonical, style }) => {
                self.use_canonical = canonical;
                self.style = style;
            }
            None => tracing::warn!("restore() called without a matching save()"),
        }
        self
    }

    /// Clears the whole backing store.
    pub fn clear(&mut self) -> &mut Self {
        let size = self.frame.metrics.pixel_size;
        self.surface.clear_rect(size.to_rect());
        self
    }

    /// Sets fill and stroke color together. `None` leaves both unchanged.
    pub fn color(&mut self, color: impl Into<Option<Color>>) -> &mut Self {
        if let Some(color) = color.into() {
            self.style.set_fill_color(self.surface, color);
            self.style.set_stroke_color(self.surface, color);
        }
        self
    }

    /// Applies every property set in `style`.
    pub fn style(&mut self, style: &Style) -> &mut Self {
        self.style.apply(self.surface, style);
        self
    }

    /// Translates the surface by a world-space offset.
    pub fn translate(&mut self, offset: Point) -> &mut Self {
        let d = self
            .active_projection()
            .to_camera(self.frame.world_scale, offset);
        self.surface.translate(d.to_vec2());
        self
    }

    /// Rotates the surface by `angle` radians about the image of the shape
    /// origin.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let o = self.to_camera(Point::ORIGIN).to_vec2();
        self.surface.translate(o);
        self.surface.rotate(angle);
        self.surface.translate(-o);
        self
    }

    /// Draws a filled dot of `size` CSS pixels.
    pub fn dot(&mut self, pt: Point, size: f64) -> &mut Self {
        let center = self.to_camera(pt);
        self.surface.begin_path();
        self.surface.arc(center, size, 0.0, TAU);
        self.surface.fill();
        self
    }

    /// Fills and/or strokes the current path. A `stroke` of zero skips the
    /// stroke; otherwise it is the line width.
    pub fn paint(&mut self, fill: bool, stroke: f64) -> &mut Self {
        if fill {
            self.surface.fill();
        }
        if stroke != 0.0 {
            self.style.set_line_width(self.surface, stroke);
            self.surface.stroke();
        }
        self
    }

    /// Draws a circle with a shape-space radius.
    pub fn circle(&mut self, pt: Point, r: f64, fill: bool, stroke: f64) -> &mut Self {
        let center = self.to_camera(pt);
        let radius = self.to_camera_size(r);
        self.surface.begin_path();
        self.surface.arc(center, radius, 0.0, TAU);
        self.paint(fill, stroke)
    }

    /// Draws a polyline through `points`. Empty input draws nothing.
    pub fn path(&mut self, points: &[Point], closed: bool, fill: bool, stroke: f64) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        self.surface.begin_path();
        let pt = self.to_camera(*first);
        self.surface.move_to(pt);
        for pt in rest {
            let pt = self.to_camera(*pt);
            self.surface.line_to(pt);
        }
        if closed {
            self.surface.close_path();
        }
        self.paint(fill, stroke)
    }

    /// Draws `text` at a shape-space position.
    pub fn text(&mut self, text: &str, pos: Point, options: TextOptions<'_>) -> &mut Self {
        let at = self.to_camera(pos);
        self.style.set_font(self.surface, options.font);
        self.style.set_text_align(self.surface, options.align);
        self.surface.fill_text(text, at);
        self
    }

    /// Draws a line from `start` to `end` with a triangular head at `end`.
    ///
    /// The head is drawn in canonical mode, rotated to the on-screen
    /// direction of the shaft, so it stays a true triangle under any
    /// projection.
    pub fn arrow(&mut self, start: Point, end: Point, options: ArrowOptions) -> &mut Self {
        self.path(&[start, end], false, false, options.stroke);

        let reference = if options.scale_head {
            self.frame.world_unit
        } else {
            self.frame.camera_bounds
        };
        let w = self.projection.from_camera_size(reference, options.head_size);

        self.save();
        self.translate(end);
        self.color(options.head_color);
        let heading = angle(self.to_camera(start), self.to_camera(end));
        self.rotate(heading);
        self.canonical(true);
        self.path(
            &[Point::ORIGIN, Point::new(-w, w), Point::new(-w, -w)],
            true,
            true,
            0.0,
        );
        self.restore()
    }

    /// Draws a triangle with side lengths `a`, `b`, `c`, centred on its
    /// centroid, placed at `origin` and rotated by `angle` radians.
    ///
    /// Side lengths violating the triangle inequality draw nothing.
    pub fn triangle(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        origin: Point,
        angle: f64,
        fill: bool,
        stroke: f64,
    ) -> &mut Self {
        let Some(points) = geometry::triangle_from_sides(a, b, c, true) else {
            tracing::debug!(a, b, c, "skipping triangle with impossible sides");
            return self;
        };
        self.save();
        self.translate(origin);
        self.rotate(angle);
        self.canonical(true);
        self.path(&points, true, fill, stroke);
        self.restore()
    }
}
