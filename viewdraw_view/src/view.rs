// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use viewdraw_projection::{Projection, UNIT_BOUNDS, bounds};

use crate::draw::Draw;
use crate::modes::ScaleMode;
use crate::surface::{Surface, SurfaceMetrics};

/// Options recognized by [`View`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewOptions {
    /// Fit (contain) or fill (cover) the surface with the viewbox.
    pub scale_mode: ScaleMode,
}

/// User-facing camera: a pan center in shape coordinates and a zoom scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Shape-space point kept at the center of the surface.
    pub center: Point,
    /// Zoom multiplier; `1.0` shows one viewbox per unit scale.
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            scale: 1.0,
        }
    }
}

/// Per-frame camera geometry, in CSS pixels.
///
/// Produced by [`View::frame`] from the camera, the projection, and the
/// surface metrics. All rects are ordered `[left, right, top, bottom]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    /// Where the viewbox lands on the surface, including pan and zoom.
    pub camera_bounds: Rect,
    /// One logical unit without zoom, anchored at the origin. Used for sizes
    /// that should stay constant on screen while zooming.
    pub world_unit: Rect,
    /// One logical unit including zoom, anchored at the origin. Used for
    /// translation deltas.
    pub world_scale: Rect,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f64,
    /// Metrics the frame was computed from.
    pub metrics: SurfaceMetrics,
}

impl CameraFrame {
    /// Frames `camera` over a surface described by `metrics`.
    ///
    /// The unit scale `m` is the smaller (fit) or larger (fill) of the
    /// surface half-extents; `s = m * camera.scale`. The camera center is
    /// projected into the unit square as `c`, and the camera bounds are
    /// placed so that `c` lands on the surface center:
    ///
    /// ```text
    /// [-c.x * s + ex, (1 - c.x) * s + ex, -c.y * s + ey, (1 - c.y) * s + ey]
    /// ```
    #[must_use]
    pub fn compute(
        projection: &Projection,
        metrics: SurfaceMetrics,
        camera: Camera,
        scale_mode: ScaleMode,
    ) -> Self {
        let px = metrics.pixel_ratio();
        let ex = 0.5 * metrics.pixel_size.width / px;
        let ey = 0.5 * metrics.pixel_size.height / px;
        let m = scale_mode.unit_scale(ex, ey);
        let s = m * camera.scale;
        let c = projection.to_camera(UNIT_BOUNDS, camera.center);
        let camera_bounds = bounds(
            -c.x * s + ex,
            (1.0 - c.x) * s + ex,
            -c.y * s + ey,
            (1.0 - c.y) * s + ey,
        );
        Self {
            camera_bounds,
            world_unit: bounds(0.0, m, 0.0, m),
            world_scale: bounds(0.0, s, 0.0, s),
            pixel_ratio: px,
            metrics,
        }
    }

    /// Backing store width in device pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.metrics.pixel_size.width
    }

    /// Backing store height in device pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.metrics.pixel_size.height
    }
}

/// Summary of one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSummary {
    /// Camera bounds the frame was drawn with.
    pub camera_bounds: Rect,
    /// `save()` calls left without a matching `restore()`.
    pub unbalanced_saves: u32,
}

/// A camera over a projection, plus the render callback that draws through it.
///
/// Each frame runs in two phases: [`View::frame`] configures the camera
/// geometry for the current surface, then [`View::draw`] (or
/// [`View::draw_over`]) hands a [`Draw`] context to the render callback.
/// The camera only changes through [`View::set_camera`].
///
/// The render callback receives the draw context and the caller's per-frame
/// arguments:
///
/// ```rust
/// use kurbo::{Point, Size};
/// use peniko::Color;
/// use viewdraw_projection::Projection;
/// use viewdraw_view::{Draw, RecordingSurface, View, ViewOptions};
///
/// let mut view = View::new(Projection::default(), ViewOptions::default(), |draw: &mut Draw<'_>, t: f64| {
///     draw.color(Color::WHITE);
///     draw.circle(Point::new(0.5, 0.5), 0.1 * t, true, 0.0);
/// });
///
/// let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
/// view.set_camera(Point::new(0.5, 0.5), 1.0);
/// let summary = view.draw(&mut surface, 1.0);
/// assert_eq!(summary.unbalanced_saves, 0);
/// ```
#[derive(Clone, Debug)]
pub struct View<R> {
    projection: Projection,
    camera: Camera,
    options: ViewOptions,
    render: R,
}

impl<R> View<R> {
    /// Creates a view with the camera at the shape origin and scale `1.0`.
    #[must_use]
    pub fn new(projection: Projection, options: ViewOptions, render: R) -> Self {
        Self {
            projection,
            camera: Camera::default(),
            options,
            render,
        }
    }

    /// The projection shapes are drawn through.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Swaps the projection's viewbox.
    pub fn set_viewbox(&mut self, viewbox: Rect) {
        tracing::debug!(?viewbox, "view viewbox changed");
        self.projection.set_viewbox(viewbox);
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Replaces the options.
    pub fn set_options(&mut self, options: ViewOptions) {
        self.options = options;
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Camera center in shape coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.camera.center
    }

    /// Camera zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.camera.scale
    }

    /// Points the camera at `center` with zoom `scale`.
    ///
    /// This only stores the camera; nothing is drawn until the next frame.
    pub fn set_camera(&mut self, center: Point, scale: f64) {
        self.camera = Camera { center, scale };
    }

    /// Computes the camera geometry for a surface with the given metrics.
    #[must_use]
    pub fn frame(&self, metrics: SurfaceMetrics) -> CameraFrame {
        CameraFrame::compute(
            &self.projection,
            metrics,
            self.camera,
            self.options.scale_mode,
        )
    }

    /// Maps a CSS-pixel surface position back to shape coordinates.
    ///
    /// With `from_world` set the position is treated as a delta: it is
    /// resolved against the frame's world unit instead of its camera bounds,
    /// which drops the pan offset and the zoom.
    #[must_use]
    pub fn to_view_coords(&self, metrics: SurfaceMetrics, pos: Point, from_world: bool) -> Point {
        let frame = self.frame(metrics);
        let rect = if from_world {
            frame.world_unit
        } else {
            frame.camera_bounds
        };
        self.projection.from_camera(rect, pos)
    }

    /// Maps a page-space pointer position to shape coordinates.
    #[must_use]
    pub fn mouse_pos(&self, metrics: SurfaceMetrics, page_pos: Point, from_world: bool) -> Point {
        let local = page_pos - metrics.client_rect.origin().to_vec2();
        self.to_view_coords(metrics, local, from_world)
    }

    /// Clears the surface and renders one frame.
    pub fn draw<A>(&mut self, surface: &mut dyn Surface, args: A) -> FrameSummary
    where
        R: FnMut(&mut Draw<'_>, A),
    {
        self.render_frame(surface, true, args)
    }

    /// Renders one frame over the existing surface contents.
    pub fn draw_over<A>(&mut self, surface: &mut dyn Surface, args: A) -> FrameSummary
    where
        R: FnMut(&mut Draw<'_>, A),
    {
        self.render_frame(surface, false, args)
    }

    fn render_frame<A>(&mut self, surface: &mut dyn Surface, clear: bool, args: A) -> FrameSummary
    where
        R: FnMut(&mut Draw<'_>, A),
    {
        let frame = self.frame(surface.metrics());
        tracing::trace!(camera_bounds = ?frame.camera_bounds, "frame configured");
        let mut draw = Draw::begin(surface, &self.projection, frame);
        if clear {
            draw.clear();
        }
        (self.render)(&mut draw, args);
        let unbalanced_saves = draw.end();
        FrameSummary {
            camera_bounds: frame.camera_bounds,
            unbalanced_saves,
        }
    }
}
