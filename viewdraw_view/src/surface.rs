// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;

/// Pixel dimensions and on-page placement of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    /// Backing store size in device pixels.
    pub pixel_size: Size,
    /// Layout rectangle in CSS (page) pixels.
    pub client_rect: Rect,
}

impl SurfaceMetrics {
    /// Metrics for a surface laid out at `client_rect` with a backing store of
    /// `pixel_size`.
    #[must_use]
    pub fn new(pixel_size: Size, client_rect: Rect) -> Self {
        Self {
            pixel_size,
            client_rect,
        }
    }

    /// Metrics for a surface at the page origin whose CSS size is `css_size`,
    /// backed by `ratio` device pixels per CSS pixel.
    #[must_use]
    pub fn with_pixel_ratio(css_size: Size, ratio: f64) -> Self {
        Self {
            pixel_size: css_size * ratio,
            client_rect: css_size.to_rect(),
        }
    }

    /// Device pixels per CSS pixel, measured horizontally.
    ///
    /// Falls back to `1.0` when the client rect has no usable width.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        let css_width = self.client_rect.width();
        let ratio = self.pixel_size.width / css_width;
        if css_width > 0.0 && ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        }
    }
}

/// Horizontal anchoring of text relative to its draw position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlign {
    /// Text starts at the position.
    Left,
    /// Text ends at the position.
    Right,
    /// Text is centered on the position.
    #[default]
    Center,
    /// Locale-dependent start edge.
    Start,
    /// Locale-dependent end edge.
    End,
}

/// An immediate-mode 2D drawing surface.
///
/// This is the contract a host canvas must satisfy for [`crate::Draw`]: pixel
/// metrics for camera framing, plus the subset of a canvas 2D context the
/// primitives use. Paths are built with `begin_path`/`move_to`/`line_to`/`arc`
/// and then filled or stroked with the current colors; `save`/`restore` push
/// and pop the transform and style state.
pub trait Surface {
    /// Current pixel size and client rectangle.
    fn metrics(&self) -> SurfaceMetrics;

    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);
    /// Post-multiplies a translation onto the current transform.
    fn translate(&mut self, offset: Vec2);
    /// Post-multiplies a rotation (radians) onto the current transform.
    fn rotate(&mut self, angle: f64);
    /// Pushes transform and style state.
    fn save(&mut self);
    /// Pops transform and style state.
    fn restore(&mut self);

    /// Clears `rect` (in current user space) to transparent.
    fn clear_rect(&mut self, rect: Rect);
    /// Starts a new path.
    fn begin_path(&mut self);
    /// Starts a subpath at `pt`.
    fn move_to(&mut self, pt: Point);
    /// Adds a straight segment to `pt`.
    fn line_to(&mut self, pt: Point);
    /// Adds a circular arc, angles in radians measured clockwise from +x.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    /// Closes the current subpath.
    fn close_path(&mut self);
    /// Fills the current path with the fill color.
    fn fill(&mut self);
    /// Strokes the current path with the stroke color and line width.
    fn stroke(&mut self);
    /// Draws `text` at `pos` with the current font and alignment.
    fn fill_text(&mut self, text: &str, pos: Point);

    /// Sets the fill color.
    fn set_fill_color(&mut self, color: Color);
    /// Sets the stroke color.
    fn set_stroke_color(&mut self, color: Color);
    /// Sets the stroke width.
    fn set_line_width(&mut self, width: f64);
    /// Sets the font, as a CSS font shorthand.
    fn set_font(&mut self, font: &str);
    /// Sets text alignment.
    fn set_text_align(&mut self, align: TextAlign);
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::SurfaceMetrics;

    #[test]
    fn pixel_ratio_from_backing_store() {
        let m = SurfaceMetrics::with_pixel_ratio(Size::new(400.0, 300.0), 2.0);
        assert_eq!(m.pixel_size, Size::new(800.0, 600.0));
        assert_eq!(m.pixel_ratio(), 2.0);
    }

    #[test]
    fn pixel_ratio_falls_back_for_collapsed_layout() {
        let m = SurfaceMetrics::new(Size::new(800.0, 600.0), Rect::ZERO);
        assert_eq!(m.pixel_ratio(), 1.0);
    }
}
