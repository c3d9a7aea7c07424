// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records calls instead of rasterizing.
//!
//! [`RecordingSurface`] is intended for tests and debugging that want to
//! assert on the calls the draw primitives emit and on the transform in
//! effect when each call was made. It does not produce pixels.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use peniko::Color;

use crate::surface::{Surface, SurfaceMetrics, TextAlign};

/// A single surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    /// `set_transform`.
    SetTransform(Affine),
    /// `translate`.
    Translate(Vec2),
    /// `rotate`.
    Rotate(f64),
    /// `save`.
    Save,
    /// `restore`.
    Restore,
    /// `clear_rect`.
    ClearRect(Rect),
    /// `begin_path`.
    BeginPath,
    /// `move_to`.
    MoveTo(Point),
    /// `line_to`.
    LineTo(Point),
    /// `arc`.
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
    /// `close_path`.
    ClosePath,
    /// `fill`.
    Fill,
    /// `stroke`.
    Stroke,
    /// `fill_text`.
    FillText {
        /// Text drawn.
        text: String,
        /// Anchor position.
        pos: Point,
    },
    /// `set_fill_color`.
    SetFillColor(Color),
    /// `set_stroke_color`.
    SetStrokeColor(Color),
    /// `set_line_width`.
    SetLineWidth(f64),
    /// `set_font`.
    SetFont(String),
    /// `set_text_align`.
    SetTextAlign(TextAlign),
}

/// A recorded call and the transform in effect when it was made.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    /// The call.
    pub call: SurfaceCall,
    /// Current transform after the call was applied.
    pub transform: Affine,
}

impl RecordedCall {
    /// Device-space position of the call's point argument, if it has one.
    #[must_use]
    pub fn device_point(&self) -> Option<Point> {
        match &self.call {
            SurfaceCall::MoveTo(pt) | SurfaceCall::LineTo(pt) => Some(self.transform * *pt),
            SurfaceCall::Arc { center, .. } => Some(self.transform * *center),
            SurfaceCall::FillText { pos, .. } => Some(self.transform * *pos),
            _ => None,
        }
    }
}

/// Recording surface with fixed metrics.
///
/// Tracks the transform stack the way a canvas 2D context does, so each
/// [`RecordedCall`] carries the effective transform.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    metrics: SurfaceMetrics,
    transform: Affine,
    stack: Vec<Affine>,
    calls: Vec<RecordedCall>,
}

impl RecordingSurface {
    /// A surface of `css_size` at the page origin with a pixel ratio of one.
    #[must_use]
    pub fn new(css_size: Size) -> Self {
        Self::with_metrics(SurfaceMetrics::with_pixel_ratio(css_size, 1.0))
    }

    /// A surface with explicit metrics.
    #[must_use]
    pub fn with_metrics(metrics: SurfaceMetrics) -> Self {
        Self {
            metrics,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Changes the metrics reported to the view, as on a resize.
    pub fn set_metrics(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Drops recorded calls but keeps the transform state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of unmatched `save` calls.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Iterates over just the recorded calls, without transforms.
    pub fn iter_calls(&self) -> impl Iterator<Item = &SurfaceCall> {
        self.calls.iter().map(|c| &c.call)
    }

    fn record(&mut self, call: SurfaceCall) {
        self.calls.push(RecordedCall {
            call,
            transform: self.transform,
        });
    }
}

impl Surface for RecordingSurface {
    fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.record(SurfaceCall::SetTransform(transform));
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
        self.record(SurfaceCall::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.transform *= Affine::rotate(angle);
        self.record(SurfaceCall::Rotate(angle));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.record(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        // Like canvas 2D, restoring an empty stack is a no-op.
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
        self.record(SurfaceCall::Restore);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.record(SurfaceCall::ClearRect(rect));
    }

    fn begin_path(&mut self) {
        self.record(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, pt: Point) {
        self.record(SurfaceCall::MoveTo(pt));
    }

    fn line_to(&mut self, pt: Point) {
        self.record(SurfaceCall::LineTo(pt));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.record(SurfaceCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.record(SurfaceCall::ClosePath);
    }

    fn fill(&mut self) {
        self.record(SurfaceCall::Fill);
    }

    fn stroke(&mut self) {
        self.record(SurfaceCall::Stroke);
    }

    fn fill_text(&mut self, text: &str, pos: Point) {
        self.record(SurfaceCall::FillText {
            text: text.into(),
            pos,
        });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.record(SurfaceCall::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.record(SurfaceCall::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(SurfaceCall::SetLineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.record(SurfaceCall::SetFont(font.into()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.record(SurfaceCall::SetTextAlign(align));
    }
}
