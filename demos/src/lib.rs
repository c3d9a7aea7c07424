// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the viewdraw demos.

use kurbo::Point;
use viewdraw_view::recording::{RecordingSurface, SurfaceCall};

/// Installs a `tracing` subscriber filtered by `RUST_LOG`, defaulting to
/// `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Rough tally of what a frame emitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    /// Paths begun.
    pub paths: usize,
    /// Fill and stroke operations.
    pub paints: usize,
    /// Text runs.
    pub texts: usize,
}

impl FrameStats {
    /// Counts the calls recorded on `surface`.
    pub fn of(surface: &RecordingSurface) -> Self {
        let mut stats = Self::default();
        for call in surface.iter_calls() {
            match call {
                SurfaceCall::BeginPath => stats.paths += 1,
                SurfaceCall::Fill | SurfaceCall::Stroke => stats.paints += 1,
                SurfaceCall::FillText { .. } => stats.texts += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Device-space position of the first dot or circle drawn in the frame.
pub fn first_arc(surface: &RecordingSurface) -> Option<Point> {
    surface
        .calls()
        .iter()
        .find(|c| matches!(c.call, SurfaceCall::Arc { .. }))
        .and_then(|c| c.device_point())
}
