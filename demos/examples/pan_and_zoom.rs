// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan, flick and pinch driving a view camera.
//!
//! Feeds a scripted gesture sequence into a `Viewport`, turns its state into
//! a camera each frame, and renders a small grid into a `RecordingSurface`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p viewdraw_demos --example pan_and_zoom`

use kurbo::{Point, Rect, Size};
use peniko::Color;
use viewdraw_demos::{FrameStats, first_arc, init_tracing};
use viewdraw_projection::{Projection, ProjectionDef, UNIT_BOUNDS};
use viewdraw_view::{Draw, RecordingSurface, SurfaceMetrics, View, ViewOptions};
use viewdraw_viewport::{HeadlessInput, InputEvent, ManualClock, PointerEvent, Viewport};

const FRAME_MS: f64 = 16.0;

fn grid(draw: &mut Draw<'_>, highlight: Point) {
    draw.color(Color::from_rgb8(0x60, 0x60, 0x60));
    for i in 0..=4 {
        let t = f64::from(i) / 4.0;
        draw.path(&[Point::new(t, 0.0), Point::new(t, 1.0)], false, false, 1.0);
        draw.path(&[Point::new(0.0, t), Point::new(1.0, t)], false, false, 1.0);
    }
    draw.color(Color::from_rgb8(0xE0, 0x40, 0x40));
    draw.dot(highlight, 4.0);
}

fn main() {
    init_tracing();

    let css = Size::new(400.0, 300.0);
    let metrics = SurfaceMetrics::with_pixel_ratio(css, 2.0);
    let mut surface = RecordingSurface::with_metrics(metrics);
    let mut input = HeadlessInput::new(Rect::from_origin_size(Point::ORIGIN, css));

    let clock = ManualClock::new(0.0);
    let mut viewport = Viewport::new(&clock);
    viewport.attach(&mut input);

    let mut view = View::new(
        Projection::new(ProjectionDef::CARTESIAN, UNIT_BOUNDS),
        ViewOptions::default(),
        |draw: &mut Draw<'_>, highlight: Point| grid(draw, highlight),
    );

    // Frame-indexed gesture script: a quick drag to the right, a wheel zoom,
    // then a two-finger pinch.
    let script: Vec<(u32, InputEvent)> = vec![
        (2, down(1, 200.0, 150.0)),
        (3, moved(1, 230.0, 150.0)),
        (4, moved(1, 260.0, 150.0)),
        (4, up(1, 260.0, 150.0)),
        (60, InputEvent::Wheel { delta_y: -300.0 }),
        (80, down(1, 150.0, 150.0)),
        (80, down(2, 250.0, 150.0)),
        (81, moved(2, 300.0, 150.0)),
        (82, moved(1, 100.0, 150.0)),
        (83, up(1, 100.0, 150.0)),
        (83, up(2, 300.0, 150.0)),
    ];

    for frame in 0..120_u32 {
        for (_, event) in script.iter().filter(|(at, _)| *at == frame) {
            if input.delivers(event) {
                viewport.handle_event(&input, event);
            }
        }

        let state = viewport.update();
        let center = view.to_view_coords(metrics, state.center, true);
        view.set_camera(center, state.zoom);

        surface.clear_calls();
        let summary = view.draw(&mut surface, Point::new(0.5, 0.5));
        if frame % 20 == 0 || frame == 119 {
            let stats = FrameStats::of(&surface);
            tracing::info!(
                frame,
                center_x = center.x,
                center_y = center.y,
                zoom = state.zoom,
                bounds = ?summary.camera_bounds,
                highlight = ?first_arc(&surface),
                paths = stats.paths,
                "frame"
            );
        }

        clock.advance(FRAME_MS);
    }

    viewport.detach(&mut input);
    tracing::info!(listeners = input.listeners().len(), "detached");
}

fn down(id: u64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown(PointerEvent::new(id, Point::new(x, y)))
}

fn moved(id: u64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove(PointerEvent::new(id, Point::new(x, y)))
}

fn up(id: u64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp(PointerEvent::new(id, Point::new(x, y)))
}
