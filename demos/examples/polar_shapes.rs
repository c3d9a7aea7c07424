// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes under a polar projection.
//!
//! Draws spokes, rings, labelled arrows and a triangle through a polar
//! projection. The arrow heads and the triangle are drawn in canonical mode,
//! so they keep their shape while the spokes bend around the origin.
//!
//! Run:
//! - `cargo run -p viewdraw_demos --example polar_shapes`

use kurbo::{Point, Size};
use peniko::Color;
use viewdraw_demos::{FrameStats, init_tracing};
use viewdraw_projection::{Projection, bounds};
use viewdraw_view::{
    ArrowOptions, Draw, RecordingSurface, ScaleMode, Style, TextAlign, TextOptions, View,
    ViewOptions,
};

fn scene(draw: &mut Draw<'_>, turn: f64) {
    draw.style(
        &Style::new()
            .with_stroke_color(Color::from_rgb8(0x90, 0x90, 0x90))
            .with_fill_color(Color::from_rgb8(0x20, 0x20, 0x20)),
    );
    for r in 1..=3 {
        draw.circle(Point::ORIGIN, f64::from(r), false, 1.0);
    }
    for k in 0..12 {
        let theta = f64::from(k) / 12.0;
        draw.path(&[Point::new(0.0, theta), Point::new(3.0, theta)], false, false, 0.5);
    }

    for k in 0..4 {
        let theta = turn + f64::from(k) / 4.0;
        let tip = Point::new(2.5, theta);
        draw.arrow(
            Point::new(0.5, theta),
            tip,
            ArrowOptions {
                stroke: 2.0,
                head_color: Some(Color::from_rgb8(0xE0, 0x40, 0x40)),
                ..ArrowOptions::default()
            },
        );
        draw.text(
            "r=2.5",
            Point::new(2.9, theta),
            TextOptions {
                align: TextAlign::Left,
                ..TextOptions::default()
            },
        );
    }

    draw.triangle(0.6, 0.6, 0.6, Point::new(1.5, turn + 0.125), 0.0, true, 1.0);
}

fn main() {
    init_tracing();

    // Radius 0..3, angle in turns.
    let projection = Projection::by_name("polar", bounds(0.0, 3.0, 0.0, 1.0))
        .expect("polar is a built-in projection");
    let options = ViewOptions {
        scale_mode: ScaleMode::Fit,
    };
    let mut view = View::new(projection, options, scene);
    view.set_camera(Point::ORIGIN, 1.0);

    let mut surface = RecordingSurface::new(Size::new(320.0, 240.0));
    for frame in 0..4_u32 {
        surface.clear_calls();
        let turn = f64::from(frame) / 16.0;
        let summary = view.draw(&mut surface, turn);
        let stats = FrameStats::of(&surface);
        tracing::info!(
            frame,
            turn,
            paths = stats.paths,
            paints = stats.paints,
            texts = stats.texts,
            unbalanced_saves = summary.unbalanced_saves,
            "rendered"
        );
    }
}
