// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use viewdraw_projection::{Projection, ProjectionDef, UNIT_BOUNDS};
use viewdraw_view::{ArrowOptions, Draw, RecordingSurface, View, ViewOptions};

fn spokes(draw: &mut Draw<'_>, n: u32) {
    for k in 0..n {
        let theta = f64::from(k) / f64::from(n);
        draw.arrow(
            Point::new(0.2, theta),
            Point::new(1.0, theta),
            ArrowOptions::default(),
        );
    }
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewdraw_view");
    let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));

    for def in [ProjectionDef::CARTESIAN, ProjectionDef::POLAR] {
        let projection = Projection::new(def, UNIT_BOUNDS);
        let mut view = View::new(projection, ViewOptions::default(), spokes);
        group.bench_function(format!("arrows_256({})", def.name()), |b| {
            b.iter(|| {
                surface.clear_calls();
                black_box(view.draw(&mut surface, black_box(256_u32)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
