// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use viewdraw_projection::{Projection, ProjectionDef, bounds};

fn points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::new(t * 3.0, t)
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewdraw_projection");
    let camera = bounds(12.0, 780.0, 590.0, 8.0);
    let pts = points(4_096);

    for def in [ProjectionDef::CARTESIAN, ProjectionDef::POLAR] {
        let projection = Projection::new(def, bounds(0.0, 3.0, 0.0, 1.0));
        group.bench_function(format!("to_camera({})", def.name()), |b| {
            b.iter(|| {
                for &p in &pts {
                    black_box(projection.to_camera(camera, black_box(p)));
                }
            });
        });
        group.bench_function(format!("round_trip({})", def.name()), |b| {
            b.iter(|| {
                for &p in &pts {
                    let cam = projection.to_camera(camera, black_box(p));
                    black_box(projection.from_camera(camera, cam));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
