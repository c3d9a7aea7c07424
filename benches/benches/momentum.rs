// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use viewdraw_viewport::{DragPhase, Dragger, ManualClock};

fn flicked(clock: &ManualClock) -> Dragger<&ManualClock> {
    let mut dragger = Dragger::new(clock);
    dragger.update();
    dragger.start(Point::ORIGIN);
    clock.advance(16.0);
    dragger.drag(Point::new(6.0, 3.0), 1.0);
    dragger.stop(Point::new(6.0, 3.0), 1.0);
    dragger
}

fn bench_momentum(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewdraw_viewport");

    group.bench_function("coast_to_rest", |b| {
        let clock = ManualClock::new(0.0);
        b.iter_batched(
            || flicked(&clock),
            |mut dragger| {
                while dragger.phase() == DragPhase::Coasting {
                    clock.advance(16.0);
                    black_box(dragger.update());
                }
                dragger
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("drag_1000_moves", |b| {
        let clock = ManualClock::new(0.0);
        b.iter(|| {
            let mut dragger = Dragger::new(&clock);
            dragger.start(Point::ORIGIN);
            for i in 0..1_000 {
                clock.advance(4.0);
                dragger.drag(Point::new(f64::from(i), 0.5 * f64::from(i)), 1.5);
            }
            dragger.stop(Point::new(1_000.0, 500.0), 1.5);
            black_box(dragger.velocity())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_momentum);
criterion_main!(benches);
