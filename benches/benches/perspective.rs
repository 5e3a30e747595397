// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect};
use paintroid_benches::gesture_deltas;
use paintroid_perspective::Perspective;

const FRAME: Rect = Rect::new(0.0, 0.0, 1080.0, 1920.0);

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("perspective/gestures");

    // One translate + one multiply_scale per pointer event.
    for len in [64usize, 1_024, 16_384] {
        let deltas = gesture_deltas(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &deltas, |b, deltas| {
            b.iter(|| {
                let mut perspective = Perspective::new(FRAME);
                for &(dx, dy, factor) in deltas {
                    perspective.translate(dx, dy);
                    perspective.multiply_scale(factor);
                }
                black_box(perspective.translation());
            });
        });
    }

    group.finish();
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("perspective/screen_to_canvas");

    let mut perspective = Perspective::new(FRAME);
    perspective.multiply_scale(3.5);
    perspective.translate(-240.0, 410.0);

    for len in [256usize, 4_096] {
        let taps: Vec<Point> = gesture_deltas(len)
            .into_iter()
            .map(|(dx, dy, _)| Point::new(540.0 + dx * 5.0, 960.0 + dy * 9.0))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("direct", len), &taps, |b, taps| {
            b.iter(|| {
                for &tap in taps {
                    black_box(perspective.convert_from_screen_to_canvas(tap));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("affine", len), &taps, |b, taps| {
            b.iter(|| {
                let transform = perspective.screen_to_canvas_transform();
                for &tap in taps {
                    black_box(transform * tap);
                }
            });
        });
    }

    group.finish();
}

fn bench_apply_to_canvas(c: &mut Criterion) {
    let mut perspective = Perspective::new(FRAME);
    perspective.set_scale(2.25);
    perspective.translate(75.0, -33.0);

    c.bench_function("perspective/apply_to_canvas", |b| {
        b.iter(|| {
            let mut ctx = Affine::IDENTITY;
            black_box(&perspective).apply_to_canvas(&mut ctx);
            black_box(ctx);
        });
    });
}

criterion_group!(
    benches,
    bench_gesture_stream,
    bench_hit_testing,
    bench_apply_to_canvas
);
criterion_main!(benches);
