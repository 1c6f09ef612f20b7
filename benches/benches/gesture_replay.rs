// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_image_fit::PixelSize;
use understory_pinch_zoom::PinchToZoom;
use understory_pinch_zoom::gesture::PointerSample;

fn fitted_engine() -> PinchToZoom {
    let mut engine = PinchToZoom::new();
    engine.set_source_image(PixelSize::new(4032, 3024));
    engine.on_layout(PixelSize::new(1080, 1920));
    engine.pinch(3.0, Point::new(540.0, 960.0));
    engine
}

/// A drag that zig-zags across the viewport, overshooting the bounds.
fn drag(len: usize) -> Vec<PointerSample> {
    let mut samples = Vec::with_capacity(len + 2);
    samples.push(PointerSample::down(Point::new(540.0, 960.0)));
    for i in 0..len {
        let t = i as f64 / 8.0;
        samples.push(PointerSample::moved(Point::new(
            540.0 + 900.0 * t.sin(),
            960.0 + 1400.0 * (t * 0.7).cos(),
        )));
    }
    samples.push(PointerSample::up(Point::new(540.0, 960.0)));
    samples
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_zoom/drag");

    for len in [64usize, 512, 4_096] {
        let samples = drag(len);
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &samples, |b, samples| {
            b.iter_batched(
                fitted_engine,
                |mut engine| {
                    for &sample in samples {
                        black_box(engine.handle_pointer(sample));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_zoom/pinch");

    for steps in [16usize, 256] {
        // Alternate zooming in and out so the clamps engage on both ends.
        let factors: Vec<f64> = (0..steps)
            .map(|i| if (i / 8) % 2 == 0 { 1.15 } else { 0.87 })
            .collect();
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &factors, |b, factors| {
            b.iter_batched(
                fitted_engine,
                |mut engine| {
                    engine.on_scale_begin();
                    for &factor in factors {
                        black_box(engine.on_scale(factor, Point::new(300.0, 700.0)));
                    }
                    engine
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag, bench_pinch);
criterion_main!(benches);
