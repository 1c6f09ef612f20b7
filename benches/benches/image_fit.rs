// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_image_fit::translation::{check_translation_bounds, translate};
use understory_image_fit::{
    BitmapConstraints, CalculationSnapshot, ImageTransform, Insets, PixelSize, ScaleController,
    ViewportConfig, verify_scale_factor,
};

fn viewport(crop_to_padding: bool, pin: bool) -> ViewportConfig {
    ViewportConfig {
        size: PixelSize::new(1080, 1920),
        padding: Insets::new(24, 48, 24, 48),
        crop_to_padding,
        translation_extra: Insets::new(16, 16, 16, 16),
        pin_axes_smaller_than_view: pin,
    }
}

fn constraints() -> BitmapConstraints {
    BitmapConstraints {
        source: PixelSize::new(4032, 3024),
        min_size: PixelSize::ZERO,
        max_size: PixelSize::new(8064, 0),
    }
}

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_fit/translation");

    // Offsets sweep the image from far past one edge to far past the other,
    // so every correction branch is taken.
    let offsets: Vec<Vec2> = (-64..64)
        .map(|i| Vec2::new(f64::from(i) * 97.0, f64::from(i) * -61.0))
        .collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));

    for (name, crop, pin) in [
        ("plain", false, false),
        ("crop", true, false),
        ("pinned", false, true),
    ] {
        let viewport = viewport(crop, pin);
        let constraints = constraints();
        let snapshots: Vec<CalculationSnapshot> = offsets
            .iter()
            .map(|&t| {
                CalculationSnapshot::new(&ImageTransform::new(0.3, t), &viewport, &constraints)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("check_translation_bounds", name),
            &snapshots,
            |b, snapshots| {
                b.iter(|| {
                    for snap in snapshots {
                        black_box(check_translation_bounds(black_box(snap)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("translate", name),
            &snapshots,
            |b, snapshots| {
                b.iter(|| {
                    for snap in snapshots {
                        black_box(translate(black_box(Vec2::new(35.0, -12.0)), snap));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_fit/scale");
    let constraints = constraints();
    let factors: Vec<f64> = (1..=256).map(|i| f64::from(i) / 64.0).collect();
    group.throughput(Throughput::Elements(factors.len() as u64));

    group.bench_function("verify_scale_factor", |b| {
        b.iter(|| {
            for &factor in &factors {
                black_box(verify_scale_factor(black_box(factor), &constraints));
            }
        });
    });

    let viewport = viewport(true, true);
    let snapshot = CalculationSnapshot::new(&ImageTransform::IDENTITY, &viewport, &constraints);
    group.bench_function("scale", |b| {
        b.iter(|| {
            let mut scale = ScaleController::new();
            for &factor in &factors {
                black_box(scale.scale(factor.sqrt(), Point::new(540.0, 960.0), &snapshot));
            }
        });
    });

    group.bench_function("perform_initial_scale", |b| {
        b.iter(|| {
            let mut scale = ScaleController::new();
            black_box(scale.perform_initial_scale(black_box(&snapshot)))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_translation, bench_scale);
criterion_main!(benches);
