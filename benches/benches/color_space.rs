//! # Color Space Kernel Benchmarks
//!
//! Performance benchmarks for the sRGB <-> OKLCH conversion pipeline, the
//! hottest path in the whole workspace: every harmony generator, quality
//! gate, and role assignment operates on OKLCH, and every synthesizer
//! ultimately needs to round-trip back to sRGB for display.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huecraft_core::color::Rgb;
use huecraft_core::space::oklch::{oklch_to_rgb, rgb_to_oklch, OKLCH};

fn bench_rgb_to_oklch(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_oklch");

    group.bench_function("single", |b| {
        let rgb = black_box(Rgb::new(59, 130, 246));
        b.iter(|| rgb_to_oklch(black_box(rgb)));
    });

    let palette: Vec<Rgb> = (0..256u32)
        .step_by(4)
        .map(|v| Rgb::new(v as u8, ((v + 85) % 256) as u8, ((v + 170) % 256) as u8))
        .collect();

    group.throughput(Throughput::Elements(palette.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("batch", palette.len()),
        &palette,
        |b, palette| {
            b.iter(|| {
                for &rgb in palette {
                    black_box(rgb_to_oklch(rgb));
                }
            });
        },
    );

    group.finish();
}

fn bench_oklch_to_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("oklch_to_rgb");

    group.bench_function("single", |b| {
        let oklch = black_box(OKLCH::new(0.6, 0.2, 220.0));
        b.iter(|| oklch_to_rgb(black_box(&oklch)));
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_rgb_oklch_rgb", |b| {
        let rgb = black_box(Rgb::new(200, 90, 40));
        b.iter(|| oklch_to_rgb(&rgb_to_oklch(black_box(rgb))));
    });
}

criterion_group!(benches, bench_rgb_to_oklch, bench_oklch_to_rgb, bench_round_trip);
criterion_main!(benches);
