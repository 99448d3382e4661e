//! # Palette Synthesis Benchmarks
//!
//! Performance benchmarks for the two most expensive synthesizer entry
//! points: `generate_from_mood` (lexicon lookup + harmony pool + gating +
//! reshuffle) and `extract_dominant` (OKLCH k-means over arbitrarily large
//! pixel batches).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huecraft_core::color::Rgb;
use huecraft_engine::cluster::extract_dominant;
use huecraft_engine::generate_from_mood;

fn bench_generate_from_mood(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_from_mood");

    group.bench_function("unseeded", |b| {
        b.iter(|| generate_from_mood(black_box("calm ocean sunset"), None));
    });

    group.bench_function("seeded", |b| {
        b.iter(|| generate_from_mood(black_box("vivid tropical summer"), Some(12345)));
    });

    group.finish();
}

fn bench_extract_dominant(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_dominant");

    for &pixel_count in &[100usize, 1_000, 10_000] {
        let pixels: Vec<Rgb> = (0..pixel_count)
            .map(|i| {
                let v = (i % 256) as u8;
                Rgb::new(v, ((v as u32 + 85) % 256) as u8, ((v as u32 + 170) % 256) as u8)
            })
            .collect();

        group.throughput(Throughput::Elements(pixel_count as u64));
        group.bench_with_input(
            BenchmarkId::new("k4", pixel_count),
            &pixels,
            |b, pixels| {
                b.iter(|| extract_dominant(black_box(pixels), 4));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate_from_mood, bench_extract_dominant);
criterion_main!(benches);
