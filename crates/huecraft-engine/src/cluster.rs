//! OKLCH k-means image clusterer.
//!
//! Extracts `k` dominant colors from a flat sequence of 8-bit RGB pixels.
//! Centroid initialization is positional, not random, and hue is averaged
//! circularly rather than arithmetically — both deliberate determinism
//! choices: shuffling pixel order may change the result, but a fixed
//! input order always reproduces the same centroids.

use huecraft_core::color::Rgb;
use huecraft_core::space::oklch::OKLCH;

const MAX_ITERATIONS: usize = 10;

/// Extracts `k` dominant colors from `pixels` via k-means in OKLCH space.
///
/// Returns an empty vector if `pixels` is empty. Otherwise always returns
/// exactly `k` colors (assuming `k >= 1` and `k <= pixels.len()`).
#[must_use]
pub fn extract_dominant(pixels: &[Rgb], k: usize) -> Vec<OKLCH> {
    if pixels.is_empty() || k == 0 {
        return Vec::new();
    }

    let points: Vec<OKLCH> = pixels.iter().copied().map(OKLCH::from_rgb).collect();
    let n = points.len();

    let mut centroids: Vec<OKLCH> = (0..k)
        .map(|i| points[((i * n) / k).min(n - 1)])
        .collect();

    for _ in 0..MAX_ITERATIONS {
        let mut sums_l = vec![0.0_f64; k];
        let mut sums_c = vec![0.0_f64; k];
        let mut sums_sin = vec![0.0_f64; k];
        let mut sums_cos = vec![0.0_f64; k];
        let mut counts = vec![0usize; k];

        for &point in &points {
            let nearest = nearest_centroid(point, &centroids);
            sums_l[nearest] += point.l;
            sums_c[nearest] += point.c;
            let h_rad = point.h.to_radians();
            sums_sin[nearest] += h_rad.sin();
            sums_cos[nearest] += h_rad.cos();
            counts[nearest] += 1;
        }

        for cluster in 0..k {
            if counts[cluster] == 0 {
                continue; // empty clusters retain their previous centroid
            }
            let count = counts[cluster] as f64;
            let mean_l = sums_l[cluster] / count;
            let mean_c = sums_c[cluster] / count;
            let mean_h = sums_sin[cluster]
                .atan2(sums_cos[cluster])
                .to_degrees();
            centroids[cluster] = OKLCH::new(mean_l, mean_c, mean_h);
        }
    }

    centroids
}

fn nearest_centroid(point: OKLCH, centroids: &[OKLCH]) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, &centroid) in centroids.iter().enumerate() {
        let distance = oklch_distance(point, centroid);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}

fn oklch_distance(a: OKLCH, b: OKLCH) -> f64 {
    let dl = a.l - b.l;
    let dc = a.c - b.c;
    let raw_dh = (a.h - b.h).abs();
    let dh_circ = raw_dh.min(360.0 - raw_dh) / 360.0;
    (dl * dl + dc * dc + dh_circ * dh_circ).sqrt()
}
