//! Harmony generators.
//!
//! Each function derives a small set of colors from a single base by
//! rotating hue around the OKLCH wheel (Itten 1961 hue geometry). Every generator preserves
//! the base's lightness and chroma except [`neutrals`], which derives its
//! own chroma and spreads lightness across the set; hue is always
//! normalized to `[0, 360)` via [`OKLCH::new`].
//!
//! The palette synthesizer (`palette` module) is the only caller that picks
//! concrete step/spread/count values; these functions take them as
//! parameters rather than hard-coding the synthesizer's defaults.

use huecraft_core::space::oklch::OKLCH;

/// Generates `count` colors alternating `+step, -step, +2*step, -2*step, …`
/// around the base hue. The base color itself is not included.
#[must_use]
pub fn analogous(base: OKLCH, step_degrees: f64, count: usize) -> Vec<OKLCH> {
    (0..count)
        .map(|i| {
            let multiple = (i / 2 + 1) as f64;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            OKLCH::new(base.l, base.c, base.h + sign * multiple * step_degrees)
        })
        .collect()
}

/// A single color at the base hue plus 180°.
#[must_use]
pub fn complementary(base: OKLCH) -> OKLCH {
    OKLCH::new(base.l, base.c, base.h + 180.0)
}

/// Two colors flanking the complement by `spread` degrees.
#[must_use]
pub fn split_complementary(base: OKLCH, spread_degrees: f64) -> Vec<OKLCH> {
    let complement_hue = base.h + 180.0;
    vec![
        OKLCH::new(base.l, base.c, complement_hue - spread_degrees),
        OKLCH::new(base.l, base.c, complement_hue + spread_degrees),
    ]
}

/// Two colors at the base hue plus 120° and 240°.
#[must_use]
pub fn triadic(base: OKLCH) -> Vec<OKLCH> {
    vec![
        OKLCH::new(base.l, base.c, base.h + 120.0),
        OKLCH::new(base.l, base.c, base.h + 240.0),
    ]
}

/// `count` low-chroma colors sharing the base hue, with lightness spread
/// evenly across `(0, 1)`.
///
/// Chroma is `min(base.c * 0.2, 0.05)` for every color; lightness for the
/// `i`-th color (0-indexed) is `(i + 1) / (count + 1)`.
#[must_use]
pub fn neutrals(base: OKLCH, count: usize) -> Vec<OKLCH> {
    let chroma = (base.c * 0.2).min(0.05);
    let denom = (count + 1) as f64;
    (0..count)
        .map(|i| {
            let lightness = (i + 1) as f64 / denom;
            OKLCH::new(lightness, chroma, base.h)
        })
        .collect()
}
