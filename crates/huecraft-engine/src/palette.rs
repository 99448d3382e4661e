//! The palette synthesizer: the orchestrator that turns a base color, a
//! small set of base colors, a mood phrase, or a bag of image pixels into a
//! finished, role-assigned [`GeneratedPalette`].
//!
//! Each `generate_from_*` function builds a seed pool with [`crate::harmony`],
//! trims it with [`crate::gates`], and hands the survivors to
//! [`crate::role::assign_roles`]. `generate_from_mood` additionally performs
//! a deterministic post-assignment reshuffle: the reshuffle must reuse the
//! caller's rng, not a fresh one, or determinism breaks.

use std::time::{SystemTime, UNIX_EPOCH};

use huecraft_core::color::Rgb;
use huecraft_core::rng::{hash_string, SeededRandom};
use huecraft_core::space::oklch::OKLCH;

use crate::cluster;
use crate::config::SynthesisConfig;
use crate::error::PaletteError;
use crate::gates::{self, QualityGateOptions};
use crate::harmony;
use crate::mood::{self, HarmonyStrategy};
use crate::role::{self, AssignedColor, ColorRole};

/// Tagged variant describing which stimulus produced a [`GeneratedPalette`].
///
/// Feeds a single conceptual `synthesize` entry point rather than a class
/// hierarchy per generator kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generator {
    /// Synthesized from one base color.
    Color(OKLCH),
    /// Synthesized from an ordered, non-empty set of base colors.
    Colors(Vec<OKLCH>),
    /// Synthesized from a free-text mood phrase, with an optional explicit seed.
    Mood(String, Option<u32>),
    /// Synthesized from a flat sequence of image pixels.
    Image(Vec<Rgb>),
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Generator::Color(_) => "color",
            Generator::Colors(_) => "colors",
            Generator::Mood(_, _) => "mood",
            Generator::Image(_) => "image",
        };
        f.write_str(label)
    }
}

/// A finished, role-assigned palette plus provenance metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedPalette {
    /// The final colors, each tagged with a semantic role.
    pub colors: Vec<AssignedColor>,
    /// What stimulus produced this palette.
    pub generator: Generator,
    /// A short human-readable description of how the palette was derived.
    pub explanation: String,
    /// ISO-8601 UTC timestamp of when the palette was synthesized.
    pub timestamp: String,
}

/// Dispatches to the appropriate `generate_from_*` function based on the
/// tagged [`Generator`] variant.
pub fn synthesize(generator: Generator) -> Result<GeneratedPalette, PaletteError> {
    match generator {
        Generator::Color(base) => Ok(generate_from_base_color(base)),
        Generator::Colors(bases) => generate_from_base_colors(&bases),
        Generator::Mood(mood, seed) => Ok(generate_from_mood(&mood, seed)),
        Generator::Image(pixels) => Ok(generate_from_image(&pixels)),
    }
}

fn gate_options(config: &SynthesisConfig) -> QualityGateOptions {
    QualityGateOptions {
        remove_duplicates: true,
        max_chroma: config.max_chroma,
        duplicate_threshold: config.duplicate_threshold,
    }
}

/// Gates `pool`, and if fewer than `config.min_palette_size` colors survive,
/// extends `pool` with a wider analogous spread around `extend_anchor` and
/// re-gates the whole thing. Does not truncate — callers own the final size
/// and truncation strategy.
fn gate_and_size_correct(
    pool: &mut Vec<OKLCH>,
    extend_anchor: OKLCH,
    config: &SynthesisConfig,
) -> Vec<OKLCH> {
    let mut gated = gates::apply_quality_gates(pool, gate_options(config));
    if gated.len() < config.min_palette_size {
        pool.extend(harmony::analogous(extend_anchor, 20.0, 4));
        gated = gates::apply_quality_gates(pool, gate_options(config));
    }
    gated
}

/// Builds a palette from a single base color.
#[must_use]
pub fn generate_from_base_color(base: OKLCH) -> GeneratedPalette {
    generate_from_base_color_with_config(base, SynthesisConfig::default())
}

/// Builds a palette from a single base color with tunable synthesis parameters.
#[must_use]
pub fn generate_from_base_color_with_config(base: OKLCH, config: SynthesisConfig) -> GeneratedPalette {
    let mut pool = vec![base, harmony::complementary(base)];
    pool.extend(harmony::analogous(base, 30.0, 2));
    pool.extend(harmony::split_complementary(base, 30.0));
    pool.extend(harmony::neutrals(base, 4));

    let mut gated = gate_and_size_correct(&mut pool, base, &config);
    gated.truncate(config.max_palette_size);

    let colors = role::assign_roles(&gated);
    GeneratedPalette {
        colors,
        generator: Generator::Color(base),
        explanation: "Seeded from a single base color using complementary, analogous, \
            split-complementary, and neutral harmonies, then gated and role-assigned."
            .to_string(),
        timestamp: now_iso8601(),
    }
}

/// Builds a palette from an ordered, non-empty set of base colors.
///
/// Fails with [`PaletteError::EmptyInput`] when `bases` is empty. A single
/// base delegates to [`generate_from_base_color`].
pub fn generate_from_base_colors(bases: &[OKLCH]) -> Result<GeneratedPalette, PaletteError> {
    generate_from_base_colors_with_config(bases, SynthesisConfig::default())
}

/// As [`generate_from_base_colors`], with tunable synthesis parameters.
pub fn generate_from_base_colors_with_config(
    bases: &[OKLCH],
    config: SynthesisConfig,
) -> Result<GeneratedPalette, PaletteError> {
    if bases.is_empty() {
        return Err(PaletteError::EmptyInput);
    }
    if bases.len() == 1 {
        return Ok(generate_from_base_color_with_config(bases[0], config));
    }

    const MAIN_ROLES: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Info,
        ColorRole::Success,
    ];

    let mut preserved: Vec<AssignedColor> = bases
        .iter()
        .enumerate()
        .map(|(i, &base)| {
            let role = *MAIN_ROLES.get(i).unwrap_or(&ColorRole::Accent);
            AssignedColor::new(role, base)
        })
        .collect();

    let first = bases[0];
    let background = OKLCH::new(0.97, (first.c * 0.1).min(0.02), first.h);
    let text = OKLCH::new(0.1, (first.c * 0.15).min(0.03), first.h);
    preserved.push(AssignedColor::new(ColorRole::Background, background));
    preserved.push(AssignedColor::new(ColorRole::Text, text));

    let additional: Vec<OKLCH> = bases
        .iter()
        .flat_map(|&base| harmony::analogous(base, 25.0, 1))
        .collect();
    let gated = gates::apply_quality_gates(&additional, gate_options(&config));

    let preserved_colors: Vec<OKLCH> = preserved.iter().map(|a| a.color).collect();
    let fresh: Vec<OKLCH> = gated
        .into_iter()
        .filter(|candidate| {
            !preserved_colors
                .iter()
                .any(|kept| oklch_space_distance(*candidate, *kept) < 0.05)
        })
        .collect();

    for (color, role) in fresh.into_iter().zip([ColorRole::Warning, ColorRole::Error]) {
        preserved.push(AssignedColor::new(role, color));
    }

    Ok(GeneratedPalette {
        colors: preserved,
        generator: Generator::Colors(bases.to_vec()),
        explanation: format!(
            "Preserved {} caller-supplied base colors in role order, derived a background and \
                text from the first base, and filled up to two accent-hue slots from analogous \
                fills.",
            bases.len()
        ),
        timestamp: now_iso8601(),
    })
}

/// Builds a palette from a free-text mood phrase.
///
/// `seed` pins the RNG explicitly; `None` derives it from [`hash_string`] of
/// `mood`, so the same phrase always produces the same palette absent an
/// explicit seed.
#[must_use]
pub fn generate_from_mood(mood: &str, seed: Option<u32>) -> GeneratedPalette {
    generate_from_mood_with_config(mood, seed, SynthesisConfig::default())
}

/// As [`generate_from_mood`], with tunable synthesis parameters.
#[must_use]
pub fn generate_from_mood_with_config(
    mood_phrase: &str,
    seed: Option<u32>,
    config: SynthesisConfig,
) -> GeneratedPalette {
    let resolved_seed = seed.unwrap_or_else(|| hash_string(mood_phrase));
    let mut rng = SeededRandom::new(resolved_seed);
    let params = mood::mood_to_parameters(mood_phrase, &mut rng);

    let l = rng.range(params.lightness_range.0, params.lightness_range.1);
    let c = rng.range(params.chroma_range.0, params.chroma_range.1);
    let h = params.base_hue + rng.range(-15.0, 15.0);
    let base = OKLCH::new(l, c, h);

    let mut pool = vec![base];
    match params.harmony {
        HarmonyStrategy::Analogous => pool.extend(harmony::analogous(base, 30.0, 4)),
        HarmonyStrategy::Complementary => {
            pool.push(harmony::complementary(base));
            pool.extend(harmony::analogous(base, 20.0, 2));
        }
        HarmonyStrategy::Triadic => {
            pool.extend(harmony::triadic(base));
            pool.extend(harmony::analogous(base, 15.0, 1));
        }
        HarmonyStrategy::SplitComplementary => {
            pool.extend(harmony::split_complementary(base, 30.0));
            pool.extend(harmony::analogous(base, 20.0, 1));
        }
    }
    pool.extend(harmony::neutrals(base, 4));

    let mut gated = gate_and_size_correct(&mut pool, base, &config);
    gated.truncate(config.max_palette_size);

    let assigned = role::assign_roles(&gated);

    let (mut main, anchors): (Vec<AssignedColor>, Vec<AssignedColor>) = assigned
        .into_iter()
        .partition(|a| !matches!(a.role, ColorRole::Background | ColorRole::Text));

    fisher_yates_shuffle(&mut main, &mut rng);

    const REASSIGNED_ROLES: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Info,
        ColorRole::Success,
    ];

    // Only the first 5 (post-shuffle) get relabeled to the fixed role
    // names, for presentation variety. Anything past that keeps the role
    // `role::assign_roles` already gave it rather than being dropped — a
    // mood palette must stay in the same [8,12] range the pool was gated
    // to, not collapse to 5 main colors plus anchors.
    let mut colors: Vec<AssignedColor> = main
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, entry)| AssignedColor::new(REASSIGNED_ROLES[i], entry.color))
        .collect();
    colors.extend(main.iter().skip(5).copied());

    if let Some(background) = anchors.iter().find(|a| a.role == ColorRole::Background) {
        colors.push(*background);
    }
    if let Some(text) = anchors.iter().find(|a| a.role == ColorRole::Text) {
        colors.push(*text);
    }

    GeneratedPalette {
        colors,
        generator: Generator::Mood(mood_phrase.to_string(), seed),
        explanation: format!(
            "Mapped \"{mood_phrase}\" to a base color and harmony strategy via the mood lexicon, \
                gated the resulting pool, then reshuffled the main roles for presentation variety."
        ),
        timestamp: now_iso8601(),
    }
}

/// Builds a palette from a flat sequence of 8-bit RGB pixels via k-means
/// dominant-color extraction.
#[must_use]
pub fn generate_from_image(pixels: &[Rgb]) -> GeneratedPalette {
    generate_from_image_with_config(pixels, SynthesisConfig::for_image())
}

/// As [`generate_from_image`], with tunable synthesis parameters.
#[must_use]
pub fn generate_from_image_with_config(pixels: &[Rgb], config: SynthesisConfig) -> GeneratedPalette {
    let num_dominant = (pixels.len() / 1000).clamp(2, 4);
    let dominants = cluster::extract_dominant(pixels, num_dominant);

    let most_chromatic = dominants
        .iter()
        .copied()
        .max_by(|a, b| a.c.partial_cmp(&b.c).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(OKLCH::new(0.5, 0.0, 0.0));

    let mut pool: Vec<OKLCH> = dominants.clone();
    for &dominant in &dominants {
        pool.extend(harmony::analogous(dominant, 25.0, 1));
    }
    pool.extend(harmony::neutrals(most_chromatic, 3));

    let mut gated = gate_and_size_correct(&mut pool, most_chromatic, &config);
    if gated.len() > config.max_palette_size {
        gated = truncate_preferring_dominant_proximity(gated, &dominants, config.max_palette_size);
    }

    let colors = role::assign_roles(&gated);
    GeneratedPalette {
        colors,
        generator: Generator::Image(pixels.to_vec()),
        explanation: format!(
            "Extracted {num_dominant} dominant colors from {} pixels via OKLCH k-means, \
                extended with analogous and neutral fills, then gated and role-assigned.",
            pixels.len()
        ),
        timestamp: now_iso8601(),
    }
}

/// Keeps entries close to a dominant color (`ΔL<0.05, ΔC<0.05, ΔH_circ<10°`)
/// ahead of the rest, then truncates to `max_size`.
fn truncate_preferring_dominant_proximity(
    colors: Vec<OKLCH>,
    dominants: &[OKLCH],
    max_size: usize,
) -> Vec<OKLCH> {
    let (close, far): (Vec<OKLCH>, Vec<OKLCH>) = colors.into_iter().partition(|candidate| {
        dominants.iter().any(|dominant| {
            (candidate.l - dominant.l).abs() < 0.05
                && (candidate.c - dominant.c).abs() < 0.05
                && gates::hue_circular_distance(candidate.h, dominant.h) < 10.0
        })
    });
    close.into_iter().chain(far).take(max_size).collect()
}

/// Combined OKLCH-space distance, matching the metric used by the image
/// clusterer: `√((ΔL)² + (ΔC)² + (ΔH_circ/360)²)`.
fn oklch_space_distance(a: OKLCH, b: OKLCH) -> f64 {
    let dl = a.l - b.l;
    let dc = a.c - b.c;
    let dh = gates::hue_circular_distance(a.h, b.h) / 360.0;
    (dl * dl + dc * dc + dh * dh).sqrt()
}

/// In-place Fisher-Yates shuffle reusing the caller's rng, so determinism
/// holds for a fixed `(mood, seed)` pair.
fn fisher_yates_shuffle<T>(items: &mut [T], rng: &mut SeededRandom) {
    for i in (1..items.len()).rev() {
        let j = (rng.next() * (i + 1) as f64) as usize;
        items.swap(i, j.min(i));
    }
}

fn now_iso8601() -> String {
    let unix_seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_iso8601(unix_seconds)
}

fn format_iso8601(unix_seconds: u64) -> String {
    let days = (unix_seconds / 86_400) as i64;
    let time_of_day = unix_seconds % 86_400;
    let (year, month, day) = civil_from_days(days);
    let hour = time_of_day / 3600;
    let minute = (time_of_day % 3600) / 60;
    let second = time_of_day % 60;
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z")
}

/// Howard Hinnant's `civil_from_days`: days since the Unix epoch to a
/// proleptic Gregorian `(year, month, day)`. Avoids a `chrono`/`time`
/// dependency for a single formatting need.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32; // [1, 12]
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}
