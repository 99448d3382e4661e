//! Mood lexicon and mood → parameter mapping.
//!
//! [`MOOD_LEXICON`] is a static, insertion-ordered keyword table. Order is
//! semantically significant: [`mood_to_parameters`] takes the *first*
//! entry whose keyword appears as a substring of the (lowercased) mood
//! phrase, so more specific or more common keywords are listed ahead of
//! broader ones they might otherwise shadow. Changing the table changes
//! every mood-derived palette — that's intentional, the lexicon is the
//! mood→color "taste" of the whole engine.

use huecraft_core::rng::SeededRandom;

/// One of the four harmony pool strategies [`crate::palette::generate_from_mood`]
/// can extend a mood's base color with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarmonyStrategy {
    /// Extend with [`crate::harmony::analogous`].
    Analogous,
    /// Extend with [`crate::harmony::complementary`] plus a little analogous spread.
    Complementary,
    /// Extend with [`crate::harmony::triadic`] plus a little analogous spread.
    Triadic,
    /// Extend with [`crate::harmony::split_complementary`] plus a little analogous spread.
    SplitComplementary,
}

impl HarmonyStrategy {
    /// All four strategies, in the fixed order `choice`/fallback picks from.
    pub const ALL: [HarmonyStrategy; 4] = [
        HarmonyStrategy::Analogous,
        HarmonyStrategy::Complementary,
        HarmonyStrategy::Triadic,
        HarmonyStrategy::SplitComplementary,
    ];
}

/// A partially-specified lexicon entry. `None` fields fall back to the
/// defaults computed in [`mood_to_parameters`] step 3/4.
#[derive(Debug, Clone, Copy)]
pub struct PartialMoodParams {
    /// Base hue in degrees, or `None` to randomize.
    pub base_hue: Option<f64>,
    /// Chroma range `(min, max)`, or `None` for the fallback `[0.12, 0.22]`.
    pub chroma_range: Option<(f64, f64)>,
    /// Lightness range `(min, max)`, or `None` for the fallback `[0.4, 0.8]`.
    pub lightness_range: Option<(f64, f64)>,
    /// Harmony pool strategy, or `None` to randomize.
    pub harmony: Option<HarmonyStrategy>,
}

/// A fully-resolved mood parameter record — the output of [`mood_to_parameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodParameters {
    /// Base hue in degrees.
    pub base_hue: f64,
    /// Chroma range `(min, max)` the base color's chroma is drawn from.
    pub chroma_range: (f64, f64),
    /// Lightness range `(min, max)` the base color's lightness is drawn from.
    pub lightness_range: (f64, f64),
    /// Which harmony pool to extend the base color with.
    pub harmony: HarmonyStrategy,
}

const fn p(
    base_hue: Option<f64>,
    chroma_range: Option<(f64, f64)>,
    lightness_range: Option<(f64, f64)>,
    harmony: Option<HarmonyStrategy>,
) -> PartialMoodParams {
    PartialMoodParams {
        base_hue,
        chroma_range,
        lightness_range,
        harmony,
    }
}

const fn hue(h: f64) -> Option<f64> {
    Some(h)
}
const fn chroma(min: f64, max: f64) -> Option<(f64, f64)> {
    Some((min, max))
}
const fn lightness(min: f64, max: f64) -> Option<(f64, f64)> {
    Some((min, max))
}
const fn with(h: HarmonyStrategy) -> Option<HarmonyStrategy> {
    Some(h)
}

use HarmonyStrategy::{Analogous, Complementary, SplitComplementary, Triadic};

/// The static mood keyword table. Roughly 90 entries, grouped by theme but
/// checked in declaration order — see the module docs for why order
/// matters. Fields left `None` are intentional: they let the seeded RNG
/// vary the output (e.g. `"playful"` has a random base hue every palette).
pub static MOOD_LEXICON: &[(&str, PartialMoodParams)] = &[
    // --- Emotional register, checked first since compound phrases like
    // "calm ocean sunset" should usually key off the emotional word. ---
    ("calm", p(hue(205.0), chroma(0.06, 0.14), lightness(0.55, 0.8), with(Analogous))),
    ("serene", p(hue(195.0), chroma(0.05, 0.12), lightness(0.6, 0.85), with(Analogous))),
    ("peaceful", p(hue(160.0), chroma(0.05, 0.13), lightness(0.6, 0.85), with(Analogous))),
    ("tranquil", p(hue(190.0), chroma(0.04, 0.1), lightness(0.65, 0.88), with(Analogous))),
    ("energetic", p(hue(15.0), chroma(0.22, 0.32), lightness(0.5, 0.68), with(Triadic))),
    ("vibrant", p(hue(330.0), chroma(0.24, 0.34), lightness(0.5, 0.68), with(Triadic))),
    ("lively", p(hue(40.0), chroma(0.2, 0.3), lightness(0.55, 0.72), with(Triadic))),
    ("exciting", p(hue(350.0), chroma(0.24, 0.34), lightness(0.5, 0.68), with(SplitComplementary))),
    ("happy", p(None, chroma(0.16, 0.26), lightness(0.65, 0.85), with(Analogous))),
    ("joyful", p(hue(50.0), chroma(0.18, 0.28), lightness(0.65, 0.85), with(Triadic))),
    ("cheerful", p(hue(45.0), chroma(0.18, 0.26), lightness(0.65, 0.85), with(Analogous))),
    ("playful", p(None, chroma(0.18, 0.28), lightness(0.55, 0.78), None)),
    ("bright", p(hue(55.0), chroma(0.18, 0.28), lightness(0.7, 0.88), with(Analogous))),
    ("sunny", p(hue(50.0), chroma(0.16, 0.26), lightness(0.7, 0.88), with(Complementary))),
    ("dark", p(None, chroma(0.08, 0.18), lightness(0.12, 0.3), with(SplitComplementary))),
    ("mysterious", p(hue(270.0), chroma(0.1, 0.2), lightness(0.15, 0.32), with(SplitComplementary))),
    ("moody", p(hue(250.0), chroma(0.08, 0.16), lightness(0.15, 0.35), with(Analogous))),
    ("somber", p(hue(230.0), chroma(0.04, 0.1), lightness(0.15, 0.3), with(Analogous))),
    ("melancholy", p(hue(220.0), chroma(0.05, 0.12), lightness(0.2, 0.38), with(Analogous))),
    ("sad", p(hue(215.0), chroma(0.04, 0.1), lightness(0.25, 0.42), with(Analogous))),
    ("angry", p(hue(5.0), chroma(0.26, 0.36), lightness(0.3, 0.48), with(Complementary))),
    ("fierce", p(hue(8.0), chroma(0.28, 0.37), lightness(0.35, 0.5), with(Triadic))),
    ("bold", p(hue(350.0), chroma(0.24, 0.34), lightness(0.4, 0.58), with(Complementary))),
    ("dramatic", p(hue(280.0), chroma(0.2, 0.3), lightness(0.2, 0.4), with(SplitComplementary))),
    ("anxious", p(hue(60.0), chroma(0.14, 0.24), lightness(0.4, 0.6), with(Analogous))),
    ("confident", p(hue(230.0), chroma(0.18, 0.28), lightness(0.35, 0.55), with(Complementary))),
    ("romantic", p(hue(340.0), chroma(0.12, 0.22), lightness(0.55, 0.78), with(Analogous))),
    ("dreamy", p(hue(280.0), chroma(0.08, 0.16), lightness(0.6, 0.82), with(Analogous))),
    ("nostalgic", p(hue(30.0), chroma(0.08, 0.16), lightness(0.5, 0.72), with(Analogous))),
    ("whimsical", p(None, chroma(0.16, 0.26), lightness(0.55, 0.78), with(SplitComplementary))),
    ("gentle", p(hue(150.0), chroma(0.04, 0.1), lightness(0.6, 0.82), with(Analogous))),
    ("cozy", p(hue(25.0), chroma(0.1, 0.18), lightness(0.5, 0.72), with(Analogous))),
    ("elegant", p(hue(260.0), chroma(0.06, 0.14), lightness(0.3, 0.55), with(Complementary))),
    ("luxurious", p(hue(280.0), chroma(0.14, 0.24), lightness(0.25, 0.45), with(Complementary))),

    // --- Nature / landscape ---
    ("ocean", p(hue(210.0), chroma(0.1, 0.2), lightness(0.4, 0.65), with(Analogous))),
    ("sea", p(hue(200.0), chroma(0.1, 0.2), lightness(0.4, 0.65), with(Analogous))),
    ("sky", p(hue(215.0), chroma(0.08, 0.16), lightness(0.55, 0.78), with(Analogous))),
    ("sunset", p(hue(25.0), chroma(0.18, 0.28), lightness(0.5, 0.7), with(SplitComplementary))),
    ("sunrise", p(hue(35.0), chroma(0.16, 0.26), lightness(0.6, 0.8), with(Analogous))),
    ("forest", p(hue(140.0), chroma(0.1, 0.2), lightness(0.25, 0.48), with(Analogous))),
    ("jungle", p(hue(125.0), chroma(0.14, 0.24), lightness(0.25, 0.45), with(Triadic))),
    ("mountain", p(hue(220.0), chroma(0.04, 0.1), lightness(0.35, 0.58), with(Analogous))),
    ("desert", p(hue(40.0), chroma(0.12, 0.2), lightness(0.55, 0.78), with(Analogous))),
    ("tropical", p(hue(170.0), chroma(0.2, 0.3), lightness(0.5, 0.7), with(Triadic))),
    ("autumn", p(hue(30.0), chroma(0.16, 0.26), lightness(0.4, 0.62), with(Analogous))),
    ("spring", p(hue(110.0), chroma(0.12, 0.22), lightness(0.55, 0.78), with(Analogous))),
    ("summer", p(hue(45.0), chroma(0.16, 0.26), lightness(0.55, 0.75), with(Triadic))),
    ("winter", p(hue(210.0), chroma(0.04, 0.1), lightness(0.6, 0.85), with(Analogous))),
    ("grass", p(hue(115.0), chroma(0.12, 0.22), lightness(0.4, 0.6), with(Analogous))),
    ("leaf", p(hue(120.0), chroma(0.1, 0.2), lightness(0.35, 0.58), with(Analogous))),
    ("moss", p(hue(105.0), chroma(0.08, 0.16), lightness(0.3, 0.5), with(Analogous))),
    ("fire", p(hue(15.0), chroma(0.26, 0.36), lightness(0.45, 0.65), with(Triadic))),
    ("ice", p(hue(195.0), chroma(0.02, 0.08), lightness(0.75, 0.93), with(Analogous))),
    ("snow", p(hue(210.0), chroma(0.01, 0.05), lightness(0.85, 0.97), with(Analogous))),
    ("storm", p(hue(235.0), chroma(0.06, 0.14), lightness(0.2, 0.4), with(SplitComplementary))),
    ("rain", p(hue(210.0), chroma(0.04, 0.1), lightness(0.35, 0.55), with(Analogous))),
    ("cloud", p(hue(215.0), chroma(0.01, 0.05), lightness(0.75, 0.92), with(Analogous))),
    ("earth", p(hue(35.0), chroma(0.08, 0.16), lightness(0.3, 0.5), with(Analogous))),
    ("stone", p(hue(30.0), chroma(0.01, 0.05), lightness(0.4, 0.62), with(Analogous))),
    ("sand", p(hue(45.0), chroma(0.08, 0.16), lightness(0.6, 0.8), with(Analogous))),
    ("coral", p(hue(10.0), chroma(0.16, 0.26), lightness(0.55, 0.75), with(SplitComplementary))),
    ("lavender", p(hue(270.0), chroma(0.08, 0.16), lightness(0.6, 0.8), with(Analogous))),
    ("rose", p(hue(345.0), chroma(0.12, 0.22), lightness(0.55, 0.75), with(Analogous))),
    ("lemon", p(hue(95.0), chroma(0.18, 0.28), lightness(0.7, 0.88), with(Complementary))),
    ("night", p(hue(240.0), chroma(0.08, 0.16), lightness(0.12, 0.3), with(Analogous))),
    ("midnight", p(hue(245.0), chroma(0.1, 0.18), lightness(0.08, 0.22), with(Analogous))),
    ("dawn", p(hue(30.0), chroma(0.12, 0.2), lightness(0.55, 0.78), with(Analogous))),
    ("dusk", p(hue(265.0), chroma(0.1, 0.18), lightness(0.3, 0.5), with(SplitComplementary))),
    ("morning", p(hue(50.0), chroma(0.1, 0.18), lightness(0.65, 0.85), with(Analogous))),
    ("evening", p(hue(260.0), chroma(0.1, 0.18), lightness(0.3, 0.52), with(Analogous))),

    // --- Temperature / saturation descriptors ---
    ("warm", p(hue(30.0), chroma(0.16, 0.26), lightness(0.5, 0.72), with(Analogous))),
    ("cool", p(hue(210.0), chroma(0.1, 0.2), lightness(0.45, 0.68), with(Analogous))),
    ("cold", p(hue(220.0), chroma(0.08, 0.16), lightness(0.5, 0.75), with(Analogous))),
    ("hot", p(hue(10.0), chroma(0.24, 0.34), lightness(0.45, 0.65), with(Triadic))),
    ("pastel", p(None, chroma(0.04, 0.1), lightness(0.75, 0.9), with(Analogous))),
    ("neon", p(None, chroma(0.3, 0.38), lightness(0.55, 0.72), with(Triadic))),
    ("muted", p(None, chroma(0.03, 0.08), lightness(0.45, 0.68), with(Analogous))),
    ("vivid", p(None, chroma(0.26, 0.36), lightness(0.5, 0.7), with(Triadic))),
    ("subtle", p(None, chroma(0.02, 0.07), lightness(0.55, 0.78), with(Analogous))),
    ("soft", p(hue(320.0), chroma(0.04, 0.1), lightness(0.65, 0.85), with(Analogous))),

    // --- Style / design register ---
    ("minimalist", p(None, chroma(0.01, 0.05), lightness(0.6, 0.85), with(Analogous))),
    ("modern", p(hue(220.0), chroma(0.1, 0.2), lightness(0.4, 0.65), with(Complementary))),
    ("vintage", p(hue(35.0), chroma(0.06, 0.14), lightness(0.45, 0.68), with(Analogous))),
    ("retro", p(hue(15.0), chroma(0.16, 0.26), lightness(0.5, 0.7), with(SplitComplementary))),
    ("industrial", p(hue(210.0), chroma(0.02, 0.07), lightness(0.3, 0.52), with(Analogous))),
    ("rustic", p(hue(25.0), chroma(0.1, 0.18), lightness(0.35, 0.58), with(Analogous))),
    ("corporate", p(hue(215.0), chroma(0.08, 0.16), lightness(0.35, 0.58), with(Complementary))),
    ("professional", p(hue(220.0), chroma(0.06, 0.14), lightness(0.3, 0.55), with(Analogous))),
    ("futuristic", p(hue(190.0), chroma(0.2, 0.3), lightness(0.4, 0.6), with(Triadic))),
    ("natural", p(hue(100.0), chroma(0.08, 0.16), lightness(0.4, 0.64), with(Analogous))),
    ("organic", p(hue(95.0), chroma(0.08, 0.16), lightness(0.4, 0.64), with(Analogous))),
    ("tech", p(hue(200.0), chroma(0.16, 0.26), lightness(0.4, 0.6), with(Triadic))),
    ("clean", p(None, chroma(0.02, 0.06), lightness(0.7, 0.9), with(Analogous))),
];

/// Maps a mood phrase to a fully-resolved parameter record.
///
/// 1. Lowercase the input.
/// 2. Take the first lexicon entry whose keyword is a substring of the
///    mood phrase.
/// 3. If none matched, start from `{random hue, C∈[0.12,0.22],
///    L∈[0.4,0.8], random harmony}`.
/// 4. Any field left unset by the matched entry (or every field, for an
///    unmatched mood) is filled from that same default, so unmatched
///    lightness/chroma ranges are always the fixed fallback and unmatched
///    hue/harmony are drawn from `rng`.
#[must_use]
pub fn mood_to_parameters(mood: &str, rng: &mut SeededRandom) -> MoodParameters {
    let lower = mood.to_lowercase();
    let matched = MOOD_LEXICON.iter().find(|(keyword, _)| lower.contains(keyword));
    let partial = matched.map_or(
        PartialMoodParams {
            base_hue: None,
            chroma_range: None,
            lightness_range: None,
            harmony: None,
        },
        |(_, params)| *params,
    );

    MoodParameters {
        base_hue: partial.base_hue.unwrap_or_else(|| rng.range(0.0, 360.0)),
        chroma_range: partial.chroma_range.unwrap_or((0.12, 0.22)),
        lightness_range: partial.lightness_range.unwrap_or((0.4, 0.8)),
        harmony: partial.harmony.unwrap_or_else(|| random_harmony(rng)),
    }
}

fn random_harmony(rng: &mut SeededRandom) -> HarmonyStrategy {
    let index = (rng.next() * HarmonyStrategy::ALL.len() as f64) as usize;
    HarmonyStrategy::ALL[index.min(HarmonyStrategy::ALL.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_first_keyword_in_declaration_order() {
        let mut rng = SeededRandom::new(1);
        let params = mood_to_parameters("calm ocean sunset", &mut rng);
        // "calm" is declared before "ocean" and "sunset".
        assert!((params.base_hue - 205.0).abs() < 1e-9);
    }

    #[test]
    fn unmatched_mood_falls_back_to_random_hue_and_harmony() {
        let mut rng_a = SeededRandom::new(99);
        let mut rng_b = SeededRandom::new(99);
        let params_a = mood_to_parameters("zzz_no_such_keyword_zzz", &mut rng_a);
        let params_b = mood_to_parameters("zzz_no_such_keyword_zzz", &mut rng_b);
        assert_eq!(params_a, params_b);
        assert_eq!(params_a.chroma_range, (0.12, 0.22));
        assert_eq!(params_a.lightness_range, (0.4, 0.8));
    }

    #[test]
    fn partially_specified_entry_fills_unset_fields_from_default() {
        let mut rng = SeededRandom::new(7);
        let params = mood_to_parameters("feeling happy today", &mut rng);
        // "happy" leaves base_hue unset.
        assert!((0.0..360.0).contains(&params.base_hue));
        assert_eq!(params.chroma_range, (0.16, 0.26));
    }

    #[test]
    fn lexicon_keywords_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (keyword, _) in MOOD_LEXICON {
            assert!(seen.insert(*keyword), "duplicate keyword: {keyword}");
        }
    }

    #[test]
    fn lexicon_has_roughly_the_spec_mandated_breadth() {
        assert!(MOOD_LEXICON.len() >= 60, "lexicon too small: {}", MOOD_LEXICON.len());
    }

    #[test]
    fn happy_bright_sunny_is_lighter_than_dark_mysterious_night() {
        let mut rng = SeededRandom::new(1);
        let happy = mood_to_parameters("happy bright sunny", &mut rng);
        let mut rng2 = SeededRandom::new(1);
        let dark = mood_to_parameters("dark mysterious night", &mut rng2);
        let happy_mid_l = (happy.lightness_range.0 + happy.lightness_range.1) / 2.0;
        let dark_mid_l = (dark.lightness_range.0 + dark.lightness_range.1) / 2.0;
        assert!(happy_mid_l > dark_mid_l);
    }
}
