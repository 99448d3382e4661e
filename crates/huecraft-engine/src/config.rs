//! Tunable synthesis parameters.
//!
//! There is no environment-variable, CLI-flag, or config-file layer at this
//! boundary — just a typed, `Default`-implementing parameters struct
//! bundling the gate epsilon, chroma ceiling, and target palette size every
//! `generate_from_*` function uses.

use crate::gates::DEFAULT_MAX_CHROMA;

/// Tunable knobs shared by every palette synthesizer entry point.
///
/// The default `duplicate_threshold` (`0.02`) is what the color/colors/mood
/// synthesizers gate with, which is looser than the general-purpose
/// quality-gate default (`gates::DEFAULT_DUPLICATE_THRESHOLD`, `0.01`) used
/// when [`crate::gates::apply_quality_gates`] is called standalone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisConfig {
    /// Maximum sane chroma passed to the chroma quality gate.
    pub max_chroma: f64,
    /// Hue-wrap-aware deduplication epsilon.
    pub duplicate_threshold: f64,
    /// Lower bound of the target final palette size.
    pub min_palette_size: usize,
    /// Upper bound of the target final palette size.
    pub max_palette_size: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_chroma: DEFAULT_MAX_CHROMA,
            duplicate_threshold: 0.02,
            min_palette_size: 8,
            max_palette_size: 12,
        }
    }
}

impl SynthesisConfig {
    /// The config used by the image-clusterer synthesizer, which gates
    /// with a looser `ε=0.03`.
    #[must_use]
    pub fn for_image() -> Self {
        Self {
            duplicate_threshold: 0.03,
            ..Self::default()
        }
    }
}
