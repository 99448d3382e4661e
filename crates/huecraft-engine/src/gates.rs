//! Quality gates: chroma sanity filtering and hue-wrap-aware deduplication.
//!
//! These run after a harmony pool has been assembled and before role
//! assignment, trimming colors that drifted out of a sane chroma range or
//! that are near-duplicates of an earlier entry in the pool.

use huecraft_core::space::oklch::OKLCH;

/// The default maximum sane chroma used throughout the synthesizer.
pub const DEFAULT_MAX_CHROMA: f64 = 0.4;

/// The default hue-wrap-aware deduplication threshold.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.01;

/// Returns `true` if `color`'s chroma lies in `[0, max]`.
#[must_use]
pub fn has_sane_chroma(color: &OKLCH, max: f64) -> bool {
    (0.0..=max).contains(&color.c)
}

/// Retains only the colors whose chroma is sane per [`has_sane_chroma`].
#[must_use]
pub fn filter_sane_chroma(colors: &[OKLCH], max: f64) -> Vec<OKLCH> {
    colors.iter().copied().filter(|c| has_sane_chroma(c, max)).collect()
}

/// Circular hue distance in `[0, 180]` degrees.
#[must_use]
pub fn hue_circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Stable, first-wins deduplication. Two colors are "the same" when their
/// lightness and chroma differ by less than `epsilon` and their hues are
/// within `epsilon * 360` degrees of each other (hue-wrap aware).
#[must_use]
pub fn remove_duplicates(colors: &[OKLCH], epsilon: f64) -> Vec<OKLCH> {
    let hue_epsilon = epsilon * 360.0;
    let mut kept: Vec<OKLCH> = Vec::with_capacity(colors.len());
    for &candidate in colors {
        let is_duplicate = kept.iter().any(|existing| {
            (candidate.l - existing.l).abs() < epsilon
                && (candidate.c - existing.c).abs() < epsilon
                && hue_circular_distance(candidate.h, existing.h) < hue_epsilon
        });
        if !is_duplicate {
            kept.push(candidate);
        }
    }
    kept
}

/// Tunable knobs for [`apply_quality_gates`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityGateOptions {
    /// Whether to run hue-wrap-aware deduplication after the chroma filter.
    pub remove_duplicates: bool,
    /// Maximum sane chroma.
    pub max_chroma: f64,
    /// Deduplication epsilon, see [`remove_duplicates`].
    pub duplicate_threshold: f64,
}

impl Default for QualityGateOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            max_chroma: DEFAULT_MAX_CHROMA,
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
        }
    }
}

/// Filters by chroma first, then deduplicates if `options.remove_duplicates`.
#[must_use]
pub fn apply_quality_gates(colors: &[OKLCH], options: QualityGateOptions) -> Vec<OKLCH> {
    let filtered = filter_sane_chroma(colors, options.max_chroma);
    if options.remove_duplicates {
        remove_duplicates(&filtered, options.duplicate_threshold)
    } else {
        filtered
    }
}
