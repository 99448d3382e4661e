//! Role-aware contrast reporting, built on top of
//! [`huecraft_metrics::wcag`]'s colorspace-only primitives.
//!
//! `huecraft-metrics` knows nothing about semantic roles; this module is
//! where "foreground role × background role" pairing rules live, layered
//! on top of the metrics crate's pure algorithms.

use huecraft_metrics::wcag::{contrast_ratio, meets_level, WCAGLevel};

use crate::role::{AssignedColor, ColorRole};

/// Default minimum ratio used by [`find_accessible_pairs`].
pub const DEFAULT_MIN_RATIO: f64 = 4.5;

/// A single foreground/background contrast measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastCheck {
    /// The foreground role in this pairing.
    pub foreground: ColorRole,
    /// The background role in this pairing.
    pub background: ColorRole,
    /// The WCAG 2.0 contrast ratio, in `[1.0, 21.0]`.
    pub ratio: f64,
    /// Whether `ratio` clears each of the four WCAG levels.
    pub passes: [(WCAGLevel, bool); 4],
}

/// Summary and per-pair detail for a whole palette.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastReport {
    /// Every pair checked.
    pub checks: Vec<ContrastCheck>,
    /// Total number of pairs checked.
    pub total_pairs: usize,
    /// How many pairs meet AA (normal text).
    pub passing_aa: usize,
    /// How many pairs meet AAA (normal text).
    pub passing_aaa: usize,
}

/// Checks the contrast between a single foreground/background pair.
#[must_use]
pub fn check_contrast(foreground: &AssignedColor, background: &AssignedColor) -> ContrastCheck {
    let ratio = contrast_ratio(foreground.color.to_rgb(), background.color.to_rgb());
    let passes = WCAGLevel::ALL.map(|level| (level, meets_level(ratio, level)));
    ContrastCheck {
        foreground: foreground.role,
        background: background.role,
        ratio,
        passes,
    }
}

/// Generates a contrast report for a palette.
///
/// If the palette has at least one `background`-role color, a check is
/// emitted for every (non-background color × background color) pair.
/// Otherwise, a check is emitted for every unordered pair in the palette.
#[must_use]
pub fn generate_contrast_report(palette: &[AssignedColor]) -> ContrastReport {
    let backgrounds: Vec<&AssignedColor> = palette
        .iter()
        .filter(|c| c.role == ColorRole::Background)
        .collect();

    let checks: Vec<ContrastCheck> = if backgrounds.is_empty() {
        let mut checks = Vec::new();
        for i in 0..palette.len() {
            for j in (i + 1)..palette.len() {
                checks.push(check_contrast(&palette[i], &palette[j]));
            }
        }
        checks
    } else {
        let mut checks = Vec::new();
        for bg in &backgrounds {
            for fg in palette.iter().filter(|c| c.role != ColorRole::Background) {
                checks.push(check_contrast(fg, bg));
            }
        }
        checks
    };

    let passing_aa = checks
        .iter()
        .filter(|c| meets_level(c.ratio, WCAGLevel::AaNormal))
        .count();
    let passing_aaa = checks
        .iter()
        .filter(|c| meets_level(c.ratio, WCAGLevel::AaaNormal))
        .count();

    ContrastReport {
        total_pairs: checks.len(),
        passing_aa,
        passing_aaa,
        checks,
    }
}

/// Filters `candidates` down to those meeting `min_ratio` contrast against `target`.
#[must_use]
pub fn find_accessible_pairs(
    target: huecraft_core::space::oklch::OKLCH,
    candidates: &[huecraft_core::space::oklch::OKLCH],
    min_ratio: f64,
) -> Vec<huecraft_core::space::oklch::OKLCH> {
    let target_rgb = target.to_rgb();
    candidates
        .iter()
        .copied()
        .filter(|c| contrast_ratio(target_rgb, c.to_rgb()) >= min_ratio)
        .collect()
}
