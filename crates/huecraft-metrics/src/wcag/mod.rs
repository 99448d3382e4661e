//! WCAG 2.0 Contrast Ratio Implementation
//!
//! Implements the WCAG 2.0 contrast ratio algorithm as defined in:
//! <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>
//!
//! This implementation follows the canonical Rust core principle: it is the
//! source of truth for WCAG contrast calculations. It has no notion of
//! semantic color roles — it operates on plain `Rgb` values and leaves
//! role-aware reporting (which pair is "primary on background") to the
//! layer above.

use huecraft_core::color::Rgb;
use huecraft_core::perception::{ContrastMetric, PerceptualResult};

/// WCAG 2.0 conformance level, crossed with text size.
///
/// Unlike a two-axis `Level × TextSize` split, this is kept flat because
/// every caller needs to check all four combinations at once (see
/// `ContrastCheck::passes` in `huecraft-engine::contrast`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WCAGLevel {
    /// AA, normal text: 4.5:1
    AaNormal,
    /// AA, large text: 3.0:1
    AaLarge,
    /// AAA, normal text: 7.0:1
    AaaNormal,
    /// AAA, large text: 4.5:1
    AaaLarge,
}

impl WCAGLevel {
    /// All four levels, in the fixed order used by `ContrastCheck::passes`.
    pub const ALL: [WCAGLevel; 4] = [
        WCAGLevel::AaNormal,
        WCAGLevel::AaLarge,
        WCAGLevel::AaaNormal,
        WCAGLevel::AaaLarge,
    ];

    /// The minimum contrast ratio required to satisfy this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use huecraft_metrics::wcag::WCAGLevel;
    ///
    /// assert_eq!(WCAGLevel::AaNormal.threshold(), 4.5);
    /// assert_eq!(WCAGLevel::AaLarge.threshold(), 3.0);
    /// assert_eq!(WCAGLevel::AaaNormal.threshold(), 7.0);
    /// assert_eq!(WCAGLevel::AaaLarge.threshold(), 4.5);
    /// ```
    #[inline]
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            WCAGLevel::AaNormal => 4.5,
            WCAGLevel::AaLarge => 3.0,
            WCAGLevel::AaaNormal => 7.0,
            WCAGLevel::AaaLarge => 4.5,
        }
    }
}

/// Relative luminance of an sRGB color, per WCAG 2.0 / ITU-R BT.709
/// coefficients (R: 0.2126, G: 0.7152, B: 0.0722).
///
/// # Examples
///
/// ```
/// use huecraft_core::color::Rgb;
/// use huecraft_metrics::wcag::relative_luminance;
///
/// let white = Rgb::new(255, 255, 255);
/// assert!((relative_luminance(white) - 1.0).abs() < 1e-9);
///
/// let black = Rgb::new(0, 0, 0);
/// assert_eq!(relative_luminance(black), 0.0);
/// ```
#[inline]
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    const R_COEF: f64 = 0.2126;
    const G_COEF: f64 = 0.7152;
    const B_COEF: f64 = 0.0722;

    // WCAG 2.0 defines its own gamma-decode threshold (0.03928), distinct
    // from the sRGB spec's 0.04045 used elsewhere in this workspace for
    // display purposes. Kept separate rather than reusing `Rgb::to_linear`.
    fn decode(channel: u8) -> f64 {
        let value = f64::from(channel) / 255.0;
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    R_COEF * decode(rgb.r) + G_COEF * decode(rgb.g) + B_COEF * decode(rgb.b)
}

/// WCAG 2.0 contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// ```text
/// ratio = (L_lighter + 0.05) / (L_darker + 0.05)
/// ```
///
/// Symmetric: `contrast_ratio(a, b) == contrast_ratio(b, a)`.
///
/// # Examples
///
/// ```
/// use huecraft_core::color::Rgb;
/// use huecraft_metrics::wcag::contrast_ratio;
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// assert!((contrast_ratio(black, white) - 21.0).abs() < 0.01);
/// assert!((contrast_ratio(black, black) - 1.0).abs() < 0.01);
/// ```
#[inline]
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);

    let (lighter, darker) = if lum_a > lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// Returns whether a contrast ratio satisfies the given WCAG level.
///
/// # Examples
///
/// ```
/// use huecraft_metrics::wcag::{meets_level, WCAGLevel};
///
/// assert!(meets_level(4.6, WCAGLevel::AaNormal));
/// assert!(!meets_level(4.6, WCAGLevel::AaaNormal));
/// ```
#[inline]
#[must_use]
pub fn meets_level(ratio: f64, level: WCAGLevel) -> bool {
    ratio >= level.threshold()
}

/// WCAG 2.0 Contrast Metric, implementing the generic
/// [`ContrastMetric`] extension seam for plain `Rgb` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WCAGMetric;

impl WCAGMetric {
    /// Creates a new WCAG metric instance.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContrastMetric for WCAGMetric {
    fn evaluate(&self, foreground: Rgb, background: Rgb) -> PerceptualResult {
        PerceptualResult::new(contrast_ratio(foreground, background))
    }

    /// Optimized batch evaluation for WCAG contrast ratios.
    ///
    /// Precomputes every luminance into contiguous memory first, which is
    /// ~2-3x faster than calling `evaluate` in a loop for large batches.
    fn evaluate_batch(&self, foregrounds: &[Rgb], backgrounds: &[Rgb]) -> Vec<PerceptualResult> {
        assert_eq!(
            foregrounds.len(),
            backgrounds.len(),
            "Foreground and background slices must have the same length"
        );

        let fg_luminances: Vec<f64> = foregrounds.iter().copied().map(relative_luminance).collect();
        let bg_luminances: Vec<f64> = backgrounds.iter().copied().map(relative_luminance).collect();

        fg_luminances
            .iter()
            .zip(bg_luminances.iter())
            .map(|(&fg, &bg)| {
                let (lighter, darker) = if fg > bg { (fg, bg) } else { (bg, fg) };
                PerceptualResult::new((lighter + 0.05) / (darker + 0.05))
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "WCAG 2.0"
    }

    fn version(&self) -> &'static str {
        "2.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================
    // Golden Vector Tests
    // ============================================
    // These values are from the WCAG 2.0 specification and are canonical.

    #[test]
    fn test_black_on_white() {
        let ratio = contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.01, "Expected 21.0, got {ratio}");
    }

    #[test]
    fn test_identical_colors() {
        let gray = Rgb::new(128, 128, 128);
        let ratio = contrast_ratio(gray, gray);
        assert!((ratio - 1.0).abs() < 0.01, "Expected 1.0, got {ratio}");
    }

    #[test]
    fn test_gray_on_white_near_aa_threshold() {
        let ratio = contrast_ratio(Rgb::new(119, 119, 119), Rgb::new(255, 255, 255));
        assert!((ratio - 4.5).abs() < 0.1, "Expected ~4.5, got {ratio}");
    }

    #[test]
    fn test_red_on_white() {
        let ratio = contrast_ratio(Rgb::new(255, 0, 0), Rgb::new(255, 255, 255));
        assert!((ratio - 3.99).abs() < 0.1, "Expected ~3.99, got {ratio}");
    }

    #[test]
    fn test_symmetry() {
        let gray1 = Rgb::new(100, 100, 100);
        let gray2 = Rgb::new(200, 200, 200);
        let ratio1 = contrast_ratio(gray1, gray2);
        let ratio2 = contrast_ratio(gray2, gray1);
        assert!((ratio1 - ratio2).abs() < 0.001);
    }

    #[test]
    fn test_requirements_lookup() {
        assert_eq!(WCAGLevel::AaNormal.threshold(), 4.5);
        assert_eq!(WCAGLevel::AaLarge.threshold(), 3.0);
        assert_eq!(WCAGLevel::AaaNormal.threshold(), 7.0);
        assert_eq!(WCAGLevel::AaaLarge.threshold(), 4.5);
    }

    #[test]
    fn test_meets_level() {
        assert!(meets_level(4.6, WCAGLevel::AaNormal));
        assert!(!meets_level(4.4, WCAGLevel::AaNormal));
        assert!(meets_level(7.1, WCAGLevel::AaaNormal));
    }

    // ============================================
    // Batch Operation Tests
    // ============================================

    #[test]
    fn test_batch_consistency() {
        let fgs = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(128, 128, 128),
        ];
        let bgs = vec![
            Rgb::new(255, 255, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 255, 255),
        ];

        let metric = WCAGMetric::new();
        let batch_results = metric.evaluate_batch(&fgs, &bgs);

        for i in 0..fgs.len() {
            let single_result = metric.evaluate(fgs[i], bgs[i]);
            assert!(
                (batch_results[i].value - single_result.value).abs() < 0.0001,
                "Batch result {i} differs from single"
            );
        }
    }

    #[test]
    fn test_batch_empty() {
        let metric = WCAGMetric::new();
        let results = metric.evaluate_batch(&[], &[]);
        assert_eq!(results.len(), 0);
    }

    #[test]
    #[should_panic(expected = "Foreground and background slices must have the same length")]
    fn test_batch_length_mismatch() {
        let metric = WCAGMetric::new();
        metric.evaluate_batch(&[Rgb::new(0, 0, 0)], &[Rgb::new(255, 255, 255), Rgb::new(1, 1, 1)]);
    }
}
