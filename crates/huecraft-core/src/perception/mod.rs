//! Perceptual primitives and result types.
//!
//! This module defines the core abstractions for contrast metrics and
//! perceptual results, generic over any `Rgb`-based contrast algorithm.

use crate::color::Rgb;

/// Result of a perceptual contrast calculation.
///
/// This is a generic result type that can be used by any contrast metric.
/// Different metrics may have different value ranges and interpretations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptualResult {
    /// The raw contrast value.
    ///
    /// Interpretation depends on the metric; for WCAG 2.0 this is the
    /// contrast ratio, in `[1.0, 21.0]`.
    pub value: f64,

    /// Polarity of the contrast, for metrics that distinguish direction.
    pub polarity: Option<Polarity>,

    /// Additional metadata specific to the metric.
    pub metadata: Option<&'static str>,
}

/// Polarity of a contrast calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Dark text on light background (positive)
    DarkOnLight,
    /// Light text on dark background (negative)
    LightOnDark,
}

impl PerceptualResult {
    /// Creates a new perceptual result.
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            polarity: None,
            metadata: None,
        }
    }

    /// Creates a new perceptual result with polarity.
    #[inline]
    #[must_use]
    pub fn with_polarity(value: f64, polarity: Polarity) -> Self {
        Self {
            value,
            polarity: Some(polarity),
            metadata: None,
        }
    }

    /// Returns the absolute value of the contrast.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.value.abs()
    }
}

/// Trait for contrast metrics.
///
/// This is the extension seam that lets a different contrast algorithm
/// (e.g. APCA) be used interchangeably with the WCAG 2.0 implementation
/// this workspace ships, without changing any caller code.
///
/// # Design Principles
///
/// 1. **Batch-first**: `evaluate_batch` is the primary method for large inputs
/// 2. **Allocation-aware**: Batch methods take slices and return `Vec`
/// 3. **Deterministic**: Same inputs always produce same outputs
pub trait ContrastMetric {
    /// Evaluates contrast between a single foreground and background.
    ///
    /// This is a convenience method. For performance-critical code,
    /// use `evaluate_batch` instead.
    fn evaluate(&self, foreground: Rgb, background: Rgb) -> PerceptualResult;

    /// Evaluates contrast for multiple foreground/background pairs.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    fn evaluate_batch(&self, foregrounds: &[Rgb], backgrounds: &[Rgb]) -> Vec<PerceptualResult> {
        assert_eq!(
            foregrounds.len(),
            backgrounds.len(),
            "Foreground and background slices must have the same length"
        );

        foregrounds
            .iter()
            .zip(backgrounds.iter())
            .map(|(&fg, &bg)| self.evaluate(fg, bg))
            .collect()
    }

    /// Returns the name of this metric.
    fn name(&self) -> &'static str;

    /// Returns the version of this metric implementation.
    fn version(&self) -> &'static str {
        "1.0.0"
    }
}
