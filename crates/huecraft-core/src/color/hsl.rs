//! HSL color representation and conversions.
//!
//! HSL operates directly on gamma-encoded sRGB channels, exactly as the CSS
//! `hsl()` function does — it is not a perceptually uniform space like OKLCH,
//! but it is a convenient wire format for callers that think in terms of
//! "hue, saturation, lightness" sliders.

use crate::color::Rgb;
use crate::space::oklch::OKLCH;

/// A color in the cylindrical HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, `[0.0, 360.0)`.
    pub h: f64,
    /// Saturation as a percentage, `[0.0, 100.0]`.
    pub s: f64,
    /// Lightness as a percentage, `[0.0, 100.0]`.
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL color, normalizing hue and clamping saturation and lightness.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }
}

#[inline]
fn normalize_hue(h: f64) -> f64 {
    ((h % 360.0) + 360.0) % 360.0
}

/// Converts an sRGB color to HSL.
///
/// # Examples
///
/// ```
/// use huecraft_core::color::{Rgb, hsl::rgb_to_hsl};
///
/// let red = Rgb::new(255, 0, 0);
/// let hsl = rgb_to_hsl(red);
/// assert!((hsl.h - 0.0).abs() < 0.5);
/// assert!((hsl.s - 100.0).abs() < 0.5);
/// assert!((hsl.l - 50.0).abs() < 0.5);
/// ```
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    let s = if delta.abs() < 1e-12 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let h = if delta.abs() < 1e-12 {
        0.0
    } else if (max - r).abs() < 1e-12 {
        60.0 * (((g - b) / delta) % 6.0)
    } else if (max - g).abs() < 1e-12 {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl::new(h, s * 100.0, l * 100.0)
}

/// Converts an HSL color to sRGB.
///
/// # Examples
///
/// ```
/// use huecraft_core::color::hsl::{Hsl, hsl_to_rgb};
///
/// let red = Hsl::new(0.0, 100.0, 50.0);
/// let rgb = hsl_to_rgb(red);
/// assert_eq!(rgb.r, 255);
/// assert_eq!(rgb.g, 0);
/// assert_eq!(rgb.b, 0);
/// ```
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s.abs() < 1e-12 {
        let v = (l * 255.0).round().clamp(0.0, 255.0) as u8;
        return Rgb::new(v, v, v);
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if (0.0..1.0).contains(&h_prime) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h_prime) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h_prime) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h_prime) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h_prime) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let to_u8 = |v: f64| -> u8 { ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8 };

    Rgb::new(to_u8(r1), to_u8(g1), to_u8(b1))
}

/// Converts an OKLCH color to HSL, via sRGB.
///
/// # Examples
///
/// ```
/// use huecraft_core::color::hsl::oklch_to_hsl;
/// use huecraft_core::space::oklch::OKLCH;
///
/// let oklch = OKLCH::new(0.5, 0.1, 180.0);
/// let hsl = oklch_to_hsl(&oklch);
/// assert!(hsl.h >= 0.0 && hsl.h < 360.0);
/// ```
#[must_use]
pub fn oklch_to_hsl(oklch: &OKLCH) -> Hsl {
    rgb_to_hsl(oklch.to_rgb())
}

/// Converts an HSL color to OKLCH, via sRGB.
#[must_use]
pub fn hsl_to_oklch(hsl: &Hsl) -> OKLCH {
    OKLCH::from_rgb(hsl_to_rgb(*hsl))
}
