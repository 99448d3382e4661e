//! sRGB gamma correction transfer functions.
//!
//! The sRGB transfer function is piecewise: a linear segment near black and
//! a power curve (approximately gamma 2.4) everywhere else.

/// Decodes a gamma-corrected sRGB channel value (`0.0..=1.0`) to linear light.
///
/// # Examples
///
/// ```
/// use huecraft_core::color::gamma::srgb_to_linear;
///
/// let linear = srgb_to_linear(0.5);
/// assert!((linear - 0.214).abs() < 0.01); // sRGB 0.5 is NOT 0.5 in linear light
/// ```
#[inline]
#[must_use]
pub fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes a linear-light channel value (`0.0..=1.0`) to gamma-corrected sRGB.
///
/// # Examples
///
/// ```
/// use huecraft_core::color::gamma::{linear_to_srgb, srgb_to_linear};
///
/// let srgb = 0.5;
/// let back = linear_to_srgb(srgb_to_linear(srgb));
/// assert!((back - srgb).abs() < 1e-9);
/// ```
#[inline]
#[must_use]
pub fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_are_fixed_points() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_eq!(srgb_to_linear(1.0), 1.0);
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mid_gray_is_darker_in_linear_light() {
        let linear = srgb_to_linear(0.5);
        assert!(linear < 0.3);
    }

    #[test]
    fn roundtrip_is_exact() {
        for i in 0..=255u32 {
            let srgb = i as f64 / 255.0;
            let back = linear_to_srgb(srgb_to_linear(srgb));
            assert!((back - srgb).abs() < 1e-9, "mismatch at {i}");
        }
    }
}
