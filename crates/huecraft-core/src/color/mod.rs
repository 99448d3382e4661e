//! sRGB and linear RGB color representations.
//!
//! `Rgb` is the familiar 8-bit-per-channel color as it arrives from a caller
//! (a hex string, a pixel buffer, a base color argument). `LinearRgb` is the
//! gamma-decoded form used internally by every perceptual calculation; the
//! rest of this crate never operates on gamma-encoded values directly.

pub mod gamma;

pub use gamma::{linear_to_srgb, srgb_to_linear};

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

impl Rgb {
    /// Creates a new sRGB color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts this color to its gamma-decoded linear representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use huecraft_core::color::Rgb;
    ///
    /// let gray = Rgb::new(128, 128, 128);
    /// let linear = gray.to_linear();
    /// assert!(linear.r < 0.3); // sRGB mid-gray is much darker in linear light
    /// ```
    #[must_use]
    pub fn to_linear(self) -> LinearRgb {
        LinearRgb {
            r: srgb_to_linear(f64::from(self.r) / 255.0),
            g: srgb_to_linear(f64::from(self.g) / 255.0),
            b: srgb_to_linear(f64::from(self.b) / 255.0),
        }
    }
}

/// A linear-light RGB color, used internally for all perceptual math.
///
/// Components are nominally in `[0.0, 1.0]` but are not clamped on
/// construction; out-of-gamut intermediate values are expected while
/// converting from OKLCH before `clamp_to_gamut`/`map_to_gamut` are applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRgb {
    /// Red channel, linear light.
    pub r: f64,
    /// Green channel, linear light.
    pub g: f64,
    /// Blue channel, linear light.
    pub b: f64,
}

impl LinearRgb {
    /// Creates a new linear RGB color.
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Converts this color back to 8-bit sRGB, clamping and rounding
    /// half-up as it gamma-encodes each channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use huecraft_core::color::{LinearRgb, Rgb};
    ///
    /// let white = LinearRgb::new(1.0, 1.0, 1.0);
    /// assert_eq!(white.to_srgb8(), Rgb::new(255, 255, 255));
    /// ```
    #[must_use]
    pub fn to_srgb8(self) -> Rgb {
        Rgb {
            r: encode_channel(self.r),
            g: encode_channel(self.g),
            b: encode_channel(self.b),
        }
    }

    /// Returns `true` if every channel lies within the displayable `[0.0, 1.0]` range.
    #[inline]
    #[must_use]
    pub fn is_in_gamut(&self) -> bool {
        in_unit_range(self.r) && in_unit_range(self.g) && in_unit_range(self.b)
    }
}

#[inline]
fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

#[inline]
fn encode_channel(linear: f64) -> u8 {
    let srgb = linear_to_srgb(linear.clamp(0.0, 1.0));
    (srgb * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_roundtrips() {
        let white = Rgb::new(255, 255, 255);
        let linear = white.to_linear();
        assert!((linear.r - 1.0).abs() < 1e-9);
        assert_eq!(linear.to_srgb8(), white);
    }

    #[test]
    fn black_roundtrips() {
        let black = Rgb::new(0, 0, 0);
        let linear = black.to_linear();
        assert_eq!(linear.r, 0.0);
        assert_eq!(linear.to_srgb8(), black);
    }

    #[test]
    fn mid_gray_is_darker_in_linear_light() {
        let gray = Rgb::new(128, 128, 128);
        let linear = gray.to_linear();
        assert!(linear.r < 0.3, "linear gray should be well under 0.5");
    }

    #[test]
    fn out_of_gamut_linear_is_detected() {
        let out = LinearRgb::new(1.2, 0.5, -0.1);
        assert!(!out.is_in_gamut());
        let in_gamut = LinearRgb::new(0.2, 0.5, 0.8);
        assert!(in_gamut.is_in_gamut());
    }
}
