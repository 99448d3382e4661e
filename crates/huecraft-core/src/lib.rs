//! # Huecraft Core
//!
//! Canonical perceptual color foundation for the Huecraft color intelligence
//! system.
//!
//! ## Design Principles
//!
//! 1. **No external dependencies** - Pure Rust for maximum portability
//! 2. **Deterministic** - No platform-specific floating-point drift
//! 3. **Explicit precision** - All numeric types are explicit
//! 4. **Testable** - Golden vectors and property-based tests
//!
//! ## Architecture
//!
//! This crate provides the foundational types and algorithms:
//!
//! - **[`color`]**: Color representations (sRGB, linear RGB, HSL)
//! - **[`space`]**: Color space transformations (OKLCH, OKLab)
//! - **[`perception`]**: Perceptual primitives and the `ContrastMetric` seam
//! - **[`rng`]**: Seeded deterministic PRNG and string hashing
//! - **[`gamut`]**: sRGB gamut boundary estimation and mapping
//! - **[`gamma`]**: sRGB gamma correction transfer functions
//!
//! ## Quick Start
//!
//! ### Basic Color Operations
//!
//! ```rust
//! use huecraft_core::color::Rgb;
//!
//! // Create colors from 8-bit channels
//! let orange = Rgb::new(255, 128, 0);
//! let linear = orange.to_linear();
//! println!("Orange, linear red channel: {:.3}", linear.r);
//! ```
//!
//! ### Perceptual Color Space (OKLCH)
//!
//! ```rust
//! use huecraft_core::color::Rgb;
//! use huecraft_core::space::oklch::OKLCH;
//!
//! // Convert to perceptually uniform space
//! let red = Rgb::new(255, 0, 0);
//! let oklch = OKLCH::from_rgb(red);
//!
//! // Manipulate perceptually
//! let lighter = oklch.lighten(0.1);
//! let desaturated = oklch.desaturate(2.0);
//! let rotated = oklch.rotate_hue(180.0); // Complementary color
//!
//! // Convert back to RGB
//! let complementary = rotated.to_rgb();
//! ```
//!
//! ### Gamma Correction
//!
//! ```rust
//! use huecraft_core::gamma::{srgb_to_linear, linear_to_srgb};
//!
//! // sRGB mid-gray (0.5) is NOT 0.5 in linear light!
//! let srgb_gray = 0.5;
//! let linear = srgb_to_linear(srgb_gray);
//! assert!((linear - 0.214).abs() < 0.01);
//!
//! // Roundtrip is exact
//! let back = linear_to_srgb(linear);
//! assert!((back - srgb_gray).abs() < 0.0001);
//! ```
//!
//! ### Gamut Boundary Estimation
//!
//! ```rust
//! use huecraft_core::space::oklch::OKLCH;
//!
//! // Create a color that might be out of gamut
//! let vivid_cyan = OKLCH::new(0.7, 0.3, 180.0);
//!
//! // Check if it's displayable in sRGB
//! if !vivid_cyan.is_in_gamut() {
//!     // Map to gamut by reducing chroma
//!     let displayable = vivid_cyan.map_to_gamut();
//!     println!("Chroma reduced: {:.3} → {:.3}", vivid_cyan.c, displayable.c);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization support for types |
//! | `internals` | Expose transformation matrices and internal constants |

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod color;
pub mod math;
pub mod perception;
pub mod rng;
pub mod space;

// ============================================================================
// Core Type Re-exports
// ============================================================================

pub use color::{LinearRgb, Rgb};
pub use color::hsl::Hsl;
pub use perception::{ContrastMetric, PerceptualResult, Polarity};
pub use rng::SeededRandom;
pub use space::oklch::{HuePath, OKLab, OKLCH};

// ============================================================================
// Gamut Module - Boundary Estimation
// ============================================================================

/// sRGB gamut boundary estimation and mapping utilities.
///
/// Provides functions for estimating sRGB gamut boundaries in OKLCH space
/// and for mapping out-of-gamut colors back into the displayable range.
///
/// # Example
///
/// ```rust
/// use huecraft_core::space::oklch::OKLCH;
///
/// let color = OKLCH::new(0.7, 0.15, 180.0);
/// let max_chroma = color.estimate_max_chroma();
/// let is_safe = color.is_in_gamut();
/// ```
pub mod gamut {
    //! sRGB gamut boundary estimation and mapping.

    pub use crate::space::oklch::GAMUT_COEFFICIENTS;
}

// ============================================================================
// Gamma Module - sRGB Transfer Functions
// ============================================================================

/// sRGB gamma correction functions.
///
/// Provides the standard sRGB transfer functions for converting between
/// gamma-corrected sRGB and linear RGB values.
///
/// # Example
///
/// ```rust
/// use huecraft_core::gamma::{srgb_to_linear, linear_to_srgb};
///
/// let srgb = 0.5; // Mid gray in sRGB
/// let linear = srgb_to_linear(srgb);
/// assert!((linear - 0.214).abs() < 0.01); // NOT 0.5 in linear!
/// ```
pub mod gamma {
    //! sRGB gamma correction transfer functions.

    pub use crate::color::gamma::{linear_to_srgb, srgb_to_linear};
}

// ============================================================================
// Matrices Module - Transformation Matrices (Feature-Gated)
// ============================================================================

/// Color space transformation matrices.
///
/// Exposes the mathematical matrices used for converting between RGB, LMS,
/// and OKLab color spaces. Useful for educational purposes and advanced
/// color science applications.
///
/// # Feature Flag
///
/// Requires `internals` feature:
/// ```toml
/// huecraft-core = { version = "1.0", features = ["internals"] }
/// ```
#[cfg(feature = "internals")]
pub mod matrices {
    //! Color space transformation matrices from OKLab specification.
    //!
    //! These matrices implement the transformations defined by Björn Ottosson
    //! in the OKLab color space specification.

    pub use crate::space::oklch::{LAB_TO_LMS, LMS_TO_LAB, LMS_TO_RGB, RGB_TO_LMS};
}
