//! # Huecraft Metrics
//!
//! Accessibility contrast metrics for the Huecraft color intelligence system.
//!
//! This crate implements the WCAG 2.0 contrast ratio algorithm against the
//! [`huecraft_core::perception::ContrastMetric`] extension seam, so that a
//! caller who needs a different contrast algorithm (e.g. APCA) can implement
//! the same trait without touching the rest of the workspace.
//!
//! ## Quick Start
//!
//! ```rust
//! use huecraft_core::color::Rgb;
//! use huecraft_metrics::wcag::{contrast_ratio, meets_level, WCAGLevel};
//!
//! let text = Rgb::new(0x11, 0x11, 0x11);
//! let background = Rgb::new(0xFA, 0xFA, 0xFA);
//!
//! let ratio = contrast_ratio(text, background);
//! assert!(meets_level(ratio, WCAGLevel::AaaNormal));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization support for public types |

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod wcag;

pub use wcag::{contrast_ratio, meets_level, relative_luminance, WCAGLevel, WCAGMetric};
