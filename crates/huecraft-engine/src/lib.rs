//! # Huecraft Engine
//!
//! The intelligence layer that turns a color stimulus into a finished,
//! role-tagged palette: harmony generators, quality gates, role assignment,
//! a mood lexicon, an OKLCH k-means image clusterer, and the palette
//! synthesizer that orchestrates all of them.
//!
//! This crate implements a deterministic, rule-based palette synthesizer:
//! - A base color, a small set of base colors, a mood phrase, or raw image
//!   pixels as the stimulus
//! - Perceptually uniform harmony generation in OKLCH
//! - Chroma-sanity and hue-wrap-aware deduplication quality gates
//! - A fixed five-step lightness/chroma/hue role-assignment policy
//! - Role-aware WCAG contrast reporting, built on [`huecraft_metrics::wcag`]
//!
//! ## Quick Start
//!
//! ```rust
//! use huecraft_core::space::oklch::OKLCH;
//! use huecraft_engine::palette::generate_from_base_color;
//!
//! let base = OKLCH::new(0.6, 0.2, 220.0);
//! let palette = generate_from_base_color(base);
//!
//! assert!(palette.colors.len() >= 5 && palette.colors.len() <= 12);
//! println!("generator: {}", palette.generator);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization support for public types |
//!
//! # Design Principles
//!
//! ## Deterministic
//! No ML/AI black boxes — every decision is an explicit, testable rule, and
//! a fixed `(mood, seed)`/`(base)`/`(bases)`/`(pixels)` always reproduces the
//! same color sequence.
//!
//! ## Perceptually-Informed
//! Every generator operates in OKLCH, a perceptually uniform color space,
//! and respects hue as a circular quantity throughout.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod cluster;
pub mod config;
pub mod contrast;
pub mod error;
pub mod gates;
pub mod harmony;
pub mod mood;
pub mod palette;
pub mod role;

// Configuration
pub use config::SynthesisConfig;

// Error taxonomy
pub use error::PaletteError;

// Role assignment types
pub use role::{assign_roles, AssignedColor, ColorRole};

// Mood lexicon types
pub use mood::{mood_to_parameters, HarmonyStrategy, MoodParameters};

// Contrast reporting
pub use contrast::{
    check_contrast, find_accessible_pairs, generate_contrast_report, ContrastCheck,
    ContrastReport,
};

// Palette synthesizer types
pub use palette::{
    generate_from_base_color, generate_from_base_colors, generate_from_image,
    generate_from_mood, synthesize, GeneratedPalette, Generator,
};
