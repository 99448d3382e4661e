//! Color space transformations.
//!
//! Currently home to [`oklch`], the perceptually uniform OKLab/OKLCH
//! pipeline every higher-level crate in this workspace builds on.

pub mod oklch;
