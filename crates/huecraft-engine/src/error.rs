//! Error taxonomy for the palette synthesizer.
//!
//! Hand-rolled, no `thiserror`/`anyhow` — kept in line with the
//! zero-dependency-for-core discipline of the rest of the workspace. There
//! is exactly one fallible condition in the whole engine: an empty
//! base-color list.

use std::error::Error;
use std::fmt;

/// Failure modes for the palette synthesizer's entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// `generate_from_base_colors` was called with an empty slice.
    EmptyInput,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyInput => {
                write!(f, "at least one base color is required")
            }
        }
    }
}

impl Error for PaletteError {}
