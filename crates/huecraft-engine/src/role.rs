//! Semantic role assignment: turning an unordered bag of OKLCH colors into
//! a usable UI palette.
//!
//! The algorithm is a fixed five-step pass: pick lightness
//! extremes for background/text, pick the most colorful mid-lightness
//! color for primary, then secondary/accent by chroma, then classify
//! whatever remains by hue sector. Every input color is assigned exactly
//! once; ties are broken by earliest input order, never by arbitrary
//! iteration order.

use huecraft_core::space::oklch::OKLCH;

/// Semantic slot a color fills in a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorRole {
    /// Page or surface background.
    Background,
    /// Primary body text.
    Text,
    /// The dominant brand color.
    Primary,
    /// A supporting color, usually less prominent than primary.
    Secondary,
    /// A color used sparingly to draw attention.
    Accent,
    /// Informational state (blue-ish hues).
    Info,
    /// Success state (green-ish hues).
    Success,
    /// Warning state (orange/violet hues).
    Warning,
    /// Error state (red hues).
    Error,
}

impl ColorRole {
    /// Short lowercase name, matching the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Info => "info",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color paired with the semantic role it was assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignedColor {
    /// The semantic role.
    pub role: ColorRole,
    /// The color itself.
    pub color: OKLCH,
}

impl AssignedColor {
    /// Creates a new role/color pair.
    #[inline]
    #[must_use]
    pub const fn new(role: ColorRole, color: OKLCH) -> Self {
        Self { role, color }
    }
}

/// Classifies a hue into one of the four state roles:
/// `error: [0,60), success: [60,150), info: [150,270), warning: [270,360)`.
#[must_use]
pub fn classify_hue(hue: f64) -> ColorRole {
    if hue < 60.0 {
        ColorRole::Error
    } else if hue < 150.0 {
        ColorRole::Success
    } else if hue < 270.0 {
        ColorRole::Info
    } else {
        ColorRole::Warning
    }
}

/// Assigns semantic roles to an unordered sequence of OKLCH colors.
///
/// Output order: background, text, primary, secondary, accent (whichever
/// are present), followed by the remaining colors classified by hue, in
/// their original relative order.
#[must_use]
pub fn assign_roles(colors: &[OKLCH]) -> Vec<AssignedColor> {
    if colors.is_empty() {
        return Vec::new();
    }

    // `remaining` tracks (original index, color) for everything not yet
    // assigned a role, in original input order.
    let mut remaining: Vec<(usize, OKLCH)> =
        colors.iter().copied().enumerate().collect();

    let mut anchors: Vec<(ColorRole, usize, OKLCH)> = Vec::new();

    // Step 2: lightness extremes. Sort by L ascending; ties keep input
    // order because `sort_by` is stable.
    let mut by_lightness = remaining.clone();
    by_lightness.sort_by(|a, b| a.1.l.partial_cmp(&b.1.l).unwrap_or(std::cmp::Ordering::Equal));

    let background_idx = by_lightness.last().map(|(idx, _)| *idx);
    let text_idx = if colors.len() >= 2 {
        by_lightness.first().map(|(idx, _)| *idx)
    } else {
        None
    };

    if let Some(idx) = background_idx {
        anchors.push((ColorRole::Background, idx, colors[idx]));
        remaining.retain(|(i, _)| *i != idx);
    }
    if let Some(idx) = text_idx {
        anchors.push((ColorRole::Text, idx, colors[idx]));
        remaining.retain(|(i, _)| *i != idx);
    }

    // Step 3: primary — highest chroma with L strictly in (0.3, 0.7).
    if let Some(idx) = pick_max_chroma(&remaining, |c| c.l > 0.3 && c.l < 0.7) {
        let color = colors[idx];
        anchors.push((ColorRole::Primary, idx, color));
        remaining.retain(|(i, _)| *i != idx);
    }

    // Step 4: secondary, then accent — highest remaining chroma, no
    // lightness constraint.
    if let Some(idx) = pick_max_chroma(&remaining, |_| true) {
        let color = colors[idx];
        anchors.push((ColorRole::Secondary, idx, color));
        remaining.retain(|(i, _)| *i != idx);
    }
    if let Some(idx) = pick_max_chroma(&remaining, |_| true) {
        let color = colors[idx];
        anchors.push((ColorRole::Accent, idx, color));
        remaining.retain(|(i, _)| *i != idx);
    }

    let mut output: Vec<AssignedColor> = anchors
        .into_iter()
        .map(|(role, _, color)| AssignedColor::new(role, color))
        .collect();

    // Step 5: everything left over, classified by hue, original order.
    for (_, color) in remaining {
        output.push(AssignedColor::new(classify_hue(color.h), color));
    }

    output
}

/// Finds the index (into the original color slice) of the highest-chroma
/// entry in `pool` satisfying `predicate`. Ties resolve to the
/// earliest-encountered entry — `pool` is assumed to already be in
/// original input order.
fn pick_max_chroma(
    pool: &[(usize, OKLCH)],
    predicate: impl Fn(&OKLCH) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &(idx, color) in pool {
        if !predicate(&color) {
            continue;
        }
        match best {
            Some((_, best_c)) if color.c <= best_c => {}
            _ => best = Some((idx, color.c)),
        }
    }
    best.map(|(idx, _)| idx)
}
