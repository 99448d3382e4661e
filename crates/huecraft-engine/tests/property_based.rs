//! Property-based tests using proptest
//!
//! Tests invariants that should hold for all possible inputs to the harmony
//! generators, quality gates, and role assignment.

use huecraft_core::space::oklch::OKLCH;
use huecraft_engine::gates::{apply_quality_gates, has_sane_chroma, hue_circular_distance, QualityGateOptions};
use huecraft_engine::role::{assign_roles, ColorRole};
use huecraft_engine::{generate_from_base_color, harmony};
use proptest::prelude::*;

fn arb_oklch() -> impl Strategy<Value = OKLCH> {
    (0.0f64..=1.0, 0.0f64..=0.4, 0.0f64..360.0).prop_map(|(l, c, h)| OKLCH::new(l, c, h))
}

proptest! {
    #[test]
    fn prop_harmony_colors_preserve_lightness_and_chroma(base in arb_oklch(), step in 5.0f64..60.0, count in 0usize..8) {
        let colors = harmony::analogous(base, step, count);
        for color in &colors {
            prop_assert!((color.l - base.l).abs() < 1e-9);
            prop_assert!((color.c - base.c).abs() < 1e-9);
            prop_assert!((0.0..360.0).contains(&color.h));
        }
    }
}

proptest! {
    #[test]
    fn prop_complementary_hue_is_always_normalized(base in arb_oklch()) {
        let complement = harmony::complementary(base);
        prop_assert!((0.0..360.0).contains(&complement.h));
    }
}

proptest! {
    #[test]
    fn prop_quality_gates_never_exceed_max_chroma(colors in proptest::collection::vec(arb_oklch(), 0..30), max_chroma in 0.05f64..0.5) {
        let options = QualityGateOptions { max_chroma, ..QualityGateOptions::default() };
        let gated = apply_quality_gates(&colors, options);
        for color in &gated {
            prop_assert!(has_sane_chroma(color, max_chroma));
        }
    }
}

proptest! {
    #[test]
    fn prop_quality_gates_are_idempotent(colors in proptest::collection::vec(arb_oklch(), 0..30)) {
        let options = QualityGateOptions::default();
        let once = apply_quality_gates(&colors, options);
        let twice = apply_quality_gates(&once, options);
        prop_assert_eq!(once, twice);
    }
}

proptest! {
    #[test]
    fn prop_hue_circular_distance_is_bounded_and_symmetric(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let forward = hue_circular_distance(a, b);
        let backward = hue_circular_distance(b, a);
        prop_assert!((0.0..=180.0).contains(&forward));
        prop_assert!((forward - backward).abs() < 1e-9);
    }
}

proptest! {
    #[test]
    fn prop_role_assignment_covers_every_input_exactly_once(colors in proptest::collection::vec(arb_oklch(), 0..20)) {
        let assigned = assign_roles(&colors);
        prop_assert_eq!(assigned.len(), colors.len());
        prop_assert!(assigned.iter().filter(|a| a.role == ColorRole::Background).count() <= 1);
        prop_assert!(assigned.iter().filter(|a| a.role == ColorRole::Text).count() <= 1);
    }
}

proptest! {
    #[test]
    fn prop_generate_from_base_color_stays_within_size_bounds(base in arb_oklch()) {
        let palette = generate_from_base_color(base);
        prop_assert!(palette.colors.len() >= 5 && palette.colors.len() <= 12);
        for assigned in &palette.colors {
            prop_assert!((0.0..360.0).contains(&assigned.color.h));
        }
    }
}
