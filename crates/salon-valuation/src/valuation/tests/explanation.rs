use super::common::*;
use crate::valuation::{
    calculate_salon_valuation, format_currency, get_multiple_explanation, LeaseLength,
    LeaseTerms, ValuationEngine, ValuationPolicy,
};

#[test]
fn lists_base_each_nonzero_adjustment_and_final() {
    let result = calculate_salon_valuation(&manhattan_inputs());

    assert_eq!(
        get_multiple_explanation(&result.breakdown),
        vec![
            "Base multiple: 2.2x (service business standard)".to_string(),
            "Location (New York City, tier 1): +0.4x".to_string(),
            "Established operating history: +0.2x".to_string(),
            "Loyal client base: +0.2x".to_string(),
            "Final multiple: 3.0x".to_string(),
        ]
    );
}

#[test]
fn penalties_are_described_with_negative_signs() {
    let result = calculate_salon_valuation(&struggling_inputs());

    assert_eq!(
        get_multiple_explanation(&result.breakdown),
        vec![
            "Base multiple: 2.2x (service business standard)".to_string(),
            "Limited operating history: -0.3x".to_string(),
            "Weak Google rating: -0.3x".to_string(),
            "Short lease term: -0.3x".to_string(),
            "Final multiple: 1.3x".to_string(),
        ]
    );
}

#[test]
fn notes_when_multiple_was_capped() {
    let mut inputs = manhattan_inputs();
    inputs.google_rating = Some(4.9);
    inputs.lease = LeaseTerms::Legacy(LeaseLength::Owned);

    let lines = get_multiple_explanation(&calculate_salon_valuation(&inputs).breakdown);

    assert!(lines.contains(&"Strong Google rating: +0.3x".to_string()));
    assert!(lines.contains(&"Secure lease or owned premises: +0.3x".to_string()));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Final multiple: 3.5x (capped from 3.6x)")
    );
}

#[test]
fn notes_when_multiple_was_raised() {
    let engine = ValuationEngine::new(ValuationPolicy {
        base_multiple: 1.0,
        ..ValuationPolicy::default()
    });

    let lines = get_multiple_explanation(&engine.calculate(&struggling_inputs()).breakdown);

    assert_eq!(lines[0], "Base multiple: 1.0x (service business standard)");
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Final multiple: 1.2x (raised from 0.1x)")
    );
}

#[test]
fn formatted_range_reads_like_dollars() {
    let result = calculate_salon_valuation(&manhattan_inputs());

    assert_eq!(format_currency(result.low as f64), "$85,680");
    assert_eq!(format_currency(result.base as f64), "$100,800");
    assert_eq!(format_currency(result.high as f64), "$115,920");
}

#[test]
fn configured_base_multiple_is_reported_at_full_precision() {
    let engine = ValuationEngine::new(ValuationPolicy {
        base_multiple: 2.25,
        ..ValuationPolicy::default()
    });
    let breakdown = engine.calculate(&manhattan_inputs()).breakdown;
    assert_eq!(breakdown.final_multiple, 3.05);

    let lines = get_multiple_explanation(&breakdown);

    assert_eq!(
        lines.first().map(String::as_str),
        Some("Base multiple: 2.25x (service business standard)")
    );
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Final multiple: 3.05x")
    );
}
