use super::common::*;
use crate::valuation::{
    calculate_salon_valuation, LeaseLength, LeaseTerms, LocationTier, ProfitBasis,
    ProfitMargin, ProfitSource, ValuationEngine, ValuationError, ValuationPolicy,
};

#[test]
fn manhattan_estimate_matches_reference_figures() {
    let result = calculate_salon_valuation(&manhattan_inputs());
    let breakdown = &result.breakdown;

    assert_close(breakdown.monthly_profit, 2_800.0);
    assert_eq!(
        breakdown.profit_source,
        ProfitSource::Estimated {
            margin: ProfitMargin::Normal
        }
    );
    assert_close(breakdown.annual_sde, 33_600.0);
    assert_eq!(breakdown.base_multiple, 2.2);
    assert_eq!(breakdown.location_tier, LocationTier::SuperPremium);
    assert_eq!(breakdown.area_name, "New York City");
    assert_eq!(breakdown.location_adjustment, 0.4);
    assert_eq!(breakdown.years_adjustment, 0.2);
    assert_eq!(breakdown.loyalty_adjustment, 0.2);
    assert_eq!(breakdown.rating_adjustment, 0.0);
    assert_eq!(breakdown.lease_adjustment, 0.0);
    assert_eq!(breakdown.final_multiple, 3.0);
    assert_close(breakdown.base_valuation, 100_800.0);
    assert_eq!(breakdown.assets_added, 0.0);
    assert!(!breakdown.valuation_clamped);

    assert_eq!(result.base, 100_800);
    // Only the known-market bonus applies.
    assert_eq!(result.confidence_score, 55);
    assert_eq!(result.range_percent, 0.15);
    assert_eq!(result.low, 85_680);
    assert_eq!(result.high, 115_920);
}

#[test]
fn appraise_validates_then_values_the_draft() {
    let result = engine().appraise(manhattan_draft()).expect("draft is valid");
    assert_eq!(result, calculate_salon_valuation(&manhattan_inputs()));
}

#[test]
fn appraise_reports_every_problem() {
    let mut draft = manhattan_draft();
    draft.monthly_revenue = Some(-5.0);
    draft.years_in_business = Some(100.0);

    match engine().appraise(draft) {
        Err(ValuationError::InvalidInputs { errors }) => assert_eq!(errors.len(), 2),
        other => panic!("expected invalid inputs, got {other:?}"),
    }
}

#[test]
fn explicit_profit_is_used_directly() {
    let mut inputs = manhattan_inputs();
    inputs.monthly_revenue = 20_000.0;
    inputs.profit = ProfitBasis::Explicit {
        monthly_profit: 5_000.0,
    };

    let result = calculate_salon_valuation(&inputs);

    assert_eq!(result.breakdown.monthly_profit, 5_000.0);
    assert_eq!(result.breakdown.profit_source, ProfitSource::Explicit);
    assert_eq!(result.breakdown.annual_sde, 60_000.0);
    assert_eq!(result.confidence_score, 70);
}

#[test]
fn multiple_is_capped_at_ceiling() {
    let mut inputs = manhattan_inputs();
    inputs.google_rating = Some(5.0);
    inputs.lease = LeaseTerms::Legacy(LeaseLength::Owned);

    let breakdown = calculate_salon_valuation(&inputs).breakdown;

    assert_eq!(breakdown.unclamped_multiple, 3.6);
    assert_eq!(breakdown.final_multiple, 3.5);
}

#[test]
fn multiple_is_raised_to_floor() {
    let policy = ValuationPolicy {
        base_multiple: 1.0,
        ..ValuationPolicy::default()
    };
    let engine = ValuationEngine::new(policy);

    let breakdown = engine.calculate(&struggling_inputs()).breakdown;

    assert_eq!(breakdown.unclamped_multiple, 0.1);
    assert_eq!(breakdown.final_multiple, 1.2);
}

#[test]
fn struggling_salon_takes_every_penalty() {
    let result = calculate_salon_valuation(&struggling_inputs());
    let breakdown = &result.breakdown;

    assert_eq!(breakdown.location_tier, LocationTier::Standard);
    assert_eq!(breakdown.years_adjustment, -0.3);
    assert_eq!(breakdown.loyalty_adjustment, 0.0);
    assert_eq!(breakdown.rating_adjustment, -0.3);
    assert_eq!(breakdown.lease_adjustment, -0.3);
    assert_eq!(breakdown.final_multiple, 1.3);
    assert_eq!(result.base, 22_464);
    assert_eq!(result.confidence_score, 75);
    assert_eq!(result.range_percent, 0.10);
    assert_eq!(result.low, 20_218);
    assert_eq!(result.high, 24_710);
}

#[test]
fn tiny_valuations_are_raised_to_floor_and_flagged() {
    let mut inputs = struggling_inputs();
    inputs.monthly_revenue = 100.0;

    let result = calculate_salon_valuation(&inputs);

    assert!(result.breakdown.base_valuation < 10_000.0);
    assert!(result.breakdown.valuation_clamped);
    assert_eq!(result.base, 10_000);
}

#[test]
fn huge_valuations_are_capped_and_flagged() {
    let mut inputs = documented_inputs();
    inputs.monthly_revenue = 1_000_000.0;
    inputs.profit = ProfitBasis::Explicit {
        monthly_profit: 900_000.0,
    };

    let result = calculate_salon_valuation(&inputs);

    assert!(result.breakdown.valuation_clamped);
    assert_eq!(result.base, 2_000_000);
    assert_eq!(result.high - result.base, result.base - result.low);
}

#[test]
fn explicit_assets_win_over_station_estimate() {
    let inputs = documented_inputs();
    assert_eq!(inputs.number_of_stations, Some(6));

    let result = calculate_salon_valuation(&inputs);

    assert_eq!(result.breakdown.assets_added, 40_000.0);
}

#[test]
fn stations_are_estimated_when_assets_missing() {
    let mut inputs = documented_inputs();
    inputs.assets_value = None;
    assert_eq!(
        calculate_salon_valuation(&inputs).breakdown.assets_added,
        72_000.0
    );

    inputs.assets_value = Some(0.0);
    assert_eq!(
        calculate_salon_valuation(&inputs).breakdown.assets_added,
        72_000.0
    );

    let engine = ValuationEngine::new(ValuationPolicy {
        station_value: 15_000.0,
        ..ValuationPolicy::default()
    });
    assert_eq!(engine.calculate(&inputs).breakdown.assets_added, 90_000.0);
}

#[test]
fn fully_documented_salon_reaches_maximum_confidence() {
    let result = calculate_salon_valuation(&documented_inputs());

    assert_eq!(result.confidence_score, 100);
    assert_eq!(result.range_percent, 0.10);
    assert_eq!(result.breakdown.final_multiple, 3.4);
    assert_eq!(result.base, 244_000);
    assert_eq!(result.low, 219_600);
    assert_eq!(result.high, 268_400);
}

#[test]
fn confidence_ignores_rating_without_reviews() {
    let mut inputs = documented_inputs();
    inputs.google_review_count = None;
    assert_eq!(calculate_salon_valuation(&inputs).confidence_score, 85);

    inputs.google_review_count = Some(0);
    assert_eq!(calculate_salon_valuation(&inputs).confidence_score, 85);
}

#[test]
fn zero_assets_value_earns_no_confidence() {
    let mut inputs = documented_inputs();
    inputs.assets_value = Some(0.0);
    assert_eq!(calculate_salon_valuation(&inputs).confidence_score, 95);

    inputs.assets_value = None;
    assert_eq!(calculate_salon_valuation(&inputs).confidence_score, 95);
}

#[test]
fn legacy_lease_counts_as_lease_information() {
    let mut inputs = manhattan_inputs();
    inputs.lease = LeaseTerms::Legacy(LeaseLength::ShortTerm);

    let result = calculate_salon_valuation(&inputs);

    assert_eq!(result.breakdown.lease_adjustment, -0.2);
    assert_eq!(result.confidence_score, 65);
}

#[test]
fn range_is_symmetric_around_base() {
    let mut variants = vec![manhattan_inputs(), documented_inputs(), struggling_inputs()];
    for revenue in [12_345.0, 33_333.0, 77_777.0] {
        let mut inputs = manhattan_inputs();
        inputs.monthly_revenue = revenue;
        inputs.profit = ProfitBasis::Estimate {
            margin: ProfitMargin::High,
        };
        variants.push(inputs);
    }

    for inputs in variants {
        let result = calculate_salon_valuation(&inputs);
        assert_eq!(result.high - result.base, result.base - result.low);
        let expected = if result.confidence_score >= 75 { 0.10 } else { 0.15 };
        assert_eq!(result.range_percent, expected);
    }
}

#[test]
fn years_adjustment_never_decreases_with_tenure() {
    let mut previous = f64::MIN;
    for years in [0.0, 0.5, 0.99, 1.0, 2.0, 2.99, 3.0, 5.0, 6.99, 7.0, 20.0, 50.0] {
        let mut inputs = manhattan_inputs();
        inputs.years_in_business = years;
        let adjustment = calculate_salon_valuation(&inputs).breakdown.years_adjustment;
        assert!(adjustment >= previous, "{years} years lowered the adjustment");
        previous = adjustment;
    }
}

#[test]
fn rating_adjustment_never_decreases_with_rating() {
    let mut previous = f64::MIN;
    for rating in [0.5, 3.0, 3.49, 3.5, 3.99, 4.0, 4.49, 4.5, 4.79, 4.8, 5.0] {
        let mut inputs = manhattan_inputs();
        inputs.google_rating = Some(rating);
        let adjustment = calculate_salon_valuation(&inputs).breakdown.rating_adjustment;
        assert!(adjustment >= previous, "rating {rating} lowered the adjustment");
        previous = adjustment;
    }
}

#[test]
fn extreme_inputs_stay_within_bounds() {
    let mut cases = Vec::new();
    for revenue in [1.0, 500.0, 10_000.0, 250_000.0, 1_000_000.0] {
        for years in [0.0, 2.0, 10.0] {
            let mut low = struggling_inputs();
            low.monthly_revenue = revenue;
            low.years_in_business = years;
            cases.push(low);

            let mut high = documented_inputs();
            high.monthly_revenue = revenue;
            high.profit = ProfitBasis::Explicit {
                monthly_profit: revenue,
            };
            high.years_in_business = years;
            cases.push(high);
        }
    }

    for inputs in cases {
        let result = calculate_salon_valuation(&inputs);
        assert!((1.2..=3.5).contains(&result.breakdown.final_multiple));
        assert!((10_000..=2_000_000).contains(&result.base));
        assert!(result.confidence_score <= 100);
        assert!(result.low <= result.base && result.base <= result.high);
    }
}

#[test]
fn non_finite_inputs_do_not_panic() {
    let mut inputs = manhattan_inputs();
    inputs.monthly_revenue = f64::NAN;

    let result = calculate_salon_valuation(&inputs);

    assert!(result.breakdown.annual_sde.is_nan());
    assert!(result.breakdown.base_valuation.is_nan());
    assert_eq!(result.base, 0);
    assert_eq!(result.low, 0);
    assert_eq!(result.high, 0);
}
