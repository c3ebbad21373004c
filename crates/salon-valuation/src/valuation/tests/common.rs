use axum::response::Response;
use serde_json::Value;

use crate::valuation::{
    LeaseTerms, ProfitBasis, ProfitMargin, ProfitMode, ValuationDraft, ValuationEngine,
    ValuationInputs,
};

/// Manhattan salon, eight years in, estimated profit and nothing else supplied.
pub(super) fn manhattan_draft() -> ValuationDraft {
    ValuationDraft {
        monthly_revenue: Some(10_000.0),
        years_in_business: Some(8.0),
        has_loyal_client_base: Some(true),
        location: Some("10001".to_string()),
        profit_mode: Some(ProfitMode::Estimate),
        profit_margin_choice: Some(ProfitMargin::Normal),
        ..ValuationDraft::default()
    }
}

pub(super) fn manhattan_inputs() -> ValuationInputs {
    ValuationInputs {
        monthly_revenue: 10_000.0,
        years_in_business: 8.0,
        has_loyal_client_base: true,
        location: "10001".to_string(),
        profit: ProfitBasis::Estimate {
            margin: ProfitMargin::Normal,
        },
        google_rating: None,
        google_review_count: None,
        lease: LeaseTerms::Unknown,
        number_of_stations: None,
        assets_value: None,
    }
}

/// Every optional enhancer supplied, in a tier-1 market.
pub(super) fn documented_inputs() -> ValuationInputs {
    ValuationInputs {
        monthly_revenue: 20_000.0,
        years_in_business: 8.0,
        has_loyal_client_base: true,
        location: "10001".to_string(),
        profit: ProfitBasis::Explicit {
            monthly_profit: 5_000.0,
        },
        google_rating: Some(4.9),
        google_review_count: Some(120),
        lease: LeaseTerms::YearsRemaining(6.0),
        number_of_stations: Some(6),
        assets_value: Some(40_000.0),
    }
}

/// Small-town salon with no track record.
pub(super) fn struggling_inputs() -> ValuationInputs {
    ValuationInputs {
        monthly_revenue: 8_000.0,
        years_in_business: 0.5,
        has_loyal_client_base: false,
        location: "Boise, ID".to_string(),
        profit: ProfitBasis::Estimate {
            margin: ProfitMargin::Low,
        },
        google_rating: Some(3.1),
        google_review_count: Some(9),
        lease: LeaseTerms::YearsRemaining(0.5),
        number_of_stations: None,
        assets_value: None,
    }
}

pub(super) fn engine() -> ValuationEngine {
    ValuationEngine::default()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
