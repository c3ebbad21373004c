use serde::{Deserialize, Serialize};

use super::super::inputs::{LeaseLength, LeaseTerms, ProfitBasis, ProfitMargin, ValuationInputs};
use super::super::location::LocationTier;

pub(crate) const LOYALTY_BONUS: f64 = 0.2;

/// Where the monthly profit used for SDE came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum ProfitSource {
    Explicit,
    Estimated { margin: ProfitMargin },
}

impl ProfitSource {
    pub fn is_explicit(&self) -> bool {
        matches!(self, ProfitSource::Explicit)
    }
}

/// Explicit profit is used only when it is a usable non-negative number;
/// anything else falls back to the normal margin estimate.
pub(crate) fn resolve_monthly_profit(
    profit: &ProfitBasis,
    monthly_revenue: f64,
) -> (f64, ProfitSource) {
    match *profit {
        ProfitBasis::Explicit { monthly_profit }
            if monthly_profit.is_finite() && monthly_profit >= 0.0 =>
        {
            (monthly_profit, ProfitSource::Explicit)
        }
        ProfitBasis::Explicit { .. } => estimate(monthly_revenue, ProfitMargin::Normal),
        ProfitBasis::Estimate { margin } => estimate(monthly_revenue, margin),
    }
}

fn estimate(monthly_revenue: f64, margin: ProfitMargin) -> (f64, ProfitSource) {
    (
        monthly_revenue * margin.margin(),
        ProfitSource::Estimated { margin },
    )
}

pub(crate) fn years_adjustment(years_in_business: f64) -> f64 {
    if years_in_business < 1.0 {
        -0.3
    } else if years_in_business < 3.0 {
        -0.1
    } else if years_in_business < 7.0 {
        0.0
    } else {
        0.2
    }
}

pub(crate) fn loyalty_adjustment(has_loyal_client_base: bool) -> f64 {
    if has_loyal_client_base {
        LOYALTY_BONUS
    } else {
        0.0
    }
}

/// A missing or zero rating is neutral.
pub(crate) fn rating_adjustment(google_rating: Option<f64>) -> f64 {
    match google_rating {
        Some(rating) if rating > 0.0 => {
            if rating >= 4.8 {
                0.3
            } else if rating >= 4.5 {
                0.2
            } else if rating >= 4.0 {
                0.1
            } else if rating >= 3.5 {
                0.0
            } else {
                -0.3
            }
        }
        _ => 0.0,
    }
}

pub(crate) fn lease_adjustment(lease: &LeaseTerms) -> f64 {
    match *lease {
        LeaseTerms::YearsRemaining(years) if years < 1.0 => -0.3,
        LeaseTerms::YearsRemaining(years) if years < 3.0 => -0.1,
        LeaseTerms::YearsRemaining(_) => 0.1,
        LeaseTerms::Legacy(LeaseLength::Owned) => 0.3,
        LeaseTerms::Legacy(LeaseLength::LongTerm) => 0.1,
        LeaseTerms::Legacy(LeaseLength::ShortTerm) => -0.2,
        LeaseTerms::Unknown => 0.0,
    }
}

/// Heuristic measure of how much of the valuation rests on supplied data
/// rather than estimates.
pub(crate) fn confidence_score(
    inputs: &ValuationInputs,
    profit_source: ProfitSource,
    tier: LocationTier,
) -> u8 {
    let mut score: i32 = 50;

    if profit_source.is_explicit() {
        score += 15;
    }

    // A zero rating, review count or assets value earns no credit.
    let has_rating = inputs.google_rating.is_some_and(|rating| rating > 0.0);
    let has_reviews = inputs.google_review_count.is_some_and(|count| count > 0);
    if has_rating && has_reviews {
        score += 15;
    }

    if inputs.lease.is_known() {
        score += 10;
    }

    if inputs.assets_value.is_some_and(|value| value > 0.0) {
        score += 5;
    }

    if tier.is_known_market() {
        score += 5;
    }

    score.clamp(0, 100) as u8
}
