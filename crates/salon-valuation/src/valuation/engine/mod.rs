mod policy;
mod rules;

pub use policy::ValuationPolicy;
pub use rules::ProfitSource;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::inputs::{ValuationDraft, ValuationInputs};
use super::location::{get_location_tier, LocationTier};
use super::ValuationError;

/// Stateless engine applying a valuation policy to salon fundamentals.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    policy: ValuationPolicy,
}

impl ValuationEngine {
    pub fn new(policy: ValuationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValuationPolicy {
        &self.policy
    }

    /// Validates a caller draft and values it, reporting every input problem at once.
    pub fn appraise(&self, draft: ValuationDraft) -> Result<ValuationResult, ValuationError> {
        let inputs = draft.into_inputs()?;
        Ok(self.calculate(&inputs))
    }

    /// Values already-validated inputs. Never fails; non-finite inputs yield
    /// zeroed currency figures and a warning.
    pub fn calculate(&self, inputs: &ValuationInputs) -> ValuationResult {
        let policy = &self.policy;

        let (monthly_profit, profit_source) =
            rules::resolve_monthly_profit(&inputs.profit, inputs.monthly_revenue);
        let annual_sde = monthly_profit * 12.0;

        let location = get_location_tier(&inputs.location);
        let location_adjustment = location.multiplier_adjustment;
        let years_adjustment = rules::years_adjustment(inputs.years_in_business);
        let loyalty_adjustment = rules::loyalty_adjustment(inputs.has_loyal_client_base);
        let rating_adjustment = rules::rating_adjustment(inputs.google_rating);
        let lease_adjustment = rules::lease_adjustment(&inputs.lease);

        let unclamped_multiple = round_multiple(
            policy.base_multiple
                + location_adjustment
                + years_adjustment
                + loyalty_adjustment
                + rating_adjustment
                + lease_adjustment,
        );
        let final_multiple = clamp(
            unclamped_multiple,
            policy.multiple_floor,
            policy.multiple_ceiling,
        );

        let base_valuation = annual_sde * final_multiple;
        let assets_added = match (inputs.assets_value, inputs.number_of_stations) {
            (Some(value), _) if value > 0.0 => value,
            (_, Some(stations)) if stations > 0 => f64::from(stations) * policy.station_value,
            _ => 0.0,
        };

        let unclamped_valuation = base_valuation + assets_added;
        let valuation = clamp(
            unclamped_valuation,
            policy.valuation_floor,
            policy.valuation_ceiling,
        );
        let valuation_clamped = unclamped_valuation < policy.valuation_floor
            || unclamped_valuation > policy.valuation_ceiling;
        if valuation_clamped {
            warn!(
                unclamped_valuation,
                floor = policy.valuation_floor,
                ceiling = policy.valuation_ceiling,
                "valuation outside sanity bounds; clamped"
            );
        }

        let confidence_score = rules::confidence_score(inputs, profit_source, location.tier);
        let range_percent = policy.range_percent(confidence_score);

        if !valuation.is_finite() {
            warn!(
                monthly_revenue = inputs.monthly_revenue,
                years_in_business = inputs.years_in_business,
                "valuation is not a finite number; inputs were not validated"
            );
        }

        let base = whole_units(valuation);
        let spread = whole_units(base as f64 * range_percent);
        let low = base.saturating_sub(spread);
        let high = base.saturating_add(spread);

        debug!(
            area = %location.area_name,
            tier = location.tier.number(),
            final_multiple,
            base,
            confidence_score,
            "salon valuation computed"
        );

        ValuationResult {
            low,
            high,
            base,
            confidence_score,
            range_percent,
            breakdown: ValuationBreakdown {
                monthly_profit,
                profit_source,
                annual_sde,
                base_multiple: policy.base_multiple,
                location_tier: location.tier,
                area_name: location.area_name,
                location_adjustment,
                years_adjustment,
                loyalty_adjustment,
                rating_adjustment,
                lease_adjustment,
                unclamped_multiple,
                final_multiple,
                base_valuation,
                assets_added,
                valuation_clamped,
            },
        }
    }
}

/// Values validated inputs with the default policy.
pub fn calculate_salon_valuation(inputs: &ValuationInputs) -> ValuationResult {
    ValuationEngine::default().calculate(inputs)
}

/// Every intermediate figure behind a valuation, so no adjustment is hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationBreakdown {
    pub monthly_profit: f64,
    pub profit_source: ProfitSource,
    pub annual_sde: f64,
    pub base_multiple: f64,
    pub location_tier: LocationTier,
    pub area_name: String,
    pub location_adjustment: f64,
    pub years_adjustment: f64,
    pub loyalty_adjustment: f64,
    pub rating_adjustment: f64,
    pub lease_adjustment: f64,
    pub unclamped_multiple: f64,
    pub final_multiple: f64,
    /// Annual SDE times the final multiple, before assets.
    pub base_valuation: f64,
    pub assets_added: f64,
    pub valuation_clamped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub low: u64,
    pub high: u64,
    pub base: u64,
    pub confidence_score: u8,
    pub range_percent: f64,
    pub breakdown: ValuationBreakdown,
}

/// Adjustments are tenths; two decimals drop float noise from the sum.
fn round_multiple(multiple: f64) -> f64 {
    (multiple * 100.0).round() / 100.0
}

/// Unlike `f64::clamp`, never panics on misconfigured bounds and keeps NaN visible.
fn clamp(value: f64, floor: f64, ceiling: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(floor).min(ceiling)
    }
}

/// NaN and negatives saturate to zero.
fn whole_units(amount: f64) -> u64 {
    amount.round() as u64
}
